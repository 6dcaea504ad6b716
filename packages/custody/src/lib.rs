//! Typed access to the token contracts the ledger moves assets through
//!
//! [`value`] talks to a cw20-shaped fungible token, [`collection`] to a
//! cw721-shaped collection of unique items. Queries are served immediately
//! while executions are accumulated into a [`platform::batch::Batch`] to be
//! dispatched after the caller's own state update.

pub mod collection;
pub mod error;
pub mod value;
