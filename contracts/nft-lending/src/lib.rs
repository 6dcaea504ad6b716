pub mod clock;
pub mod config;
#[cfg(any(feature = "contract", test))]
pub mod contract;
pub mod error;
#[cfg(any(feature = "contract", test))]
mod event;
pub mod ledger;
pub mod loan;
pub mod msg;
