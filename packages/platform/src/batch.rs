use std::vec::IntoIter;

use serde::Serialize;

use sdk::{
    cosmwasm_ext::{CosmosMsg, SubMsg},
    cosmwasm_std::{Addr, WasmMsg, to_json_binary},
};

pub use crate::emit::{Emit, Emitter};
use crate::{error::Error, result::Result};

/// An ordered list of messages to be dispatched after the current one
///
/// All of them are executed within the same transaction, so a failure of any
/// reverts the state changes of the whole transaction.
#[must_use]
#[derive(Default)]
#[cfg_attr(
    any(debug_assertions, test, feature = "testing"),
    derive(Debug, PartialEq, Eq)
)]
pub struct Batch {
    msgs: Vec<SubMsg>,
}

impl Batch {
    pub fn schedule_execute_no_reply<M>(self, msg: M) -> Self
    where
        M: Into<CosmosMsg>,
    {
        self.schedule_msg(SubMsg::new(msg))
    }

    pub fn schedule_execute_wasm_no_reply_no_funds<M>(self, addr: Addr, msg: &M) -> Result<Self>
    where
        M: Serialize + ?Sized,
    {
        Self::wasm_exec_msg_no_funds(addr, msg)
            .map(|wasm_msg| self.schedule_execute_no_reply(wasm_msg))
    }

    pub fn merge(mut self, mut other: Batch) -> Self {
        self.msgs.append(&mut other.msgs);

        self
    }

    pub fn len(&self) -> usize {
        self.msgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.msgs.is_empty()
    }

    fn wasm_exec_msg_no_funds<M>(addr: Addr, msg: &M) -> Result<WasmMsg>
    where
        M: Serialize + ?Sized,
    {
        to_json_binary(msg)
            .map_err(Error::Serialization)
            .map(|raw_msg| WasmMsg::Execute {
                contract_addr: addr.into_string(),
                msg: raw_msg,
                funds: vec![],
            })
    }

    #[inline]
    fn schedule_msg(mut self, msg: SubMsg) -> Self {
        self.msgs.push(msg);
        self
    }
}

impl IntoIterator for Batch {
    type Item = SubMsg;

    type IntoIter = IntoIter<SubMsg>;

    fn into_iter(self) -> Self::IntoIter {
        self.msgs.into_iter()
    }
}
