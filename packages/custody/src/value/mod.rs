use std::mem;

use serde::{Deserialize, Serialize};

use finance::coin::Coin;
use platform::{batch::Batch, contract};
use sdk::{
    cosmwasm_std::{Addr, QuerierWrapper},
    schemars::{self, JsonSchema},
};

use crate::error::{Error, Result};

use self::msg::{AllowanceResponse, BalanceResponse, ExecuteMsg, QueryMsg};

pub mod msg;

pub trait ValueToken
where
    Self: Into<Batch>,
{
    fn balance(&self, account: &Addr) -> Result<Coin>;

    /// How much `spender` may move out of `owner`'s balance
    fn allowance(&self, owner: &Addr, spender: &Addr) -> Result<Coin>;

    fn transfer(&mut self, recipient: &Addr, amount: Coin) -> Result<()>;

    fn transfer_from(&mut self, owner: &Addr, recipient: &Addr, amount: Coin) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ValueTokenRef {
    addr: Addr,
}

impl ValueTokenRef {
    pub fn try_new(addr: Addr, querier: QuerierWrapper<'_>) -> Result<Self> {
        contract::validate_addr(querier, &addr)
            .map_err(Error::InvalidAddress)
            .map(|()| Self { addr })
    }

    pub fn addr(&self) -> &Addr {
        &self.addr
    }

    pub fn as_stub<'q>(&self, querier: QuerierWrapper<'q>) -> impl ValueToken {
        ValueTokenStub {
            token: self,
            querier,
            batch: Batch::default(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl ValueTokenRef {
    pub fn unchecked(addr: Addr) -> Self {
        Self { addr }
    }
}

struct ValueTokenStub<'r, 'q> {
    token: &'r ValueTokenRef,
    querier: QuerierWrapper<'q>,
    batch: Batch,
}

impl ValueTokenStub<'_, '_> {
    fn schedule(&mut self, msg: &ExecuteMsg) -> Result<()> {
        mem::take(&mut self.batch)
            .schedule_execute_wasm_no_reply_no_funds(self.token.addr.clone(), msg)
            .map(|batch| self.batch = batch)
            .map_err(Into::into)
    }
}

impl ValueToken for ValueTokenStub<'_, '_> {
    fn balance(&self, account: &Addr) -> Result<Coin> {
        self.querier
            .query_wasm_smart(
                self.token.addr(),
                &QueryMsg::Balance {
                    address: account.into(),
                },
            )
            .map(|resp: BalanceResponse| resp.balance)
            .map_err(Error::QueryValueToken)
    }

    fn allowance(&self, owner: &Addr, spender: &Addr) -> Result<Coin> {
        self.querier
            .query_wasm_smart(
                self.token.addr(),
                &QueryMsg::Allowance {
                    owner: owner.into(),
                    spender: spender.into(),
                },
            )
            .map(|resp: AllowanceResponse| resp.allowance)
            .map_err(Error::QueryValueToken)
    }

    fn transfer(&mut self, recipient: &Addr, amount: Coin) -> Result<()> {
        self.schedule(&ExecuteMsg::Transfer {
            recipient: recipient.into(),
            amount,
        })
    }

    fn transfer_from(&mut self, owner: &Addr, recipient: &Addr, amount: Coin) -> Result<()> {
        self.schedule(&ExecuteMsg::TransferFrom {
            owner: owner.into(),
            recipient: recipient.into(),
            amount,
        })
    }
}

impl From<ValueTokenStub<'_, '_>> for Batch {
    fn from(stub: ValueTokenStub<'_, '_>) -> Self {
        stub.batch
    }
}
