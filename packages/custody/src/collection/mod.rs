use std::mem;

use serde::{Deserialize, Serialize};

use platform::{batch::Batch, contract};
use sdk::{
    cosmwasm_std::{Addr, QuerierWrapper},
    schemars::{self, JsonSchema},
};

use crate::error::{Error, Result};

use self::msg::{ExecuteMsg, OperatorsResponse, OwnerOfResponse, QueryMsg};

pub mod msg;

/// The number of operators fetched per query
const OPERATORS_PAGE: u8 = 30;

pub trait Collection
where
    Self: Into<Batch>,
{
    fn owner_of(&self, token_id: &str) -> Result<OwnerOfResponse>;

    /// The unexpired operators of `owner` following `start_after`
    fn operators(
        &self,
        owner: &Addr,
        start_after: Option<String>,
        limit: u32,
    ) -> Result<OperatorsResponse>;

    /// Whether `owner` has approved `operator` to move any of its items
    fn is_operator(&self, owner: &Addr, operator: &Addr) -> Result<bool> {
        let mut start_after = None;
        loop {
            let page = self
                .operators(owner, start_after.take(), OPERATORS_PAGE.into())?
                .operators;

            if page
                .iter()
                .any(|approval| approval.spender == operator.as_str())
            {
                break Ok(true);
            }
            match page.last() {
                Some(last) if page.len() == usize::from(OPERATORS_PAGE) => {
                    start_after = Some(last.spender.clone())
                }
                _ => break Ok(false),
            }
        }
    }

    /// Whether `spender` may move the item now and `owner` is its current owner
    ///
    /// Both per-item approvals and operators approved for all items of `owner` count.
    fn is_transferable_by(&self, token_id: &str, owner: &Addr, spender: &Addr) -> Result<bool> {
        let item = self.owner_of(token_id)?;

        if item.owner != owner.as_str() {
            Ok(false)
        } else if owner == spender
            || item
                .approvals
                .iter()
                .any(|approval| approval.spender == spender.as_str())
        {
            Ok(true)
        } else {
            self.is_operator(owner, spender)
        }
    }

    fn transfer_nft(&mut self, recipient: &Addr, token_id: &str) -> Result<()>;
}

/// A collection of unique items, each identified by a token id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CollectionRef {
    addr: Addr,
}

impl CollectionRef {
    pub fn try_new(addr: Addr, querier: QuerierWrapper<'_>) -> Result<Self> {
        contract::validate_addr(querier, &addr)
            .map_err(Error::InvalidAddress)
            .map(|()| Self { addr })
    }

    pub fn addr(&self) -> &Addr {
        &self.addr
    }

    pub fn as_stub<'q>(&self, querier: QuerierWrapper<'q>) -> impl Collection {
        CollectionStub {
            collection: self,
            querier,
            batch: Batch::default(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl CollectionRef {
    pub fn unchecked(addr: Addr) -> Self {
        Self { addr }
    }
}

struct CollectionStub<'r, 'q> {
    collection: &'r CollectionRef,
    querier: QuerierWrapper<'q>,
    batch: Batch,
}

impl Collection for CollectionStub<'_, '_> {
    fn owner_of(&self, token_id: &str) -> Result<OwnerOfResponse> {
        self.querier
            .query_wasm_smart(
                self.collection.addr(),
                &QueryMsg::OwnerOf {
                    token_id: token_id.into(),
                    include_expired: Some(false),
                },
            )
            .map_err(Error::QueryCollection)
    }

    fn operators(
        &self,
        owner: &Addr,
        start_after: Option<String>,
        limit: u32,
    ) -> Result<OperatorsResponse> {
        self.querier
            .query_wasm_smart(
                self.collection.addr(),
                &QueryMsg::AllOperators {
                    owner: owner.into(),
                    include_expired: Some(false),
                    start_after,
                    limit: Some(limit),
                },
            )
            .map_err(Error::QueryCollection)
    }

    fn transfer_nft(&mut self, recipient: &Addr, token_id: &str) -> Result<()> {
        mem::take(&mut self.batch)
            .schedule_execute_wasm_no_reply_no_funds(
                self.collection.addr.clone(),
                &ExecuteMsg::TransferNft {
                    recipient: recipient.into(),
                    token_id: token_id.into(),
                },
            )
            .map(|batch| self.batch = batch)
            .map_err(Into::into)
    }
}

impl From<CollectionStub<'_, '_>> for Batch {
    fn from(stub: CollectionStub<'_, '_>) -> Self {
        stub.batch
    }
}
