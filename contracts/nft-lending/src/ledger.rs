use sdk::{
    cosmwasm_ext::as_dyn::storage::{Dyn, DynMut},
    cosmwasm_std::{Addr, Order, StdResult},
    cw_storage_plus::{Bound, Item, Map},
};

use finance::error::Error as FinanceError;

use crate::{
    error::{ContractError, Result},
    loan::{Collateral, Loan, LoanId},
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

const NEXT_ID: Item<LoanId> = Item::new("next_loan_id");
const LOANS: Map<LoanId, Loan> = Map::new("loans");
const BORROWER_LOANS: Map<(&Addr, LoanId), ()> = Map::new("borrower_loans");
/// collateral of the active loans
const PLEDGES: Map<(&Addr, &str), LoanId> = Map::new("pledges");

/// The loans, indexed by id, by borrower, and by the collateral of the active ones
///
/// Loans are never removed. The ids are allocated sequentially starting from zero.
pub struct Ledger<S>
where
    S: Dyn,
{
    storage: S,
}

impl<S> Ledger<S>
where
    S: Dyn,
{
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self, id: LoanId) -> Result<Loan> {
        LOANS
            .may_load(self.storage.as_dyn(), id)?
            .ok_or(ContractError::LoanNotFound(id))
    }

    pub fn load_active(&self, id: LoanId) -> Result<Loan> {
        LOANS
            .may_load(self.storage.as_dyn(), id)?
            .ok_or(ContractError::LoanNotActive(id))
            .and_then(|loan| loan.check_active(id).map(|()| loan))
    }

    /// The active loan the item `token_id` of `collection` secures
    pub fn pledged(&self, collection: &Addr, token_id: &str) -> Result<Option<LoanId>> {
        PLEDGES
            .may_load(self.storage.as_dyn(), (collection, token_id))
            .map_err(Into::into)
    }

    pub fn loans(
        &self,
        start_after: Option<LoanId>,
        limit: Option<u32>,
    ) -> Result<Vec<(LoanId, Loan)>> {
        LOANS
            .range(
                self.storage.as_dyn(),
                start_after.map(Bound::exclusive),
                None,
                Order::Ascending,
            )
            .take(page_size(limit))
            .collect::<StdResult<_>>()
            .map_err(Into::into)
    }

    pub fn loans_of(
        &self,
        borrower: &Addr,
        start_after: Option<LoanId>,
        limit: Option<u32>,
    ) -> Result<Vec<(LoanId, Loan)>> {
        BORROWER_LOANS
            .prefix(borrower)
            .keys(
                self.storage.as_dyn(),
                start_after.map(Bound::exclusive),
                None,
                Order::Ascending,
            )
            .take(page_size(limit))
            .map(|id| {
                id.map_err(Into::into)
                    .and_then(|id| self.load(id).map(|loan| (id, loan)))
            })
            .collect()
    }

    pub fn check_not_pledged(&self, collateral: &Collateral) -> Result<()> {
        self.pledged(collateral.collection.addr(), &collateral.token_id)
            .and_then(|pledged| {
                pledged.map_or(Ok(()), |loan| {
                    Err(ContractError::CollateralPledged {
                        collection: collateral.collection.addr().to_string(),
                        token_id: collateral.token_id.clone(),
                        loan,
                    })
                })
            })
    }
}

impl<S> Ledger<S>
where
    S: DynMut,
{
    /// Record a new active loan and pledge its collateral
    pub fn open(&mut self, loan: &Loan) -> Result<LoanId> {
        self.check_not_pledged(loan.collateral())?;

        let id = NEXT_ID
            .may_load(self.storage.as_dyn())?
            .unwrap_or_default();
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| FinanceError::addition_overflow(id, 1))?;

        let storage = self.storage.as_dyn_mut();
        NEXT_ID.save(storage, &next_id)?;
        LOANS.save(storage, id, loan)?;
        BORROWER_LOANS.save(storage, (loan.borrower(), id), &())?;
        PLEDGES.save(storage, pledge_key(loan.collateral()), &id)?;

        Ok(id)
    }

    /// Store the terminal state of an active loan and release its collateral
    pub fn close(&mut self, id: LoanId, closed: &Loan) -> Result<()> {
        debug_assert!(!closed.is_active());

        self.load_active(id).and_then(|_active| {
            let storage = self.storage.as_dyn_mut();
            PLEDGES.remove(storage, pledge_key(closed.collateral()));
            LOANS.save(storage, id, closed).map_err(Into::into)
        })
    }
}

fn pledge_key(collateral: &Collateral) -> (&Addr, &str) {
    (collateral.collection.addr(), collateral.token_id.as_str())
}

fn page_size(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}
