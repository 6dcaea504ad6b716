use access_control::ContractOwnerAccess;
use sdk::cosmwasm_std::{Addr, Storage};

use crate::{
    clock::Clock,
    config::Config,
    error::Result,
    ledger::Ledger,
    loan::{Loan, LoanId},
    msg::{
        AmountDueResponse, CollateralLoanResponse, ConfigResponse, LoanResponse, LoansResponse,
        OwnerResponse,
    },
};

pub(super) fn config(storage: &dyn Storage) -> Result<ConfigResponse> {
    Config::load(storage)
}

pub(super) fn owner(storage: &dyn Storage) -> Result<OwnerResponse> {
    ContractOwnerAccess::new(storage)
        .owner()
        .map(|owner| OwnerResponse { owner })
        .map_err(Into::into)
}

pub(super) fn loan(storage: &dyn Storage, id: LoanId) -> Result<LoanResponse> {
    Ledger::new(storage)
        .load(id)
        .map(|loan| LoanResponse { id, loan })
}

pub(super) fn loans(
    storage: &dyn Storage,
    start_after: Option<LoanId>,
    limit: Option<u32>,
) -> Result<LoansResponse> {
    Ledger::new(storage)
        .loans(start_after, limit)
        .map(into_response)
}

pub(super) fn loans_of(
    storage: &dyn Storage,
    borrower: &Addr,
    start_after: Option<LoanId>,
    limit: Option<u32>,
) -> Result<LoansResponse> {
    Ledger::new(storage)
        .loans_of(borrower, start_after, limit)
        .map(into_response)
}

/// The amount that would repay the loan `id` at `clock`'s time
pub(super) fn amount_due<C>(
    storage: &dyn Storage,
    id: LoanId,
    clock: &C,
) -> Result<AmountDueResponse>
where
    C: Clock + ?Sized,
{
    let config = Config::load(storage)?;

    Ledger::new(storage)
        .load_active(id)
        .and_then(|loan| loan.due(config.interest_rate(), clock))
}

pub(super) fn collateral_loan(
    storage: &dyn Storage,
    collection: &Addr,
    token_id: &str,
) -> Result<CollateralLoanResponse> {
    Ledger::new(storage)
        .pledged(collection, token_id)
        .map(|loan| CollateralLoanResponse { loan })
}

fn into_response(loans: Vec<(LoanId, Loan)>) -> LoansResponse {
    LoansResponse {
        loans: loans
            .into_iter()
            .map(|(id, loan)| LoanResponse { id, loan })
            .collect(),
    }
}
