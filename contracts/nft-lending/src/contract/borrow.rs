use finance::coin::Coin;
use platform::message::Response as MessageResponse;
use sdk::cosmwasm_std::{Addr, Env, QuerierWrapper, Storage};

use crate::{
    config::Config,
    error::Result,
    event,
    ledger::Ledger,
    loan::{Collateral, Loan, LoanId},
};

use super::transfer;

pub(super) fn try_borrow(
    storage: &mut dyn Storage,
    querier: QuerierWrapper<'_>,
    env: &Env,
    borrower: Addr,
    principal: Coin,
    collateral: Collateral,
    collateral_value: Coin,
) -> Result<(LoanId, MessageResponse)> {
    let config = Config::load(storage)?;
    let loan = Loan::try_open(
        &config,
        borrower,
        principal,
        collateral,
        collateral_value,
        env,
    )?;

    let mut ledger = Ledger::new(storage);
    ledger.check_not_pledged(loan.collateral())?;

    let this = &env.contract.address;
    let collateral_in =
        transfer::take_collateral(loan.collateral(), loan.borrower(), this, querier)?;
    let disbursement =
        transfer::disburse(config.value_token(), principal, loan.borrower(), this, querier)?;

    ledger.open(&loan).map(|id| {
        (
            id,
            MessageResponse::messages_with_event(
                collateral_in.merge(disbursement),
                event::emit_borrow(env, id, &loan),
            ),
        )
    })
}
