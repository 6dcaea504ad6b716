use platform::message::Response as MessageResponse;
use sdk::cosmwasm_std::{Addr, Env, QuerierWrapper, Storage};

use crate::{
    clock::Clock,
    config::Config,
    error::Result,
    event,
    ledger::Ledger,
    loan::{LoanId, Settlement},
};

use super::transfer;

/// Collect the amount due from `payer` and return the collateral to the borrower
pub(super) fn try_repay(
    storage: &mut dyn Storage,
    querier: QuerierWrapper<'_>,
    env: &Env,
    payer: Addr,
    id: LoanId,
) -> Result<(Settlement, MessageResponse)> {
    let config = Config::load(storage)?;
    let mut ledger = Ledger::new(storage);
    let loan = ledger.load_active(id)?;

    let due = loan.due(config.interest_rate(), env)?;
    let this = &env.contract.address;
    let payment = transfer::collect(config.value_token(), due.total, &payer, this, querier)?;
    let collateral_out = transfer::release_collateral(loan.collateral(), loan.borrower(), querier)?;

    let emitter = event::emit_repay(env, id, &loan, &payer, due);
    let settlement = Settlement {
        at: env.now(),
        by: payer,
        paid: due.total,
    };

    loan.repaid(id, settlement.clone())
        .and_then(|repaid| ledger.close(id, &repaid))
        .map(|()| {
            (
                settlement,
                MessageResponse::messages_with_event(payment.merge(collateral_out), emitter),
            )
        })
}
