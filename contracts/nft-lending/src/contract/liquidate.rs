use finance::{coin::Coin, zero::Zero};
use platform::{batch::Batch, message::Response as MessageResponse};
use sdk::cosmwasm_std::{Addr, Env, QuerierWrapper, Storage};

use crate::{
    clock::Clock,
    config::{Config, LiquidationPolicy},
    error::Result,
    event,
    ledger::Ledger,
    loan::{Loan, LoanId, Settlement},
};

use super::transfer;

/// Hand the collateral of an overdue loan over to `liquidator`
pub(super) fn try_liquidate(
    storage: &mut dyn Storage,
    querier: QuerierWrapper<'_>,
    env: &Env,
    liquidator: Addr,
    id: LoanId,
) -> Result<(Settlement, MessageResponse)> {
    let config = Config::load(storage)?;
    let mut ledger = Ledger::new(storage);
    let loan = ledger.load_active(id)?;
    loan.check_liquidatable(id, config.loan_duration(), env)?;

    let (paid, payment) = compensation(&config, &loan, &liquidator, env, querier)?;
    let collateral_out = transfer::release_collateral(loan.collateral(), &liquidator, querier)?;

    let settlement = Settlement {
        at: env.now(),
        by: liquidator,
        paid,
    };
    let emitter = event::emit_liquidate(env, id, &settlement);

    loan.liquidated(id, settlement.clone())
        .and_then(|liquidated| ledger.close(id, &liquidated))
        .map(|()| {
            (
                settlement,
                MessageResponse::messages_with_event(payment.merge(collateral_out), emitter),
            )
        })
}

fn compensation(
    config: &Config,
    loan: &Loan,
    liquidator: &Addr,
    env: &Env,
    querier: QuerierWrapper<'_>,
) -> Result<(Coin, Batch)> {
    match config.liquidation() {
        LiquidationPolicy::Forfeit => Ok((Coin::ZERO, Batch::default())),
        LiquidationPolicy::SettleDebt => loan
            .due(config.interest_rate(), env)
            .and_then(|due| {
                transfer::collect(
                    config.value_token(),
                    due.total,
                    liquidator,
                    &env.contract.address,
                    querier,
                )
                .map(|payment| (due.total, payment))
            }),
    }
}
