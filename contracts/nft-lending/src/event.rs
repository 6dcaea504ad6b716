use platform::batch::{Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Env};

use crate::loan::{Due, Loan, LoanId, Settlement};

pub enum Type {
    Borrow,
    Repay,
    Liquidate,
}

impl Type {
    /// 'wasm-' is always prepended by the runtime
    const fn as_str(&self) -> &'static str {
        match self {
            Self::Borrow => "nft-loan-borrow",
            Self::Repay => "nft-loan-repay",
            Self::Liquidate => "nft-loan-liquidate",
        }
    }
}

impl From<Type> for String {
    fn from(ty: Type) -> Self {
        ty.as_str().into()
    }
}

pub fn emit_borrow(env: &Env, id: LoanId, loan: &Loan) -> Emitter {
    emitter(Type::Borrow, env, id)
        .emit_addr("borrower", loan.borrower())
        .emit_addr("collection", loan.collateral().collection.addr())
        .emit("token", loan.collateral().token_id.as_str())
        .emit_coin_amount("principal", loan.principal())
        .emit_coin_amount("collateral-value", loan.collateral_value())
}

pub fn emit_repay(env: &Env, id: LoanId, loan: &Loan, payer: &Addr, due: Due) -> Emitter {
    emitter(Type::Repay, env, id)
        .emit_addr("payer", payer)
        .emit_addr("borrower", loan.borrower())
        .emit_coin_amount("principal", due.principal)
        .emit_coin_amount("interest", due.interest)
}

pub fn emit_liquidate(env: &Env, id: LoanId, settlement: &Settlement) -> Emitter {
    emitter(Type::Liquidate, env, id)
        .emit_addr("liquidator", &settlement.by)
        .emit_coin_amount("paid", settlement.paid)
}

fn emitter(ty: Type, env: &Env, id: LoanId) -> Emitter {
    Emitter::of_type(ty)
        .emit_tx_info(env)
        .emit_to_string_value("id", id)
}
