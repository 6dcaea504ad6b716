use custody::{
    collection::Collection,
    value::{ValueToken, ValueTokenRef},
};
use finance::coin::Coin;
use platform::batch::Batch;
use sdk::cosmwasm_std::{Addr, QuerierWrapper};

use crate::{
    error::{ContractError, Result},
    loan::Collateral,
};

/// Move the collateral from its owner into the ledger's custody
pub(super) fn take_collateral(
    collateral: &Collateral,
    owner: &Addr,
    ledger: &Addr,
    querier: QuerierWrapper<'_>,
) -> Result<Batch> {
    let mut collection = collateral.collection.as_stub(querier);

    if !collection.is_transferable_by(&collateral.token_id, owner, ledger)? {
        return Err(ContractError::CollateralTransferFailed {
            collection: collateral.collection.addr().to_string(),
            token_id: collateral.token_id.clone(),
        });
    }

    collection.transfer_nft(ledger, &collateral.token_id)?;
    Ok(collection.into())
}

pub(super) fn release_collateral(
    collateral: &Collateral,
    recipient: &Addr,
    querier: QuerierWrapper<'_>,
) -> Result<Batch> {
    let mut collection = collateral.collection.as_stub(querier);

    collection.transfer_nft(recipient, &collateral.token_id)?;
    Ok(collection.into())
}

/// Pay `principal` out of the ledger's balance
pub(super) fn disburse(
    token: &ValueTokenRef,
    principal: Coin,
    borrower: &Addr,
    ledger: &Addr,
    querier: QuerierWrapper<'_>,
) -> Result<Batch> {
    let mut token = token.as_stub(querier);

    let balance = token.balance(ledger)?;
    if balance < principal {
        return Err(ContractError::DisbursementFailed { principal, balance });
    }

    token.transfer(borrower, principal)?;
    Ok(token.into())
}

/// Pull `due` from `payer` to the ledger
///
/// The payer should have allowed the ledger to transfer at least `due`
/// and should hold at least that much.
pub(super) fn collect(
    token: &ValueTokenRef,
    due: Coin,
    payer: &Addr,
    ledger: &Addr,
    querier: QuerierWrapper<'_>,
) -> Result<Batch> {
    let mut token = token.as_stub(querier);

    let allowance = token.allowance(payer, ledger)?;
    if allowance < due {
        return Err(ContractError::TransferApprovalMissing { due, allowance });
    }

    let balance = token.balance(payer)?;
    if balance < due {
        return Err(ContractError::InsufficientPayment { due, balance });
    }

    token.transfer_from(payer, ledger, due)?;
    Ok(token.into())
}
