use thiserror::Error;

use finance::coin::Coin;
use sdk::cosmwasm_std::{StdError, Timestamp};

use crate::loan::LoanId;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[NFT Lending] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[NFT Lending] {0}")]
    Finance(#[from] finance::error::Error),

    #[error("[NFT Lending] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[NFT Lending] {0}")]
    Custody(#[from] custody::error::Error),

    #[error("[NFT Lending] {0}")]
    Versioning(#[from] versioning::error::Error),

    #[error("[NFT Lending] {0}")]
    AccessControl(#[from] access_control::error::Error),

    #[error("[NFT Lending] Invalid configuration! Cause: {0}")]
    InvalidConfig(String),

    #[error("[NFT Lending] The principal should be positive")]
    ZeroPrincipal {},

    #[error("[NFT Lending] The collateral value should be positive")]
    ZeroCollateralValue {},

    #[error(
        "[NFT Lending] The principal {principal} exceeds the maximum of {max_principal} the collateral may secure"
    )]
    ExceedsLoanToValue { principal: Coin, max_principal: Coin },

    #[error("[NFT Lending] The item '{token_id}' of '{collection}' already secures loan {loan}")]
    CollateralPledged {
        collection: String,
        token_id: String,
        loan: LoanId,
    },

    #[error(
        "[NFT Lending] The item '{token_id}' of '{collection}' is not owned by the borrower or not approved for transfer to the ledger"
    )]
    CollateralTransferFailed {
        collection: String,
        token_id: String,
    },

    #[error(
        "[NFT Lending] Insufficient funds to disburse a principal of {principal}, the ledger balance is {balance}"
    )]
    DisbursementFailed { principal: Coin, balance: Coin },

    #[error("[NFT Lending] There is no loan {0}")]
    LoanNotFound(LoanId),

    #[error("[NFT Lending] The loan {0} does not exist or has already been settled")]
    LoanNotActive(LoanId),

    #[error("[NFT Lending] Insufficient balance to pay {due}, the payer has {balance}")]
    InsufficientPayment { due: Coin, balance: Coin },

    #[error(
        "[NFT Lending] The payer has allowed the ledger to take {allowance} but {due} is due"
    )]
    TransferApprovalMissing { due: Coin, allowance: Coin },

    #[error("[NFT Lending] The loan {loan} may not be liquidated before {liquidatable_from}")]
    LoanNotLiquidatable {
        loan: LoanId,
        liquidatable_from: Timestamp,
    },
}

pub type Result<T> = std::result::Result<T, ContractError>;
