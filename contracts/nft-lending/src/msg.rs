use serde::{Deserialize, Serialize};

use finance::{coin::Coin, duration::Duration, percent::Percent100, ratio::Ratio};
use sdk::{
    cosmwasm_std::Addr,
    schemars::{self, JsonSchema},
};

pub use crate::{
    config::{Config as ConfigResponse, LiquidationPolicy},
    loan::{Due as AmountDueResponse, Loan, LoanId, Settlement, Status},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// the cw20-shaped token loans are disbursed and repaid in
    pub value_token: String,
    /// the annual, non-compounding interest rate
    pub interest_rate: Ratio,
    pub max_ltv: Percent100,
    /// the time after the loan start when it may be liquidated
    pub loan_duration: Duration,
    #[serde(default)]
    pub liquidation: LiquidationPolicy,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct MigrateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Pledge an item of `collection` and receive `principal` value tokens
    ///
    /// The sender is the borrower. It should own the item and have approved
    /// the ledger to transfer it. Responds with the new [`LoanId`].
    Borrow {
        principal: Coin,
        collection: String,
        token_id: String,
        collateral_value: Coin,
    },
    /// Pay the principal and the accrued interest and release the collateral to the borrower
    ///
    /// The sender is the payer. It should have allowed the ledger to transfer
    /// the amount due, see [`QueryMsg::AmountDue`]. Responds with the [`Settlement`].
    Repay { loan_id: LoanId },
    /// Take the collateral of a loan past its duration
    ///
    /// Responds with the [`Settlement`].
    Liquidate { loan_id: LoanId },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Return a [`ConfigResponse`]
    Config {},
    /// Return an [`OwnerResponse`]
    Owner {},
    /// Return a [`LoanResponse`]
    Loan { id: LoanId },
    /// Return a [`LoansResponse`] in ascending id order
    Loans {
        start_after: Option<LoanId>,
        limit: Option<u32>,
    },
    /// Return a [`LoansResponse`] of the loans of `borrower` in ascending id order
    LoansOf {
        borrower: String,
        start_after: Option<LoanId>,
        limit: Option<u32>,
    },
    /// Return an [`AmountDueResponse`] as of now
    AmountDue { id: LoanId },
    /// Return a [`CollateralLoanResponse`]
    CollateralLoan {
        collection: String,
        token_id: String,
    },
    /// Return a [`versioning::Package`]
    ContractVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct LoanResponse {
    pub id: LoanId,
    pub loan: Loan,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct LoansResponse {
    pub loans: Vec<LoanResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct CollateralLoanResponse {
    /// the active loan the item secures, if any
    pub loan: Option<LoanId>,
}
