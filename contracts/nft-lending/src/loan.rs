use serde::{Deserialize, Serialize};

use custody::collection::CollectionRef;
use finance::{
    coin::Coin, duration::Duration, error::Error as FinanceError, interest, ratio::Ratio,
    zero::Zero,
};
use sdk::{
    cosmwasm_std::{Addr, Timestamp},
    schemars::{self, JsonSchema},
};

use crate::{
    clock::Clock,
    config::Config,
    error::{ContractError, Result},
};

pub type LoanId = u64;

/// An item of a collection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Collateral {
    pub collection: CollectionRef,
    pub token_id: String,
}

/// How and when a loan was closed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Settlement {
    pub at: Timestamp,
    /// the payer of a repaid loan, or the liquidator of a liquidated one
    pub by: Addr,
    /// the amount paid to the ledger
    pub paid: Coin,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum Status {
    Active,
    Repaid(Settlement),
    Liquidated(Settlement),
}

/// The amount that settles a loan at a given time
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Due {
    pub principal: Coin,
    pub interest: Coin,
    pub total: Coin,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Loan {
    borrower: Addr,
    principal: Coin,
    collateral: Collateral,
    collateral_value: Coin,
    start: Timestamp,
    status: Status,
}

impl Loan {
    /// Open a loan of `principal` secured by `collateral` valued at `collateral_value`
    pub fn try_open<C>(
        config: &Config,
        borrower: Addr,
        principal: Coin,
        collateral: Collateral,
        collateral_value: Coin,
        clock: &C,
    ) -> Result<Self>
    where
        C: Clock + ?Sized,
    {
        if principal.is_zero() {
            return Err(ContractError::ZeroPrincipal {});
        }
        if collateral_value.is_zero() {
            return Err(ContractError::ZeroCollateralValue {});
        }

        config
            .max_principal(collateral_value)
            .and_then(|max_principal| {
                if principal <= max_principal {
                    Ok(Self {
                        borrower,
                        principal,
                        collateral,
                        collateral_value,
                        start: clock.now(),
                        status: Status::Active,
                    })
                } else {
                    Err(ContractError::ExceedsLoanToValue {
                        principal,
                        max_principal,
                    })
                }
            })
    }

    pub fn borrower(&self) -> &Addr {
        &self.borrower
    }

    pub const fn principal(&self) -> Coin {
        self.principal
    }

    pub fn collateral(&self) -> &Collateral {
        &self.collateral
    }

    pub const fn collateral_value(&self) -> Coin {
        self.collateral_value
    }

    pub const fn start(&self) -> Timestamp {
        self.start
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// The interest accrued from the start to now
    pub fn interest<C>(&self, rate: Ratio, clock: &C) -> Result<Coin>
    where
        C: Clock + ?Sized,
    {
        let now = clock.now();

        Duration::between(&self.start, &now)
            .ok_or_else(|| FinanceError::NegativePeriod {
                start: self.start.to_string(),
                end: now.to_string(),
            })
            .and_then(|period| {
                interest::interest(rate, self.principal, period).ok_or_else(|| {
                    FinanceError::multiplication_overflow(rate, (self.principal, period))
                })
            })
            .map_err(Into::into)
    }

    /// The principal and the interest accrued from the start to now
    pub fn due<C>(&self, rate: Ratio, clock: &C) -> Result<Due>
    where
        C: Clock + ?Sized,
    {
        self.interest(rate, clock).and_then(|interest| {
            self.principal
                .checked_add(interest)
                .ok_or_else(|| FinanceError::addition_overflow(self.principal, interest).into())
                .map(|total| Due {
                    principal: self.principal,
                    interest,
                    total,
                })
        })
    }

    /// The earliest time the loan may be liquidated
    pub fn liquidatable_from(&self, loan_duration: Duration) -> Result<Timestamp> {
        self.start
            .nanos()
            .checked_add(loan_duration.nanos())
            .map(Timestamp::from_nanos)
            .ok_or_else(|| FinanceError::addition_overflow(self.start, loan_duration).into())
    }

    pub fn check_liquidatable<C>(
        &self,
        id: LoanId,
        loan_duration: Duration,
        clock: &C,
    ) -> Result<()>
    where
        C: Clock + ?Sized,
    {
        self.check_active(id).and_then(|()| {
            self.liquidatable_from(loan_duration)
                .and_then(|liquidatable_from| {
                    if clock.now() >= liquidatable_from {
                        Ok(())
                    } else {
                        Err(ContractError::LoanNotLiquidatable {
                            loan: id,
                            liquidatable_from,
                        })
                    }
                })
        })
    }

    pub fn check_active(&self, id: LoanId) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(ContractError::LoanNotActive(id))
        }
    }

    pub(crate) fn repaid(self, id: LoanId, settlement: Settlement) -> Result<Self> {
        self.close(id, Status::Repaid(settlement))
    }

    pub(crate) fn liquidated(self, id: LoanId, settlement: Settlement) -> Result<Self> {
        self.close(id, Status::Liquidated(settlement))
    }

    fn close(self, id: LoanId, status: Status) -> Result<Self> {
        self.check_active(id).map(|()| Self { status, ..self })
    }
}
