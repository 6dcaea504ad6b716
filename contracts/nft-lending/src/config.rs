use serde::{Deserialize, Serialize};

use custody::value::ValueTokenRef;
use finance::{
    coin::Coin, duration::Duration, error::Error as FinanceError, percent::Percent100,
    ratio::Ratio, zero::Zero,
};
use sdk::{
    cosmwasm_std::{Api, QuerierWrapper, Storage},
    cw_storage_plus::Item,
    schemars::{self, JsonSchema},
};

use crate::{
    error::{ContractError, Result},
    msg::InstantiateMsg,
};

/// What a liquidator gives in exchange for the collateral
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LiquidationPolicy {
    /// the collateral is handed over for free, the debt is written off
    #[default]
    Forfeit,
    /// the liquidator pays the principal and the accrued interest to the ledger
    SettleDebt,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Config {
    value_token: ValueTokenRef,
    interest_rate: Ratio,
    max_ltv: Percent100,
    loan_duration: Duration,
    liquidation: LiquidationPolicy,
}

impl Config {
    const STORAGE: Item<Self> = Item::new("config");

    pub fn try_new(
        msg: InstantiateMsg,
        api: &dyn Api,
        querier: QuerierWrapper<'_>,
    ) -> Result<Self> {
        if msg.max_ltv.is_zero() {
            return Err(ContractError::InvalidConfig(
                "the maximum loan-to-value should be positive".into(),
            ));
        }
        if msg.loan_duration.is_zero() {
            return Err(ContractError::InvalidConfig(
                "the loan duration should be positive".into(),
            ));
        }

        api.addr_validate(&msg.value_token)
            .map_err(ContractError::from)
            .and_then(|addr| ValueTokenRef::try_new(addr, querier).map_err(Into::into))
            .map(|value_token| Self {
                value_token,
                interest_rate: msg.interest_rate,
                max_ltv: msg.max_ltv,
                loan_duration: msg.loan_duration,
                liquidation: msg.liquidation,
            })
    }

    pub fn value_token(&self) -> &ValueTokenRef {
        &self.value_token
    }

    pub const fn interest_rate(&self) -> Ratio {
        self.interest_rate
    }

    pub const fn max_ltv(&self) -> Percent100 {
        self.max_ltv
    }

    pub const fn loan_duration(&self) -> Duration {
        self.loan_duration
    }

    pub const fn liquidation(&self) -> LiquidationPolicy {
        self.liquidation
    }

    /// The largest principal `collateral_value` may secure
    pub fn max_principal(&self, collateral_value: Coin) -> Result<Coin> {
        self.max_ltv
            .of(collateral_value)
            .ok_or_else(|| FinanceError::multiplication_overflow(self.max_ltv, collateral_value))
            .map_err(Into::into)
    }

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> Result<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }
}
