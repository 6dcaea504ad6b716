use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, AddAssign, Sub},
};

use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::Uint128,
    schemars::{self, JsonSchema},
};

use crate::zero::Zero;

pub type Amount = u128;

/// An amount of the value token.
///
/// Serialized as a decimal string, the same way [`Uint128`] is, so that
/// the full 128-bit range survives JSON.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Coin(Uint128);

impl Coin {
    pub const fn new(amount: Amount) -> Self {
        Self(Uint128::new(amount))
    }

    pub const fn amount(&self) -> Amount {
        self.0.u128()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).ok().map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).ok().map(Self)
    }

    pub fn checked_div(self, rhs: Amount) -> Option<Self> {
        self.0.checked_div(rhs.into()).ok().map(Self)
    }

    /// `self * nominator / denominator`, with a 256-bit intermediate product
    pub fn checked_mul_ratio<N, D>(self, nominator: N, denominator: D) -> Option<Self>
    where
        N: Into<Amount>,
        D: Into<Amount>,
    {
        self.0
            .checked_multiply_ratio(nominator.into(), denominator.into())
            .ok()
            .map(Self)
    }
}

impl Zero for Coin {
    const ZERO: Self = Self::new(0);
}

impl From<Amount> for Coin {
    fn from(amount: Amount) -> Self {
        Self::new(amount)
    }
}

impl From<Coin> for Amount {
    fn from(coin: Coin) -> Self {
        coin.amount()
    }
}

impl From<Uint128> for Coin {
    fn from(amount: Uint128) -> Self {
        Self(amount)
    }
}

impl From<Coin> for Uint128 {
    fn from(coin: Coin) -> Self {
        coin.0
    }
}

impl Add<Coin> for Coin {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Coin) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign<Coin> for Coin {
    #[track_caller]
    fn add_assign(&mut self, rhs: Coin) {
        *self = *self + rhs;
    }
}

impl Sub<Coin> for Coin {
    type Output = Self;

    #[track_caller]
    fn sub(self, rhs: Coin) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
