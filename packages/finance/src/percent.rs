use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use serde::{Deserialize, Serialize};

use sdk::schemars::{self, JsonSchema};

use crate::{
    coin::Coin,
    error::{Error, Result},
    zero::Zero,
};

pub type Units = u32;

pub type Percent100 = BoundPercent<{ Percent::HUNDRED.units() }>;

/// A percentage in permilles, i.e. with a precision of 0.1%
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Percent(Units);

impl Percent {
    const UNITS_IN_PERCENT: Units = 10;

    pub const HUNDRED: Self = Self::from_permille(100 * Self::UNITS_IN_PERCENT);

    pub const fn from_percent(percent: u16) -> Self {
        Self::from_permille(percent as Units * Self::UNITS_IN_PERCENT)
    }

    pub const fn from_permille(permille: Units) -> Self {
        Self(permille)
    }

    pub const fn units(&self) -> Units {
        self.0
    }

    /// The part of `whole` this percent stands for, truncated toward zero
    pub fn of(&self, whole: Coin) -> Option<Coin> {
        whole.checked_mul_ratio(self.units(), Self::HUNDRED.units())
    }
}

impl Zero for Percent {
    const ZERO: Self = Self::from_permille(0);
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let whole = self.0 / Self::UNITS_IN_PERCENT;
        let fractional = self.0 % Self::UNITS_IN_PERCENT;

        f.write_str(&whole.to_string())?;
        if fractional != Units::ZERO {
            f.write_char('.')?;
            f.write_str(&fractional.to_string())?;
        }
        f.write_char('%')
    }
}

/// A [`Percent`] that never exceeds `UPPER_BOUND` permilles, checked on construction
/// and deserialization alike
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(into = "Percent", try_from = "Percent")]
#[schemars(transparent)]
pub struct BoundPercent<const UPPER_BOUND: Units>(Percent);

impl<const UPPER_BOUND: Units> BoundPercent<UPPER_BOUND> {
    pub const ZERO: Self = Self(Percent::ZERO);

    pub const fn try_from_percent(percent: Percent) -> Result<Self> {
        if percent.units() <= UPPER_BOUND {
            Ok(Self(percent))
        } else {
            Err(Error::UpperBoundCrossed {
                bound: UPPER_BOUND,
                value: percent.units(),
            })
        }
    }

    pub fn from_percent(percent: u16) -> Result<Self> {
        Self::try_from_percent(Percent::from_percent(percent))
    }

    pub const fn percent(&self) -> Percent {
        self.0
    }

    pub fn of(&self, whole: Coin) -> Option<Coin> {
        self.0.of(whole)
    }
}

impl<const UPPER_BOUND: Units> Zero for BoundPercent<UPPER_BOUND> {
    const ZERO: Self = Self::ZERO;
}

impl<const UPPER_BOUND: Units> TryFrom<Percent> for BoundPercent<UPPER_BOUND> {
    type Error = Error;

    fn try_from(value: Percent) -> Result<Self> {
        Self::try_from_percent(value)
    }
}

impl<const UPPER_BOUND: Units> From<BoundPercent<UPPER_BOUND>> for Percent {
    fn from(value: BoundPercent<UPPER_BOUND>) -> Self {
        value.percent()
    }
}

impl<const UPPER_BOUND: Units> Display for BoundPercent<UPPER_BOUND> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
