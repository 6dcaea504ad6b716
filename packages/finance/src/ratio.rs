use serde::{Deserialize, Serialize};

use sdk::schemars::{self, JsonSchema};

use crate::{
    coin::Coin,
    error::{Error, Result},
};

mod unchecked;

pub type Units = u64;

/// A non-negative fraction `nominator / denominator` not greater than one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "unchecked::Ratio", rename_all = "snake_case")]
pub struct Ratio {
    nominator: Units,
    denominator: Units,
}

impl Ratio {
    pub fn new(nominator: Units, denominator: Units) -> Result<Self> {
        let res = Self {
            nominator,
            denominator,
        };
        res.invariant_held().map(|()| res)
    }

    pub const fn nominator(&self) -> Units {
        self.nominator
    }

    pub const fn denominator(&self) -> Units {
        self.denominator
    }

    pub const fn is_zero(&self) -> bool {
        self.nominator == 0
    }

    /// The part of `whole` this ratio stands for, truncated toward zero
    pub fn of(&self, whole: Coin) -> Option<Coin> {
        whole.checked_mul_ratio(self.nominator, self.denominator)
    }

    fn invariant_held(&self) -> Result<()> {
        Error::broken_invariant_if::<Self>(self.denominator == 0, "zero denominator")
            .and_then(|()| {
                Error::broken_invariant_if::<Self>(
                    self.nominator > self.denominator,
                    "the nominator exceeds the denominator",
                )
            })
    }
}
