use serde::Deserialize;

use crate::error::Error;

use super::{Ratio as ValidatedRatio, Units};

/// Brings invariant checking as a step in deserializing a Ratio
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub(super) struct Ratio {
    nominator: Units,
    denominator: Units,
}

impl TryFrom<Ratio> for ValidatedRatio {
    type Error = Error;

    fn try_from(dto: Ratio) -> Result<Self, Self::Error> {
        Self::new(dto.nominator, dto.denominator)
    }
}
