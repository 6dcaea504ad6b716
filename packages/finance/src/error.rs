use std::{any::type_name, fmt::Debug};

use thiserror::Error;

use crate::percent::Units as PercentUnits;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Finance] Programming error or invalid serialized object of '{0}' type, cause '{1}'")]
    BrokenInvariant(String, String),

    #[error("[Finance] Multiplication overflow when evaluating `{details}`")]
    MultiplicationOverflow { details: String },

    #[error("[Finance] Addition overflow when evaluating `{details}`")]
    AdditionOverflow { details: String },

    #[error("[Finance] The period end '{end}' precedes its start '{start}'")]
    NegativePeriod { start: String, end: String },

    #[error(
        "[Finance] [Percent] Upper bound has been crossed! Upper bound is: {bound}, but got: {value}!"
    )]
    UpperBoundCrossed {
        bound: PercentUnits,
        value: PercentUnits,
    },
}

impl Error {
    pub fn broken_invariant_if<T>(check: bool, msg: &str) -> Result<()> {
        if check {
            Err(Self::BrokenInvariant(type_name::<T>().into(), msg.into()))
        } else {
            Ok(())
        }
    }

    pub fn multiplication_overflow<L, R>(lhs: L, rhs: R) -> Self
    where
        L: Debug,
        R: Debug,
    {
        Self::MultiplicationOverflow {
            details: format!("({:?}.of({:?}))", lhs, rhs),
        }
    }

    pub fn addition_overflow<L, R>(lhs: L, rhs: R) -> Self
    where
        L: Debug,
        R: Debug,
    {
        Self::AdditionOverflow {
            details: format!("({:?} + {:?})", lhs, rhs),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
