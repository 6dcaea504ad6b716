use thiserror::Error;

use sdk::cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Access Control] [Std] {0}")]
    Std(#[from] StdError),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
