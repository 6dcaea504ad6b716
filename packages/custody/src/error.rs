use thiserror::Error;

use sdk::cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Custody] Invalid token contract address, cause: \"{0}\".")]
    InvalidAddress(platform::error::Error),

    #[error("[Custody] Failed to query the value token! Cause: {0}")]
    QueryValueToken(StdError),

    #[error("[Custody] Failed to query the collection! Cause: {0}")]
    QueryCollection(StdError),

    #[error("[Custody] {0}")]
    Platform(#[from] platform::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
