use std::fmt::Debug;

use thiserror::Error;

use sdk::cosmwasm_std::{Api, StdError};

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Platform] [Std] An error occured while querying contract info: {0}")]
    CosmWasmQueryContractInfo(StdError),

    #[error("[Platform] [Std] An error occured on data serialization: {0}")]
    Serialization(StdError),
}

pub fn log<Err>(api: &dyn Api) -> impl FnOnce(&Err) + '_
where
    Err: Debug,
{
    |err| api.debug(&format!("{:?}", err))
}
