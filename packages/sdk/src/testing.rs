use cosmwasm_std::{
    Addr, Empty, OwnedDeps, QuerierResult, SystemError, SystemResult, WasmQuery,
    testing::{self, MockApi, MockQuerier, MockStorage},
};
use cw_multi_test::{BasicApp, BasicAppBuilder};
pub use cw_multi_test::{AppResponse, ContractWrapper as CwContractWrapper, Executor};

use crate::cosmwasm_ext::CustomMsg;

pub type App = BasicApp<CustomMsg, Empty>;

pub type CwContract = dyn cw_multi_test::Contract<CustomMsg, Empty>;

pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

/// Produce a valid address out of a human readable name.
pub fn user(name: &str) -> Addr {
    MockApi::default().addr_make(name)
}

pub fn new_app() -> App {
    BasicAppBuilder::<CustomMsg, Empty>::new_custom().build(|_, _, _| {})
}

/// Mock dependencies whose querier dispatches wasm queries to `handler`.
pub fn mock_deps_with_wasm<H>(handler: H) -> MockDeps
where
    H: Fn(&WasmQuery) -> QuerierResult + 'static,
{
    let mut deps = testing::mock_dependencies();
    deps.querier.update_wasm(handler);
    deps
}

pub fn no_such_contract(query: &WasmQuery) -> QuerierResult {
    let addr = match query {
        WasmQuery::Smart { contract_addr, .. }
        | WasmQuery::Raw { contract_addr, .. }
        | WasmQuery::ContractInfo { contract_addr } => contract_addr.clone(),
        _ => String::default(),
    };

    SystemResult::Err(SystemError::NoSuchContract { addr })
}
