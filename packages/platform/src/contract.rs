use sdk::cosmwasm_std::{Addr, ContractInfoResponse, QuerierWrapper, WasmQuery};

use crate::{error::Error, result::Result};

/// Check that there is a contract instantiated at `contract_address`
pub fn validate_addr(querier: QuerierWrapper<'_>, contract_address: &Addr) -> Result<()> {
    query_info(querier, contract_address).map(|_| ())
}

fn query_info(
    querier: QuerierWrapper<'_>,
    contract_address: &Addr,
) -> Result<ContractInfoResponse> {
    let raw = WasmQuery::ContractInfo {
        contract_addr: contract_address.into(),
    }
    .into();
    querier
        .query(&raw)
        .map_err(Error::CosmWasmQueryContractInfo)
}

#[cfg(any(feature = "testing", test))]
pub mod testing {
    use sdk::cosmwasm_std::{
        Addr, ContractInfoResponse, ContractResult, QuerierResult, SystemResult, WasmQuery,
        to_json_binary,
    };

    pub const CODE_ID: u64 = 20;

    pub fn valid_contract_handler(_query: &WasmQuery) -> QuerierResult {
        SystemResult::Ok(ContractResult::Ok(
            to_json_binary(&ContractInfoResponse::new(
                CODE_ID,
                Addr::unchecked("creator"),
                None,
                false,
                None,
            ))
            .unwrap(),
        ))
    }
}
