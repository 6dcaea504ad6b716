use serde::Serialize;

use access_control::ContractOwnerAccess;
use custody::collection::CollectionRef;
use platform::{error as platform_error, response};
use sdk::{
    cosmwasm_ext::Response as CwResponse,
    cosmwasm_std::{self, Binary, Deps, DepsMut, Env, MessageInfo, Storage, entry_point},
};
use versioning::{Package, VersionSegment};

use crate::{
    config::Config,
    error::{ContractError, Result},
    loan::Collateral,
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
};

mod borrow;
mod liquidate;
mod query;
mod repay;
mod transfer;

const CONTRACT_STORAGE_VERSION: VersionSegment = 0;
const CONTRACT_VERSION: Package = versioning::package!(CONTRACT_STORAGE_VERSION);

#[entry_point]
pub fn instantiate(
    deps: DepsMut<'_>,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<CwResponse> {
    Config::try_new(msg, deps.api, deps.querier)
        .and_then(|config| config.store(deps.storage))
        .and_then(|()| {
            versioning::initialize(deps.storage, CONTRACT_VERSION).map_err(ContractError::from)
        })
        .and_then(|()| {
            ContractOwnerAccess::<&mut dyn Storage>::new(&mut *deps.storage)
                .grant_to(&info.sender)
                .map_err(Into::into)
        })
        .map(|()| response::empty_response())
        .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn migrate(deps: DepsMut<'_>, _env: Env, MigrateMsg {}: MigrateMsg) -> Result<CwResponse> {
    versioning::update_software(deps.storage, CONTRACT_VERSION)
        .map_err(ContractError::from)
        .and_then(response::response)
        .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn execute(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<CwResponse> {
    match msg {
        ExecuteMsg::Borrow {
            principal,
            collection,
            token_id,
            collateral_value,
        } => deps
            .api
            .addr_validate(&collection)
            .map_err(ContractError::from)
            .and_then(|collection| {
                CollectionRef::try_new(collection, deps.querier).map_err(Into::into)
            })
            .and_then(|collection| {
                borrow::try_borrow(
                    deps.storage,
                    deps.querier,
                    &env,
                    info.sender,
                    principal,
                    Collateral {
                        collection,
                        token_id,
                    },
                    collateral_value,
                )
            })
            .and_then(|(loan_id, messages)| response::response_with_messages(loan_id, messages)),
        ExecuteMsg::Repay { loan_id } => {
            repay::try_repay(deps.storage, deps.querier, &env, info.sender, loan_id).and_then(
                |(settlement, messages)| response::response_with_messages(settlement, messages),
            )
        }
        ExecuteMsg::Liquidate { loan_id } => {
            liquidate::try_liquidate(deps.storage, deps.querier, &env, info.sender, loan_id)
                .and_then(|(settlement, messages)| {
                    response::response_with_messages(settlement, messages)
                })
        }
    }
    .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn query(deps: Deps<'_>, env: Env, msg: QueryMsg) -> Result<Binary> {
    match msg {
        QueryMsg::Config {} => query::config(deps.storage).and_then(to_json),
        QueryMsg::Owner {} => query::owner(deps.storage).and_then(to_json),
        QueryMsg::Loan { id } => query::loan(deps.storage, id).and_then(to_json),
        QueryMsg::Loans { start_after, limit } => {
            query::loans(deps.storage, start_after, limit).and_then(to_json)
        }
        QueryMsg::LoansOf {
            borrower,
            start_after,
            limit,
        } => deps
            .api
            .addr_validate(&borrower)
            .map_err(ContractError::from)
            .and_then(|borrower| query::loans_of(deps.storage, &borrower, start_after, limit))
            .and_then(to_json),
        QueryMsg::AmountDue { id } => query::amount_due(deps.storage, id, &env).and_then(to_json),
        QueryMsg::CollateralLoan {
            collection,
            token_id,
        } => deps
            .api
            .addr_validate(&collection)
            .map_err(ContractError::from)
            .and_then(|collection| query::collateral_loan(deps.storage, &collection, &token_id))
            .and_then(to_json),
        QueryMsg::ContractVersion {} => versioning::current(deps.storage)
            .map_err(ContractError::from)
            .and_then(to_json),
    }
    .inspect_err(platform_error::log(deps.api))
}

fn to_json<T>(resp: T) -> Result<Binary>
where
    T: Serialize,
{
    cosmwasm_std::to_json_binary(&resp).map_err(Into::into)
}
