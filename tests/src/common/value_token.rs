//! A cw20-shaped fungible token keeping balances and allowances
use serde::{Deserialize, Serialize};

use custody::value::msg::{AllowanceResponse, BalanceResponse, QueryMsg};
use finance::coin::Coin;
use sdk::{
    cosmwasm_ext::Response,
    cosmwasm_std::{
        Addr, Binary, Deps, DepsMut, Env, MessageInfo, StdError, StdResult, Storage,
        to_json_binary,
    },
    cw_storage_plus::Map,
    schemars::{self, JsonSchema},
    testing::{self, App, CwContractWrapper, Executor},
};

const BALANCES: Map<&Addr, Coin> = Map::new("balances");
const ALLOWANCES: Map<(&Addr, &Addr), Coin> = Map::new("allowances");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Coin,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Coin,
    },
    IncreaseAllowance {
        spender: String,
        amount: Coin,
    },
    Mint {
        recipient: String,
        amount: Coin,
    },
}

pub fn instantiate_contract(app: &mut App) -> Addr {
    let code_id = app.store_code(Box::new(CwContractWrapper::new(
        execute,
        instantiate,
        query,
    )));

    app.instantiate_contract(
        code_id,
        testing::user("admin"),
        &InstantiateMsg {},
        &[],
        "value-token",
        None,
    )
    .unwrap()
}

fn instantiate(
    _deps: DepsMut<'_>,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn execute(
    deps: DepsMut<'_>,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => deps
            .api
            .addr_validate(&recipient)
            .and_then(|recipient| move_funds(deps.storage, &info.sender, &recipient, amount)),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => {
            let owner = deps.api.addr_validate(&owner)?;
            let recipient = deps.api.addr_validate(&recipient)?;

            ALLOWANCES
                .update(deps.storage, (&owner, &info.sender), |allowance| {
                    allowance
                        .unwrap_or_default()
                        .checked_sub(amount)
                        .ok_or_else(|| StdError::generic_err("insufficient allowance"))
                })
                .and_then(|_| move_funds(deps.storage, &owner, &recipient, amount))
        }
        ExecuteMsg::IncreaseAllowance { spender, amount } => deps
            .api
            .addr_validate(&spender)
            .and_then(|spender| {
                ALLOWANCES.update(deps.storage, (&info.sender, &spender), |allowance| {
                    add(allowance.unwrap_or_default(), amount)
                })
            })
            .map(|_| ()),
        ExecuteMsg::Mint { recipient, amount } => deps
            .api
            .addr_validate(&recipient)
            .and_then(|recipient| deposit(deps.storage, &recipient, amount)),
    }
    .map(|()| Response::new())
}

fn query(deps: Deps<'_>, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => deps
            .api
            .addr_validate(&address)
            .and_then(|address| BALANCES.may_load(deps.storage, &address))
            .and_then(|balance| {
                to_json_binary(&BalanceResponse {
                    balance: balance.unwrap_or_default(),
                })
            }),
        QueryMsg::Allowance { owner, spender } => {
            let owner = deps.api.addr_validate(&owner)?;
            let spender = deps.api.addr_validate(&spender)?;

            ALLOWANCES
                .may_load(deps.storage, (&owner, &spender))
                .and_then(|allowance| {
                    to_json_binary(&AllowanceResponse {
                        allowance: allowance.unwrap_or_default(),
                    })
                })
        }
    }
}

fn move_funds(storage: &mut dyn Storage, from: &Addr, to: &Addr, amount: Coin) -> StdResult<()> {
    BALANCES
        .update(storage, from, |balance| {
            balance
                .unwrap_or_default()
                .checked_sub(amount)
                .ok_or_else(|| StdError::generic_err("insufficient funds"))
        })
        .and_then(|_| deposit(storage, to, amount))
}

fn deposit(storage: &mut dyn Storage, to: &Addr, amount: Coin) -> StdResult<()> {
    BALANCES
        .update(storage, to, |balance| add(balance.unwrap_or_default(), amount))
        .map(|_| ())
}

fn add(lhs: Coin, rhs: Coin) -> StdResult<Coin> {
    lhs.checked_add(rhs)
        .ok_or_else(|| StdError::generic_err("balance overflow"))
}
