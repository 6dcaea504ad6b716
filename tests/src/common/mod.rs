use serde::de::DeserializeOwned;

use finance::{
    coin::{Amount, Coin},
    duration::Duration,
    percent::Percent100,
    ratio::Ratio,
};
use nft_lending::{
    error::ContractError,
    msg::{ExecuteMsg, InstantiateMsg, LiquidationPolicy, LoanId, QueryMsg},
};
use sdk::{
    cosmwasm_std::{Addr, from_json},
    testing::{self, App, AppResponse, CwContractWrapper, Executor},
};

pub mod value_token;

pub const UNITS: Amount = 1_000_000_000_000_000_000;
pub const TOKEN: &str = "punk-42";

pub const LIQUIDITY: Amount = 100_000 * UNITS;
pub const FUNDS: Amount = 10_000 * UNITS;

pub fn units(amount: Amount) -> Coin {
    Coin::new(amount * UNITS)
}

pub fn alice() -> Addr {
    testing::user("alice")
}

pub fn bob() -> Addr {
    testing::user("bob")
}

pub fn carol() -> Addr {
    testing::user("carol")
}

/// The ledger and its collaborators
///
/// The ledger holds [`LIQUIDITY`], `alice` owns [`TOKEN`], `bob` and `carol` hold [`FUNDS`] each.
pub struct TestCase {
    pub app: App,
    pub ledger: Addr,
    pub value_token: Addr,
    pub collection: Addr,
}

impl TestCase {
    pub fn new(liquidation: LiquidationPolicy) -> Self {
        let mut app = testing::new_app();
        let value_token = value_token::instantiate_contract(&mut app);
        let collection = collection::instantiate_contract(&mut app);
        let ledger = instantiate_ledger(&mut app, &value_token, liquidation);

        let mut test_case = Self {
            app,
            ledger,
            value_token,
            collection,
        };

        test_case.mint(&test_case.ledger.clone(), Coin::new(LIQUIDITY));
        test_case.mint(&bob(), Coin::new(FUNDS));
        test_case.mint(&carol(), Coin::new(FUNDS));
        test_case.mint_nft(TOKEN, &alice());

        test_case
    }

    pub fn mint(&mut self, recipient: &Addr, amount: Coin) {
        self.app
            .execute_contract(
                testing::user("admin"),
                self.value_token.clone(),
                &value_token::ExecuteMsg::Mint {
                    recipient: recipient.to_string(),
                    amount,
                },
                &[],
            )
            .unwrap();
    }

    pub fn mint_nft(&mut self, token_id: &str, owner: &Addr) {
        self.app
            .execute_contract(
                testing::user("admin"),
                self.collection.clone(),
                &collection::ExecuteMsg::Mint {
                    token_id: token_id.into(),
                    owner: owner.to_string(),
                },
                &[],
            )
            .unwrap();
    }

    /// Let the ledger move `token_id` out of `owner`'s possession
    pub fn approve_nft(&mut self, owner: &Addr, token_id: &str) {
        self.app
            .execute_contract(
                owner.clone(),
                self.collection.clone(),
                &collection::ExecuteMsg::Approve {
                    spender: self.ledger.to_string(),
                    token_id: token_id.into(),
                },
                &[],
            )
            .unwrap();
    }

    /// Let the ledger move any item of `owner`
    pub fn approve_operator(&mut self, owner: &Addr) {
        self.app
            .execute_contract(
                owner.clone(),
                self.collection.clone(),
                &collection::ExecuteMsg::ApproveAll {
                    operator: self.ledger.to_string(),
                },
                &[],
            )
            .unwrap();
    }

    /// Let the ledger take `amount` out of `owner`'s balance
    pub fn approve_payment(&mut self, owner: &Addr, amount: Coin) {
        self.app
            .execute_contract(
                owner.clone(),
                self.value_token.clone(),
                &value_token::ExecuteMsg::IncreaseAllowance {
                    spender: self.ledger.to_string(),
                    amount,
                },
                &[],
            )
            .unwrap();
    }

    pub fn freeze_collection(&mut self) {
        self.app
            .execute_contract(
                testing::user("admin"),
                self.collection.clone(),
                &collection::ExecuteMsg::Freeze {},
                &[],
            )
            .unwrap();
    }

    pub fn borrow(
        &mut self,
        borrower: &Addr,
        token_id: &str,
        principal: Coin,
        collateral_value: Coin,
    ) -> anyhow::Result<AppResponse> {
        self.execute(
            borrower,
            &ExecuteMsg::Borrow {
                principal,
                collection: self.collection.to_string(),
                token_id: token_id.into(),
                collateral_value,
            },
        )
    }

    /// `alice` pledges [`TOKEN`] valued at 10 000 for a principal of 3 000
    pub fn open_loan(&mut self) -> LoanId {
        self.approve_nft(&alice(), TOKEN);
        self.borrow(&alice(), TOKEN, units(3_000), units(10_000))
            .map(|resp| from_json(resp.data.unwrap()).unwrap())
            .unwrap()
    }

    pub fn repay(&mut self, payer: &Addr, loan_id: LoanId) -> anyhow::Result<AppResponse> {
        self.execute(payer, &ExecuteMsg::Repay { loan_id })
    }

    pub fn liquidate(&mut self, liquidator: &Addr, loan_id: LoanId) -> anyhow::Result<AppResponse> {
        self.execute(liquidator, &ExecuteMsg::Liquidate { loan_id })
    }

    pub fn time_shift(&mut self, secs: u64) {
        self.app
            .update_block(|block| block.time = block.time.plus_seconds(secs));
    }

    pub fn query<T>(&self, msg: &QueryMsg) -> T
    where
        T: DeserializeOwned,
    {
        self.app
            .wrap()
            .query_wasm_smart(self.ledger.clone(), msg)
            .unwrap()
    }

    pub fn balance(&self, account: &Addr) -> Coin {
        self.app
            .wrap()
            .query_wasm_smart(
                self.value_token.clone(),
                &custody::value::msg::QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .map(|resp: custody::value::msg::BalanceResponse| resp.balance)
            .unwrap()
    }

    pub fn nft_owner(&self, token_id: &str) -> Addr {
        self.app
            .wrap()
            .query_wasm_smart(
                self.collection.clone(),
                &custody::collection::msg::QueryMsg::OwnerOf {
                    token_id: token_id.into(),
                    include_expired: None,
                },
            )
            .map(|resp: custody::collection::msg::OwnerOfResponse| Addr::unchecked(resp.owner))
            .unwrap()
    }

    fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.ledger.clone(), msg, &[])
    }
}

/// The ledger error behind a failed execution
pub fn expect_err(result: anyhow::Result<AppResponse>) -> ContractError {
    result
        .unwrap_err()
        .downcast::<ContractError>()
        .unwrap()
}

fn instantiate_ledger(app: &mut App, value_token: &Addr, liquidation: LiquidationPolicy) -> Addr {
    let code_id = app.store_code(Box::new(
        CwContractWrapper::new(
            nft_lending::contract::execute,
            nft_lending::contract::instantiate,
            nft_lending::contract::query,
        )
        .with_migrate(nft_lending::contract::migrate),
    ));

    app.instantiate_contract(
        code_id,
        testing::user("admin"),
        &InstantiateMsg {
            value_token: value_token.to_string(),
            interest_rate: Ratio::new(1, 10).unwrap(),
            max_ltv: Percent100::from_percent(70).unwrap(),
            loan_duration: Duration::DAY,
            liquidation,
        },
        &[],
        "nft-lending",
        None,
    )
    .unwrap()
}
