use finance::coin::Coin;
use nft_lending::{
    error::ContractError,
    msg::{AmountDueResponse, LiquidationPolicy, LoanResponse, QueryMsg, Settlement, Status},
};
use sdk::cosmwasm_std::{Event, from_json};

use crate::common::{self, FUNDS, LIQUIDITY, TOKEN, TestCase, alice, bob, units};

const INTEREST: u128 = 246_575_342_465_753_424;

fn total_due() -> Coin {
    units(3_000) + Coin::new(INTEREST)
}

#[test]
fn repay() {
    let mut test_case = TestCase::new(LiquidationPolicy::Forfeit);
    let id = test_case.open_loan();
    test_case.time_shift(25_920);

    assert_eq!(
        AmountDueResponse {
            principal: units(3_000),
            interest: Coin::new(INTEREST),
            total: total_due(),
        },
        test_case.query(&QueryMsg::AmountDue { id })
    );

    test_case.approve_payment(&bob(), total_due());
    let resp = test_case.repay(&bob(), id).unwrap();

    let settlement = Settlement {
        at: test_case.app.block_info().time,
        by: bob(),
        paid: total_due(),
    };
    assert_eq!(
        settlement,
        from_json::<Settlement>(resp.data.as_ref().unwrap()).unwrap()
    );
    assert!(resp.has_event(
        &Event::new("wasm-nft-loan-repay")
            .add_attribute("id", id.to_string())
            .add_attribute("payer", bob())
            .add_attribute("borrower", alice())
            .add_attribute("interest", INTEREST.to_string())
    ));

    assert_eq!(alice(), test_case.nft_owner(TOKEN));
    assert_eq!(Coin::new(FUNDS) - total_due(), test_case.balance(&bob()));
    assert_eq!(units(3_000), test_case.balance(&alice()));
    assert_eq!(
        Coin::new(LIQUIDITY) + Coin::new(INTEREST),
        test_case.balance(&test_case.ledger)
    );

    let LoanResponse { loan, .. } = test_case.query(&QueryMsg::Loan { id });
    assert_eq!(&Status::Repaid(settlement), loan.status());

    test_case.approve_payment(&bob(), total_due());
    assert_eq!(
        ContractError::LoanNotActive(id),
        common::expect_err(test_case.repay(&bob(), id))
    );
    assert_eq!(Coin::new(FUNDS) - total_due(), test_case.balance(&bob()));
}

#[test]
fn unknown_loan() {
    let mut test_case = TestCase::new(LiquidationPolicy::Forfeit);

    assert_eq!(
        ContractError::LoanNotActive(0),
        common::expect_err(test_case.repay(&bob(), 0))
    );
}

#[test]
fn allowance_missing() {
    let mut test_case = TestCase::new(LiquidationPolicy::Forfeit);
    let id = test_case.open_loan();
    test_case.time_shift(25_920);
    test_case.approve_payment(&bob(), units(3_000));

    assert_eq!(
        ContractError::TransferApprovalMissing {
            due: total_due(),
            allowance: units(3_000)
        },
        common::expect_err(test_case.repay(&bob(), id))
    );
    assert_eq!(test_case.ledger, test_case.nft_owner(TOKEN));
}

#[test]
fn insufficient_payment() {
    let mut test_case = TestCase::new(LiquidationPolicy::Forfeit);
    let id = test_case.open_loan();
    test_case.time_shift(25_920);

    // alice holds the principal only
    test_case.approve_payment(&alice(), total_due());
    assert_eq!(
        ContractError::InsufficientPayment {
            due: total_due(),
            balance: units(3_000)
        },
        common::expect_err(test_case.repay(&alice(), id))
    );

    let LoanResponse { loan, .. } = test_case.query(&QueryMsg::Loan { id });
    assert!(loan.is_active());
}
