use finance::coin::Coin;
use nft_lending::{
    error::ContractError,
    msg::{
        CollateralLoanResponse, LiquidationPolicy, LoanId, LoanResponse, LoansResponse, QueryMsg,
        Status,
    },
};
use sdk::cosmwasm_std::{Event, from_json};

use crate::common::{self, FUNDS, LIQUIDITY, TOKEN, TestCase, alice, bob, units};

fn test_case() -> TestCase {
    TestCase::new(LiquidationPolicy::Forfeit)
}

fn all_loans(test_case: &TestCase) -> LoansResponse {
    test_case.query(&QueryMsg::Loans {
        start_after: None,
        limit: None,
    })
}

fn collateral_loan(test_case: &TestCase, token_id: &str) -> Option<LoanId> {
    test_case
        .query::<CollateralLoanResponse>(&QueryMsg::CollateralLoan {
            collection: test_case.collection.to_string(),
            token_id: token_id.into(),
        })
        .loan
}

#[test]
fn exceeds_loan_to_value() {
    let mut test_case = test_case();
    test_case.approve_nft(&alice(), TOKEN);

    assert_eq!(
        ContractError::ExceedsLoanToValue {
            principal: units(8_000),
            max_principal: units(7_000)
        },
        common::expect_err(test_case.borrow(&alice(), TOKEN, units(8_000), units(10_000)))
    );

    assert!(all_loans(&test_case).loans.is_empty());
    assert_eq!(alice(), test_case.nft_owner(TOKEN));
    assert_eq!(Coin::new(0), test_case.balance(&alice()));
    assert_eq!(Coin::new(LIQUIDITY), test_case.balance(&test_case.ledger));
}

#[test]
fn zero_amounts() {
    let mut test_case = test_case();
    test_case.approve_nft(&alice(), TOKEN);

    assert_eq!(
        ContractError::ZeroPrincipal {},
        common::expect_err(test_case.borrow(&alice(), TOKEN, Coin::new(0), units(10_000)))
    );
    assert_eq!(
        ContractError::ZeroCollateralValue {},
        common::expect_err(test_case.borrow(&alice(), TOKEN, units(1), Coin::new(0)))
    );
}

#[test]
fn borrow() {
    let mut test_case = test_case();
    test_case.approve_nft(&alice(), TOKEN);

    let resp = test_case
        .borrow(&alice(), TOKEN, units(3_000), units(10_000))
        .unwrap();

    let id: LoanId = from_json(resp.data.as_ref().unwrap()).unwrap();
    assert_eq!(0, id);
    assert!(resp.has_event(
        &Event::new("wasm-nft-loan-borrow")
            .add_attribute("id", "0")
            .add_attribute("borrower", alice())
            .add_attribute("token", TOKEN)
            .add_attribute("principal", units(3_000).to_string())
            .add_attribute("collateral-value", units(10_000).to_string())
    ));

    assert_eq!(test_case.ledger, test_case.nft_owner(TOKEN));
    assert_eq!(units(3_000), test_case.balance(&alice()));
    assert_eq!(
        Coin::new(LIQUIDITY) - units(3_000),
        test_case.balance(&test_case.ledger)
    );

    let LoanResponse { id: loan_id, loan } = test_case.query(&QueryMsg::Loan { id });
    assert_eq!(id, loan_id);
    assert_eq!(&alice(), loan.borrower());
    assert_eq!(units(3_000), loan.principal());
    assert_eq!(units(10_000), loan.collateral_value());
    assert_eq!(test_case.app.block_info().time, loan.start());
    assert_eq!(&Status::Active, loan.status());

    assert_eq!(Some(id), collateral_loan(&test_case, TOKEN));
}

#[test]
fn sequential_ids() {
    let mut test_case = test_case();
    test_case.mint_nft("punk-43", &bob());

    assert_eq!(0, test_case.open_loan());

    test_case.approve_nft(&bob(), "punk-43");
    let resp = test_case
        .borrow(&bob(), "punk-43", units(700), units(1_000))
        .unwrap();
    assert_eq!(1u64, from_json::<LoanId>(resp.data.unwrap()).unwrap());

    assert_eq!(Coin::new(FUNDS) + units(700), test_case.balance(&bob()));
    assert_eq!(Some(1), collateral_loan(&test_case, "punk-43"));
    assert_eq!(
        vec![0u64, 1],
        all_loans(&test_case)
            .loans
            .into_iter()
            .map(|resp| resp.id)
            .collect::<Vec<LoanId>>()
    );
}

#[test]
fn collateral_not_approved() {
    let mut test_case = test_case();

    assert_eq!(
        ContractError::CollateralTransferFailed {
            collection: test_case.collection.to_string(),
            token_id: TOKEN.into()
        },
        common::expect_err(test_case.borrow(&alice(), TOKEN, units(3_000), units(10_000)))
    );
}

#[test]
fn collateral_of_operator() {
    let mut test_case = test_case();
    test_case.approve_operator(&alice());

    test_case
        .borrow(&alice(), TOKEN, units(3_000), units(10_000))
        .unwrap();

    assert_eq!(test_case.ledger, test_case.nft_owner(TOKEN));
    assert_eq!(units(3_000), test_case.balance(&alice()));
    assert_eq!(Some(0), collateral_loan(&test_case, TOKEN));
}

#[test]
fn operator_of_another() {
    let mut test_case = test_case();
    test_case.approve_operator(&bob());

    assert_eq!(
        ContractError::CollateralTransferFailed {
            collection: test_case.collection.to_string(),
            token_id: TOKEN.into()
        },
        common::expect_err(test_case.borrow(&alice(), TOKEN, units(3_000), units(10_000)))
    );
}

#[test]
fn collateral_of_another() {
    let mut test_case = test_case();
    test_case.approve_nft(&alice(), TOKEN);

    assert_eq!(
        ContractError::CollateralTransferFailed {
            collection: test_case.collection.to_string(),
            token_id: TOKEN.into()
        },
        common::expect_err(test_case.borrow(&bob(), TOKEN, units(3_000), units(10_000)))
    );
}

#[test]
fn collateral_pledged() {
    let mut test_case = test_case();
    let id = test_case.open_loan();

    assert_eq!(
        ContractError::CollateralPledged {
            collection: test_case.collection.to_string(),
            token_id: TOKEN.into(),
            loan: id
        },
        common::expect_err(test_case.borrow(&alice(), TOKEN, units(1_000), units(10_000)))
    );
}

#[test]
fn insufficient_liquidity() {
    let mut test_case = test_case();
    test_case.approve_nft(&alice(), TOKEN);

    assert_eq!(
        ContractError::DisbursementFailed {
            principal: units(200_000),
            balance: Coin::new(LIQUIDITY)
        },
        common::expect_err(test_case.borrow(
            &alice(),
            TOKEN,
            units(200_000),
            units(1_000_000)
        ))
    );
    assert_eq!(alice(), test_case.nft_owner(TOKEN));
}

#[test]
fn failed_transfer_reverts() {
    let mut test_case = test_case();
    test_case.approve_nft(&alice(), TOKEN);
    test_case.freeze_collection();

    assert!(
        test_case
            .borrow(&alice(), TOKEN, units(3_000), units(10_000))
            .is_err()
    );

    assert!(all_loans(&test_case).loans.is_empty());
    assert_eq!(None, collateral_loan(&test_case, TOKEN));
    assert_eq!(alice(), test_case.nft_owner(TOKEN));
    assert_eq!(Coin::new(0), test_case.balance(&alice()));
    assert_eq!(Coin::new(LIQUIDITY), test_case.balance(&test_case.ledger));
}
