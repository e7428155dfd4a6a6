//! Integration tests for the Bridged Token contract using cw-multi-test.
//!
//! These tests walk through instantiation, token metadata and the end-to-end
//! bridge settlement flows (mint on inbound, burn on outbound).

use cosmwasm_std::{to_json_binary, Addr, Int128, Uint128};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_multi_test::{App, ContractWrapper, Executor};

use bridged_token::msg::{
    AllBalancesResponse, DecimalsResponse, ExecuteMsg, InstantiateMsg, IsBridgeResponse,
    OwnerResponse, QueryMsg, SymbolResponse, TotalSupplyResponse,
};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        bridged_token::contract::execute,
        bridged_token::contract::instantiate,
        bridged_token::contract::query,
    )
    .with_reply(bridged_token::contract::reply);
    Box::new(contract)
}

fn setup() -> (App, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");

    let code_id = app.store_code(contract_token());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
            },
            &[],
            "bridged-token",
            Some(owner.to_string()),
        )
        .unwrap();

    (app, contract_addr)
}

fn balance(app: &App, contract_addr: &Addr, address: &Addr) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            contract_addr,
            &QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn total_supply(app: &App, contract_addr: &Addr) -> Uint128 {
    let res: TotalSupplyResponse = app
        .wrap()
        .query_wasm_smart(contract_addr, &QueryMsg::TotalSupply {})
        .unwrap();
    res.total_supply
}

/// Supply equals the sum of stored balances and no stored balance is zero.
fn assert_supply_matches_balances(app: &App, contract_addr: &Addr) {
    let res: AllBalancesResponse = app
        .wrap()
        .query_wasm_smart(
            contract_addr,
            &QueryMsg::AllBalances {
                start_after: None,
                limit: Some(30),
            },
        )
        .unwrap();

    assert!(res.balances.iter().all(|entry| !entry.balance.is_zero()));
    let sum = res
        .balances
        .iter()
        .fold(Uint128::zero(), |acc, entry| acc + entry.balance);
    assert_eq!(sum, total_supply(app, contract_addr));
}

fn transfer(from: &Addr, to: &Addr, amount: i128) -> ExecuteMsg {
    ExecuteMsg::Transfer {
        from: from.to_string(),
        to: Some(to.to_string()),
        amount: Int128::new(amount),
        data: None,
    }
}

// ============================================================================
// Contract Instantiation Tests
// ============================================================================

#[test]
fn test_instantiate() {
    let (app, contract_addr) = setup();

    let owner: OwnerResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Owner {})
        .unwrap();
    assert_eq!(owner.owner, Addr::unchecked("terra1owner"));

    assert_eq!(total_supply(&app, &contract_addr), Uint128::zero());
    assert_supply_matches_balances(&app, &contract_addr);
}

#[test]
fn test_instantiate_rejects_invalid_owner() {
    let mut app = App::default();
    let code_id = app.store_code(contract_token());

    let res = app.instantiate_contract(
        code_id,
        Addr::unchecked("terra1deployer"),
        &InstantiateMsg {
            owner: String::new(),
        },
        &[],
        "bridged-token",
        None,
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid argument"),
        "Expected invalid argument error, got: {}",
        err_str
    );
}

#[test]
fn test_token_metadata() {
    let (app, contract_addr) = setup();

    let symbol: SymbolResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Symbol {})
        .unwrap();
    assert_eq!(symbol.symbol, "BRDG");

    let decimals: DecimalsResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Decimals {})
        .unwrap();
    assert_eq!(decimals.decimals, 8);

    let info: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.name, "Bridged Token");
    assert_eq!(info.symbol, "BRDG");
    assert_eq!(info.decimals, 8);
    assert_eq!(info.total_supply, Uint128::zero());
}

#[test]
fn test_unknown_account_has_zero_balance() {
    let (app, contract_addr) = setup();
    let stranger = Addr::unchecked("terra1stranger");

    assert_eq!(balance(&app, &contract_addr, &stranger), Uint128::zero());
}

// ============================================================================
// Bridge Settlement Scenarios
// ============================================================================

#[test]
fn test_bridge_settlement_round_trip() {
    let (mut app, contract_addr) = setup();
    let owner = Addr::unchecked("terra1owner");
    let bridge = Addr::unchecked("terra1bridge");
    let alice = Addr::unchecked("terra1alice");
    let bob = Addr::unchecked("terra1bob");

    // 1. Owner registers the bridge
    app.execute_contract(
        owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::AddBridge {
            address: bridge.to_string(),
        },
        &[],
    )
    .unwrap();
    let is_bridge: IsBridgeResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::IsBridge {
                address: bridge.to_string(),
            },
        )
        .unwrap();
    assert!(is_bridge.is_bridge);
    assert_eq!(total_supply(&app, &contract_addr), Uint128::zero());

    // 2. Inbound: the bridge mints 100 and moves it to alice
    let res = app
        .execute_contract(
            bridge.clone(),
            contract_addr.clone(),
            &transfer(&bridge, &alice, 100),
            &[],
        )
        .unwrap();
    assert_eq!(res.data, Some(to_json_binary(&true).unwrap()));
    assert_eq!(balance(&app, &contract_addr, &alice), Uint128::new(100));
    assert_eq!(balance(&app, &contract_addr, &bridge), Uint128::zero());
    assert_eq!(total_supply(&app, &contract_addr), Uint128::new(100));
    assert_supply_matches_balances(&app, &contract_addr);

    // 3. Outbound: alice sends 40 to the bridge, which burns it
    app.execute_contract(
        alice.clone(),
        contract_addr.clone(),
        &transfer(&alice, &bridge, 40),
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, &contract_addr, &alice), Uint128::new(60));
    assert_eq!(balance(&app, &contract_addr, &bridge), Uint128::zero());
    assert_eq!(total_supply(&app, &contract_addr), Uint128::new(60));
    assert_supply_matches_balances(&app, &contract_addr);

    // 4. Overdraft fails and changes nothing
    let res = app.execute_contract(
        alice.clone(),
        contract_addr.clone(),
        &transfer(&alice, &bob, 1000),
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Insufficient balance"),
        "Expected insufficient balance error, got: {}",
        err_str
    );
    assert_eq!(balance(&app, &contract_addr, &alice), Uint128::new(60));
    assert_eq!(balance(&app, &contract_addr, &bob), Uint128::zero());
    assert_eq!(total_supply(&app, &contract_addr), Uint128::new(60));
    assert_supply_matches_balances(&app, &contract_addr);
}

#[test]
fn test_ownership_handoff_scenario() {
    let (mut app, contract_addr) = setup();
    let owner0 = Addr::unchecked("terra1owner");
    let owner1 = Addr::unchecked("terra1newowner");
    let bridge = Addr::unchecked("terra1bridge");

    app.execute_contract(
        owner0.clone(),
        contract_addr.clone(),
        &ExecuteMsg::InitiateOwnershipTransfer {
            new_owner: owner1.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner1.clone(),
        contract_addr.clone(),
        &ExecuteMsg::AcceptOwnershipTransfer {},
        &[],
    )
    .unwrap();

    let owner: OwnerResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Owner {})
        .unwrap();
    assert_eq!(owner.owner, owner1);

    // The previous owner lost its rights
    let res = app.execute_contract(
        owner0.clone(),
        contract_addr.clone(),
        &ExecuteMsg::AddBridge {
            address: bridge.to_string(),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Unauthorized"),
        "Expected unauthorized error, got: {}",
        err_str
    );

    // The new owner has them
    app.execute_contract(
        owner1,
        contract_addr.clone(),
        &ExecuteMsg::AddBridge {
            address: bridge.to_string(),
        },
        &[],
    )
    .unwrap();
}

#[test]
fn test_many_transfers_keep_supply_consistent() {
    let (mut app, contract_addr) = setup();
    let owner = Addr::unchecked("terra1owner");
    let bridge_a = Addr::unchecked("terra1bridgea");
    let bridge_b = Addr::unchecked("terra1bridgeb");
    let alice = Addr::unchecked("terra1alice");
    let bob = Addr::unchecked("terra1bob");
    let carol = Addr::unchecked("terra1carol");

    for bridge in [&bridge_a, &bridge_b] {
        app.execute_contract(
            owner.clone(),
            contract_addr.clone(),
            &ExecuteMsg::AddBridge {
                address: bridge.to_string(),
            },
            &[],
        )
        .unwrap();
    }

    let steps: Vec<(&Addr, &Addr, i128)> = vec![
        (&bridge_a, &alice, 500),
        (&bridge_b, &bob, 250),
        (&alice, &bob, 120),
        (&bob, &carol, 300),
        (&carol, &bridge_a, 100),
        (&alice, &bridge_b, 380),
        (&bridge_a, &bridge_b, 75),
        (&carol, &alice, 200),
    ];

    for (from, to, amount) in steps {
        app.execute_contract(
            from.clone(),
            contract_addr.clone(),
            &transfer(from, to, amount),
            &[],
        )
        .unwrap();
        assert_supply_matches_balances(&app, &contract_addr);
    }

    assert_eq!(balance(&app, &contract_addr, &alice), Uint128::new(200));
    assert_eq!(balance(&app, &contract_addr, &bob), Uint128::new(70));
    assert_eq!(balance(&app, &contract_addr, &carol), Uint128::zero());
    assert_eq!(balance(&app, &contract_addr, &bridge_a), Uint128::zero());
    assert_eq!(balance(&app, &contract_addr, &bridge_b), Uint128::zero());
    assert_eq!(total_supply(&app, &contract_addr), Uint128::new(270));
}
