//! Integration tests for the multisig coordinator using cw-multi-test.

use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use multisig_coordinator::msg::{
    CommitteeIndexResponse, CommitteeMemberResponse, CoordinationNonceResponse,
    CoordinationSetupResponse, ExecuteMsg, InstantiateMsg, QueryMsg, SigningStateResponse,
};
use multisig_coordinator::ContractError;

const THRESHOLD: u32 = 4;
const TIMEOUT: u64 = 10;
const ACTION: &str = "xyz test action";
const ACTION_DATA: &str = r#"{"a_key": "a value"}"#;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_multisig() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        multisig_coordinator::contract::execute,
        multisig_coordinator::contract::instantiate,
        multisig_coordinator::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr, Vec<Addr>) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let signatories: Vec<Addr> = (1..=4)
        .map(|i| Addr::unchecked(format!("terra1signatory{}", i)))
        .collect();

    let code_id = app.store_code(contract_multisig());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                committee: signatories.iter().map(Addr::to_string).collect(),
                threshold: THRESHOLD,
                timeout_blocks: TIMEOUT,
            },
            &[],
            "multisig-coordinator",
            Some(owner.to_string()),
        )
        .unwrap();

    (app, contract_addr, signatories)
}

fn propose(
    app: &mut App,
    contract: &Addr,
    sender: &Addr,
    expected_nonce: u64,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        sender.clone(),
        contract.clone(),
        &ExecuteMsg::Propose {
            expected_nonce,
            action: ACTION.to_string(),
            action_data: ACTION_DATA.to_string(),
            signature: format!("sig-{}", sender),
        },
        &[],
    )
}

fn sign(app: &mut App, contract: &Addr, sender: &Addr, nonce: u64) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        sender.clone(),
        contract.clone(),
        &ExecuteMsg::Sign {
            nonce,
            signature: format!("sig-{}", sender),
        },
        &[],
    )
}

fn signing_state(app: &App, contract: &Addr) -> SigningStateResponse {
    app.wrap()
        .query_wasm_smart(contract, &QueryMsg::SigningState {})
        .unwrap()
}

fn coordination_nonce(app: &App, contract: &Addr) -> u64 {
    let res: CoordinationNonceResponse = app
        .wrap()
        .query_wasm_smart(contract, &QueryMsg::CoordinationNonce {})
        .unwrap();
    res.nonce
}

fn err_string(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_initiation() {
    let (app, contract, signatories) = setup();

    let setup: CoordinationSetupResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::CoordinationSetup {})
        .unwrap();
    assert_eq!(setup.next_coordination_nonce, 1);
    assert_eq!(setup.threshold, THRESHOLD);
    assert_eq!(setup.timeout_blocks, TIMEOUT);
    assert_eq!(setup.committee, signatories);

    for (position, member) in signatories.iter().enumerate() {
        let index: CommitteeIndexResponse = app
            .wrap()
            .query_wasm_smart(
                &contract,
                &QueryMsg::CommitteeIndex {
                    address: member.to_string(),
                },
            )
            .unwrap();
        assert_eq!(index.index, position as u32 + 1);

        let by_index: CommitteeMemberResponse = app
            .wrap()
            .query_wasm_smart(
                &contract,
                &QueryMsg::CommitteeMember {
                    index: index.index - 1,
                },
            )
            .unwrap();
        assert_eq!(&by_index.member, member);
    }

    let outsider: CommitteeIndexResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::CommitteeIndex {
                address: "terra1outsider".to_string(),
            },
        )
        .unwrap();
    assert_eq!(outsider.index, 0);
}

#[test]
fn test_propose_opens_round() {
    let (mut app, contract, signatories) = setup();
    let current_nonce = coordination_nonce(&app, &contract);
    let expected_expiry = app.block_info().height + TIMEOUT + 1;

    let res = propose(&mut app, &contract, &signatories[0], current_nonce).unwrap();
    let wasm = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    assert!(wasm
        .attributes
        .iter()
        .any(|a| a.key == "action" && a.value == "propose"));

    let state = signing_state(&app, &contract);
    assert_eq!(state.coordination_nonce, current_nonce + 1);
    assert_eq!(state.action, ACTION);
    assert_eq!(state.action_data, ACTION_DATA);
    assert_eq!(state.expired_since_block, expected_expiry);
    assert_eq!(state.signees, vec![signatories[0].clone()]);
    assert_eq!(
        state.signatures,
        vec![format!("sig-{}", signatories[0])]
    );
    assert!(!state.threshold_reached);
    assert!(!state.expired);
}

#[test]
fn test_full_committee_signs_exactly_once() {
    let (mut app, contract, signatories) = setup();

    propose(&mut app, &contract, &signatories[0], 0).unwrap();
    let nonce = coordination_nonce(&app, &contract);

    for signee in &signatories[1..] {
        sign(&mut app, &contract, signee, nonce).unwrap();
    }

    let state = signing_state(&app, &contract);
    assert_eq!(state.signees, signatories);
    assert_eq!(state.signatures.len(), 4);
    assert!(state.threshold_reached);

    for signee in &signatories {
        assert_eq!(
            err_string(sign(&mut app, &contract, signee, nonce)),
            ContractError::AlreadySigned { nonce }.to_string()
        );
    }
    assert_eq!(signing_state(&app, &contract).signatures.len(), 4);
}

#[test]
fn test_repropose_before_expiry_fails() {
    let (mut app, contract, signatories) = setup();

    propose(&mut app, &contract, &signatories[0], 0).unwrap();
    sign(&mut app, &contract, &signatories[1], 1).unwrap();
    let expired_since_block = signing_state(&app, &contract).expired_since_block;

    app.update_block(|block| block.height += TIMEOUT);
    assert_eq!(
        err_string(propose(&mut app, &contract, &signatories[2], 0)),
        ContractError::NotYetExpired {
            expired_since_block
        }
        .to_string()
    );

    app.update_block(|block| block.height += 1);
    propose(&mut app, &contract, &signatories[2], 0).unwrap();

    let state = signing_state(&app, &contract);
    assert_eq!(state.coordination_nonce, 2);
    assert_eq!(state.signees, vec![signatories[2].clone()]);
    assert_eq!(state.signatures.len(), 1);
}

#[test]
fn test_non_member_rejected() {
    let (mut app, contract, signatories) = setup();
    let outsider = Addr::unchecked("terra1outsider");

    assert_eq!(
        err_string(propose(&mut app, &contract, &outsider, 0)),
        ContractError::Unauthorized.to_string()
    );

    propose(&mut app, &contract, &signatories[0], 0).unwrap();
    assert_eq!(
        err_string(sign(&mut app, &contract, &outsider, 1)),
        ContractError::Unauthorized.to_string()
    );
}

#[test]
fn test_empty_action_rejected() {
    let (mut app, contract, signatories) = setup();

    let res = app.execute_contract(
        signatories[0].clone(),
        contract.clone(),
        &ExecuteMsg::Propose {
            expected_nonce: 0,
            action: String::new(),
            action_data: ACTION_DATA.to_string(),
            signature: "sig".to_string(),
        },
        &[],
    );
    assert_eq!(err_string(res), ContractError::EmptyAction.to_string());
    assert_eq!(coordination_nonce(&app, &contract), 0);
}

#[test]
fn test_nonce_checks() {
    let (mut app, contract, signatories) = setup();

    assert_eq!(
        err_string(propose(&mut app, &contract, &signatories[0], 1)),
        ContractError::InvalidNonce { current: 0, got: 1 }.to_string()
    );

    propose(&mut app, &contract, &signatories[0], 0).unwrap();
    assert_eq!(
        err_string(sign(&mut app, &contract, &signatories[1], 0)),
        ContractError::InvalidNonce { current: 1, got: 0 }.to_string()
    );
}

#[test]
fn test_sign_after_expiry_rejected() {
    let (mut app, contract, signatories) = setup();

    propose(&mut app, &contract, &signatories[0], 0).unwrap();
    let expired_since_block = signing_state(&app, &contract).expired_since_block;
    app.update_block(|block| block.height += TIMEOUT + 1);

    assert_eq!(
        err_string(sign(&mut app, &contract, &signatories[1], 1)),
        ContractError::RoundExpired {
            expired_since_block
        }
        .to_string()
    );
    assert!(signing_state(&app, &contract).expired);
}
