//! Shared cw-multi-test fixture: a cw20-base token and a ledger wired to it.

#![allow(dead_code)]

use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use bridge_ledger::limits::{ReverseSwapLimits, SwapLimits};
use bridge_ledger::msg::{
    AmountResponse, ExecuteMsg, InstantiateMsg, QueryMsg, RoleGrant,
};
use bridge_ledger::state::BridgeState;
use bridge_ledger::Role;

pub const E18: u128 = 1_000_000_000_000_000_000;
pub const CAP: u128 = 1000 * E18;
pub const SWAP_MAX: u128 = 101 * E18;
pub const SWAP_MIN: u128 = 11 * E18;
pub const REVERSE_FEE: u128 = 2 * E18;
pub const ALLOWANCE: u128 = 500 * E18;
pub const APPROVER_CAP: u128 = 200 * E18;
pub const DELETE_PROTECTION_PERIOD: u64 = 100;
pub const INITIAL_BALANCE: u128 = 10_000 * E18;
pub const DESTINATION: &str = "0x7fbb4f8d9d24e5e4a8bbbf48c40b1e5b5a5e1c7b";

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge_ledger::contract::execute,
        bridge_ledger::contract::instantiate,
        bridge_ledger::contract::query,
    )
    .with_migrate(bridge_ledger::contract::migrate);
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub struct Suite {
    pub app: App,
    pub bridge: Addr,
    pub token: Addr,
    pub admin: Addr,
    pub relayer: Addr,
    pub approver: Addr,
    pub monitor: Addr,
    pub delegate: Addr,
    pub user: Addr,
    pub other: Addr,
}

pub fn default_instantiate_msg(token: &Addr, suite_roles: &[(Role, &Addr)]) -> InstantiateMsg {
    InstantiateMsg {
        token: token.to_string(),
        cap: Uint128::new(CAP),
        swap_limits: SwapLimits {
            min: Uint128::new(SWAP_MIN),
            max: Uint128::new(SWAP_MAX),
        },
        reverse_swap_limits: ReverseSwapLimits {
            min: Uint128::new(SWAP_MIN),
            max: Uint128::new(SWAP_MAX),
            fee: Uint128::new(REVERSE_FEE),
        },
        reverse_aggregated_allowance: Uint128::new(ALLOWANCE),
        reverse_aggregated_allowance_approver_cap: Uint128::new(APPROVER_CAP),
        paused_since_block_public_api: None,
        paused_since_block_relayer_api: None,
        delete_protection_period: DELETE_PROTECTION_PERIOD,
        next_swap_id: None,
        roles: suite_roles
            .iter()
            .map(|(role, addr)| RoleGrant {
                role: *role,
                address: addr.to_string(),
            })
            .collect(),
    }
}

pub fn setup() -> Suite {
    setup_with(|_| {})
}

/// Build the fixture, letting the caller adjust the ledger's instantiate message.
pub fn setup_with(customize: impl FnOnce(&mut InstantiateMsg)) -> Suite {
    let mut app = App::default();

    let admin = Addr::unchecked("terra1admin");
    let relayer = Addr::unchecked("terra1relayer");
    let approver = Addr::unchecked("terra1approver");
    let monitor = Addr::unchecked("terra1monitor");
    let delegate = Addr::unchecked("terra1delegate");
    let user = Addr::unchecked("terra1user");
    let other = Addr::unchecked("terra1other");

    let cw20_code_id = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code_id,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Bridged Token".to_string(),
                symbol: "BRDG".to_string(),
                decimals: 18,
                initial_balances: vec![
                    Cw20Coin {
                        address: admin.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                    Cw20Coin {
                        address: user.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                ],
                mint: Some(MinterResponse {
                    minter: admin.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "bridged-token",
            None,
        )
        .unwrap();

    let mut msg = default_instantiate_msg(
        &token,
        &[
            (Role::Relayer, &relayer),
            (Role::Approver, &approver),
            (Role::Monitor, &monitor),
            (Role::Delegate, &delegate),
        ],
    );
    customize(&mut msg);

    let bridge_code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code_id,
            admin.clone(),
            &msg,
            &[],
            "bridge-ledger",
            Some(admin.to_string()),
        )
        .unwrap();

    // The ledger mints into its own custody
    app.execute_contract(
        admin.clone(),
        token.clone(),
        &Cw20ExecuteMsg::UpdateMinter {
            new_minter: Some(bridge.to_string()),
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        bridge,
        token,
        admin,
        relayer,
        approver,
        monitor,
        delegate,
        user,
        other,
    }
}

impl Suite {
    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, &[])
    }

    pub fn approve(&mut self, owner: &Addr, amount: u128) {
        self.app
            .execute_contract(
                owner.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.bridge.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Approve and swap `amount` from `from`.
    pub fn swap(&mut self, from: &Addr, amount: u128) -> anyhow::Result<AppResponse> {
        self.approve(from, amount);
        self.execute(
            from,
            &ExecuteMsg::Swap {
                amount: Uint128::new(amount),
                destination: DESTINATION.to_string(),
            },
        )
    }

    pub fn deposit(&mut self, amount: u128) -> anyhow::Result<AppResponse> {
        let admin = self.admin.clone();
        self.approve(&admin, amount);
        self.execute(
            &admin,
            &ExecuteMsg::Deposit {
                amount: Uint128::new(amount),
            },
        )
    }

    pub fn refund(&mut self, id: u64, to: &Addr, amount: u128) -> anyhow::Result<AppResponse> {
        let relayer = self.relayer.clone();
        let relay_eon = self.state().relay_eon;
        self.execute(
            &relayer,
            &ExecuteMsg::Refund {
                id,
                to: to.to_string(),
                amount: Uint128::new(amount),
                relay_eon,
            },
        )
    }

    pub fn reverse_swap(&mut self, rid: u64, to: &Addr, amount: u128) -> anyhow::Result<AppResponse> {
        let relayer = self.relayer.clone();
        let relay_eon = self.state().relay_eon;
        self.execute(
            &relayer,
            &ExecuteMsg::ReverseSwap {
                rid,
                to: to.to_string(),
                origin_from: DESTINATION.to_string(),
                origin_tx_hash: "0xabc123".to_string(),
                amount: Uint128::new(amount),
                relay_eon,
            },
        )
    }

    /// Transfer tokens to the ledger directly, bypassing its bookkeeping.
    pub fn send_direct(&mut self, from: &Addr, amount: u128) {
        self.app
            .execute_contract(
                from.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: self.bridge.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
    }

    pub fn state(&self) -> BridgeState {
        self.app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::State {})
            .unwrap()
    }

    pub fn query_amount(&self, msg: &QueryMsg) -> Uint128 {
        let res: AmountResponse = self.app.wrap().query_wasm_smart(&self.bridge, msg).unwrap();
        res.amount
    }

    pub fn balance(&self, account: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn height(&self) -> u64 {
        self.app.block_info().height
    }

    pub fn advance_blocks(&mut self, blocks: u64) {
        self.app.update_block(|block| {
            block.height += blocks;
            block.time = block.time.plus_seconds(5 * blocks);
        });
    }

    /// Custody invariant: the token balance covers supply plus fees.
    pub fn assert_solvent(&self) {
        let state = self.state();
        let balance = self.balance(&self.bridge);
        assert!(
            balance >= state.supply + state.fees_accrued,
            "balance {} < supply {} + fees {}",
            balance,
            state.supply,
            state.fees_accrued
        );
    }
}

/// Value of `key` on the ledger's `wasm` event whose action is `action`.
pub fn wasm_attr(res: &AppResponse, action: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|event| event.ty == "wasm")
        .find(|event| {
            event
                .attributes
                .iter()
                .any(|attr| attr.key == "action" && attr.value == action)
        })
        .and_then(|event| {
            event
                .attributes
                .iter()
                .find(|attr| attr.key == key)
                .map(|attr| attr.value.clone())
        })
}

pub fn err_string(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}
