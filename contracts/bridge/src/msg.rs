//! Message types for the bridge ledger contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::access_control::Role;
use crate::limits::{ReverseSwapLimits, SwapLimits};
use crate::state::BridgeState;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Initial role assignment
#[cw_serde]
pub struct RoleGrant {
    pub role: Role,
    pub address: String,
}

/// Instantiate message. The sender becomes the first admin.
#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 token contract held in custody
    pub token: String,
    pub cap: Uint128,
    pub swap_limits: SwapLimits,
    pub reverse_swap_limits: ReverseSwapLimits,
    pub reverse_aggregated_allowance: Uint128,
    pub reverse_aggregated_allowance_approver_cap: Uint128,
    /// Defaults to never paused
    pub paused_since_block_public_api: Option<u64>,
    /// Defaults to never paused
    pub paused_since_block_relayer_api: Option<u64>,
    /// Blocks after deployment before `DeleteContract` is allowed
    pub delete_protection_period: u64,
    /// First swap id; lets a redeployment continue an existing sequence
    pub next_swap_id: Option<u64>,
    /// Additional role wallets
    pub roles: Vec<RoleGrant>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Public API
    // ========================================================================
    /// Move `amount` into custody for delivery to `destination` on the remote
    /// chain. The caller must have approved the ledger on the token contract.
    Swap { amount: Uint128, destination: String },

    /// CW20 receiver hook, see `ReceiveMsg`
    Receive(cw20::Cw20ReceiveMsg),

    // ========================================================================
    // Relayer API
    // ========================================================================
    /// Reverse forward swap `id`, charging the reverse swap fee
    Refund {
        id: u64,
        to: String,
        amount: Uint128,
        relay_eon: u64,
    },

    /// Reverse forward swap `id` without a fee
    RefundInFull {
        id: u64,
        to: String,
        amount: Uint128,
        relay_eon: u64,
    },

    /// Credit value that originated from remote transaction `origin_tx_hash`
    ReverseSwap {
        rid: u64,
        to: String,
        origin_from: String,
        origin_tx_hash: String,
        amount: Uint128,
        relay_eon: u64,
    },

    /// Rotate the relay eon
    NewRelayEon {},

    // ========================================================================
    // Pausing (admin or monitor; admin only for future blocks)
    // ========================================================================
    PausePublicApiSince { block_number: u64 },
    PauseRelayerApiSince { block_number: u64 },

    // ========================================================================
    // Funds (admin)
    // ========================================================================
    Deposit { amount: Uint128 },
    Withdraw { target: String, amount: Uint128 },
    Mint { amount: Uint128 },
    Burn { amount: Uint128 },
    WithdrawFees { target: String },
    WithdrawExcessFunds { target: String },
    /// Sweep the whole custody balance to `target` and freeze the contract
    DeleteContract { target: String },

    // ========================================================================
    // Configuration
    // ========================================================================
    SetCap { cap: Uint128 },
    SetSwapLimits { min: Uint128, max: Uint128 },
    SetReverseSwapLimits {
        min: Uint128,
        max: Uint128,
        fee: Uint128,
    },
    /// Admin, or approver up to the approver cap
    SetReverseAggregatedAllowance { amount: Uint128 },
    SetReverseAggregatedAllowanceApproverCap { amount: Uint128 },

    // ========================================================================
    // Access Control
    // ========================================================================
    GrantRole { role: Role, address: String },
    RevokeRole { role: Role, address: String },
    /// Caller drops one of its own roles
    RenounceRole { role: Role },
}

/// Inner message of a CW20 `Send` to the ledger
#[cw_serde]
pub enum ReceiveMsg {
    /// Same as `ExecuteMsg::Swap`, with the CW20 sender as the swapper
    Swap { destination: String },
    /// Same as `ExecuteMsg::Deposit`, with the CW20 sender as the depositor
    Deposit {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Static parameters and lifecycle bounds
    #[returns(ConfigResponse)]
    Config {},

    /// Full ledger aggregate
    #[returns(BridgeState)]
    State {},

    #[returns(AmountResponse)]
    Supply {},

    #[returns(AmountResponse)]
    FeesAccrued {},

    #[returns(AmountResponse)]
    Cap {},

    #[returns(NextSwapIdResponse)]
    NextSwapId {},

    #[returns(RelayEonResponse)]
    RelayEon {},

    /// Amount refunded for forward swap `id`, zero if none
    #[returns(RefundedResponse)]
    Refunded { id: u64 },

    #[returns(SwapLimits)]
    SwapLimits {},

    #[returns(ReverseSwapLimits)]
    ReverseSwapLimits {},

    #[returns(AmountResponse)]
    ReverseAggregatedAllowance {},

    #[returns(AmountResponse)]
    ReverseAggregatedAllowanceApproverCap {},

    /// Pause points of both surfaces and whether they are active now
    #[returns(PausedSinceBlockResponse)]
    PausedSinceBlock {},

    #[returns(HasRoleResponse)]
    HasRole { role: Role, address: String },

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Token balance held beyond `supply + fees_accrued`
    #[returns(ExcessFundsResponse)]
    ExcessFunds {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub cap: Uint128,
    pub swap_limits: SwapLimits,
    pub reverse_swap_limits: ReverseSwapLimits,
    pub reverse_aggregated_allowance_approver_cap: Uint128,
    pub deployment_block_number: u64,
    pub delete_protection_period: u64,
    pub earliest_delete: u64,
    pub deleted: bool,
}

#[cw_serde]
pub struct AmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct NextSwapIdResponse {
    pub next_swap_id: u64,
}

#[cw_serde]
pub struct RelayEonResponse {
    pub eon: u64,
}

#[cw_serde]
pub struct RefundedResponse {
    pub id: u64,
    pub amount: Uint128,
}

#[cw_serde]
pub struct PausedSinceBlockResponse {
    pub public_api: u64,
    pub relayer_api: u64,
    pub public_api_paused: bool,
    pub relayer_api_paused: bool,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<Addr>,
}

#[cw_serde]
pub struct ExcessFundsResponse {
    pub balance: Uint128,
    pub supply: Uint128,
    pub fees_accrued: Uint128,
    pub excess: Uint128,
}
