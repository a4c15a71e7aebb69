//! Error types for the bridge ledger contract.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: requires role {required}")]
    Unauthorized { required: String },

    #[error("Role {role} already granted to {address}")]
    RoleAlreadyGranted { role: String, address: String },

    #[error("Role {role} not granted to {address}")]
    RoleNotGranted { role: String, address: String },

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Contract has been paused")]
    ContractPaused,

    #[error("Contract has been deleted")]
    ContractDeleted,

    #[error("Protection period not elapsed: deletion allowed from block {earliest_delete}")]
    ProtectionPeriodNotElapsed { earliest_delete: u64 },

    // ========================================================================
    // Limits & Amount Errors
    // ========================================================================

    #[error("Invalid limits: {reason}")]
    InvalidLimits { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Cap exceeded: supply {supply} + amount {amount} > cap {cap}")]
    CapExceeded {
        supply: Uint128,
        amount: Uint128,
        cap: Uint128,
    },

    #[error("Supply exceeded: amount {amount} > supply {supply}")]
    SupplyExceeded { amount: Uint128, supply: Uint128 },

    #[error("Reverse aggregated allowance exceeded: amount {amount} > allowance {allowance}")]
    AllowanceExceeded {
        amount: Uint128,
        allowance: Uint128,
    },

    // ========================================================================
    // Relay Errors
    // ========================================================================

    #[error("Swap {id} already refunded")]
    AlreadyRefunded { id: u64 },

    #[error("Invalid swap id {id}: next swap id is {next_swap_id}")]
    InvalidSwapId { id: u64, next_swap_id: u64 },

    #[error("Stale relay eon: current {current}, got {got}")]
    StaleRelayEon { current: u64, got: u64 },

    // ========================================================================
    // Token Errors
    // ========================================================================

    #[error("Unrecognized token: {token}")]
    UnrecognizedToken { token: String },

    #[error("Invalid remote address: {reason}")]
    InvalidRemoteAddress { reason: String },
}

impl ContractError {
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        ContractError::InvalidAmount {
            reason: reason.into(),
        }
    }

    pub fn invalid_limits(reason: impl Into<String>) -> Self {
        ContractError::InvalidLimits {
            reason: reason.into(),
        }
    }
}
