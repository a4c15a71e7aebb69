//! Configuration handlers: cap, limits, reverse allowance and roles.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::access_control::{grant_role, require_any_role, require_role, revoke_role, Role};
use crate::allowance;
use crate::error::ContractError;
use crate::limits::{ReverseSwapLimits, SwapLimits};
use crate::state::BridgeState;

// ============================================================================
// Cap & Limits
// ============================================================================

/// Takes effect immediately. A supply already above the new cap is kept but
/// cannot grow.
pub fn execute_set_cap(
    deps: DepsMut,
    info: MessageInfo,
    state: &mut BridgeState,
    cap: Uint128,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;

    state.cap = cap;

    Ok(Response::new()
        .add_attribute("action", "cap_update")
        .add_attribute("cap", cap))
}

pub fn execute_set_swap_limits(
    deps: DepsMut,
    info: MessageInfo,
    state: &mut BridgeState,
    min: Uint128,
    max: Uint128,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;

    let limits = SwapLimits { min, max };
    limits.validate()?;
    state.swap_limits = limits;

    Ok(Response::new()
        .add_attribute("action", "swap_limits_update")
        .add_attribute("min", min)
        .add_attribute("max", max))
}

pub fn execute_set_reverse_swap_limits(
    deps: DepsMut,
    info: MessageInfo,
    state: &mut BridgeState,
    min: Uint128,
    max: Uint128,
    fee: Uint128,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;

    let limits = ReverseSwapLimits { min, max, fee };
    limits.validate()?;
    state.reverse_swap_limits = limits;

    Ok(Response::new()
        .add_attribute("action", "reverse_swap_limits_update")
        .add_attribute("min", min)
        .add_attribute("max", max)
        .add_attribute("fee", fee))
}

// ============================================================================
// Reverse Aggregated Allowance
// ============================================================================

pub fn execute_set_reverse_aggregated_allowance(
    deps: DepsMut,
    info: MessageInfo,
    state: &mut BridgeState,
    amount: Uint128,
) -> Result<Response, ContractError> {
    require_any_role(
        deps.storage,
        allowance::roles_allowed_to_set(amount, state.reverse_aggregated_allowance_approver_cap),
        &info.sender,
    )?;

    state.reverse_aggregated_allowance = amount;

    Ok(Response::new()
        .add_attribute("action", "reverse_aggregated_allowance_update")
        .add_attribute("amount", amount))
}

pub fn execute_set_reverse_aggregated_allowance_approver_cap(
    deps: DepsMut,
    info: MessageInfo,
    state: &mut BridgeState,
    amount: Uint128,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;

    state.reverse_aggregated_allowance_approver_cap = amount;

    Ok(Response::new()
        .add_attribute("action", "reverse_aggregated_allowance_approver_cap_update")
        .add_attribute("amount", amount))
}

// ============================================================================
// Roles
// ============================================================================

pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;
    let address = deps.api.addr_validate(&address)?;

    grant_role(deps.storage, role, &address)?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", &address))
}

pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;
    let address = deps.api.addr_validate(&address)?;

    revoke_role(deps.storage, role, &address)?;

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", &address))
}

pub fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
) -> Result<Response, ContractError> {
    revoke_role(deps.storage, role, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "renounce_role")
        .add_attribute("role", role.as_str())
        .add_attribute("address", &info.sender))
}
