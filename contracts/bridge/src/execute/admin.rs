//! Admin operations handlers.
//!
//! This module handles:
//! - Pausing either API surface
//! - Custody funds: deposit, withdraw, mint, burn, fees, excess funds
//! - Contract deletion

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, Storage, Uint128};

use common::Cw20Token;

use crate::access_control::{require_any_role, require_role, Role};
use crate::error::ContractError;
use crate::pause::{effective_pause_block, ensure_not_paused, roles_allowed_to_set, Surface};
use crate::state::BridgeState;

// ============================================================================
// Pausing
// ============================================================================

/// Move the pause point of `surface` to `max(block_number, current block)`.
pub fn execute_pause(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    surface: Surface,
    block_number: u64,
) -> Result<Response, ContractError> {
    let since_block = effective_pause_block(block_number, env.block.height);
    require_any_role(
        deps.storage,
        roles_allowed_to_set(since_block, state.paused_since(surface)),
        &info.sender,
    )?;

    state.set_paused_since(surface, since_block);

    Ok(Response::new()
        .add_attribute("action", surface.action())
        .add_attribute("since_block", since_block.to_string()))
}

// ============================================================================
// Custody Funds
// ============================================================================

/// Pull `amount` from the admin into custody.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let response = apply_deposit(deps.storage, &env, state, &info.sender, amount)?;
    let pull = Cw20Token::new(state.token.clone()).transfer_from(
        &info.sender,
        &env.contract.address,
        amount,
    )?;
    Ok(response.add_message(pull))
}

pub(crate) fn apply_deposit(
    storage: &dyn Storage,
    env: &Env,
    state: &mut BridgeState,
    from: &Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(state.paused_since(Surface::PublicApi), env.block.height)?;
    require_role(storage, Role::Admin, from)?;
    ensure_positive(amount)?;
    state.increase_supply(amount)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("from", from)
        .add_attribute("amount", amount))
}

pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    state: &mut BridgeState,
    target: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;
    ensure_positive(amount)?;
    let target = deps.api.addr_validate(&target)?;

    state.decrease_supply(amount)?;

    Ok(Response::new()
        .add_message(Cw20Token::new(state.token.clone()).transfer(&target, amount)?)
        .add_attribute("action", "withdraw")
        .add_attribute("target", &target)
        .add_attribute("amount", amount))
}

/// Mint `amount` into custody. The ledger must be the token's minter.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    amount: Uint128,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;
    ensure_positive(amount)?;

    state.increase_supply(amount)?;

    Ok(Response::new()
        .add_message(Cw20Token::new(state.token.clone()).mint(&env.contract.address, amount)?)
        .add_attribute("action", "mint")
        .add_attribute("amount", amount))
}

/// Burn `amount` out of custody.
pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    state: &mut BridgeState,
    amount: Uint128,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;
    ensure_positive(amount)?;

    state.decrease_supply(amount)?;

    Ok(Response::new()
        .add_message(Cw20Token::new(state.token.clone()).burn(amount)?)
        .add_attribute("action", "burn")
        .add_attribute("amount", amount))
}

pub fn execute_withdraw_fees(
    deps: DepsMut,
    info: MessageInfo,
    state: &mut BridgeState,
    target: String,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;
    let target = deps.api.addr_validate(&target)?;

    let amount = state.fees_accrued;
    if amount.is_zero() {
        return Err(ContractError::invalid_amount("no fees accrued"));
    }
    state.fees_accrued = Uint128::zero();

    Ok(Response::new()
        .add_message(Cw20Token::new(state.token.clone()).transfer(&target, amount)?)
        .add_attribute("action", "fees_withdrawal")
        .add_attribute("target", &target)
        .add_attribute("amount", amount))
}

/// Pay out the balance held beyond `supply + fees_accrued`.
pub fn execute_withdraw_excess_funds(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    target: String,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;
    let target = deps.api.addr_validate(&target)?;

    let token = Cw20Token::new(state.token.clone());
    let balance = token.balance(&deps.querier, &env.contract.address)?;
    let amount = balance.saturating_sub(state.accounted()?);
    if amount.is_zero() {
        return Err(ContractError::invalid_amount("no excess funds"));
    }

    Ok(Response::new()
        .add_message(token.transfer(&target, amount)?)
        .add_attribute("action", "excess_funds_withdrawal")
        .add_attribute("target", &target)
        .add_attribute("amount", amount))
}

// ============================================================================
// Deletion
// ============================================================================

/// Sweep the custody balance to `target` and freeze the ledger.
pub fn execute_delete_contract(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    target: String,
) -> Result<Response, ContractError> {
    require_role(deps.storage, Role::Admin, &info.sender)?;
    if env.block.height < state.earliest_delete {
        return Err(ContractError::ProtectionPeriodNotElapsed {
            earliest_delete: state.earliest_delete,
        });
    }
    let target = deps.api.addr_validate(&target)?;

    let token = Cw20Token::new(state.token.clone());
    let balance = token.balance(&deps.querier, &env.contract.address)?;

    state.supply = Uint128::zero();
    state.fees_accrued = Uint128::zero();
    state.deleted = true;

    let mut response = Response::new();
    if !balance.is_zero() {
        response = response.add_message(token.transfer(&target, balance)?);
    }
    Ok(response
        .add_attribute("action", "delete_contract")
        .add_attribute("target", &target)
        .add_attribute("amount", balance))
}

fn ensure_positive(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::invalid_amount("amount must be positive"));
    }
    Ok(())
}
