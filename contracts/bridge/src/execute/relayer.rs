//! Relayer API handlers.
//!
//! Preconditions run in a fixed order: relayer pause, relayer role, relay eon,
//! then the operation's own checks. All bookkeeping is written to `state`
//! before the payout message is attached.

use cosmwasm_std::{Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Storage, Uint128};

use common::Cw20Token;

use crate::access_control::{require_role, Role};
use crate::allowance;
use crate::eon::{ensure_current_eon, next_relay_eon};
use crate::error::ContractError;
use crate::hash::indexed_key;
use crate::pause::{ensure_not_paused, Surface};
use crate::state::{BridgeState, REFUNDS};

/// Whether a refund charges the reverse swap fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefundFee {
    Charged,
    Waived,
}

/// Refund forward swap `id` to `to`.
#[allow(clippy::too_many_arguments)]
pub fn execute_refund(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    id: u64,
    to: String,
    amount: Uint128,
    relay_eon: u64,
    fee_mode: RefundFee,
) -> Result<Response, ContractError> {
    ensure_relayer_call(deps.storage, &env, &info, state, relay_eon)?;

    if id >= state.next_swap_id {
        return Err(ContractError::InvalidSwapId {
            id,
            next_swap_id: state.next_swap_id,
        });
    }
    if REFUNDS.has(deps.storage, id) {
        return Err(ContractError::AlreadyRefunded { id });
    }

    let to = deps.api.addr_validate(&to)?;
    let fee = match fee_mode {
        RefundFee::Charged => state.reverse_swap_limits.fee_for(amount),
        RefundFee::Waived => Uint128::zero(),
    };
    let refunded_amount = settle_reverse(state, amount, fee)?;
    REFUNDS.save(deps.storage, id, &amount)?;

    Ok(Response::new()
        .add_messages(payout(state, &to, refunded_amount)?)
        .add_attribute("action", "swap_refund")
        .add_attribute("swap_id", id.to_string())
        .add_attribute("to", &to)
        .add_attribute("refunded_amount", refunded_amount)
        .add_attribute("fee", fee))
}

/// Credit `to` with value that left the remote chain in `origin_tx_hash`.
#[allow(clippy::too_many_arguments)]
pub fn execute_reverse_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    rid: u64,
    to: String,
    origin_from: String,
    origin_tx_hash: String,
    amount: Uint128,
    relay_eon: u64,
) -> Result<Response, ContractError> {
    ensure_relayer_call(deps.storage, &env, &info, state, relay_eon)?;

    let to = deps.api.addr_validate(&to)?;
    let fee = state.reverse_swap_limits.fee_for(amount);
    let effective_amount = settle_reverse(state, amount, fee)?;

    Ok(Response::new()
        .add_messages(payout(state, &to, effective_amount)?)
        .add_attribute("action", "reverse_swap")
        .add_attribute("rid", rid.to_string())
        .add_attribute("to", &to)
        .add_attribute("from", &origin_from)
        .add_attribute("indexed_from", indexed_key(&origin_from))
        .add_attribute("origin_tx_hash", origin_tx_hash)
        .add_attribute("effective_amount", effective_amount)
        .add_attribute("fee", fee))
}

pub fn execute_new_relay_eon(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
) -> Result<Response, ContractError> {
    ensure_not_paused(state.paused_since(Surface::RelayerApi), env.block.height)?;
    require_role(deps.storage, Role::Relayer, &info.sender)?;

    state.relay_eon = next_relay_eon(state.relay_eon);

    Ok(Response::new()
        .add_attribute("action", "new_relay_eon")
        .add_attribute("eon", state.relay_eon.to_string()))
}

// ============================================================================
// Helpers
// ============================================================================

fn ensure_relayer_call(
    storage: &dyn Storage,
    env: &Env,
    info: &MessageInfo,
    state: &BridgeState,
    relay_eon: u64,
) -> Result<(), ContractError> {
    ensure_not_paused(state.paused_since(Surface::RelayerApi), env.block.height)?;
    require_role(storage, Role::Relayer, &info.sender)?;
    ensure_current_eon(state.relay_eon, relay_eon)
}

/// Shared accounting for refunds and reverse swaps. Consumes `amount` from
/// the allowance and supply, books `fee`, and returns the payout.
fn settle_reverse(
    state: &mut BridgeState,
    amount: Uint128,
    fee: Uint128,
) -> Result<Uint128, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::invalid_amount("amount must be positive"));
    }
    state.reverse_swap_limits.check(amount)?;

    let remaining_allowance = allowance::consume(state.reverse_aggregated_allowance, amount)?;
    state.decrease_supply(amount)?;
    state.reverse_aggregated_allowance = remaining_allowance;
    state.fees_accrued = state.fees_accrued.checked_add(fee)?;

    Ok(amount.checked_sub(fee)?)
}

fn payout(
    state: &BridgeState,
    to: &Addr,
    amount: Uint128,
) -> Result<Vec<CosmosMsg>, ContractError> {
    if amount.is_zero() {
        return Ok(vec![]);
    }
    Ok(vec![Cw20Token::new(state.token.clone()).transfer(to, amount)?])
}
