//! Public API handlers.

use cosmwasm_std::{from_json, Addr, DepsMut, Env, MessageInfo, Response, StdError, Uint128};
use cw20::Cw20ReceiveMsg;

use common::Cw20Token;

use super::admin::apply_deposit;
use crate::error::ContractError;
use crate::hash::indexed_key;
use crate::msg::ReceiveMsg;
use crate::pause::{ensure_not_paused, Surface};
use crate::state::BridgeState;

/// Swap tokens the caller approved the ledger to pull.
pub fn execute_swap(
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    amount: Uint128,
    destination: String,
) -> Result<Response, ContractError> {
    let response = apply_swap(&env, state, &info.sender, amount, &destination)?;
    let pull = Cw20Token::new(state.token.clone()).transfer_from(
        &info.sender,
        &env.contract.address,
        amount,
    )?;
    Ok(response.add_message(pull))
}

/// CW20 `Send` hook. The tokens have already been credited to the ledger.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    if info.sender != state.token {
        return Err(ContractError::UnrecognizedToken {
            token: info.sender.to_string(),
        });
    }

    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    match from_json(&cw20_msg.msg)? {
        ReceiveMsg::Swap { destination } => {
            apply_swap(&env, state, &sender, cw20_msg.amount, &destination)
        }
        ReceiveMsg::Deposit {} => apply_deposit(deps.storage, &env, state, &sender, cw20_msg.amount),
    }
}

/// Bookkeeping for a forward swap. Token movement is left to the caller.
fn apply_swap(
    env: &Env,
    state: &mut BridgeState,
    from: &Addr,
    amount: Uint128,
    destination: &str,
) -> Result<Response, ContractError> {
    ensure_not_paused(state.paused_since(Surface::PublicApi), env.block.height)?;

    if amount.is_zero() {
        return Err(ContractError::invalid_amount("swap amount must be positive"));
    }
    if destination.trim().is_empty() {
        return Err(ContractError::InvalidRemoteAddress {
            reason: "destination must not be empty".to_string(),
        });
    }
    state.swap_limits.check(amount)?;
    state.increase_supply(amount)?;

    let swap_id = state.next_swap_id;
    state.next_swap_id = swap_id
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("swap id sequence exhausted"))?;

    Ok(Response::new()
        .add_attribute("action", "swap")
        .add_attribute("swap_id", swap_id.to_string())
        .add_attribute("from", from)
        .add_attribute("to", destination)
        .add_attribute("indexed_to", indexed_key(destination))
        .add_attribute("amount", amount))
}
