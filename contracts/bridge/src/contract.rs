//! Bridge Ledger Contract - Entry Points
//!
//! Handlers live in:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::access_control::{grant_role, Role};
use crate::eon::INITIAL_RELAY_EON;
use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_delete_contract, execute_deposit, execute_grant_role, execute_mint,
    execute_new_relay_eon, execute_pause, execute_receive, execute_refund,
    execute_renounce_role, execute_reverse_swap, execute_revoke_role, execute_set_cap,
    execute_set_reverse_aggregated_allowance,
    execute_set_reverse_aggregated_allowance_approver_cap, execute_set_reverse_swap_limits,
    execute_set_swap_limits, execute_swap, execute_withdraw, execute_withdraw_excess_funds,
    execute_withdraw_fees, RefundFee,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::pause::{effective_pause_block, Surface, NOT_PAUSED};
use crate::query::{
    query_amount, query_config, query_excess_funds, query_has_role, query_next_swap_id,
    query_paused_since_block, query_refunded, query_relay_eon, query_role_members, query_state,
};
use crate::state::{BridgeState, CONTRACT_NAME, CONTRACT_VERSION, STATE};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;
    msg.swap_limits.validate()?;
    msg.reverse_swap_limits.validate()?;

    let height = env.block.height;
    let state = BridgeState {
        token,
        supply: Uint128::zero(),
        fees_accrued: Uint128::zero(),
        cap: msg.cap,
        next_swap_id: msg.next_swap_id.unwrap_or_default(),
        relay_eon: INITIAL_RELAY_EON,
        reverse_aggregated_allowance: msg.reverse_aggregated_allowance,
        reverse_aggregated_allowance_approver_cap: msg.reverse_aggregated_allowance_approver_cap,
        swap_limits: msg.swap_limits,
        reverse_swap_limits: msg.reverse_swap_limits,
        paused_since_block_public_api: effective_pause_block(
            msg.paused_since_block_public_api.unwrap_or(NOT_PAUSED),
            height,
        ),
        paused_since_block_relayer_api: effective_pause_block(
            msg.paused_since_block_relayer_api.unwrap_or(NOT_PAUSED),
            height,
        ),
        deployment_block_number: height,
        delete_protection_period: msg.delete_protection_period,
        earliest_delete: height.saturating_add(msg.delete_protection_period),
        deleted: false,
    };
    STATE.save(deps.storage, &state)?;

    grant_role(deps.storage, Role::Admin, &info.sender)?;
    for grant in msg.roles {
        let address = deps.api.addr_validate(&grant.address)?;
        grant_role(deps.storage, grant.role, &address)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", info.sender)
        .add_attribute("token", state.token)
        .add_attribute(
            "paused_since_block_public_api",
            state.paused_since_block_public_api.to_string(),
        )
        .add_attribute(
            "paused_since_block_relayer_api",
            state.paused_since_block_relayer_api.to_string(),
        )
        .add_attribute("earliest_delete", state.earliest_delete.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let mut state = STATE.load(deps.storage)?;
    if state.deleted {
        return Err(ContractError::ContractDeleted);
    }

    let response = dispatch(deps.branch(), env, info, &mut state, msg)?;
    STATE.save(deps.storage, &state)?;
    Ok(response)
}

fn dispatch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    state: &mut BridgeState,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Public API
        ExecuteMsg::Swap {
            amount,
            destination,
        } => execute_swap(env, info, state, amount, destination),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, state, cw20_msg),

        // Relayer API
        ExecuteMsg::Refund {
            id,
            to,
            amount,
            relay_eon,
        } => execute_refund(
            deps,
            env,
            info,
            state,
            id,
            to,
            amount,
            relay_eon,
            RefundFee::Charged,
        ),
        ExecuteMsg::RefundInFull {
            id,
            to,
            amount,
            relay_eon,
        } => execute_refund(
            deps,
            env,
            info,
            state,
            id,
            to,
            amount,
            relay_eon,
            RefundFee::Waived,
        ),
        ExecuteMsg::ReverseSwap {
            rid,
            to,
            origin_from,
            origin_tx_hash,
            amount,
            relay_eon,
        } => execute_reverse_swap(
            deps,
            env,
            info,
            state,
            rid,
            to,
            origin_from,
            origin_tx_hash,
            amount,
            relay_eon,
        ),
        ExecuteMsg::NewRelayEon {} => execute_new_relay_eon(deps, env, info, state),

        // Pausing
        ExecuteMsg::PausePublicApiSince { block_number } => {
            execute_pause(deps, env, info, state, Surface::PublicApi, block_number)
        }
        ExecuteMsg::PauseRelayerApiSince { block_number } => {
            execute_pause(deps, env, info, state, Surface::RelayerApi, block_number)
        }

        // Funds
        ExecuteMsg::Deposit { amount } => execute_deposit(deps, env, info, state, amount),
        ExecuteMsg::Withdraw { target, amount } => {
            execute_withdraw(deps, info, state, target, amount)
        }
        ExecuteMsg::Mint { amount } => execute_mint(deps, env, info, state, amount),
        ExecuteMsg::Burn { amount } => execute_burn(deps, info, state, amount),
        ExecuteMsg::WithdrawFees { target } => execute_withdraw_fees(deps, info, state, target),
        ExecuteMsg::WithdrawExcessFunds { target } => {
            execute_withdraw_excess_funds(deps, env, info, state, target)
        }
        ExecuteMsg::DeleteContract { target } => {
            execute_delete_contract(deps, env, info, state, target)
        }

        // Configuration
        ExecuteMsg::SetCap { cap } => execute_set_cap(deps, info, state, cap),
        ExecuteMsg::SetSwapLimits { min, max } => {
            execute_set_swap_limits(deps, info, state, min, max)
        }
        ExecuteMsg::SetReverseSwapLimits { min, max, fee } => {
            execute_set_reverse_swap_limits(deps, info, state, min, max, fee)
        }
        ExecuteMsg::SetReverseAggregatedAllowance { amount } => {
            execute_set_reverse_aggregated_allowance(deps, info, state, amount)
        }
        ExecuteMsg::SetReverseAggregatedAllowanceApproverCap { amount } => {
            execute_set_reverse_aggregated_allowance_approver_cap(deps, info, state, amount)
        }

        // Access control
        ExecuteMsg::GrantRole { role, address } => execute_grant_role(deps, info, role, address),
        ExecuteMsg::RevokeRole { role, address } => {
            execute_revoke_role(deps, info, role, address)
        }
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::State {} => to_json_binary(&query_state(deps)?),
        QueryMsg::Supply {} => to_json_binary(&query_amount(deps, |s| s.supply)?),
        QueryMsg::FeesAccrued {} => to_json_binary(&query_amount(deps, |s| s.fees_accrued)?),
        QueryMsg::Cap {} => to_json_binary(&query_amount(deps, |s| s.cap)?),
        QueryMsg::NextSwapId {} => to_json_binary(&query_next_swap_id(deps)?),
        QueryMsg::RelayEon {} => to_json_binary(&query_relay_eon(deps)?),
        QueryMsg::Refunded { id } => to_json_binary(&query_refunded(deps, id)?),
        QueryMsg::SwapLimits {} => to_json_binary(&query_state(deps)?.swap_limits),
        QueryMsg::ReverseSwapLimits {} => to_json_binary(&query_state(deps)?.reverse_swap_limits),
        QueryMsg::ReverseAggregatedAllowance {} => {
            to_json_binary(&query_amount(deps, |s| s.reverse_aggregated_allowance)?)
        }
        QueryMsg::ReverseAggregatedAllowanceApproverCap {} => to_json_binary(&query_amount(
            deps,
            |s| s.reverse_aggregated_allowance_approver_cap,
        )?),
        QueryMsg::PausedSinceBlock {} => to_json_binary(&query_paused_since_block(deps, env)?),
        QueryMsg::HasRole { role, address } => to_json_binary(&query_has_role(deps, role, address)?),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
        QueryMsg::ExcessFunds {} => to_json_binary(&query_excess_funds(deps, env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
