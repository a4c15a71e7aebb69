//! Query handlers for the bridge ledger contract.

use cosmwasm_std::{Addr, Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use common::Cw20Token;

use crate::access_control::{has_role, Role, ROLES};
use crate::msg::{
    AmountResponse, ConfigResponse, ExcessFundsResponse, HasRoleResponse, NextSwapIdResponse,
    PausedSinceBlockResponse, RefundedResponse, RelayEonResponse, RoleMembersResponse,
};
use crate::pause::is_paused;
use crate::state::{BridgeState, REFUNDS, STATE};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(ConfigResponse {
        token: state.token,
        cap: state.cap,
        swap_limits: state.swap_limits,
        reverse_swap_limits: state.reverse_swap_limits,
        reverse_aggregated_allowance_approver_cap: state.reverse_aggregated_allowance_approver_cap,
        deployment_block_number: state.deployment_block_number,
        delete_protection_period: state.delete_protection_period,
        earliest_delete: state.earliest_delete,
        deleted: state.deleted,
    })
}

pub fn query_state(deps: Deps) -> StdResult<BridgeState> {
    STATE.load(deps.storage)
}

/// Project a single amount out of the ledger state.
pub fn query_amount(deps: Deps, field: fn(&BridgeState) -> Uint128) -> StdResult<AmountResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(AmountResponse {
        amount: field(&state),
    })
}

pub fn query_next_swap_id(deps: Deps) -> StdResult<NextSwapIdResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(NextSwapIdResponse {
        next_swap_id: state.next_swap_id,
    })
}

pub fn query_relay_eon(deps: Deps) -> StdResult<RelayEonResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(RelayEonResponse {
        eon: state.relay_eon,
    })
}

pub fn query_refunded(deps: Deps, id: u64) -> StdResult<RefundedResponse> {
    let amount = REFUNDS.may_load(deps.storage, id)?.unwrap_or_default();
    Ok(RefundedResponse { id, amount })
}

pub fn query_paused_since_block(deps: Deps, env: Env) -> StdResult<PausedSinceBlockResponse> {
    let state = STATE.load(deps.storage)?;
    let height = env.block.height;
    Ok(PausedSinceBlockResponse {
        public_api: state.paused_since_block_public_api,
        relayer_api: state.paused_since_block_relayer_api,
        public_api_paused: is_paused(state.paused_since_block_public_api, height),
        relayer_api_paused: is_paused(state.paused_since_block_relayer_api, height),
    })
}

pub fn query_has_role(deps: Deps, role: Role, address: String) -> StdResult<HasRoleResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(HasRoleResponse {
        has_role: has_role(deps.storage, role, &address),
    })
}

pub fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start: Option<Bound<&Addr>> = start_addr.as_ref().map(Bound::exclusive);

    let members = ROLES
        .prefix(role.as_str())
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<Addr>>>()?;

    Ok(RoleMembersResponse { role, members })
}

pub fn query_excess_funds(deps: Deps, env: Env) -> StdResult<ExcessFundsResponse> {
    let state = STATE.load(deps.storage)?;
    let balance =
        Cw20Token::new(state.token.clone()).balance(&deps.querier, &env.contract.address)?;
    let accounted = state.supply.checked_add(state.fees_accrued)?;
    Ok(ExcessFundsResponse {
        balance,
        supply: state.supply,
        fees_accrued: state.fees_accrued,
        excess: balance.saturating_sub(accounted),
    })
}
