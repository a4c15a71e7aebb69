use std::collections::BTreeSet;

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Storage,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    CommitteeIndexResponse, CommitteeMemberResponse, CoordinationNonceResponse,
    CoordinationSetupResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
    SigningStateResponse,
};
use crate::state::{
    Round, Setup, COMMITTEE_INDEX, CONTRACT_NAME, CONTRACT_VERSION, COORDINATION_NONCE, ROUND,
    SETUP,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.committee.is_empty() {
        return Err(ContractError::EmptyCommittee);
    }

    let mut committee = Vec::with_capacity(msg.committee.len());
    let mut seen = BTreeSet::new();
    for member in &msg.committee {
        let addr = deps.api.addr_validate(member)?;
        if !seen.insert(addr.clone()) {
            return Err(ContractError::DuplicateMember {
                member: addr.to_string(),
            });
        }
        committee.push(addr);
    }

    let committee_size = committee.len() as u32;
    if msg.threshold == 0 || msg.threshold > committee_size {
        return Err(ContractError::InvalidThreshold {
            threshold: msg.threshold,
            committee_size,
        });
    }

    for (position, member) in committee.iter().enumerate() {
        COMMITTEE_INDEX.save(deps.storage, member, &(position as u32 + 1))?;
    }
    SETUP.save(
        deps.storage,
        &Setup {
            committee,
            threshold: msg.threshold,
            timeout_blocks: msg.timeout_blocks,
        },
    )?;
    COORDINATION_NONCE.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("committee_size", committee_size.to_string())
        .add_attribute("threshold", msg.threshold.to_string())
        .add_attribute("timeout_blocks", msg.timeout_blocks.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Propose {
            expected_nonce,
            action,
            action_data,
            signature,
        } => execute_propose(deps, env, info, expected_nonce, action, action_data, signature),
        ExecuteMsg::Sign { nonce, signature } => execute_sign(deps, env, info, nonce, signature),
    }
}

fn execute_propose(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    expected_nonce: u64,
    action: String,
    action_data: String,
    signature: String,
) -> Result<Response, ContractError> {
    ensure_member(deps.storage, &info.sender)?;
    if action.is_empty() {
        return Err(ContractError::EmptyAction);
    }

    let height = env.block.height;
    if let Some(round) = ROUND.may_load(deps.storage)? {
        if !round.is_expired(height) {
            return Err(ContractError::NotYetExpired {
                expired_since_block: round.expired_since_block,
            });
        }
    }

    // A proposer may lag behind the latest round, but never run ahead of it
    let current = COORDINATION_NONCE.load(deps.storage)?;
    if expected_nonce > current {
        return Err(ContractError::InvalidNonce {
            current,
            got: expected_nonce,
        });
    }

    let setup = SETUP.load(deps.storage)?;
    let nonce = current
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("coordination nonce exhausted"))?;
    let expired_since_block = height
        .saturating_add(setup.timeout_blocks)
        .saturating_add(1);

    ROUND.save(
        deps.storage,
        &Round {
            nonce,
            action: action.clone(),
            action_data,
            expired_since_block,
            signees: vec![info.sender.clone()],
            signatures: vec![signature],
        },
    )?;
    COORDINATION_NONCE.save(deps.storage, &nonce)?;

    Ok(Response::new()
        .add_attribute("action", "propose")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("proposer", info.sender)
        .add_attribute("proposed_action", action)
        .add_attribute("expired_since_block", expired_since_block.to_string()))
}

fn execute_sign(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    nonce: u64,
    signature: String,
) -> Result<Response, ContractError> {
    ensure_member(deps.storage, &info.sender)?;

    let mut round = ROUND
        .may_load(deps.storage)?
        .ok_or(ContractError::NoActiveRound)?;
    if nonce != round.nonce {
        return Err(ContractError::InvalidNonce {
            current: round.nonce,
            got: nonce,
        });
    }
    if round.is_expired(env.block.height) {
        return Err(ContractError::RoundExpired {
            expired_since_block: round.expired_since_block,
        });
    }
    if round.has_signed(&info.sender) {
        return Err(ContractError::AlreadySigned { nonce });
    }

    round.signees.push(info.sender.clone());
    round.signatures.push(signature);
    ROUND.save(deps.storage, &round)?;

    let threshold = SETUP.load(deps.storage)?.threshold;
    Ok(Response::new()
        .add_attribute("action", "sign")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("signee", info.sender)
        .add_attribute("signatures", round.signatures.len().to_string())
        .add_attribute(
            "threshold_reached",
            (round.signatures.len() as u32 >= threshold).to_string(),
        ))
}

fn ensure_member(storage: &dyn Storage, addr: &Addr) -> Result<(), ContractError> {
    if !COMMITTEE_INDEX.has(storage, addr) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CoordinationSetup {} => to_json_binary(&query_coordination_setup(deps)?),
        QueryMsg::CoordinationNonce {} => to_json_binary(&CoordinationNonceResponse {
            nonce: COORDINATION_NONCE.load(deps.storage)?,
        }),
        QueryMsg::CommitteeMember { index } => {
            to_json_binary(&query_committee_member(deps, index)?)
        }
        QueryMsg::CommitteeIndex { address } => {
            to_json_binary(&query_committee_index(deps, address)?)
        }
        QueryMsg::SigningState {} => to_json_binary(&query_signing_state(deps, env)?),
    }
}

fn query_coordination_setup(deps: Deps) -> StdResult<CoordinationSetupResponse> {
    let setup = SETUP.load(deps.storage)?;
    let nonce = COORDINATION_NONCE.load(deps.storage)?;
    Ok(CoordinationSetupResponse {
        next_coordination_nonce: nonce.saturating_add(1),
        threshold: setup.threshold,
        timeout_blocks: setup.timeout_blocks,
        committee: setup.committee,
    })
}

fn query_committee_member(deps: Deps, index: u32) -> StdResult<CommitteeMemberResponse> {
    let setup = SETUP.load(deps.storage)?;
    let member = setup
        .committee
        .get(index as usize)
        .cloned()
        .ok_or_else(|| StdError::not_found(format!("committee member {}", index)))?;
    Ok(CommitteeMemberResponse { member })
}

fn query_committee_index(deps: Deps, address: String) -> StdResult<CommitteeIndexResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let index = COMMITTEE_INDEX
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();
    Ok(CommitteeIndexResponse { index })
}

fn query_signing_state(deps: Deps, env: Env) -> StdResult<SigningStateResponse> {
    let threshold = SETUP.load(deps.storage)?.threshold;
    let nonce = COORDINATION_NONCE.load(deps.storage)?;

    Ok(match ROUND.may_load(deps.storage)? {
        Some(round) => SigningStateResponse {
            coordination_nonce: round.nonce,
            threshold_reached: round.signatures.len() as u32 >= threshold,
            expired: round.is_expired(env.block.height),
            action: round.action,
            action_data: round.action_data,
            expired_since_block: round.expired_since_block,
            signees: round.signees,
            signatures: round.signatures,
        },
        None => SigningStateResponse {
            coordination_nonce: nonce,
            action: String::new(),
            action_data: String::new(),
            expired_since_block: 0,
            signees: vec![],
            signatures: vec![],
            threshold_reached: false,
            expired: true,
        },
    })
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
