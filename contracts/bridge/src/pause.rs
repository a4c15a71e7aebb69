//! Block-height pause switches for the public and relayer API surfaces.
//!
//! Each surface stores the block from which it is paused. `u64::MAX` means
//! never. A surface is paused at height `h` when `h >= paused_since`.

use cosmwasm_schema::cw_serde;

use crate::access_control::Role;
use crate::error::ContractError;

/// Sentinel pause point meaning "never paused".
pub const NOT_PAUSED: u64 = u64::MAX;

#[cw_serde]
#[derive(Copy, Eq)]
pub enum Surface {
    /// User-facing mutation: swap, deposit
    PublicApi,
    /// Relayer mutation: refund, reverse swap, relay eon rotation
    RelayerApi,
}

impl Surface {
    pub fn action(&self) -> &'static str {
        match self {
            Surface::PublicApi => "pause_public_api",
            Surface::RelayerApi => "pause_relayer_api",
        }
    }
}

pub fn is_paused(paused_since_block: u64, height: u64) -> bool {
    height >= paused_since_block
}

pub fn ensure_not_paused(paused_since_block: u64, height: u64) -> Result<(), ContractError> {
    if is_paused(paused_since_block, height) {
        return Err(ContractError::ContractPaused);
    }
    Ok(())
}

/// Pausing cannot be retroactive: a past block means "from now".
pub fn effective_pause_block(requested: u64, height: u64) -> u64 {
    requested.max(height)
}

/// Roles allowed to move a pause point from `current` to `effective`.
///
/// Bringing a pause forward (or scheduling one on an unpaused surface) is open
/// to monitors. Pushing the pause point later, up to `NOT_PAUSED`, stays with
/// the admin.
pub fn roles_allowed_to_set(effective: u64, current: u64) -> &'static [Role] {
    if effective <= current {
        &[Role::Admin, Role::Monitor]
    } else {
        &[Role::Admin]
    }
}
