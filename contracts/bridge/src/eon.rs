//! Relay eon: epoch counter for relayer-signed instructions.

use crate::error::ContractError;

/// Initial eon. The first rotation wraps it to zero.
pub const INITIAL_RELAY_EON: u64 = u64::MAX;

pub fn next_relay_eon(current: u64) -> u64 {
    current.wrapping_add(1)
}

pub fn ensure_current_eon(current: u64, got: u64) -> Result<(), ContractError> {
    if current != got {
        return Err(ContractError::StaleRelayEon { current, got });
    }
    Ok(())
}
