//! Keccak-256 digests for fixed-width event keys.
//!
//! Remote-chain addresses and origin senders are free-form strings. Swap and
//! reverse swap events also carry their keccak256 digest so watchers can
//! filter on a 32-byte key, matching the indexed topics of the EVM side.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// `0x`-prefixed hex keccak256 of a UTF-8 string, as emitted in event attributes.
pub fn indexed_key(value: &str) -> String {
    format!("0x{}", hex::encode(keccak256(value.as_bytes())))
}
