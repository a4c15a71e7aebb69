//! State definitions for the bridge ledger contract.
//!
//! All ledger accounting lives in one `BridgeState` aggregate. Execute loads
//! it once, hands it to the handler by `&mut` and saves it only if the handler
//! succeeds. Refund records and role membership live in their own maps.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;
use crate::limits::{ReverseSwapLimits, SwapLimits};
use crate::pause::Surface;

// ============================================================================
// Contract Info
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:bridge-ledger";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Ledger State
// ============================================================================

#[cw_serde]
pub struct BridgeState {
    /// CW20 token held in custody
    pub token: Addr,
    /// Value accepted into custody and not yet paid back out
    pub supply: Uint128,
    /// Fees owed to the fee recipient, tracked apart from `supply`
    pub fees_accrued: Uint128,
    /// Ceiling on `supply` for supply-increasing operations
    pub cap: Uint128,
    /// Id assigned to the next forward swap
    pub next_swap_id: u64,
    /// Current relay epoch
    pub relay_eon: u64,
    /// Remaining budget for refunds and reverse swaps
    pub reverse_aggregated_allowance: Uint128,
    /// Highest allowance an approver may set without admin rights
    pub reverse_aggregated_allowance_approver_cap: Uint128,
    pub swap_limits: SwapLimits,
    pub reverse_swap_limits: ReverseSwapLimits,
    pub paused_since_block_public_api: u64,
    pub paused_since_block_relayer_api: u64,
    pub deployment_block_number: u64,
    pub delete_protection_period: u64,
    /// First block at which `DeleteContract` is allowed
    pub earliest_delete: u64,
    /// Set by `DeleteContract`; every later execute is rejected
    pub deleted: bool,
}

impl BridgeState {
    pub fn paused_since(&self, surface: Surface) -> u64 {
        match surface {
            Surface::PublicApi => self.paused_since_block_public_api,
            Surface::RelayerApi => self.paused_since_block_relayer_api,
        }
    }

    pub fn set_paused_since(&mut self, surface: Surface, block: u64) {
        match surface {
            Surface::PublicApi => self.paused_since_block_public_api = block,
            Surface::RelayerApi => self.paused_since_block_relayer_api = block,
        }
    }

    /// Add `amount` to `supply`, enforcing the cap.
    pub fn increase_supply(&mut self, amount: Uint128) -> Result<(), ContractError> {
        let new_supply = self.supply.checked_add(amount)?;
        if new_supply > self.cap {
            return Err(ContractError::CapExceeded {
                supply: self.supply,
                amount,
                cap: self.cap,
            });
        }
        self.supply = new_supply;
        Ok(())
    }

    /// Remove `amount` from `supply`.
    pub fn decrease_supply(&mut self, amount: Uint128) -> Result<(), ContractError> {
        self.supply = self
            .supply
            .checked_sub(amount)
            .map_err(|_| ContractError::SupplyExceeded {
                amount,
                supply: self.supply,
            })?;
        Ok(())
    }

    /// Value the ledger is accountable for: `supply + fees_accrued`.
    pub fn accounted(&self) -> Result<Uint128, ContractError> {
        Ok(self.supply.checked_add(self.fees_accrued)?)
    }
}

pub const STATE: Item<BridgeState> = Item::new("state");

/// swap id -> amount refunded
pub const REFUNDS: Map<u64, Uint128> = Map::new("refunds");
