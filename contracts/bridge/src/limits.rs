//! Per-transaction size bounds for both bridge directions.
//!
//! Forward and reverse limits are stored and updated independently.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::error::ContractError;

/// Bounds for forward swaps: `min <= amount <= max`.
#[cw_serde]
pub struct SwapLimits {
    pub min: Uint128,
    pub max: Uint128,
}

impl SwapLimits {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.min > self.max {
            return Err(ContractError::invalid_limits(format!(
                "swap min {} > max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn check(&self, amount: Uint128) -> Result<(), ContractError> {
        if amount < self.min || amount > self.max {
            return Err(ContractError::invalid_amount(format!(
                "{} outside swap limits [{}, {}]",
                amount, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Bounds and flat fee for refunds and reverse swaps: `fee <= min <= max`.
///
/// Only `max` is enforced against relayed amounts. A refund must be able to
/// return the exact amount of an earlier swap even after the reverse minimum
/// or fee was raised above it, in which case the whole amount goes to fees.
#[cw_serde]
pub struct ReverseSwapLimits {
    pub min: Uint128,
    pub max: Uint128,
    pub fee: Uint128,
}

impl ReverseSwapLimits {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.fee > self.min {
            return Err(ContractError::invalid_limits(format!(
                "reverse swap fee {} > min {}",
                self.fee, self.min
            )));
        }
        if self.min > self.max {
            return Err(ContractError::invalid_limits(format!(
                "reverse swap min {} > max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn check(&self, amount: Uint128) -> Result<(), ContractError> {
        if amount > self.max {
            return Err(ContractError::invalid_amount(format!(
                "{} above reverse swap max {}",
                amount, self.max
            )));
        }
        Ok(())
    }

    /// Fee charged on `amount`, saturating at the amount itself.
    pub fn fee_for(&self, amount: Uint128) -> Uint128 {
        amount.min(self.fee)
    }
}
