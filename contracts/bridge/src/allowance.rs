//! Reverse aggregated allowance: a budget on cumulative reverse-direction value.
//!
//! Refunds and reverse swaps consume the full relayed amount, fee included.

use cosmwasm_std::Uint128;

use crate::access_control::Role;
use crate::error::ContractError;

/// Remaining allowance after consuming `amount`.
pub fn consume(allowance: Uint128, amount: Uint128) -> Result<Uint128, ContractError> {
    allowance
        .checked_sub(amount)
        .map_err(|_| ContractError::AllowanceExceeded { amount, allowance })
}

/// Roles allowed to set the allowance to `value`.
pub fn roles_allowed_to_set(value: Uint128, approver_cap: Uint128) -> &'static [Role] {
    if value <= approver_cap {
        &[Role::Admin, Role::Approver]
    } else {
        &[Role::Admin]
    }
}
