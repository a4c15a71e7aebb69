//! Role membership and authorization checks.
//!
//! Roles form a closed set. Membership is stored as `(role, address)` keys so
//! that the holders of a role can be enumerated with a prefix range.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Storage};
use cw_storage_plus::Map;

use crate::error::ContractError;

/// Capabilities recognised by the ledger.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Role {
    /// Full administration: roles, limits, cap, funds, unpausing, deletion
    Admin,
    /// Refunds, reverse swaps and relay eon rotation
    Relayer,
    /// May set the reverse aggregated allowance up to the approver cap
    Approver,
    /// May pause either API surface from the current block
    Monitor,
    /// Registered for off-chain integrations; carries no ledger capability
    Delegate,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Relayer => "relayer",
            Role::Approver => "approver",
            Role::Monitor => "monitor",
            Role::Delegate => "delegate",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// (role, member) -> ()
pub const ROLES: Map<(&str, &Addr), Empty> = Map::new("roles");

pub fn has_role(storage: &dyn Storage, role: Role, addr: &Addr) -> bool {
    ROLES.has(storage, (role.as_str(), addr))
}

/// Fails with `Unauthorized` unless `addr` holds `role`.
pub fn require_role(storage: &dyn Storage, role: Role, addr: &Addr) -> Result<(), ContractError> {
    require_any_role(storage, &[role], addr)
}

/// Fails with `Unauthorized` unless `addr` holds at least one of `roles`.
pub fn require_any_role(
    storage: &dyn Storage,
    roles: &[Role],
    addr: &Addr,
) -> Result<(), ContractError> {
    if roles.iter().any(|role| has_role(storage, *role, addr)) {
        return Ok(());
    }
    Err(ContractError::Unauthorized {
        required: roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(" or "),
    })
}

pub fn grant_role(storage: &mut dyn Storage, role: Role, addr: &Addr) -> Result<(), ContractError> {
    if has_role(storage, role, addr) {
        return Err(ContractError::RoleAlreadyGranted {
            role: role.to_string(),
            address: addr.to_string(),
        });
    }
    ROLES.save(storage, (role.as_str(), addr), &Empty {})?;
    Ok(())
}

pub fn revoke_role(storage: &mut dyn Storage, role: Role, addr: &Addr) -> Result<(), ContractError> {
    if !has_role(storage, role, addr) {
        return Err(ContractError::RoleNotGranted {
            role: role.to_string(),
            address: addr.to_string(),
        });
    }
    ROLES.remove(storage, (role.as_str(), addr));
    Ok(())
}
