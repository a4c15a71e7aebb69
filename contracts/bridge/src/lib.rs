//! Bridge Ledger Contract - Custody Accounting for a Cross-Chain Token Bridge
//!
//! The ledger tracks how much of a CW20 token sits in bridge custody and
//! mediates value moving between this chain and a remote chain.
//!
//! # Forward Flow (Swap)
//! 1. User approves the ledger on the token contract (or uses CW20 `Send`)
//! 2. User calls `Swap` with a remote destination address
//! 3. Ledger pulls the tokens, bumps `supply` and emits a `swap` event with a fresh id
//! 4. Relayers observe the event and credit the user on the remote chain
//!
//! # Reverse Flow
//! - `ReverseSwap` - relayer credits value originating from a remote-chain transaction
//! - `Refund` / `RefundInFull` - relayer reverses a forward swap that could not be finalized
//!
//! # Security
//! - Closed role set (admin, relayer, approver, monitor, delegate)
//! - Independent public and relayer pause surfaces with block-height activation
//! - Relay eon rotation invalidates instructions signed for a previous relayer set
//! - Reverse aggregated allowance bounds cumulative reverse-direction value
//! - Per-transaction limits and a supply cap
//! - Refund idempotency per swap id

pub mod access_control;
pub mod allowance;
pub mod contract;
pub mod eon;
pub mod error;
mod execute;
pub mod hash;
pub mod limits;
pub mod msg;
pub mod pause;
mod query;
pub mod state;

pub use crate::access_control::Role;
pub use crate::error::ContractError;
pub use crate::hash::keccak256;
pub use crate::limits::{ReverseSwapLimits, SwapLimits};
pub use crate::pause::Surface;
