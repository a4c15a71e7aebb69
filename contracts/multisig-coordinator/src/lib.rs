//! Multisig Coordinator - committee signature board for privileged actions.
//!
//! A fixed committee proposes an action and collects signatures on it. The
//! contract only records who signed what; acting on a round that reached the
//! threshold is left to whoever polls `SigningState`.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
