//! Execute handlers for the bridge ledger contract.
//!
//! Every handler receives the loaded `BridgeState` by `&mut`; the entry point
//! saves it after the handler returns successfully.
//! - `user` - Swap and the CW20 receive hook
//! - `relayer` - Refunds, reverse swaps, relay eon rotation
//! - `admin` - Pausing, custody funds, deletion
//! - `config` - Cap, limits, allowance, roles

mod admin;
mod config;
mod relayer;
mod user;

pub use admin::*;
pub use config::*;
pub use relayer::*;
pub use user::*;
