//! Common - Shared Types and Utilities for the Bridge Contracts
//!
//! This package provides the typed handle the ledger uses to talk to its
//! CW20 token collaborator.

pub mod token;

pub use token::Cw20Token;
