use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not a committee member")]
    Unauthorized,

    #[error("Committee must not be empty")]
    EmptyCommittee,

    #[error("Duplicate committee member: {member}")]
    DuplicateMember { member: String },

    #[error("Invalid threshold {threshold} for committee of {committee_size}")]
    InvalidThreshold { threshold: u32, committee_size: u32 },

    #[error("Action must not be empty")]
    EmptyAction,

    #[error("Current round not yet expired: expires at block {expired_since_block}")]
    NotYetExpired { expired_since_block: u64 },

    #[error("Invalid nonce: current {current}, got {got}")]
    InvalidNonce { current: u64, got: u64 },

    #[error("No active coordination round")]
    NoActiveRound,

    #[error("Coordination round expired at block {expired_since_block}")]
    RoundExpired { expired_since_block: u64 },

    #[error("Already signed round {nonce}")]
    AlreadySigned { nonce: u64 },
}
