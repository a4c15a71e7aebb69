use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:multisig-coordinator";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed at instantiation
#[cw_serde]
pub struct Setup {
    pub committee: Vec<Addr>,
    pub threshold: u32,
    pub timeout_blocks: u64,
}

/// Latest proposal round, overwritten by each successful `Propose`
#[cw_serde]
pub struct Round {
    pub nonce: u64,
    pub action: String,
    pub action_data: String,
    /// First block at which the round no longer accepts signatures
    pub expired_since_block: u64,
    pub signees: Vec<Addr>,
    pub signatures: Vec<String>,
}

impl Round {
    pub fn is_expired(&self, height: u64) -> bool {
        height >= self.expired_since_block
    }

    pub fn has_signed(&self, addr: &Addr) -> bool {
        self.signees.contains(addr)
    }
}

pub const SETUP: Item<Setup> = Item::new("setup");

/// member => 1-based position in `Setup::committee`
pub const COMMITTEE_INDEX: Map<&Addr, u32> = Map::new("committee_index");

pub const COORDINATION_NONCE: Item<u64> = Item::new("coordination_nonce");

pub const ROUND: Item<Round> = Item::new("round");
