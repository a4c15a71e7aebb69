use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub committee: Vec<String>,
    pub threshold: u32,
    pub timeout_blocks: u64,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a new round. Allowed once the previous round has expired.
    Propose {
        expected_nonce: u64,
        action: String,
        action_data: String,
        signature: String,
    },
    /// Add the caller's signature to the round stamped with `nonce`
    Sign { nonce: u64, signature: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CoordinationSetupResponse)]
    CoordinationSetup {},

    #[returns(CoordinationNonceResponse)]
    CoordinationNonce {},

    /// 0-based position in the committee
    #[returns(CommitteeMemberResponse)]
    CommitteeMember { index: u32 },

    /// 1-based position of `address`, 0 for non-members
    #[returns(CommitteeIndexResponse)]
    CommitteeIndex { address: String },

    #[returns(SigningStateResponse)]
    SigningState {},
}

#[cw_serde]
pub struct CoordinationSetupResponse {
    /// Nonce the next `Propose` will stamp its round with
    pub next_coordination_nonce: u64,
    pub threshold: u32,
    pub timeout_blocks: u64,
    pub committee: Vec<Addr>,
}

#[cw_serde]
pub struct CoordinationNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct CommitteeMemberResponse {
    pub member: Addr,
}

#[cw_serde]
pub struct CommitteeIndexResponse {
    pub index: u32,
}

#[cw_serde]
pub struct SigningStateResponse {
    pub coordination_nonce: u64,
    pub action: String,
    pub action_data: String,
    pub expired_since_block: u64,
    pub signees: Vec<Addr>,
    pub signatures: Vec<String>,
    pub threshold_reached: bool,
    pub expired: bool,
}
