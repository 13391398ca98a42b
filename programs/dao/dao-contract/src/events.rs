use anchor_lang::prelude::*;

#[event]
pub struct DaoCreated {
    pub dao: Pubkey,
    pub creator: Pubkey,
    pub member_count: u8,
}

#[event]
pub struct ProposalCreated {
    pub dao: Pubkey,
    pub proposal: Pubkey,
    pub proposal_id: u64,
    pub proposer: Pubkey,
    pub target_program: Pubkey,
}

#[event]
pub struct VoteCast {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub option_index: u8,
    pub vote_count: u64,
}

#[event]
pub struct ProposalFinalized {
    pub proposal: Pubkey,
    pub outcome: Option<u8>,
    pub approved: bool,
}

#[event]
pub struct ProposalExecuted {
    pub proposal: Pubkey,
    pub executor: Pubkey,
    pub target_program: Pubkey,
    pub timestamp: i64,
}
