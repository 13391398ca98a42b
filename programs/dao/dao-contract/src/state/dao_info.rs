use anchor_lang::prelude::*;
use crate::{constants::*, errors::DaoError};

// DAO account
// Holds the fixed committee allowed to propose, vote and execute.
// Proposals point back here; the DAO keeps no list of its proposals.
#[account]
#[derive(InitSpace)]
pub struct DaoInfo {
    // Identifier chosen by the creator (PDA seed)
    pub dao_id: u64,

    // Payer of create_dao, always members[0]
    pub creator: Pubkey,

    // Unique member keys, fixed at creation
    #[max_len(MAX_MEMBERS)]
    pub members: Vec<Pubkey>,

    // Total proposals ever created, doubles as the next proposal id
    pub proposal_count: u64,

    pub bump: u8,
}

impl DaoInfo {
    // Build the stored member list: creator first, then the requested
    // members in order with the creator skipped if listed again.
    pub fn build_members(creator: Pubkey, requested: &[Pubkey]) -> Result<Vec<Pubkey>> {
        require!(!requested.is_empty(), DaoError::InvalidMembership);

        let mut members = Vec::with_capacity(requested.len() + 1);
        members.push(creator);

        for (i, key) in requested.iter().enumerate() {
            require!(*key != Pubkey::default(), DaoError::InvalidMembership);
            require!(
                !requested[..i].contains(key),
                DaoError::InvalidMembership
            );
            if *key != creator {
                members.push(*key);
            }
        }

        require!(
            (MIN_MEMBERS..=MAX_MEMBERS).contains(&members.len()),
            DaoError::InvalidMembership
        );
        Ok(members)
    }

    pub fn is_member(&self, key: &Pubkey) -> bool {
        self.members.contains(key)
    }

    // Approving votes needed to execute: a strict majority of all members
    pub fn quorum(&self) -> u64 {
        (self.members.len() as u64) / 2 + 1
    }

    // Reserve the next proposal id
    pub fn next_proposal_id(&mut self) -> Result<u64> {
        let id = self.proposal_count;
        self.proposal_count = id.checked_add(1).ok_or(DaoError::Overflow)?;
        Ok(id)
    }
}
