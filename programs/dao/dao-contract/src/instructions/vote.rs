use anchor_lang::prelude::*;
use crate::{state::*, errors::*, events::*, constants::*};

// Vote Instruction
//
// A member casts one unweighted vote for one option.
// Rejected when the proposal is executed or its voting window has passed,
// when the signer is not a member, has already voted, or picks a
// non-existent option.

#[derive(Accounts)]
pub struct Vote<'info> {
    pub voter: Signer<'info>,

    #[account(
        seeds = [
            DAO,
            dao_info.creator.as_ref(),
            &dao_info.dao_id.to_le_bytes(),
        ],
        bump = dao_info.bump,
    )]
    pub dao_info: Account<'info, DaoInfo>,

    #[account(
        mut,
        seeds = [
            PROPOSAL,
            dao_info.key().as_ref(),
            &proposal.proposal_id.to_le_bytes(),
        ],
        bump = proposal.bump,
        constraint = proposal.dao == dao_info.key() @ DaoError::Unauthorized,
    )]
    pub proposal: Account<'info, Proposal>,
}

impl<'info> Vote<'info> {
    pub fn vote(&mut self, option_index: u8) -> Result<()> {
        let voter = self.voter.key();
        let now = Clock::get()?.unix_timestamp;

        let vote_count = self
            .proposal
            .record_vote(&self.dao_info, voter, option_index, now)?;

        msg!(
            "{} voted for option {} on proposal {} ({} votes)",
            voter,
            option_index,
            self.proposal.proposal_id,
            vote_count
        );

        emit!(VoteCast {
            proposal: self.proposal.key(),
            voter,
            option_index,
            vote_count,
        });

        Ok(())
    }
}
