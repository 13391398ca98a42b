use anchor_lang::prelude::*;
use crate::{state::*, errors::*, events::*, constants::*};

// Finalize Proposal Instruction
//
// Closes the tally after the voting window and records the winning option.
// Anyone may call it. A proposal whose approving option did not win with
// quorum is closed for good; an approved one can still be executed.

#[derive(Accounts)]
pub struct FinalizeProposal<'info> {
    pub caller: Signer<'info>,

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

impl<'info> FinalizeProposal<'info> {
    pub fn finalize_proposal(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let approved = self.proposal.finalize(now, self.dao_info.quorum())?;

        match self.proposal.outcome {
            Some(option) => msg!(
                "Proposal {} finalized, option {} won",
                self.proposal.proposal_id,
                option
            ),
            None => msg!("Proposal {} finalized with a tie", self.proposal.proposal_id),
        }

        emit!(ProposalFinalized {
            proposal: self.proposal.key(),
            outcome: self.proposal.outcome,
            approved,
        });

        Ok(())
    }
}
