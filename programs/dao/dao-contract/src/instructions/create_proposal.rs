use anchor_lang::prelude::*;
use crate::{state::*, errors::*, events::*, constants::*};

// Create Proposal Instruction
//
// Any DAO member can submit a proposal carrying an instruction payload
// (target program, the accounts it is invoked with, raw data) and a
// list of named options.
// Tallies start at zero; nothing is executed at creation.

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    // Proposer - must be a member of the DAO
    // Signs and pays for the proposal account
    #[account(mut)]
    pub proposer: Signer<'info>,

    // DAO account - proposal_count is bumped
    #[account(
        mut,
        seeds = [
            DAO,
            dao_info.creator.as_ref(),
            &dao_info.dao_id.to_le_bytes(),
        ],
        bump = dao_info.bump,
    )]
    pub dao_info: Account<'info, DaoInfo>,

    // Proposal PDA
    // Seeds: ["proposal", dao_info, proposal_id]
    // proposal_id comes from dao_info.proposal_count
    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL,
            dao_info.key().as_ref(),
            &dao_info.proposal_count.to_le_bytes(),
        ],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateProposal<'info> {
    pub fn create_proposal(
        &mut self,
        title: String,
        description: String,
        target_program: Pubkey,
        instruction_data: Vec<u8>,
        accounts: Vec<ProposalAccount>,
        options: Vec<ProposalOption>,
        bumps: &CreateProposalBumps,
    ) -> Result<()> {
        let proposer = self.proposer.key();

        require!(
            self.dao_info.is_member(&proposer),
            DaoError::Unauthorized
        );

        Proposal::validate_text(&title, &description)?;
        Proposal::validate_payload(&target_program, &instruction_data)?;
        Proposal::validate_accounts(&accounts)?;
        let options = Proposal::fresh_options(&options)?;

        let proposal_id = self.dao_info.next_proposal_id()?;

        let created_at = Clock::get()?.unix_timestamp;
        let voting_ends_at = created_at
            .checked_add(VOTING_PERIOD)
            .ok_or(DaoError::Overflow)?;

        self.proposal.set_inner(Proposal {
            dao: self.dao_info.key(),
            proposal_id,
            proposer,
            title,
            description,
            target_program,
            instruction_data,
            accounts,
            options,
            voters: Vec::new(),
            created_at,
            voting_ends_at,
            finalized: false,
            outcome: None,
            executed: false,
            executed_at: 0,
            bump: bumps.proposal,
        });

        msg!(
            "Proposal {} created in DAO {} by {}",
            proposal_id,
            self.dao_info.key(),
            proposer
        );

        emit!(ProposalCreated {
            dao: self.dao_info.key(),
            proposal: self.proposal.key(),
            proposal_id,
            proposer,
            target_program,
        });

        Ok(())
    }
}
