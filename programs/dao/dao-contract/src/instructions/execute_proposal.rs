use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke_signed,
};
use crate::{state::*, errors::*, events::*, constants::*};

// Execute Proposal Instruction
//
// Invokes the proposal's target program with its stored instruction data
// once the approving option (index 0) leads outright with a majority of
// the DAO's members behind it.
//
// The executor passes the stored accounts as remaining accounts, in the
// same order. The invocation uses the flags stored on the proposal, never
// the supplied ones. The DAO PDA signs through its seeds, so payloads may
// use it as an authority.
//
// A failed invocation aborts the transaction; the proposal stays
// unexecuted and can be retried.

#[derive(Accounts)]
pub struct ExecuteProposal<'info> {
    // Executor - must be a member of the DAO
    pub executor: Signer<'info>,

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

    /// CHECK: Must match the program stored on the proposal
    #[account(
        executable,
        address = proposal.target_program @ DaoError::InvalidPayload,
    )]
    pub target_program: UncheckedAccount<'info>,
}

impl<'info> ExecuteProposal<'info> {
    pub fn execute_proposal(&mut self, remaining_accounts: &[AccountInfo<'info>]) -> Result<()> {
        let executor = self.executor.key();

        require!(
            self.dao_info.is_member(&executor),
            DaoError::Unauthorized
        );

        require!(!self.proposal.executed, DaoError::AlreadyExecuted);

        let quorum = self.dao_info.quorum();
        require!(
            !self.proposal.is_rejected(quorum),
            DaoError::ProposalClosed
        );
        require!(
            self.proposal.is_approved(quorum),
            DaoError::NotApproved
        );

        let supplied: Vec<AccountMeta> = remaining_accounts
            .iter()
            .map(|info| AccountMeta {
                pubkey: info.key(),
                is_signer: info.is_signer,
                is_writable: info.is_writable,
            })
            .collect();
        let accounts = self
            .proposal
            .check_accounts(&self.dao_info.key(), &supplied)?;

        let ix = Instruction {
            program_id: self.proposal.target_program,
            accounts,
            data: self.proposal.instruction_data.clone(),
        };

        let mut account_infos = remaining_accounts.to_vec();
        account_infos.push(self.target_program.to_account_info());

        let dao_id = self.dao_info.dao_id.to_le_bytes();
        let dao_seeds = &[
            DAO,
            self.dao_info.creator.as_ref(),
            dao_id.as_ref(),
            &[self.dao_info.bump],
        ];
        let signer_seeds = &[&dao_seeds[..]];

        invoke_signed(&ix, &account_infos, signer_seeds).map_err(|err| {
            msg!("Proposal {} instruction failed: {:?}", self.proposal.proposal_id, err);
            DaoError::ExecutionFailed
        })?;

        let now = Clock::get()?.unix_timestamp;
        self.proposal.mark_executed(now)?;

        msg!(
            "Proposal {} executed by {}",
            self.proposal.proposal_id,
            executor
        );

        emit!(ProposalExecuted {
            proposal: self.proposal.key(),
            executor,
            target_program: self.proposal.target_program,
            timestamp: now,
        });

        Ok(())
    }
}
