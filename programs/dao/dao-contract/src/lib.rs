use anchor_lang::prelude::*;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod state;
pub mod constants;

pub use instructions::*;
pub use errors::*;
pub use events::*;
pub use state::*;

declare_id!("89G9TNmmZNSri7z6apU6vQNj4RJhdqKEpTMppaUz13Nr");

#[program]
pub mod dao_contract {
    use super::*;

    // Create a DAO with a fixed member list
    // The payer is always stored as the first member
    pub fn create_dao(
        ctx: Context<CreateDao>,
        dao_id: u64,
        members: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.create_dao(dao_id, members, &ctx.bumps)
    }

    // Submit a proposal against a DAO
    // Only members can propose; option tallies start at zero
    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        title: String,
        description: String,
        target_program: Pubkey,
        instruction_data: Vec<u8>,
        accounts: Vec<ProposalAccount>,
        options: Vec<ProposalOption>,
    ) -> Result<()> {
        ctx.accounts.create_proposal(
            title,
            description,
            target_program,
            instruction_data,
            accounts,
            options,
            &ctx.bumps,
        )
    }

    // Cast one vote for an option
    // Each member votes at most once per proposal
    pub fn vote(ctx: Context<Vote>, option_index: u8) -> Result<()> {
        ctx.accounts.vote(option_index)
    }

    // Close the tally once the voting window has passed
    pub fn finalize_proposal(ctx: Context<FinalizeProposal>) -> Result<()> {
        ctx.accounts.finalize_proposal()
    }

    // Run the proposal's instruction once it is approved
    // The stored accounts go in remaining_accounts, in order
    pub fn execute_proposal<'info>(
        ctx: Context<'_, '_, '_, 'info, ExecuteProposal<'info>>,
    ) -> Result<()> {
        ctx.accounts.execute_proposal(ctx.remaining_accounts)
    }
}
