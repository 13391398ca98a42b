use anchor_lang::prelude::*;
use crate::{state::*, errors::*, events::*, constants::*};

// Create DAO Instruction
//
// Initializes a DAO with a fixed member list.
// The payer is always a member and is stored first.
// Membership cannot change after creation.

#[derive(Accounts)]
#[instruction(dao_id: u64)]
pub struct CreateDao<'info> {
    // Creator of the DAO
    // Signs and pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    // DAO account PDA
    // Seeds: ["dao", payer, dao_id]
    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + DaoInfo::INIT_SPACE,
        seeds = [
            DAO,
            payer.key().as_ref(),
            &dao_id.to_le_bytes(),
        ],
        bump,
    )]
    pub dao_info: Account<'info, DaoInfo>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateDao<'info> {
    pub fn create_dao(
        &mut self,
        dao_id: u64,
        members: Vec<Pubkey>,
        bumps: &CreateDaoBumps,
    ) -> Result<()> {
        let creator = self.payer.key();

        // Rejects duplicates, the default key and anything outside
        // MIN_MEMBERS..=MAX_MEMBERS once the creator is counted
        let members = DaoInfo::build_members(creator, &members)?;
        let member_count =
            u8::try_from(members.len()).map_err(|_| DaoError::InvalidMembership)?;

        self.dao_info.set_inner(DaoInfo {
            dao_id,
            creator,
            members,
            proposal_count: 0,
            bump: bumps.dao_info,
        });

        msg!(
            "DAO {} created by {} with {} members",
            self.dao_info.key(),
            creator,
            member_count
        );

        emit!(DaoCreated {
            dao: self.dao_info.key(),
            creator,
            member_count,
        });

        Ok(())
    }
}
