use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use crate::{constants::*, errors::DaoError, state::DaoInfo};

// A named choice and its tally
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct ProposalOption {
    #[max_len(MAX_OPTION_TEXT_LEN)]
    pub text: String,
    pub vote_count: u64,
}

// An account the target instruction receives, with the flags it is
// invoked with. The DAO PDA may be marked as a signer; it signs through
// its seeds at execution.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct ProposalAccount {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

// Proposal account
// Immutable metadata and payload set at creation, mutable tallies,
// and one-way finalized/executed flags.
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    // The DAO this proposal belongs to
    pub dao: Pubkey,

    // Sequential id within the DAO (PDA seed)
    pub proposal_id: u64,

    // Member that created the proposal
    pub proposer: Pubkey,

    #[max_len(MAX_TITLE_LEN)]
    pub title: String,

    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    // Program invoked with instruction_data once approved
    pub target_program: Pubkey,

    #[max_len(MAX_INSTRUCTION_DATA_LEN)]
    pub instruction_data: Vec<u8>,

    // Accounts passed to target_program, in order
    #[max_len(MAX_INSTRUCTION_ACCOUNTS)]
    pub accounts: Vec<ProposalAccount>,

    #[max_len(MAX_OPTIONS)]
    pub options: Vec<ProposalOption>,

    // Members that already voted, in voting order
    #[max_len(MAX_MEMBERS)]
    pub voters: Vec<Pubkey>,

    pub created_at: i64,

    // Last timestamp at which votes are accepted
    pub voting_ends_at: i64,

    // Set once the tally is closed after voting_ends_at
    pub finalized: bool,

    // Winning option recorded at finalization, None on a tie
    pub outcome: Option<u8>,

    pub executed: bool,

    // 0 until executed
    pub executed_at: i64,

    pub bump: u8,
}

impl Proposal {
    pub fn validate_text(title: &str, description: &str) -> Result<()> {
        require!(
            !title.is_empty() && title.len() <= MAX_TITLE_LEN,
            DaoError::InvalidText
        );
        require!(
            !description.is_empty() && description.len() <= MAX_DESCRIPTION_LEN,
            DaoError::InvalidText
        );
        Ok(())
    }

    pub fn validate_payload(target_program: &Pubkey, instruction_data: &[u8]) -> Result<()> {
        require!(
            *target_program != Pubkey::default() && *target_program != crate::ID,
            DaoError::InvalidPayload
        );
        require!(
            !instruction_data.is_empty() && instruction_data.len() <= MAX_INSTRUCTION_DATA_LEN,
            DaoError::InvalidPayload
        );
        Ok(())
    }

    pub fn validate_accounts(accounts: &[ProposalAccount]) -> Result<()> {
        require!(
            accounts.len() <= MAX_INSTRUCTION_ACCOUNTS,
            DaoError::InvalidPayload
        );
        require!(
            accounts.iter().all(|meta| meta.pubkey != Pubkey::default()),
            DaoError::InvalidPayload
        );
        Ok(())
    }

    // Copy option labels with every tally reset to zero
    pub fn fresh_options(options: &[ProposalOption]) -> Result<Vec<ProposalOption>> {
        require!(
            (MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()),
            DaoError::InvalidOption
        );

        options
            .iter()
            .map(|option| {
                require!(
                    !option.text.is_empty() && option.text.len() <= MAX_OPTION_TEXT_LEN,
                    DaoError::InvalidText
                );
                Ok(ProposalOption {
                    text: option.text.clone(),
                    vote_count: 0,
                })
            })
            .collect()
    }

    pub fn is_voting_open(&self, now: i64) -> bool {
        !self.executed && !self.finalized && now <= self.voting_ends_at
    }

    pub fn has_voted(&self, voter: &Pubkey) -> bool {
        self.voters.contains(voter)
    }

    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|option| option.vote_count).sum()
    }

    // Validate and record one vote. Nothing is written unless every check passes.
    pub fn record_vote(
        &mut self,
        dao: &DaoInfo,
        voter: Pubkey,
        option_index: u8,
        now: i64,
    ) -> Result<u64> {
        require!(self.is_voting_open(now), DaoError::ProposalClosed);
        require!(dao.is_member(&voter), DaoError::Unauthorized);
        require!(!self.has_voted(&voter), DaoError::DuplicateVote);

        let idx = option_index as usize;
        require!(idx < self.options.len(), DaoError::InvalidOption);

        let count = self.options[idx]
            .vote_count
            .checked_add(1)
            .ok_or(DaoError::Overflow)?;

        self.voters.push(voter);
        self.options[idx].vote_count = count;
        Ok(count)
    }

    // Index of the option with strictly the most votes, None on a tie
    pub fn winning_option(&self) -> Option<usize> {
        let (best, best_count) = self
            .options
            .iter()
            .enumerate()
            .max_by_key(|(_, option)| option.vote_count)
            .map(|(i, option)| (i, option.vote_count))?;

        let tied = self
            .options
            .iter()
            .enumerate()
            .any(|(i, option)| i != best && option.vote_count == best_count);

        if tied {
            None
        } else {
            Some(best)
        }
    }

    // Approved when the approving option leads outright with at least `quorum` votes
    pub fn is_approved(&self, quorum: u64) -> bool {
        match self.winning_option() {
            Some(APPROVE_OPTION_INDEX) => {
                self.options[APPROVE_OPTION_INDEX].vote_count >= quorum
            }
            _ => false,
        }
    }

    // A finalized proposal whose tally did not approve it never runs
    pub fn is_rejected(&self, quorum: u64) -> bool {
        self.finalized && !self.is_approved(quorum)
    }

    // Close the tally once voting has ended and record the winner.
    // Returns whether the payload may still be executed.
    pub fn finalize(&mut self, now: i64, quorum: u64) -> Result<bool> {
        require!(!self.executed, DaoError::AlreadyExecuted);
        require!(!self.finalized, DaoError::AlreadyFinalized);
        require!(now > self.voting_ends_at, DaoError::VotingStillActive);

        let outcome = self
            .winning_option()
            .map(u8::try_from)
            .transpose()
            .map_err(|_| DaoError::Overflow)?;

        self.outcome = outcome;
        self.finalized = true;
        Ok(self.is_approved(quorum))
    }

    // Match the accounts supplied by the executor against the stored list.
    // Keys must match in order. Stored writable accounts must be supplied
    // writable and stored signers must have signed, except the DAO PDA.
    // The returned metas carry the stored flags.
    pub fn check_accounts(&self, dao: &Pubkey, supplied: &[AccountMeta]) -> Result<Vec<AccountMeta>> {
        require!(
            supplied.len() == self.accounts.len(),
            DaoError::InvalidPayload
        );

        self.accounts
            .iter()
            .zip(supplied)
            .map(|(stored, given)| {
                require_keys_eq!(stored.pubkey, given.pubkey, DaoError::InvalidPayload);
                require!(
                    !stored.is_writable || given.is_writable,
                    DaoError::InvalidPayload
                );
                require!(
                    !stored.is_signer || given.is_signer || stored.pubkey == *dao,
                    DaoError::InvalidPayload
                );
                Ok(AccountMeta {
                    pubkey: stored.pubkey,
                    is_signer: stored.is_signer,
                    is_writable: stored.is_writable,
                })
            })
            .collect()
    }

    // One-way transition of the executed flag
    pub fn mark_executed(&mut self, now: i64) -> Result<()> {
        require!(!self.executed, DaoError::AlreadyExecuted);
        self.executed = true;
        self.executed_at = now;
        Ok(())
    }
}
