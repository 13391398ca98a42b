use anchor_lang::prelude::*;

#[error_code]
pub enum DaoError {
    // Membership errors
    #[msg("Member list has duplicates, or too few or too many members")]
    InvalidMembership,

    #[msg("Signer is not a member of this DAO")]
    Unauthorized,

    // Proposal creation errors
    #[msg("Instruction payload, accounts or target program is invalid")]
    InvalidPayload,

    #[msg("Title, description or option text is empty or too long")]
    InvalidText,

    // Voting errors
    #[msg("Member has already voted on this proposal")]
    DuplicateVote,

    #[msg("Invalid option index")]
    InvalidOption,

    #[msg("Proposal is closed")]
    ProposalClosed,

    // Finalization errors
    #[msg("Voting period is still active")]
    VotingStillActive,

    #[msg("Proposal has already been finalized")]
    AlreadyFinalized,

    // Execution errors
    #[msg("Proposal has not been approved")]
    NotApproved,

    #[msg("Proposal has already been executed")]
    AlreadyExecuted,

    #[msg("Proposal instruction failed to execute")]
    ExecutionFailed,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}
