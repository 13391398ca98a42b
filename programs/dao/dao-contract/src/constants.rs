pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["dao", creator, dao_id]
pub const DAO: &[u8] = b"dao";

// Seeds for PDA derivation: ["proposal", dao, proposal_id]
pub const PROPOSAL: &[u8] = b"proposal";

// Member count bounds, creator included
pub const MIN_MEMBERS: usize = 2;
pub const MAX_MEMBERS: usize = 10;

// Proposal text bounds (bytes)
pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_OPTION_TEXT_LEN: usize = 32;

// Between 2 and 8 options per proposal
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 8;

// Raw instruction bytes handed to the target program on execution
pub const MAX_INSTRUCTION_DATA_LEN: usize = 100;

// Accounts the target instruction is allowed to receive
pub const MAX_INSTRUCTION_ACCOUNTS: usize = 10;

// Option 0 is the approving choice ("Yes")
pub const APPROVE_OPTION_INDEX: usize = 0;

// Votes are accepted until created_at + VOTING_PERIOD (seconds)
pub const VOTING_PERIOD: i64 = 100;
