// Instructions module
// - create_dao
// - create_proposal (members only)
// - vote (members only, once per proposal)
// - finalize_proposal (anyone, after the voting window)
// - execute_proposal (members only, once approved)

pub mod create_dao;
pub mod create_proposal;
pub mod execute_proposal;
pub mod finalize_proposal;
pub mod vote;

pub use create_dao::*;
pub use create_proposal::*;
pub use execute_proposal::*;
pub use finalize_proposal::*;
pub use vote::*;
