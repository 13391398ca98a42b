pub mod dao_info;
pub mod proposal;

pub use dao_info::*;
pub use proposal::*;
