pub mod ledger;
pub mod pool;
pub mod user_vesting;

pub use ledger::*;
pub use pool::*;
pub use user_vesting::*;
