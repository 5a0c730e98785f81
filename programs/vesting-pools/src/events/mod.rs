pub mod pool_created;
pub mod user_vesting_canceled;
pub mod user_vesting_created;
pub mod vesting_withdrawn;

pub use pool_created::*;
pub use user_vesting_canceled::*;
pub use user_vesting_created::*;
pub use vesting_withdrawn::*;
