pub mod cancel_user_vesting;
pub mod create_pool;
pub mod create_pools;
pub mod create_user_vesting;
pub mod create_user_vestings;
pub mod initialize;
pub mod queries;
pub mod withdraw;
pub mod withdraw_all;

pub use cancel_user_vesting::*;
pub use create_pool::*;
pub use create_pools::*;
pub use create_user_vesting::*;
pub use create_user_vestings::*;
pub use initialize::*;
pub use queries::*;
pub use withdraw::*;
pub use withdraw_all::*;
