use anchor_lang::prelude::*;

#[event]
pub struct UserVestingCanceled {
    /// The canceled vesting record.
    pub vesting_id: u64,
    pub pool_id: u64,
    /// Unvested amount returned to the pool's allocation headroom.
    pub unvested: u64,
    /// When the cancellation occurred.
    pub time: i64,
}
