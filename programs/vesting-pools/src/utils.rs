use anchor_lang::prelude::*;

use crate::{error::VestingError, state::VestingPool};

/// Unlocked share of `total_amount` under `pool`'s schedule at time `now`.
///
/// The TGE percentage unlocks at `tge_time` and is all that is available
/// through the cliff; the remainder unlocks linearly afterwards, quantized
/// to whole vesting intervals. Every division floors, so rounding can only
/// delay a release, never advance it. Pools are validated at creation
/// (`vesting_interval > 0`), which keeps the interval division safe.
pub fn vested_amount(pool: &VestingPool, total_amount: u64, now: i64) -> Result<u64> {
    if now < pool.tge_time {
        return Ok(0);
    }

    let tge_amount = total_amount
        .checked_mul(pool.tge_percentage as u64)
        .ok_or(VestingError::MathOverflow)?
        / 100;

    let linear_start = pool
        .tge_time
        .checked_add(pool.cliff_duration)
        .ok_or(VestingError::MathOverflow)?;
    if now < linear_start {
        return Ok(tge_amount);
    }

    let elapsed = now - linear_start;
    if elapsed >= pool.vesting_duration {
        return Ok(total_amount);
    }

    // An interval longer than the whole duration degenerates to a single
    // interval: nothing unlocks linearly before full vesting.
    let total_intervals = pool.vesting_duration / pool.vesting_interval;
    if total_intervals == 0 {
        return Ok(tge_amount);
    }

    let intervals_elapsed = elapsed / pool.vesting_interval;
    let linear_amount = total_amount
        .checked_sub(tge_amount)
        .ok_or(VestingError::MathOverflow)?
        .checked_mul(intervals_elapsed as u64)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(total_intervals as u64)
        .ok_or(VestingError::MathOverflow)?;

    tge_amount
        .checked_add(linear_amount)
        .ok_or(VestingError::MathOverflow.into())
}
