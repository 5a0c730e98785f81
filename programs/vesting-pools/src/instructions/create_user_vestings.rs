use anchor_lang::prelude::*;

use crate::events::UserVestingCreated;

use super::create_user_vesting::CreateUserVesting;

/// Parallel-array batch, applied left to right so allocation checks see
/// earlier elements of the same batch.
pub fn create_user_vestings_handler(
    ctx: Context<CreateUserVesting>,
    owners: Vec<Pubkey>,
    amounts: Vec<u64>,
    pool_ids: Vec<u64>,
    stakeds: Vec<bool>,
) -> Result<Vec<u64>> {
    let now = Clock::get()?.unix_timestamp;
    let vesting_ids = ctx
        .accounts
        .ledger
        .create_user_vestings(&owners, &amounts, &pool_ids, &stakeds)?;

    for (i, &vesting_id) in vesting_ids.iter().enumerate() {
        emit!(UserVestingCreated {
            vesting_id,
            owner: owners[i],
            pool_id: pool_ids[i],
            amount: amounts[i],
            staked: stakeds[i],
            time: now,
        });
    }

    Ok(vesting_ids)
}
