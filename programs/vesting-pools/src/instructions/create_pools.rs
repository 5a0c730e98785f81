use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::events::PoolCreated;
use crate::state::PoolParams;

use super::create_pool::CreatePool;

/// All-or-nothing batch creation; the vault is funded with the batch sum
/// in a single transfer.
pub fn create_pools_handler(ctx: Context<CreatePool>, params: Vec<PoolParams>) -> Result<Vec<u64>> {
    let now = Clock::get()?.unix_timestamp;
    let pool_ids = ctx.accounts.ledger.create_pools(&params)?;

    let mut funded = 0u64;
    for p in &params {
        funded = funded
            .checked_add(p.total_amount)
            .ok_or(VestingError::MathOverflow)?;
    }
    ctx.accounts.fund_vault(funded)?;

    for (&pool_id, p) in pool_ids.iter().zip(&params) {
        emit!(PoolCreated {
            pool_id,
            total_amount: p.total_amount,
            time: now,
        });
    }

    Ok(pool_ids)
}
