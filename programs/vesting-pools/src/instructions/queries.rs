use anchor_lang::prelude::*;

use crate::state::{Ledger, VestingPool, VestingSchedule, WalletInfo};

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    pub ledger: Account<'info, Ledger>,
    pub signer: Signer<'info>,
}

pub fn get_vesting_pool_handler(ctx: Context<ReadLedger>, pool_id: u64) -> Result<VestingPool> {
    ctx.accounts.ledger.pool(pool_id).copied()
}

pub fn get_vesting_params_handler(
    ctx: Context<ReadLedger>,
    pool_id: u64,
) -> Result<VestingSchedule> {
    Ok(ctx.accounts.ledger.pool(pool_id)?.schedule())
}

pub fn wallet_info_handler(ctx: Context<ReadLedger>, address: Pubkey) -> Result<WalletInfo> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.ledger.wallet_info(&address, now)
}

pub fn user_vestings_length_handler(ctx: Context<ReadLedger>, address: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.ledger.user_vestings_length(&address))
}

pub fn user_vestings_ids_handler(ctx: Context<ReadLedger>, address: Pubkey) -> Result<Vec<u64>> {
    Ok(ctx.accounts.ledger.user_vestings_ids(&address).to_vec())
}
