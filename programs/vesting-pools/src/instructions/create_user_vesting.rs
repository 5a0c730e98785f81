use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::events::UserVestingCreated;
use crate::state::Ledger;

#[derive(Accounts)]
pub struct CreateUserVesting<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        has_one = admin,
    )]
    pub ledger: Account<'info, Ledger>,

    pub admin: Signer<'info>,
}

pub fn create_user_vesting_handler(
    ctx: Context<CreateUserVesting>,
    owner: Pubkey,
    amount: u64,
    pool_id: u64,
    staked: bool,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let vesting_id = ctx
        .accounts
        .ledger
        .create_user_vesting(owner, amount, pool_id, staked)?;

    emit!(UserVestingCreated {
        vesting_id,
        owner,
        pool_id,
        amount,
        staked,
        time: now,
    });

    Ok(vesting_id)
}
