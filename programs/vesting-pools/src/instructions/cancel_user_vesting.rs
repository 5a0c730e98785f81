use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::events::UserVestingCanceled;
use crate::state::Ledger;

#[derive(Accounts)]
pub struct CancelUserVesting<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        has_one = admin,
    )]
    pub ledger: Account<'info, Ledger>,

    pub admin: Signer<'info>,
}

pub fn cancel_user_vesting_handler(
    ctx: Context<CancelUserVesting>,
    pool_id: u64,
    vesting_id: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let unvested = ctx.accounts.ledger.cancel(pool_id, vesting_id, now)?;

    emit!(UserVestingCanceled {
        vesting_id,
        pool_id,
        unvested,
        time: now,
    });

    Ok(())
}
