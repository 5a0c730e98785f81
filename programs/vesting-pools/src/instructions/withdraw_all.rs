use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::events::VestingWithdrawn;

use super::withdraw::Withdraw;

/// Claims every active vesting of the caller at one evaluation instant
/// and pays the sum in a single transfer.
pub fn withdraw_all_handler(ctx: Context<Withdraw>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.beneficiary.key();

    let claims = ctx.accounts.ledger.claim_all(&owner, now)?;
    let mut total = 0u64;
    for &(_, amount) in &claims {
        total = total
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
    }
    if total == 0 {
        return Ok(0);
    }
    ctx.accounts.pay_out(total)?;

    for (vesting_id, amount) in claims {
        emit!(VestingWithdrawn {
            vesting_id,
            owner,
            amount,
            time: now,
        });
    }

    Ok(total)
}
