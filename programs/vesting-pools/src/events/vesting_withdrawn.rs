use anchor_lang::prelude::*;

#[event]
pub struct VestingWithdrawn {
    pub vesting_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
    pub time: i64,
}
