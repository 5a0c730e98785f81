use anchor_lang::prelude::*;

#[event]
pub struct UserVestingCreated {
    pub vesting_id: u64,
    pub owner: Pubkey,
    pub pool_id: u64,
    pub amount: u64,
    pub staked: bool,
    pub time: i64,
}
