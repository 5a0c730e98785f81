use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub pool_id: u64,
    pub total_amount: u64,
    pub time: i64,
}
