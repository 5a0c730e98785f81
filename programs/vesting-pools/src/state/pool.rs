use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Creation input for a vesting pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct PoolParams {
    pub tge_percentage: u8,
    pub tge_time: i64,
    pub cliff_duration: i64,
    pub vesting_duration: i64,
    pub vesting_interval: i64,
    pub total_amount: u64,
}

impl PoolParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.tge_percentage <= 100, VestingError::InvalidTgePercentage);
        require!(
            self.cliff_duration >= 0 && self.vesting_duration >= 0,
            VestingError::InvalidDuration
        );
        require!(self.vesting_interval > 0, VestingError::InvalidInterval);
        require!(self.total_amount > 0, VestingError::InvalidAmount);
        Ok(())
    }
}

/// A funded release schedule. Immutable after creation except for
/// `allocated_amount`, which moves only through `try_allocate` and `release`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, InitSpace)]
pub struct VestingPool {
    pub tge_percentage: u8,
    pub tge_time: i64,
    pub cliff_duration: i64,
    pub vesting_duration: i64,
    pub vesting_interval: i64,
    pub total_amount: u64,
    pub allocated_amount: u64,
}

impl VestingPool {
    pub fn new(params: &PoolParams) -> Self {
        Self {
            tge_percentage: params.tge_percentage,
            tge_time: params.tge_time,
            cliff_duration: params.cliff_duration,
            vesting_duration: params.vesting_duration,
            vesting_interval: params.vesting_interval,
            total_amount: params.total_amount,
            allocated_amount: 0,
        }
    }

    /// Schedule-only subset for external display.
    pub fn schedule(&self) -> VestingSchedule {
        VestingSchedule {
            tge_percentage: self.tge_percentage,
            tge_time: self.tge_time,
            cliff_duration: self.cliff_duration,
            vesting_duration: self.vesting_duration,
            vesting_interval: self.vesting_interval,
        }
    }

    /// Promise `amount` of this pool's principal to a user vesting.
    /// The cumulative allocation may never exceed the funded total.
    pub fn try_allocate(&mut self, amount: u64) -> Result<()> {
        let allocated = self
            .allocated_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        require!(allocated <= self.total_amount, VestingError::TooMuchAllocated);
        self.allocated_amount = allocated;
        Ok(())
    }

    /// Return unvested principal to the pool's headroom on cancellation.
    pub fn release(&mut self, amount: u64) -> Result<()> {
        self.allocated_amount = self
            .allocated_amount
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }
}

/// Schedule parameters without the pool's amounts.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub tge_percentage: u8,
    pub tge_time: i64,
    pub cliff_duration: i64,
    pub vesting_duration: i64,
    pub vesting_interval: i64,
}
