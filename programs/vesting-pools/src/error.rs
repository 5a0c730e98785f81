use anchor_lang::prelude::*;

#[error_code]
pub enum VestingError {
    #[msg("Vesting pool not found.")]
    PoolNotFound,
    #[msg("User vesting not found.")]
    VestingNotFound,
    #[msg("TGE percentage must be between 0 and 100.")]
    InvalidTgePercentage,
    #[msg("Durations must not be negative.")]
    InvalidDuration,
    #[msg("Vesting interval must be positive.")]
    InvalidInterval,
    #[msg("Amount must be positive.")]
    InvalidAmount,
    #[msg("Batch arrays must be of equal length.")]
    LengthMismatch,
    #[msg("too much allocated")]
    TooMuchAllocated,
    #[msg("User vesting has already been canceled.")]
    AlreadyCanceled,
    #[msg("Ledger capacity exhausted.")]
    LedgerFull,
    #[msg("Math overflow.")]
    MathOverflow,
}
