use anchor_lang::prelude::*;

/// One beneficiary's slice of a pool. Records live in an arena keyed by
/// vesting id and are never removed; cancellation freezes `total_amount`
/// at `withdrawn_amount` and drops the id from the owner's active index.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, InitSpace)]
pub struct UserVesting {
    pub owner: Pubkey,
    pub pool_id: u64,
    pub total_amount: u64,
    pub withdrawn_amount: u64,
    /// Mirrored from creation input; not interpreted by the ledger.
    pub staked: bool,
    pub canceled: bool,
}
