#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
use solana_security_txt::security_txt;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Vesting Pools Program",
    project_url: "https://github.com/vesting-pools/vesting-pools",
    policy: "https://github.com/vesting-pools/vesting-pools/blob/main/SECURITY.md",
    contacts: "mailto:security@vesting-pools.dev",
    preferred_languages: "en",
    source_code: "https://github.com/vesting-pools/vesting-pools"
}

#[program]
pub mod vesting_pools {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::initialize_handler(ctx)
    }

    pub fn create_pool(ctx: Context<CreatePool>, params: PoolParams) -> Result<u64> {
        create_pool::create_pool_handler(ctx, params)
    }

    pub fn create_pools(ctx: Context<CreatePool>, params: Vec<PoolParams>) -> Result<Vec<u64>> {
        create_pools::create_pools_handler(ctx, params)
    }

    pub fn create_user_vesting(
        ctx: Context<CreateUserVesting>,
        owner: Pubkey,
        amount: u64,
        pool_id: u64,
        staked: bool,
    ) -> Result<u64> {
        create_user_vesting::create_user_vesting_handler(ctx, owner, amount, pool_id, staked)
    }

    pub fn create_user_vestings(
        ctx: Context<CreateUserVesting>,
        owners: Vec<Pubkey>,
        amounts: Vec<u64>,
        pool_ids: Vec<u64>,
        stakeds: Vec<bool>,
    ) -> Result<Vec<u64>> {
        create_user_vestings::create_user_vestings_handler(ctx, owners, amounts, pool_ids, stakeds)
    }

    pub fn withdraw(ctx: Context<Withdraw>, vesting_id: u64) -> Result<u64> {
        withdraw::withdraw_handler(ctx, vesting_id)
    }

    pub fn withdraw_all(ctx: Context<Withdraw>) -> Result<u64> {
        withdraw_all::withdraw_all_handler(ctx)
    }

    pub fn cancel_user_vesting(
        ctx: Context<CancelUserVesting>,
        pool_id: u64,
        vesting_id: u64,
    ) -> Result<()> {
        cancel_user_vesting::cancel_user_vesting_handler(ctx, pool_id, vesting_id)
    }

    pub fn get_vesting_pool(ctx: Context<ReadLedger>, pool_id: u64) -> Result<VestingPool> {
        queries::get_vesting_pool_handler(ctx, pool_id)
    }

    pub fn get_vesting_params(ctx: Context<ReadLedger>, pool_id: u64) -> Result<VestingSchedule> {
        queries::get_vesting_params_handler(ctx, pool_id)
    }

    pub fn wallet_info(ctx: Context<ReadLedger>, address: Pubkey) -> Result<WalletInfo> {
        queries::wallet_info_handler(ctx, address)
    }

    pub fn user_vestings_length(ctx: Context<ReadLedger>, address: Pubkey) -> Result<u64> {
        queries::user_vestings_length_handler(ctx, address)
    }

    pub fn user_vestings_ids(ctx: Context<ReadLedger>, address: Pubkey) -> Result<Vec<u64>> {
        queries::user_vestings_ids_handler(ctx, address)
    }
}
