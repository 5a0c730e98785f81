use anchor_lang::prelude::*;

use crate::constants::{MAX_POOLS, MAX_USER_VESTINGS, MAX_VESTINGS_PER_WALLET, MAX_WALLETS};
use crate::error::VestingError;
use crate::utils;

use super::{PoolParams, UserVesting, VestingPool};

/// The whole vesting ledger: pool registry, user-vesting arena and the
/// per-wallet active index. Lives in a single PDA; every instruction
/// mutates it through the methods below with `now` sampled once.
#[account]
#[derive(InitSpace)]
pub struct Ledger {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub bump: u8,
    #[max_len(MAX_POOLS)]
    pub pools: Vec<VestingPool>,
    #[max_len(MAX_USER_VESTINGS)]
    pub vestings: Vec<UserVesting>,
    #[max_len(MAX_WALLETS)]
    pub wallets: Vec<WalletVestings>,
}

/// Active index entry: ids of a wallet's non-canceled vestings, in
/// creation order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, InitSpace)]
pub struct WalletVestings {
    pub owner: Pubkey,
    #[max_len(MAX_VESTINGS_PER_WALLET)]
    pub ids: Vec<u64>,
}

/// Aggregate view over a wallet's active vestings.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalletInfo {
    pub total: u64,
    pub withdrawn: u64,
    pub available: u64,
}

impl Ledger {
    pub fn pool(&self, pool_id: u64) -> Result<&VestingPool> {
        self.pools
            .get(pool_id as usize)
            .ok_or(VestingError::PoolNotFound.into())
    }

    fn pool_mut(&mut self, pool_id: u64) -> Result<&mut VestingPool> {
        self.pools
            .get_mut(pool_id as usize)
            .ok_or(VestingError::PoolNotFound.into())
    }

    pub fn user_vesting(&self, vesting_id: u64) -> Result<&UserVesting> {
        self.vestings
            .get(vesting_id as usize)
            .ok_or(VestingError::VestingNotFound.into())
    }

    pub fn create_pool(&mut self, params: &PoolParams) -> Result<u64> {
        params.validate()?;
        require!(self.pools.len() < MAX_POOLS, VestingError::LedgerFull);

        let pool_id = self.pools.len() as u64;
        self.pools.push(VestingPool::new(params));
        Ok(pool_id)
    }

    /// All-or-nothing batch: every element is validated before any pool is
    /// created, so a rejected batch leaves the registry untouched.
    pub fn create_pools(&mut self, params: &[PoolParams]) -> Result<Vec<u64>> {
        for p in params {
            p.validate()?;
        }
        require!(
            self.pools.len() + params.len() <= MAX_POOLS,
            VestingError::LedgerFull
        );

        let mut pool_ids = Vec::with_capacity(params.len());
        for p in params {
            pool_ids.push(self.pools.len() as u64);
            self.pools.push(VestingPool::new(p));
        }
        Ok(pool_ids)
    }

    pub fn create_user_vesting(
        &mut self,
        owner: Pubkey,
        amount: u64,
        pool_id: u64,
        staked: bool,
    ) -> Result<u64> {
        self.pool(pool_id)?;
        require!(amount > 0, VestingError::InvalidAmount);
        require!(
            self.vestings.len() < MAX_USER_VESTINGS,
            VestingError::LedgerFull
        );
        require!(self.wallet_has_room(&owner), VestingError::LedgerFull);

        self.pool_mut(pool_id)?.try_allocate(amount)?;

        let vesting_id = self.vestings.len() as u64;
        self.vestings.push(UserVesting {
            owner,
            pool_id,
            total_amount: amount,
            withdrawn_amount: 0,
            staked,
            canceled: false,
        });
        self.wallet_entry_mut(owner).ids.push(vesting_id);
        Ok(vesting_id)
    }

    /// Element-wise creation over parallel arrays, applied left to right so
    /// earlier elements consume allocation seen by later ones. The batch is
    /// validated in full first (projecting cumulative per-pool allocation),
    /// so a failing batch leaves the ledger untouched.
    pub fn create_user_vestings(
        &mut self,
        owners: &[Pubkey],
        amounts: &[u64],
        pool_ids: &[u64],
        stakeds: &[bool],
    ) -> Result<Vec<u64>> {
        require!(
            owners.len() == amounts.len()
                && owners.len() == pool_ids.len()
                && owners.len() == stakeds.len(),
            VestingError::LengthMismatch
        );

        let mut pending_by_pool: Vec<(u64, u64)> = Vec::new();
        for (&amount, &pool_id) in amounts.iter().zip(pool_ids) {
            let pool = self.pool(pool_id)?;
            require!(amount > 0, VestingError::InvalidAmount);

            let pending = match pending_by_pool.iter().position(|(id, _)| *id == pool_id) {
                Some(pos) => {
                    let entry = &mut pending_by_pool[pos];
                    entry.1 = entry
                        .1
                        .checked_add(amount)
                        .ok_or(VestingError::MathOverflow)?;
                    entry.1
                }
                None => {
                    pending_by_pool.push((pool_id, amount));
                    amount
                }
            };
            let projected = pool
                .allocated_amount
                .checked_add(pending)
                .ok_or(VestingError::MathOverflow)?;
            require!(projected <= pool.total_amount, VestingError::TooMuchAllocated);
        }

        require!(
            self.vestings.len() + owners.len() <= MAX_USER_VESTINGS,
            VestingError::LedgerFull
        );
        let mut new_wallets = 0;
        for (i, owner) in owners.iter().enumerate() {
            if owners[..i].contains(owner) {
                continue;
            }
            let incoming = owners.iter().filter(|o| *o == owner).count();
            match self.wallets.iter().find(|w| w.owner == *owner) {
                Some(wallet) => require!(
                    wallet.ids.len() + incoming <= MAX_VESTINGS_PER_WALLET,
                    VestingError::LedgerFull
                ),
                None => {
                    require!(
                        incoming <= MAX_VESTINGS_PER_WALLET,
                        VestingError::LedgerFull
                    );
                    new_wallets += 1;
                }
            }
        }
        require!(
            self.wallets.len() + new_wallets <= MAX_WALLETS,
            VestingError::LedgerFull
        );

        let mut vesting_ids = Vec::with_capacity(owners.len());
        for i in 0..owners.len() {
            vesting_ids.push(self.create_user_vesting(
                owners[i],
                amounts[i],
                pool_ids[i],
                stakeds[i],
            )?);
        }
        Ok(vesting_ids)
    }

    /// Claim everything unlocked but not yet withdrawn on one record.
    /// A zero claimable amount is a harmless no-op, not an error.
    pub fn claim(&mut self, owner: &Pubkey, vesting_id: u64, now: i64) -> Result<u64> {
        let record = *self.user_vesting(vesting_id)?;
        require!(record.owner == *owner, VestingError::VestingNotFound);
        require!(!record.canceled, VestingError::AlreadyCanceled);

        let vested = utils::vested_amount(self.pool(record.pool_id)?, record.total_amount, now)?;
        let claimable = vested.saturating_sub(record.withdrawn_amount);
        if claimable == 0 {
            return Ok(0);
        }

        let record = &mut self.vestings[vesting_id as usize];
        record.withdrawn_amount = record
            .withdrawn_amount
            .checked_add(claimable)
            .ok_or(VestingError::MathOverflow)?;
        Ok(claimable)
    }

    /// Claim across the owner's whole active index at a single evaluation
    /// instant. Returns the (vesting id, amount) pairs actually paid.
    pub fn claim_all(&mut self, owner: &Pubkey, now: i64) -> Result<Vec<(u64, u64)>> {
        let ids = self.user_vestings_ids(owner).to_vec();
        let mut claims = Vec::new();
        for vesting_id in ids {
            let amount = self.claim(owner, vesting_id, now)?;
            if amount > 0 {
                claims.push((vesting_id, amount));
            }
        }
        Ok(claims)
    }

    /// Terminate a record early. The unvested remainder goes back to the
    /// pool's headroom; the record's principal is frozen at what was already
    /// withdrawn, so any vested-but-unwithdrawn slice is forfeited.
    /// Returns the released (unvested) amount.
    pub fn cancel(&mut self, pool_id: u64, vesting_id: u64, now: i64) -> Result<u64> {
        let record = *self.user_vesting(vesting_id)?;
        require!(record.pool_id == pool_id, VestingError::VestingNotFound);
        require!(!record.canceled, VestingError::AlreadyCanceled);

        let vested = utils::vested_amount(self.pool(pool_id)?, record.total_amount, now)?;
        let unvested = record
            .total_amount
            .checked_sub(vested)
            .ok_or(VestingError::MathOverflow)?;
        self.pool_mut(pool_id)?.release(unvested)?;

        let frozen = &mut self.vestings[vesting_id as usize];
        frozen.total_amount = frozen.withdrawn_amount;
        frozen.canceled = true;
        self.remove_from_index(&record.owner, vesting_id);
        Ok(unvested)
    }

    /// Aggregate (total, withdrawn, available) over the wallet's active
    /// index; canceled records no longer contribute.
    pub fn wallet_info(&self, owner: &Pubkey, now: i64) -> Result<WalletInfo> {
        let mut info = WalletInfo::default();
        for &vesting_id in self.user_vestings_ids(owner) {
            let record = &self.vestings[vesting_id as usize];
            let vested = utils::vested_amount(self.pool(record.pool_id)?, record.total_amount, now)?;
            info.total = info
                .total
                .checked_add(record.total_amount)
                .ok_or(VestingError::MathOverflow)?;
            info.withdrawn = info
                .withdrawn
                .checked_add(record.withdrawn_amount)
                .ok_or(VestingError::MathOverflow)?;
            info.available = info
                .available
                .checked_add(
                    vested
                        .checked_sub(record.withdrawn_amount)
                        .ok_or(VestingError::MathOverflow)?,
                )
                .ok_or(VestingError::MathOverflow)?;
        }
        Ok(info)
    }

    pub fn user_vestings_ids(&self, owner: &Pubkey) -> &[u64] {
        self.wallets
            .iter()
            .find(|w| w.owner == *owner)
            .map(|w| w.ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn user_vestings_length(&self, owner: &Pubkey) -> u64 {
        self.user_vestings_ids(owner).len() as u64
    }

    fn wallet_has_room(&self, owner: &Pubkey) -> bool {
        match self.wallets.iter().find(|w| w.owner == *owner) {
            Some(wallet) => wallet.ids.len() < MAX_VESTINGS_PER_WALLET,
            None => self.wallets.len() < MAX_WALLETS,
        }
    }

    fn wallet_entry_mut(&mut self, owner: Pubkey) -> &mut WalletVestings {
        let pos = match self.wallets.iter().position(|w| w.owner == owner) {
            Some(pos) => pos,
            None => {
                self.wallets.push(WalletVestings {
                    owner,
                    ids: Vec::new(),
                });
                self.wallets.len() - 1
            }
        };
        &mut self.wallets[pos]
    }

    fn remove_from_index(&mut self, owner: &Pubkey, vesting_id: u64) {
        if let Some(wallet) = self.wallets.iter_mut().find(|w| w.owner == *owner) {
            if let Some(pos) = wallet.ids.iter().position(|&id| id == vesting_id) {
                // Shifting removal keeps the remaining ids in creation order.
                wallet.ids.remove(pos);
            }
        }
    }
}
