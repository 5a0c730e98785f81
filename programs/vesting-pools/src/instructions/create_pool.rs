use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::events::PoolCreated;
use crate::state::{Ledger, PoolParams};

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        has_one = admin,
        has_one = mint,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = ledger,
        token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub source_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl CreatePool<'_> {
    /// Move the pool's principal from the admin into the vault.
    pub(crate) fn fund_vault(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.source_token_account.to_account_info(),
            to: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            authority: self.admin.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

pub fn create_pool_handler(ctx: Context<CreatePool>, params: PoolParams) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let pool_id = ctx.accounts.ledger.create_pool(&params)?;
    ctx.accounts.fund_vault(params.total_amount)?;

    emit!(PoolCreated {
        pool_id,
        total_amount: params.total_amount,
        time: now,
    });

    Ok(pool_id)
}
