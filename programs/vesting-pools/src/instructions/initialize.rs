use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::state::Ledger;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        seeds = [LEDGER_SEED],
        bump,
        payer = admin,
        space = 8 + Ledger::INIT_SPACE,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = ledger,
        token::token_program = token_program,
        payer = admin,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.admin = ctx.accounts.admin.key();
    ledger.mint = ctx.accounts.mint.key();
    ledger.bump = ctx.bumps.ledger;
    ledger.pools = Vec::new();
    ledger.vestings = Vec::new();
    ledger.wallets = Vec::new();
    Ok(())
}
