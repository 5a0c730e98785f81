use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::events::VestingWithdrawn;
use crate::state::Ledger;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
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
        init_if_needed,
        payer = beneficiary,
        associated_token::authority = beneficiary,
        associated_token::mint = mint,
        associated_token::token_program = token_program,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl Withdraw<'_> {
    pub(crate) fn pay_out(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            to: self.beneficiary_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            authority: self.ledger.to_account_info(),
        };

        let signer_seeds: &[&[u8]] = &[LEDGER_SEED, &[self.ledger.bump]];
        let s = &[signer_seeds];
        let cpi_ctx =
            CpiContext::new_with_signer(self.token_program.to_account_info(), cpi_accounts, s);
        token_interface::transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

pub fn withdraw_handler(ctx: Context<Withdraw>, vesting_id: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.beneficiary.key();

    // Bookkeeping commits before the transfer is requested.
    let amount = ctx.accounts.ledger.claim(&owner, vesting_id, now)?;
    if amount == 0 {
        // Nothing newly unlocked; repeated calls are harmless.
        return Ok(0);
    }
    ctx.accounts.pay_out(amount)?;

    emit!(VestingWithdrawn {
        vesting_id,
        owner,
        amount,
        time: now,
    });

    Ok(amount)
}
