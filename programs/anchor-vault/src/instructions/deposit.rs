use anchor_lang::prelude::*;

use crate::{
    ledger::{self, TransferAuthority},
    rules, VaultState, STATE_SEED_PREFIX, VAULT_SEED_PREFIX, VAULT_SPACE,
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: ownership and layout are checked by `VaultState::load`.
    #[account(
        seeds = [STATE_SEED_PREFIX, user.key().as_ref()],
        bump
    )]
    pub vault_state: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED_PREFIX, user.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;

    let vault_state = VaultState::load(&accounts.vault_state)?;
    vault_state.verify_bumps(ctx.bumps.vault_state, ctx.bumps.vault)?;

    let new_balance = rules::plan_deposit(
        accounts.user.lamports(),
        ledger::rent_exempt_minimum(accounts.user.data_len())?,
        accounts.vault.lamports(),
        amount,
        ledger::rent_exempt_minimum(VAULT_SPACE)?,
    )?;

    ledger::transfer_lamports(
        &accounts.system_program,
        accounts.user.to_account_info(),
        accounts.vault.to_account_info(),
        amount,
        TransferAuthority::Owner,
    )?;

    msg!(
        "Deposited {} lamports into vault {} (balance {})",
        amount,
        accounts.vault.key(),
        new_balance
    );

    Ok(())
}
