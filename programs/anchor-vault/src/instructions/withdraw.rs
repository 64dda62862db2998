use anchor_lang::prelude::*;

use crate::{
    ledger::{self, TransferAuthority},
    rules::{self, Withdrawal},
    VaultState, STATE_SEED_PREFIX, VAULT_SEED_PREFIX, VAULT_SPACE,
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

pub fn handle_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;

    let vault_state = VaultState::load(&accounts.vault_state)?;
    vault_state.verify_bumps(ctx.bumps.vault_state, ctx.bumps.vault)?;

    let withdrawal = rules::plan_withdrawal(
        accounts.vault.lamports(),
        amount,
        ledger::rent_exempt_minimum(VAULT_SPACE)?,
    )?;

    let user_key = accounts.user.key();
    ledger::transfer_lamports(
        &accounts.system_program,
        accounts.vault.to_account_info(),
        accounts.user.to_account_info(),
        amount,
        TransferAuthority::Vault {
            owner: &user_key,
            bump: vault_state.vault_bump,
        },
    )?;

    match withdrawal {
        Withdrawal::Partial { remaining } => msg!(
            "Withdrew {} lamports from vault {} (balance {})",
            amount,
            accounts.vault.key(),
            remaining
        ),
        Withdrawal::Drain => msg!(
            "Withdrew {} lamports, vault {} drained",
            amount,
            accounts.vault.key()
        ),
    }

    Ok(())
}
