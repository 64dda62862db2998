use anchor_lang::prelude::*;

use crate::{
    ledger::{self, TransferAuthority},
    VaultState, STATE_SEED_PREFIX, VAULT_SEED_PREFIX,
};

#[derive(Accounts)]
pub struct Close<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: ownership and layout are checked by `VaultState::load`.
    #[account(
        mut,
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

pub fn handle_close(ctx: Context<Close>) -> Result<()> {
    let accounts = &ctx.accounts;

    let vault_state = VaultState::load(&accounts.vault_state)?;
    vault_state.verify_bumps(ctx.bumps.vault_state, ctx.bumps.vault)?;

    let user_key = accounts.user.key();
    let vault_balance = accounts.vault.lamports();

    if vault_balance > 0 {
        ledger::transfer_lamports(
            &accounts.system_program,
            accounts.vault.to_account_info(),
            accounts.user.to_account_info(),
            vault_balance,
            TransferAuthority::Vault {
                owner: &user_key,
                bump: vault_state.vault_bump,
            },
        )?;
    }

    let state_rent = accounts.vault_state.lamports();
    ledger::close_program_account(
        &accounts.vault_state.to_account_info(),
        &accounts.user.to_account_info(),
    )?;

    msg!(
        "Closed vault for {}: returned {} lamports from vault, {} lamports of state rent",
        user_key,
        vault_balance,
        state_rent
    );

    Ok(())
}
