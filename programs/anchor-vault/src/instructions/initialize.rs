use anchor_lang::prelude::*;

use crate::{
    ledger::{self, TransferAuthority},
    rules, ErrorCode, VaultState, STATE_SEED_PREFIX, VAULT_SEED_PREFIX, VAULT_SPACE,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: must not exist yet; created by the handler.
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

pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    let accounts = &ctx.accounts;
    let vault_state_info = accounts.vault_state.to_account_info();

    require!(
        !VaultState::exists(&vault_state_info),
        ErrorCode::AlreadyInitialized
    );

    let cost = rules::plan_initialize(
        accounts.user.lamports(),
        ledger::rent_exempt_minimum(accounts.user.data_len())?,
        ledger::rent_exempt_minimum(VaultState::SPACE)?,
        vault_state_info.lamports(),
        ledger::rent_exempt_minimum(VAULT_SPACE)?,
        accounts.vault.lamports(),
    )?;

    let user_key = accounts.user.key();
    let state_bump = ctx.bumps.vault_state;
    let vault_bump = ctx.bumps.vault;

    let state_bump_seed = [state_bump];
    let state_seeds: &[&[u8]] = &[STATE_SEED_PREFIX, user_key.as_ref(), &state_bump_seed];
    ledger::create_program_account(
        &accounts.system_program,
        accounts.user.to_account_info(),
        vault_state_info.clone(),
        VaultState::SPACE,
        ctx.program_id,
        &[state_seeds],
    )?;

    let vault_state = VaultState {
        vault_bump,
        state_bump,
    };
    {
        let mut data = vault_state_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        vault_state.try_serialize(&mut writer)?;
    }

    if cost.vault_top_up > 0 {
        ledger::transfer_lamports(
            &accounts.system_program,
            accounts.user.to_account_info(),
            accounts.vault.to_account_info(),
            cost.vault_top_up,
            TransferAuthority::Owner,
        )?;
    }

    msg!(
        "Initialized vault for {}: state {} (bump {}), vault {} (bump {})",
        user_key,
        vault_state_info.key(),
        state_bump,
        accounts.vault.key(),
        vault_bump
    );

    Ok(())
}
