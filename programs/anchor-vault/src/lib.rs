pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod rules;
pub mod state;

pub use constants::{STATE_SEED_PREFIX, VAULT_SEED_PREFIX, VAULT_SPACE};
pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("AVLT6rmLtj4bspVzdFsLSDzRL5DEnYgsy2bCtHbqw31e");

#[program]
pub mod anchor_vault {
    use super::instructions;
    use super::*;

    // owner, funds both accounts
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::handle_initialize(ctx)
    }

    // owner signs the transfer
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::handle_deposit(ctx, amount)
    }

    // vault PDA signs the transfer
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::handle_withdraw(ctx, amount)
    }

    // vault PDA signs, state rent refunded
    pub fn close(ctx: Context<Close>) -> Result<()> {
        instructions::handle_close(ctx)
    }
}
