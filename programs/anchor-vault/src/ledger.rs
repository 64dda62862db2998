//! Lamport movement and account lifecycle, expressed as System Program CPIs.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    self, allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::{ErrorCode, VAULT_SEED_PREFIX};

/// Who authorizes a lamport transfer out of `from`.
#[derive(Debug, Clone, Copy)]
pub enum TransferAuthority<'a> {
    /// `from` is the owner and signed the transaction.
    Owner,
    /// `from` is the owner's holding PDA; the program signs with its seeds.
    Vault { owner: &'a Pubkey, bump: u8 },
}

pub fn rent_exempt_minimum(space: usize) -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(space))
}

pub fn transfer_lamports<'info>(
    system_program: &Program<'info, System>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
    authority: TransferAuthority,
) -> Result<()> {
    let transfer_accounts = Transfer { from, to };

    match authority {
        TransferAuthority::Owner => transfer(
            CpiContext::new(system_program.to_account_info(), transfer_accounts),
            amount,
        ),
        TransferAuthority::Vault { owner, bump } => {
            let bump_seed = [bump];
            let vault_seeds: &[&[u8]] = &[VAULT_SEED_PREFIX, owner.as_ref(), &bump_seed];
            let signer_seeds = &[vault_seeds];

            transfer(
                CpiContext::new_with_signer(
                    system_program.to_account_info(),
                    transfer_accounts,
                    signer_seeds,
                ),
                amount,
            )
        }
    }
}

/// Creates a rent-exempt account of `space` bytes owned by `owner`, paid by `payer`.
///
/// `new_account` is a PDA; `signer_seeds` are its seeds. An address that
/// already holds lamports cannot go through `create_account`, so it is topped
/// up, allocated and assigned instead.
pub fn create_program_account<'info>(
    system_program: &Program<'info, System>,
    payer: AccountInfo<'info>,
    new_account: AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent_lamports = rent_exempt_minimum(space)?;
    let current_lamports = new_account.lamports();

    if current_lamports == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                CreateAccount {
                    from: payer,
                    to: new_account,
                },
                signer_seeds,
            ),
            rent_lamports,
            space as u64,
            owner,
        );
    }

    let top_up = rent_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.to_account_info(),
                Transfer {
                    from: payer,
                    to: new_account.clone(),
                },
            ),
            top_up,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Allocate {
                account_to_allocate: new_account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Assign {
                account_to_assign: new_account,
            },
            signer_seeds,
        ),
        owner,
    )
}

/// Moves every lamport of a program-owned account to `refund_to` and hands the
/// emptied account back to the System Program.
pub fn close_program_account<'info>(
    account: &AccountInfo<'info>,
    refund_to: &AccountInfo<'info>,
) -> Result<()> {
    let lamports = account.lamports();
    let refunded = refund_to
        .lamports()
        .checked_add(lamports)
        .ok_or(ErrorCode::NumericOverflow)?;

    **refund_to.try_borrow_mut_lamports()? = refunded;
    **account.try_borrow_mut_lamports()? = 0;

    account.assign(&system_program::ID);
    account.realloc(0, false).map_err(Into::into)
}
