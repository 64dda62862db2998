use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The vault for this owner has already been initialized.")]
    AlreadyInitialized,
    #[msg("The vault for this owner has not been initialized.")]
    NotInitialized,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("The owner does not have enough lamports for this operation.")]
    InsufficientFunds,
    #[msg("The vault balance would fall below the rent-exempt minimum without being fully drained.")]
    InsufficientVaultFunds,
    #[msg("Stored bump does not match the canonical PDA bump.")]
    BumpMismatch,
    #[msg("A calculation resulted in a numeric overflow.")]
    NumericOverflow,
}
