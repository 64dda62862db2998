use anchor_lang::error::ERROR_CODE_OFFSET;
use anchor_vault::ErrorCode;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::SeedTag;

pub type VaultSdkResult<T> = Result<T, VaultSdkError>;

#[derive(Error, Debug)]
pub enum VaultSdkError {
    #[error("No bump produces an off-curve {tag} address for owner {owner}")]
    DerivationExhausted { tag: SeedTag, owner: Pubkey },

    #[error("Account data is not a VaultState record: {0}")]
    InvalidVaultState(String),
}

/// A vault program failure recovered from a transaction's custom error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultProgramError {
    AlreadyInitialized,
    NotInitialized,
    InvalidAmount,
    InsufficientFunds,
    InsufficientVaultFunds,
    BumpMismatch,
    NumericOverflow,
}

impl VaultProgramError {
    pub const ALL: [VaultProgramError; 7] = [
        VaultProgramError::AlreadyInitialized,
        VaultProgramError::NotInitialized,
        VaultProgramError::InvalidAmount,
        VaultProgramError::InsufficientFunds,
        VaultProgramError::InsufficientVaultFunds,
        VaultProgramError::BumpMismatch,
        VaultProgramError::NumericOverflow,
    ];

    /// The code the program reports in `InstructionError::Custom`.
    pub fn code(self) -> u32 {
        let error = match self {
            VaultProgramError::AlreadyInitialized => ErrorCode::AlreadyInitialized,
            VaultProgramError::NotInitialized => ErrorCode::NotInitialized,
            VaultProgramError::InvalidAmount => ErrorCode::InvalidAmount,
            VaultProgramError::InsufficientFunds => ErrorCode::InsufficientFunds,
            VaultProgramError::InsufficientVaultFunds => ErrorCode::InsufficientVaultFunds,
            VaultProgramError::BumpMismatch => ErrorCode::BumpMismatch,
            VaultProgramError::NumericOverflow => ErrorCode::NumericOverflow,
        };
        error as u32 + ERROR_CODE_OFFSET
    }

    pub fn from_custom_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|error| error.code() == code)
    }
}

impl std::fmt::Display for VaultProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
