use anchor_lang::AccountDeserialize;
use anchor_vault::VaultState;
use solana_sdk::{account::Account, pubkey::Pubkey};

use crate::{VaultSdkError, VaultSdkResult};

/// Decodes a VaultState record from raw account data.
pub fn try_decode_vault_state(data: &[u8]) -> VaultSdkResult<VaultState> {
    VaultState::try_deserialize(&mut &data[..])
        .map_err(|e| VaultSdkError::InvalidVaultState(e.to_string()))
}

/// Like [`try_decode_vault_state`], treating anything undecodable as "not found".
pub fn decode_vault_state(data: &[u8]) -> Option<VaultState> {
    try_decode_vault_state(data).ok()
}

/// What a client can observe about a holding account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldingAccountInfo {
    pub exists: bool,
    pub lamports: u64,
    pub owner_program: Option<Pubkey>,
}

impl HoldingAccountInfo {
    /// A zero-lamport account is gone from the ledger even if a stale entry is returned.
    pub fn from_account(account: Option<&Account>) -> Self {
        match account {
            Some(account) if account.lamports > 0 => Self {
                exists: true,
                lamports: account.lamports,
                owner_program: Some(account.owner),
            },
            _ => Self {
                exists: false,
                lamports: 0,
                owner_program: None,
            },
        }
    }
}
