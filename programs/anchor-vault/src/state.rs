use anchor_lang::prelude::*;

use crate::ErrorCode;

#[account] // seed [STATE_SEED_PREFIX, owner]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VaultState {
    /// Bump seed for the holding (vault) PDA.
    pub vault_bump: u8,

    /// Bump seed for this VaultState PDA.
    pub state_bump: u8,
}

impl VaultState {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Reads the record behind `info`.
    ///
    /// A record exists only while the account is owned by this program and
    /// carries data; anything else means the vault was never initialized or
    /// has been closed.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return err!(ErrorCode::NotInitialized);
        }

        let data = info.try_borrow_data()?;
        VaultState::try_deserialize(&mut &data[..])
    }

    pub fn exists(info: &AccountInfo) -> bool {
        info.owner == &crate::ID && !info.data_is_empty()
    }

    /// Stored bumps must be the canonical ones found by the `seeds` constraints.
    pub fn verify_bumps(&self, state_bump: u8, vault_bump: u8) -> Result<()> {
        require_eq!(self.state_bump, state_bump, ErrorCode::BumpMismatch);
        require_eq!(self.vault_bump, vault_bump, ErrorCode::BumpMismatch);
        Ok(())
    }
}
