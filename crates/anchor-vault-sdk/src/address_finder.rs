use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program::ID as SYSTEM_PROGRAM_ID;
use anchor_vault::{ID as VAULT_PROGRAM_ID, STATE_SEED_PREFIX, VAULT_SEED_PREFIX};

use crate::{VaultSdkError, VaultSdkResult};

/// Domain-separation tag of a vault PDA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedTag {
    /// The VaultState record.
    State,
    /// The holding account.
    Vault,
}

impl SeedTag {
    pub fn prefix(self) -> &'static [u8] {
        match self {
            SeedTag::State => STATE_SEED_PREFIX,
            SeedTag::Vault => VAULT_SEED_PREFIX,
        }
    }
}

impl std::fmt::Display for SeedTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedTag::State => write!(f, "state"),
            SeedTag::Vault => write!(f, "vault"),
        }
    }
}

/// Both PDAs of one owner's vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAddresses {
    pub owner: Pubkey,
    pub vault_state: Pubkey,
    pub state_bump: u8,
    pub vault: Pubkey,
    pub vault_bump: u8,
}

pub struct AddressFinder {
    pub program_id: Pubkey,
    pub system_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey, system_program_id: Pubkey) -> Self {
        Self {
            program_id,
            system_program_id,
        }
    }

    /// Finds the canonical (highest off-curve) bump for `tag` and `owner`.
    pub fn derive(&self, tag: SeedTag, owner: &Pubkey) -> VaultSdkResult<(Pubkey, u8)> {
        Pubkey::try_find_program_address(&[tag.prefix(), owner.as_ref()], &self.program_id)
            .ok_or(VaultSdkError::DerivationExhausted { tag, owner: *owner })
    }

    pub fn find_vault_state_address(&self, owner: &Pubkey) -> VaultSdkResult<(Pubkey, u8)> {
        self.derive(SeedTag::State, owner)
    }

    pub fn find_vault_address(&self, owner: &Pubkey) -> VaultSdkResult<(Pubkey, u8)> {
        self.derive(SeedTag::Vault, owner)
    }

    pub fn find_vault_addresses(&self, owner: &Pubkey) -> VaultSdkResult<VaultAddresses> {
        let (vault_state, state_bump) = self.find_vault_state_address(owner)?;
        let (vault, vault_bump) = self.find_vault_address(owner)?;

        Ok(VaultAddresses {
            owner: *owner,
            vault_state,
            state_bump,
            vault,
            vault_bump,
        })
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(VAULT_PROGRAM_ID, SYSTEM_PROGRAM_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let finder = AddressFinder::default();
        let owner = Pubkey::new_unique();

        for tag in [SeedTag::State, SeedTag::Vault] {
            let first = finder.derive(tag, &owner).unwrap();
            let second = finder.derive(tag, &owner).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_state_and_vault_addresses_differ() {
        let finder = AddressFinder::default();

        for _ in 0..32 {
            let addresses = finder.find_vault_addresses(&Pubkey::new_unique()).unwrap();
            assert_ne!(addresses.vault_state, addresses.vault);
        }
    }

    #[test]
    fn test_derived_addresses_are_off_curve() {
        let finder = AddressFinder::default();
        let addresses = finder.find_vault_addresses(&Pubkey::new_unique()).unwrap();

        assert!(!addresses.vault_state.is_on_curve());
        assert!(!addresses.vault.is_on_curve());
    }

    #[test]
    fn test_matches_seed_layout() {
        let finder = AddressFinder::default();
        let owner = Pubkey::new_unique();
        let addresses = finder.find_vault_addresses(&owner).unwrap();

        let expected_state = Pubkey::create_program_address(
            &[b"state", owner.as_ref(), &[addresses.state_bump]],
            &VAULT_PROGRAM_ID,
        )
        .unwrap();
        let expected_vault = Pubkey::create_program_address(
            &[b"vault", owner.as_ref(), &[addresses.vault_bump]],
            &VAULT_PROGRAM_ID,
        )
        .unwrap();

        assert_eq!(addresses.vault_state, expected_state);
        assert_eq!(addresses.vault, expected_vault);
    }

    #[test]
    fn test_owners_do_not_share_addresses() {
        let finder = AddressFinder::default();
        let a = finder.find_vault_addresses(&Pubkey::new_unique()).unwrap();
        let b = finder.find_vault_addresses(&Pubkey::new_unique()).unwrap();

        assert_ne!(a.vault_state, b.vault_state);
        assert_ne!(a.vault, b.vault);
    }

    #[test]
    fn test_program_id_scopes_derivation() {
        let owner = Pubkey::new_unique();
        let default_finder = AddressFinder::default();
        let other_finder = AddressFinder::new(Pubkey::new_unique(), SYSTEM_PROGRAM_ID);

        assert_ne!(
            default_finder.find_vault_state_address(&owner).unwrap().0,
            other_finder.find_vault_state_address(&owner).unwrap().0
        );
    }
}
