use anchor_vault::VaultState;
use solana_pubkey::Pubkey;

use crate::TestFixture;

/// Everything observable about one owner's vault, for before/after comparisons.
///
/// A rejected transition must leave the snapshot identical; an accepted one
/// should only move the balances it names (see [`AccountChange`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultSnapshot {
    pub owner: Pubkey,
    pub owner_balance: u64,
    pub holding_balance: u64,
    pub holding_exists: bool,
    pub vault_state: Option<VaultState>,
    pub vault_state_balance: u64,
}

impl VaultSnapshot {
    pub fn capture(test: &TestFixture, owner: &Pubkey) -> Self {
        let addresses = test.vault_addresses(owner);
        let holding = test.fetch_holding_account(owner);

        Self {
            owner: *owner,
            owner_balance: test.balance(owner),
            holding_balance: holding.lamports,
            holding_exists: holding.exists,
            vault_state: test.fetch_vault_state(owner),
            vault_state_balance: test.balance(&addresses.vault_state),
        }
    }

    /// Lamports held by the owner and both PDAs together.
    pub fn total_lamports(&self) -> u64 {
        self.owner_balance + self.holding_balance + self.vault_state_balance
    }

    /// Assert that each listed balance moved by exactly its delta and that
    /// every balance not listed stayed put.
    pub fn assert_only_changed(&self, after: &Self, expected_changes: &[AccountChange]) {
        let mut owner_delta = 0i128;
        let mut holding_delta = 0i128;
        let mut vault_state_delta = 0i128;

        for change in expected_changes {
            match change {
                AccountChange::Owner { delta } => owner_delta = *delta as i128,
                AccountChange::Holding { delta } => holding_delta = *delta as i128,
                AccountChange::VaultState { delta } => vault_state_delta = *delta as i128,
            }
        }

        assert_eq!(
            after.owner_balance as i128 - self.owner_balance as i128,
            owner_delta,
            "Owner {} balance delta mismatch",
            self.owner
        );
        assert_eq!(
            after.holding_balance as i128 - self.holding_balance as i128,
            holding_delta,
            "Holding account balance delta mismatch"
        );
        assert_eq!(
            after.vault_state_balance as i128 - self.vault_state_balance as i128,
            vault_state_delta,
            "VaultState balance delta mismatch"
        );
    }
}

/// Expected balance change for [`VaultSnapshot::assert_only_changed`]
#[derive(Debug, Clone, Copy)]
pub enum AccountChange {
    Owner { delta: i64 },
    Holding { delta: i64 },
    VaultState { delta: i64 },
}
