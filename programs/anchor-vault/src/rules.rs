//! Balance arithmetic for the vault transitions.
//!
//! These functions only look at numbers, so the handlers can run them against
//! live account balances and clients can run them against fetched ones.

use crate::ErrorCode;

/// Lamports the owner must supply to initialize a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeCost {
    /// Lamports still needed by the VaultState address to become rent exempt.
    pub state_top_up: u64,
    /// Lamports still needed by the holding account to become rent exempt.
    pub vault_top_up: u64,
}

impl InitializeCost {
    pub fn total(&self) -> Option<u64> {
        self.state_top_up.checked_add(self.vault_top_up)
    }
}

/// Outcome of an accepted withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Withdrawal {
    /// The holding account keeps `remaining` lamports, at or above the rent floor.
    Partial { remaining: u64 },
    /// The holding account is emptied.
    Drain,
}

/// The owner may spend down to exactly zero, or keep at least `owner_rent`.
/// Anything in between would leave the owner's account below its rent floor,
/// which the runtime rejects.
fn check_owner_remainder(
    owner_balance: u64,
    spent: u64,
    owner_rent: u64,
) -> Result<(), ErrorCode> {
    let remaining = owner_balance
        .checked_sub(spent)
        .ok_or(ErrorCode::InsufficientFunds)?;

    if remaining > 0 && remaining < owner_rent {
        return Err(ErrorCode::InsufficientFunds);
    }

    Ok(())
}

pub fn plan_initialize(
    owner_balance: u64,
    owner_rent: u64,
    state_rent: u64,
    state_lamports: u64,
    vault_rent: u64,
    vault_lamports: u64,
) -> Result<InitializeCost, ErrorCode> {
    let cost = InitializeCost {
        state_top_up: state_rent.saturating_sub(state_lamports),
        vault_top_up: vault_rent.saturating_sub(vault_lamports),
    };

    let required = cost.total().ok_or(ErrorCode::NumericOverflow)?;
    check_owner_remainder(owner_balance, required, owner_rent)?;

    Ok(cost)
}

/// Returns the holding balance after depositing `amount`.
pub fn plan_deposit(
    owner_balance: u64,
    owner_rent: u64,
    vault_balance: u64,
    amount: u64,
    vault_rent: u64,
) -> Result<u64, ErrorCode> {
    if amount == 0 {
        return Err(ErrorCode::InvalidAmount);
    }

    check_owner_remainder(owner_balance, amount, owner_rent)?;

    let new_balance = vault_balance
        .checked_add(amount)
        .ok_or(ErrorCode::NumericOverflow)?;

    // only reachable after a full drain: the ledger would reject a funded
    // account below the floor
    if new_balance < vault_rent {
        return Err(ErrorCode::InsufficientVaultFunds);
    }

    Ok(new_balance)
}

pub fn plan_withdrawal(
    vault_balance: u64,
    amount: u64,
    vault_rent: u64,
) -> Result<Withdrawal, ErrorCode> {
    if amount == 0 {
        return Err(ErrorCode::InvalidAmount);
    }

    if amount == vault_balance {
        return Ok(Withdrawal::Drain);
    }

    let remaining = vault_balance
        .checked_sub(amount)
        .ok_or(ErrorCode::InsufficientVaultFunds)?;

    if remaining < vault_rent {
        return Err(ErrorCode::InsufficientVaultFunds);
    }

    Ok(Withdrawal::Partial { remaining })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENT: u64 = 890_880;
    const STATE_RENT: u64 = 960_480;
    const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    #[test]
    fn test_initialize_cost_covers_both_accounts() {
        let cost = plan_initialize(10 * LAMPORTS_PER_SOL, RENT, STATE_RENT, 0, RENT, 0).unwrap();

        assert_eq!(cost.state_top_up, STATE_RENT);
        assert_eq!(cost.vault_top_up, RENT);
        assert_eq!(cost.total(), Some(STATE_RENT + RENT));
    }

    #[test]
    fn test_initialize_counts_prefunded_lamports() {
        let cost = plan_initialize(STATE_RENT - 100, RENT, STATE_RENT, 100, RENT, RENT + 5).unwrap();

        assert_eq!(cost.state_top_up, STATE_RENT - 100);
        assert_eq!(cost.vault_top_up, 0);
    }

    #[test]
    fn test_initialize_rejects_underfunded_owner() {
        let result = plan_initialize(STATE_RENT + RENT - 1, RENT, STATE_RENT, 0, RENT, 0);
        assert!(matches!(result, Err(ErrorCode::InsufficientFunds)));

        let exact = plan_initialize(STATE_RENT + RENT, RENT, STATE_RENT, 0, RENT, 0);
        assert!(exact.is_ok());
    }

    #[test]
    fn test_deposit_adds_amount() {
        let new_balance = plan_deposit(5 * LAMPORTS_PER_SOL, RENT, RENT, 2 * LAMPORTS_PER_SOL, RENT);
        assert_eq!(new_balance.unwrap(), RENT + 2 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_deposit_rejects_zero_and_overdraw() {
        assert!(matches!(
            plan_deposit(LAMPORTS_PER_SOL, RENT, RENT, 0, RENT),
            Err(ErrorCode::InvalidAmount)
        ));
        assert!(matches!(
            plan_deposit(LAMPORTS_PER_SOL, RENT, RENT, LAMPORTS_PER_SOL + 1, RENT),
            Err(ErrorCode::InsufficientFunds)
        ));
    }

    #[test]
    fn test_initialize_must_not_leave_owner_dust() {
        let required = STATE_RENT + RENT;

        assert!(matches!(
            plan_initialize(required + 1, RENT, STATE_RENT, 0, RENT, 0),
            Err(ErrorCode::InsufficientFunds)
        ));
        assert!(matches!(
            plan_initialize(required + RENT - 1, RENT, STATE_RENT, 0, RENT, 0),
            Err(ErrorCode::InsufficientFunds)
        ));
        assert!(plan_initialize(required + RENT, RENT, STATE_RENT, 0, RENT, 0).is_ok());
    }

    #[test]
    fn test_deposit_owner_rent_floor() {
        // whole balance: owner account is emptied
        assert_eq!(
            plan_deposit(LAMPORTS_PER_SOL, RENT, RENT, LAMPORTS_PER_SOL, RENT).unwrap(),
            RENT + LAMPORTS_PER_SOL
        );

        // one lamport left behind
        assert!(matches!(
            plan_deposit(LAMPORTS_PER_SOL, RENT, RENT, LAMPORTS_PER_SOL - 1, RENT),
            Err(ErrorCode::InsufficientFunds)
        ));

        // owner keeps exactly its rent minimum
        assert_eq!(
            plan_deposit(LAMPORTS_PER_SOL, RENT, RENT, LAMPORTS_PER_SOL - RENT, RENT).unwrap(),
            LAMPORTS_PER_SOL
        );
        assert!(matches!(
            plan_deposit(LAMPORTS_PER_SOL, RENT, RENT, LAMPORTS_PER_SOL - RENT + 1, RENT),
            Err(ErrorCode::InsufficientFunds)
        ));
    }

    #[test]
    fn test_deposit_into_drained_vault_must_reach_floor() {
        assert!(matches!(
            plan_deposit(LAMPORTS_PER_SOL, RENT, 0, RENT - 1, RENT),
            Err(ErrorCode::InsufficientVaultFunds)
        ));
        assert_eq!(plan_deposit(LAMPORTS_PER_SOL, RENT, 0, RENT, RENT).unwrap(), RENT);
    }

    #[test]
    fn test_deposit_overflow() {
        assert!(matches!(
            plan_deposit(u64::MAX, RENT, u64::MAX, 1, RENT),
            Err(ErrorCode::NumericOverflow)
        ));
    }

    #[test]
    fn test_withdrawal_floor() {
        let balance = RENT + 3 * LAMPORTS_PER_SOL;

        assert_eq!(
            plan_withdrawal(balance, 3 * LAMPORTS_PER_SOL, RENT).unwrap(),
            Withdrawal::Partial { remaining: RENT }
        );
        assert!(matches!(
            plan_withdrawal(balance, 3 * LAMPORTS_PER_SOL + 1, RENT),
            Err(ErrorCode::InsufficientVaultFunds)
        ));
        assert_eq!(plan_withdrawal(balance, balance, RENT).unwrap(), Withdrawal::Drain);
        assert!(matches!(
            plan_withdrawal(balance, balance + 1, RENT),
            Err(ErrorCode::InsufficientVaultFunds)
        ));
    }

    #[test]
    fn test_withdrawal_succeeds_iff_drain_or_above_floor() {
        let balance = RENT + 1_000;

        for amount in [1, 500, 999, 1_000, 1_001, RENT, balance - 1, balance, balance + 1] {
            let result = plan_withdrawal(balance, amount, RENT);
            let allowed = amount == balance || (amount <= balance && balance - amount >= RENT);
            assert_eq!(result.is_ok(), allowed, "amount {amount}");
        }
    }

    #[test]
    fn test_withdrawal_rejects_zero() {
        assert!(matches!(
            plan_withdrawal(RENT, 0, RENT),
            Err(ErrorCode::InvalidAmount)
        ));
    }
}
