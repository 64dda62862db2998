#![cfg(feature = "test-sbf")]

use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;
use anchor_vault::VAULT_SPACE;
use anchor_vault_sdk::VaultProgramError;
use anchor_vault_testing::{demand_vault_error, AccountChange, TestFixture, VaultSnapshot};
use solana_signer::Signer as _;

/// Test the holding account's rent floor on withdraw
///
/// A withdrawal succeeds iff it drains the holding account completely or
/// leaves at least the rent-exempt minimum behind.
///
/// Should test:
/// - leaving exactly the minimum succeeds
/// - leaving one lamport less → InsufficientVaultFunds, nothing moves
/// - more than the balance → InsufficientVaultFunds
/// - zero → InvalidAmount
#[test]
fn test_withdraw_rent_floor() {
    let mut test = TestFixture::default();
    let owner = test.create_funded_owner(10 * LAMPORTS_PER_SOL).unwrap();
    let rent = test.rent_exempt_minimum(VAULT_SPACE);

    test.try_initialize(&owner).unwrap();
    test.try_deposit(&owner, 3 * LAMPORTS_PER_SOL).unwrap();

    let before = VaultSnapshot::capture(&test, &owner.pubkey());
    assert_eq!(before.holding_balance, rent + 3 * LAMPORTS_PER_SOL);

    // one lamport too many
    demand_vault_error(
        test.try_withdraw(&owner, 3 * LAMPORTS_PER_SOL + 1),
        VaultProgramError::InsufficientVaultFunds,
    );
    assert_eq!(before, VaultSnapshot::capture(&test, &owner.pubkey()));

    // more than the whole balance
    demand_vault_error(
        test.try_withdraw(&owner, before.holding_balance + 1),
        VaultProgramError::InsufficientVaultFunds,
    );

    demand_vault_error(test.try_withdraw(&owner, 0), VaultProgramError::InvalidAmount);
    assert_eq!(before, VaultSnapshot::capture(&test, &owner.pubkey()));

    println!("✅ Withdrawals breaking the floor rejected");

    // exactly down to the floor
    test.try_withdraw(&owner, 3 * LAMPORTS_PER_SOL)
        .expect("Withdrawing down to the rent minimum should succeed");

    let after = VaultSnapshot::capture(&test, &owner.pubkey());
    before.assert_only_changed(
        &after,
        &[
            AccountChange::Owner {
                delta: 3 * LAMPORTS_PER_SOL as i64,
            },
            AccountChange::Holding {
                delta: -(3 * LAMPORTS_PER_SOL as i64),
            },
        ],
    );
    assert_eq!(after.holding_balance, rent);

    println!("✅ Withdrawal down to the rent minimum succeeded");
}

/// Test draining the holding account and refilling it
///
/// Should test:
/// - withdrawing the full balance empties the holding account
/// - the VaultState record survives the drain
/// - any further withdraw → InsufficientVaultFunds
/// - a deposit that would leave the empty account below the floor → InsufficientVaultFunds
/// - a deposit of at least the floor revives it
#[test]
fn test_withdraw_full_drain() {
    let mut test = TestFixture::default();
    let owner = test.create_funded_owner(10 * LAMPORTS_PER_SOL).unwrap();
    let owner_pubkey = owner.pubkey();
    let rent = test.rent_exempt_minimum(VAULT_SPACE);

    test.try_initialize(&owner).unwrap();
    test.try_deposit(&owner, LAMPORTS_PER_SOL).unwrap();

    let before = VaultSnapshot::capture(&test, &owner_pubkey);

    test.try_withdraw(&owner, before.holding_balance)
        .expect("Full drain should succeed");

    let after = VaultSnapshot::capture(&test, &owner_pubkey);
    assert!(!after.holding_exists);
    assert_eq!(after.holding_balance, 0);
    assert_eq!(
        after.owner_balance,
        before.owner_balance + before.holding_balance
    );
    assert_eq!(after.vault_state, before.vault_state);

    println!("✅ Holding account drained");

    demand_vault_error(
        test.try_withdraw(&owner, 1),
        VaultProgramError::InsufficientVaultFunds,
    );
    demand_vault_error(
        test.try_deposit(&owner, rent - 1),
        VaultProgramError::InsufficientVaultFunds,
    );
    assert_eq!(after, VaultSnapshot::capture(&test, &owner_pubkey));

    println!("✅ Below-floor operations on the drained vault rejected");

    test.try_deposit(&owner, rent)
        .expect("Depositing the rent minimum into a drained vault should succeed");

    let holding = test.fetch_holding_account(&owner_pubkey);
    assert!(holding.exists);
    assert_eq!(holding.lamports, rent);

    println!("✅ Drained vault refilled");
}
