mod error;
mod test_fixture;
mod vault_snapshot;

pub use error::{FixtureError, FixtureResult};
pub use test_fixture::{FixtureConfig, TestFixture, DEFAULT_PROGRAM_PATH, PROGRAM_PATH_ENV};
pub use vault_snapshot::{AccountChange, VaultSnapshot};

use anchor_vault_sdk::VaultProgramError;
use litesvm::types::FailedTransactionMetadata;
use solana_instruction::error::InstructionError;
use solana_transaction_error::TransactionError;

/// Extracts the vault program error a failed transaction ended with, if any.
pub fn vault_error_of(failed: &FailedTransactionMetadata) -> Option<VaultProgramError> {
    match &failed.err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            VaultProgramError::from_custom_code(*code)
        }
        _ => None,
    }
}

/// Panics unless `result` failed with exactly `expected`.
pub fn demand_vault_error<T: std::fmt::Debug>(
    result: Result<T, FailedTransactionMetadata>,
    expected: VaultProgramError,
) {
    match result {
        Ok(value) => panic!(
            "Expected {expected:?} ({}), but transaction succeeded: {value:?}",
            expected.code()
        ),
        Err(failed) => {
            let actual = vault_error_of(&failed);
            assert_eq!(
                actual,
                Some(expected),
                "Expected {:?} ({}), got {:?}\nlogs: {:#?}",
                expected,
                expected.code(),
                failed.err,
                failed.meta.logs
            );
        }
    }
}
