use std::path::PathBuf;

use solana_pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Program binary not found at {0} (build it with `cargo build-sbf`)")]
    ProgramNotFound(PathBuf),

    #[error("Failed to load program from {path}: {reason}")]
    ProgramLoad { path: PathBuf, reason: String },

    #[error("Failed to airdrop {lamports} lamports to {to}: {reason}")]
    Airdrop {
        to: Pubkey,
        lamports: u64,
        reason: String,
    },
}

pub type FixtureResult<T> = Result<T, FixtureError>;
