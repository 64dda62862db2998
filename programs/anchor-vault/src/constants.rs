use anchor_lang::prelude::*;

/// Seed prefixes for PDA derivation
#[constant]
pub const STATE_SEED_PREFIX: &[u8] = b"state";

#[constant]
pub const VAULT_SEED_PREFIX: &[u8] = b"vault";

/// The holding account never carries data.
pub const VAULT_SPACE: usize = 0;
