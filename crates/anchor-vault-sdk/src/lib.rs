mod accounts;
mod address_finder;
mod error;
mod instruction_builders;
mod transaction_builders;

pub use accounts::*;
pub use address_finder::{AddressFinder, SeedTag, VaultAddresses};
pub use anchor_vault::state::*;
pub use error::{VaultProgramError, VaultSdkError, VaultSdkResult};
pub use instruction_builders::*;
pub use transaction_builders::*;

// Re-export program ID
pub use anchor_vault::ID as PROGRAM_ID;
