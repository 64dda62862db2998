use anchor_vault_sdk::{AddressFinder, PROGRAM_ID};
use solana_sdk::{pubkey::Pubkey, system_program};
use tracing::debug;

use crate::error::CliResult;

pub fn execute(owner: Pubkey, program_id: Option<Pubkey>) -> CliResult<()> {
    let program_id = program_id.unwrap_or(PROGRAM_ID);
    debug!("Deriving vault addresses for {} under {}", owner, program_id);

    let address_finder = AddressFinder::new(program_id, system_program::ID);
    let addresses = address_finder.find_vault_addresses(&owner)?;

    println!("Owner:       {}", addresses.owner);
    println!("Program:     {}", program_id);
    println!(
        "VaultState:  {} (bump {})",
        addresses.vault_state, addresses.state_bump
    );
    println!("Holding:     {} (bump {})", addresses.vault, addresses.vault_bump);

    Ok(())
}
