use crate::{AddressFinder, VaultSdkResult};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData as _, prelude::*};

pub fn build_initialize_ix(
    address_finder: &AddressFinder,
    owner: Pubkey,
) -> VaultSdkResult<(
    Instruction,
    anchor_vault::accounts::Initialize,
    anchor_vault::instruction::Initialize,
)> {
    let addresses = address_finder.find_vault_addresses(&owner)?;

    let ix_accounts = anchor_vault::accounts::Initialize {
        user: owner,
        vault_state: addresses.vault_state,
        vault: addresses.vault,
        system_program: address_finder.system_program_id,
    };

    let ix_data = anchor_vault::instruction::Initialize {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_deposit_ix(
    address_finder: &AddressFinder,
    owner: Pubkey,
    amount: u64,
) -> VaultSdkResult<(
    Instruction,
    anchor_vault::accounts::Deposit,
    anchor_vault::instruction::Deposit,
)> {
    let addresses = address_finder.find_vault_addresses(&owner)?;

    let ix_accounts = anchor_vault::accounts::Deposit {
        user: owner,
        vault_state: addresses.vault_state,
        vault: addresses.vault,
        system_program: address_finder.system_program_id,
    };

    let ix_data = anchor_vault::instruction::Deposit { amount };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_withdraw_ix(
    address_finder: &AddressFinder,
    owner: Pubkey,
    amount: u64,
) -> VaultSdkResult<(
    Instruction,
    anchor_vault::accounts::Withdraw,
    anchor_vault::instruction::Withdraw,
)> {
    let addresses = address_finder.find_vault_addresses(&owner)?;

    let ix_accounts = anchor_vault::accounts::Withdraw {
        user: owner,
        vault_state: addresses.vault_state,
        vault: addresses.vault,
        system_program: address_finder.system_program_id,
    };

    let ix_data = anchor_vault::instruction::Withdraw { amount };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_close_ix(
    address_finder: &AddressFinder,
    owner: Pubkey,
) -> VaultSdkResult<(
    Instruction,
    anchor_vault::accounts::Close,
    anchor_vault::instruction::Close,
)> {
    let addresses = address_finder.find_vault_addresses(&owner)?;

    let ix_accounts = anchor_vault::accounts::Close {
        user: owner,
        vault_state: addresses.vault_state,
        vault: addresses.vault,
        system_program: address_finder.system_program_id,
    };

    let ix_data = anchor_vault::instruction::Close {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}
