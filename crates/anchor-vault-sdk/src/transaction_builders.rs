/*!
# Transaction Builders

`build_*_tx` wraps a single vault instruction in an unsigned transaction.
The caller supplies the fee payer and a recent blockhash, then signs with
the fee payer and the vault owner (they may be the same key).

```rust
use anchor_vault_sdk::{build_deposit_tx, AddressFinder};
use solana_sdk::{hash::Hash, signature::{Keypair, Signer}};

let owner = Keypair::new();
let recent_blockhash = Hash::default(); // Get from RPC

let mut tx = build_deposit_tx(
    &AddressFinder::default(),
    &owner.pubkey(),
    &owner.pubkey(),
    2_000_000_000,
    recent_blockhash,
)
.expect("Failed to build transaction");

tx.sign(&[&owner], recent_blockhash);
```
*/

use crate::{
    AddressFinder, VaultSdkResult, build_close_ix, build_deposit_ix, build_initialize_ix,
    build_withdraw_ix,
};
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};

fn unsigned_tx(ix: Instruction, fee_payer: &Pubkey, recent_blockhash: Hash) -> Transaction {
    let message = Message::new(&[ix], Some(fee_payer));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.message.recent_blockhash = recent_blockhash;
    transaction
}

/// Build transaction to initialize `owner`'s vault
pub fn build_initialize_tx(
    address_finder: &AddressFinder,
    owner: &Pubkey,
    fee_payer: &Pubkey,
    recent_blockhash: Hash,
) -> VaultSdkResult<Transaction> {
    let (ix, _, _) = build_initialize_ix(address_finder, *owner)?;
    Ok(unsigned_tx(ix, fee_payer, recent_blockhash))
}

/// Build transaction to deposit `amount` lamports
pub fn build_deposit_tx(
    address_finder: &AddressFinder,
    owner: &Pubkey,
    fee_payer: &Pubkey,
    amount: u64,
    recent_blockhash: Hash,
) -> VaultSdkResult<Transaction> {
    let (ix, _, _) = build_deposit_ix(address_finder, *owner, amount)?;
    Ok(unsigned_tx(ix, fee_payer, recent_blockhash))
}

/// Build transaction to withdraw `amount` lamports
pub fn build_withdraw_tx(
    address_finder: &AddressFinder,
    owner: &Pubkey,
    fee_payer: &Pubkey,
    amount: u64,
    recent_blockhash: Hash,
) -> VaultSdkResult<Transaction> {
    let (ix, _, _) = build_withdraw_ix(address_finder, *owner, amount)?;
    Ok(unsigned_tx(ix, fee_payer, recent_blockhash))
}

/// Build transaction to close `owner`'s vault
pub fn build_close_tx(
    address_finder: &AddressFinder,
    owner: &Pubkey,
    fee_payer: &Pubkey,
    recent_blockhash: Hash,
) -> VaultSdkResult<Transaction> {
    let (ix, _, _) = build_close_ix(address_finder, *owner)?;
    Ok(unsigned_tx(ix, fee_payer, recent_blockhash))
}
