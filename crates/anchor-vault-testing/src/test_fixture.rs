use {
    crate::{FixtureError, FixtureResult},
    anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL,
    anchor_vault::VaultState,
    anchor_vault_sdk::{
        build_close_tx, build_deposit_tx, build_initialize_tx, build_withdraw_tx,
        decode_vault_state, AddressFinder, HoldingAccountInfo, VaultAddresses,
    },
    litesvm::{
        types::{FailedTransactionMetadata, TransactionResult},
        LiteSVM,
    },
    solana_account::Account,
    solana_hash::Hash,
    solana_keypair::Keypair,
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_signer::Signer as _,
    solana_transaction::Transaction,
    std::path::{Path, PathBuf},
    tracing::{debug, info, warn},
};

/// Overrides the program binary location.
pub const PROGRAM_PATH_ENV: &str = "ANCHOR_VAULT_SO";

/// Relative to the workspace root.
pub const DEFAULT_PROGRAM_PATH: &str = "target/deploy/anchor_vault.so";

#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub program_path: PathBuf,
    /// Lamports given to the account that pays every transaction fee.
    pub fee_payer_lamports: u64,
    pub log_transactions: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        let program_path = std::env::var_os(PROGRAM_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                    .join("../..")
                    .join(DEFAULT_PROGRAM_PATH)
            });

        Self {
            program_path,
            fee_payer_lamports: LAMPORTS_PER_SOL * 100,
            log_transactions: true,
        }
    }
}

/// In-process ledger with the vault program loaded.
///
/// Fees are paid by a dedicated fee payer, so an owner's balance moves only
/// by what the vault program itself transfers.
pub struct TestFixture {
    pub address_finder: AddressFinder,

    fee_payer: Keypair,
    log_send_transaction_results: bool,
    svm: LiteSVM,
}

impl TestFixture {
    pub fn new(config: FixtureConfig) -> FixtureResult<Self> {
        let mut svm = LiteSVM::new();
        let address_finder = AddressFinder::default();

        load_anchor_vault(&mut svm, address_finder.program_id, &config.program_path)?;

        let mut fixture = Self {
            address_finder,
            fee_payer: Keypair::new(),
            log_send_transaction_results: config.log_transactions,
            svm,
        };

        let fee_payer = fixture.fee_payer.pubkey();
        fixture.airdrop(&fee_payer, config.fee_payer_lamports)?;

        Ok(fixture)
    }

    pub fn fee_payer(&self) -> Pubkey {
        self.fee_payer.pubkey()
    }

    pub fn airdrop(&mut self, to: &Pubkey, lamports: u64) -> FixtureResult<()> {
        self.svm
            .airdrop(to, lamports)
            .map(|_| ())
            .map_err(|e| FixtureError::Airdrop {
                to: *to,
                lamports,
                reason: format!("{:?}", e.err),
            })
    }

    /// A fresh owner keypair holding exactly `lamports`.
    pub fn create_funded_owner(&mut self, lamports: u64) -> FixtureResult<Keypair> {
        let owner = Keypair::new();
        self.airdrop(&owner.pubkey(), lamports)?;
        debug!("Funded owner {} with {} lamports", owner.pubkey(), lamports);
        Ok(owner)
    }

    pub fn latest_blockhash(&self) -> Hash {
        self.svm.latest_blockhash()
    }

    pub fn vault_addresses(&self, owner: &Pubkey) -> VaultAddresses {
        self.address_finder
            .find_vault_addresses(owner)
            .unwrap_or_else(|e| panic!("Failed to derive vault addresses: {e}"))
    }

    pub fn try_initialize(
        &mut self,
        owner: &Keypair,
    ) -> Result<Signature, FailedTransactionMetadata> {
        let blockhash = self.fresh_blockhash();
        let tx = build_initialize_tx(
            &self.address_finder,
            &owner.pubkey(),
            &self.fee_payer.pubkey(),
            blockhash,
        )
        .expect("Failed to build initialize transaction");

        self.sign_and_send(tx, owner, blockhash)
    }

    pub fn try_deposit(
        &mut self,
        owner: &Keypair,
        amount: u64,
    ) -> Result<Signature, FailedTransactionMetadata> {
        let blockhash = self.fresh_blockhash();
        let tx = build_deposit_tx(
            &self.address_finder,
            &owner.pubkey(),
            &self.fee_payer.pubkey(),
            amount,
            blockhash,
        )
        .expect("Failed to build deposit transaction");

        self.sign_and_send(tx, owner, blockhash)
    }

    pub fn try_withdraw(
        &mut self,
        owner: &Keypair,
        amount: u64,
    ) -> Result<Signature, FailedTransactionMetadata> {
        let blockhash = self.fresh_blockhash();
        let tx = build_withdraw_tx(
            &self.address_finder,
            &owner.pubkey(),
            &self.fee_payer.pubkey(),
            amount,
            blockhash,
        )
        .expect("Failed to build withdraw transaction");

        self.sign_and_send(tx, owner, blockhash)
    }

    pub fn try_close(&mut self, owner: &Keypair) -> Result<Signature, FailedTransactionMetadata> {
        let blockhash = self.fresh_blockhash();
        let tx = build_close_tx(
            &self.address_finder,
            &owner.pubkey(),
            &self.fee_payer.pubkey(),
            blockhash,
        )
        .expect("Failed to build close transaction");

        self.sign_and_send(tx, owner, blockhash)
    }

    /// Send a transaction and optionally log its program output
    pub fn send_transaction(&mut self, tx: Transaction) -> TransactionResult {
        let result = self.svm.send_transaction(tx);

        if self.log_send_transaction_results {
            match &result {
                Ok(meta) => {
                    info!(
                        "Transaction {} succeeded ({} CU)",
                        meta.signature, meta.compute_units_consumed
                    );
                    for (i, log) in meta.logs.iter().enumerate() {
                        debug!("{}: {}", i, log);
                    }
                }
                Err(failed_meta) => {
                    warn!("Transaction failed: {:?}", failed_meta.err);
                    for (i, log) in failed_meta.meta.logs.iter().enumerate() {
                        debug!("{}: {}", i, log);
                    }
                }
            }
        }

        result
    }

    pub fn fetch_account(&self, address: &Pubkey) -> Option<Account> {
        self.svm.get_account(address)
    }

    /// Check if an account exists
    pub fn account_exists(&self, address: &Pubkey) -> bool {
        self.fetch_account(address)
            .is_some_and(|account| account.lamports > 0)
    }

    /// The owner's VaultState record, if one is live.
    pub fn fetch_vault_state(&self, owner: &Pubkey) -> Option<VaultState> {
        let addresses = self.vault_addresses(owner);

        self.fetch_account(&addresses.vault_state)
            .filter(|account| account.owner == self.address_finder.program_id)
            .and_then(|account| decode_vault_state(&account.data))
    }

    pub fn fetch_holding_account(&self, owner: &Pubkey) -> HoldingAccountInfo {
        let addresses = self.vault_addresses(owner);
        HoldingAccountInfo::from_account(self.fetch_account(&addresses.vault).as_ref())
    }

    /// Lamports held at `address`; 0 when the account does not exist
    pub fn balance(&self, address: &Pubkey) -> u64 {
        self.svm.get_balance(address).unwrap_or(0)
    }

    pub fn rent_exempt_minimum(&self, space: usize) -> u64 {
        self.svm.minimum_balance_for_rent_exemption(space)
    }

    // identical retries would otherwise be rejected as AlreadyProcessed
    fn fresh_blockhash(&mut self) -> Hash {
        self.svm.expire_blockhash();
        self.latest_blockhash()
    }

    fn sign_and_send(
        &mut self,
        mut tx: Transaction,
        owner: &Keypair,
        blockhash: Hash,
    ) -> Result<Signature, FailedTransactionMetadata> {
        tx.sign(&[&self.fee_payer, owner], blockhash);
        self.send_transaction(tx).map(|meta| meta.signature)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new(FixtureConfig::default())
            .unwrap_or_else(|e| panic!("Failed to set up test fixture: {e}"))
    }
}

fn load_anchor_vault(
    svm: &mut LiteSVM,
    program_id: Pubkey,
    program_path: &Path,
) -> FixtureResult<()> {
    if !program_path.exists() {
        return Err(FixtureError::ProgramNotFound(program_path.to_path_buf()));
    }

    svm.add_program_from_file(program_id, program_path)
        .map_err(|e| FixtureError::ProgramLoad {
            path: program_path.to_path_buf(),
            reason: format!("{e:?}"),
        })?;

    info!(
        "Loaded anchor-vault program {} from {}",
        program_id,
        program_path.display()
    );

    Ok(())
}
