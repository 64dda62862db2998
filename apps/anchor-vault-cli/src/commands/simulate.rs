use anchor_vault_testing::{vault_error_of, FixtureConfig, TestFixture, VaultSnapshot};
use solana_sdk::signature::{Keypair, Signer};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::{ScenarioConfig, ScenarioStep};
use crate::error::{CliError, CliResult};

pub fn execute(config_path: PathBuf) -> CliResult<()> {
    let config = ScenarioConfig::load(&config_path)?;
    info!(
        "Loaded scenario {} ({} steps)",
        config_path.display(),
        config.steps.len()
    );

    let mut fixture_config = FixtureConfig {
        fee_payer_lamports: config.fee_payer_lamports,
        log_transactions: true,
        ..FixtureConfig::default()
    };
    if let Some(program_path) = &config.program_path {
        fixture_config.program_path = program_path.clone();
    }

    let mut test = TestFixture::new(fixture_config)?;
    let owner = test.create_funded_owner(config.owner_lamports)?;
    let addresses = test.vault_addresses(&owner.pubkey());

    info!("Owner:      {}", owner.pubkey());
    info!(
        "VaultState: {} (bump {})",
        addresses.vault_state, addresses.state_bump
    );
    info!(
        "Holding:    {} (bump {})",
        addresses.vault, addresses.vault_bump
    );

    let mut failures = 0usize;

    for (index, step) in config.steps.iter().enumerate() {
        let before = VaultSnapshot::capture(&test, &owner.pubkey());

        match run_step(&mut test, &owner, *step) {
            Ok(signature) => {
                let after = VaultSnapshot::capture(&test, &owner.pubkey());
                info!("Step {} ({}) succeeded: {}", index, step, signature);
                report(&before, &after);
            }
            Err(reason) => {
                failures += 1;
                warn!("Step {} ({}) failed: {}", index, step, reason);

                if config.stop_on_error {
                    return Err(CliError::StepFailed {
                        index,
                        action: step.to_string(),
                        reason,
                    });
                }
            }
        }
    }

    let last = VaultSnapshot::capture(&test, &owner.pubkey());
    info!(
        "Scenario finished: {} of {} steps failed; owner {} lamports, holding {} lamports, record {}",
        failures,
        config.steps.len(),
        last.owner_balance,
        last.holding_balance,
        if last.vault_state.is_some() {
            "present"
        } else {
            "absent"
        }
    );

    Ok(())
}

fn run_step(
    test: &mut TestFixture,
    owner: &Keypair,
    step: ScenarioStep,
) -> Result<String, String> {
    let result = match step {
        ScenarioStep::Initialize => test.try_initialize(owner),
        ScenarioStep::Deposit { amount } => test.try_deposit(owner, amount),
        ScenarioStep::Withdraw { amount } => test.try_withdraw(owner, amount),
        ScenarioStep::Close => test.try_close(owner),
    };

    result
        .map(|signature| signature.to_string())
        .map_err(|failed| match vault_error_of(&failed) {
            Some(error) => error.to_string(),
            None => format!("{:?}", failed.err),
        })
}

fn report(before: &VaultSnapshot, after: &VaultSnapshot) {
    info!(
        "  owner:   {} -> {} lamports",
        before.owner_balance, after.owner_balance
    );
    info!(
        "  holding: {} -> {} lamports",
        before.holding_balance, after.holding_balance
    );
    match &after.vault_state {
        Some(state) => info!(
            "  record:  state_bump {}, vault_bump {}",
            state.state_bump, state.vault_bump
        ),
        None => info!("  record:  none"),
    }
}
