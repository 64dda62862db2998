use serde::{Deserialize, Serialize};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::error::{CliError, CliResult};

/// Scenario file for `anchor-vault simulate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Compiled program; relative paths are resolved against the scenario file.
    /// Falls back to the test fixture's default location.
    #[serde(default)]
    pub program_path: Option<PathBuf>,

    /// Starting balance of the simulated owner
    #[serde(default = "default_owner_lamports")]
    pub owner_lamports: u64,

    /// Starting balance of the account paying transaction fees
    #[serde(default = "default_fee_payer_lamports")]
    pub fee_payer_lamports: u64,

    /// Abort on the first failing step
    #[serde(default = "default_stop_on_error")]
    pub stop_on_error: bool,

    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    Initialize,
    Deposit { amount: u64 },
    Withdraw { amount: u64 },
    Close,
}

impl fmt::Display for ScenarioStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioStep::Initialize => write!(f, "initialize"),
            ScenarioStep::Deposit { amount } => write!(f, "deposit {amount}"),
            ScenarioStep::Withdraw { amount } => write!(f, "withdraw {amount}"),
            ScenarioStep::Close => write!(f, "close"),
        }
    }
}

fn default_owner_lamports() -> u64 {
    10 * LAMPORTS_PER_SOL
}

fn default_fee_payer_lamports() -> u64 {
    100 * LAMPORTS_PER_SOL
}

fn default_stop_on_error() -> bool {
    true
}

impl ScenarioConfig {
    pub fn from_yaml(yaml: &str) -> CliResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&yaml)?;

        if let (Some(program_path), Some(base)) = (config.program_path.as_mut(), path.parent()) {
            if program_path.is_relative() {
                *program_path = base.join(&*program_path);
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.steps.is_empty() {
            return Err(CliError::InvalidConfig(
                "scenario must contain at least one step".to_string(),
            ));
        }

        if self.owner_lamports == 0 {
            return Err(CliError::InvalidConfig(
                "owner_lamports must be greater than 0".to_string(),
            ));
        }

        if self.fee_payer_lamports == 0 {
            return Err(CliError::InvalidConfig(
                "fee_payer_lamports must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEN_SOL_SCENARIO: &str = r#"
owner_lamports: 10000000000
steps:
  - action: initialize
  - action: deposit
    amount: 2000000000
  - action: initialize
"#;

    #[test]
    fn test_parse_scenario_with_defaults() {
        let config = ScenarioConfig::from_yaml(TEN_SOL_SCENARIO).unwrap();

        assert_eq!(config.program_path, None);
        assert_eq!(config.owner_lamports, 10 * LAMPORTS_PER_SOL);
        assert_eq!(config.fee_payer_lamports, 100 * LAMPORTS_PER_SOL);
        assert!(config.stop_on_error);
        assert_eq!(
            config.steps,
            vec![
                ScenarioStep::Initialize,
                ScenarioStep::Deposit {
                    amount: 2 * LAMPORTS_PER_SOL
                },
                ScenarioStep::Initialize,
            ]
        );
    }

    #[test]
    fn test_rejects_unknown_action_and_empty_steps() {
        let unknown = "steps:\n  - action: transfer\n    amount: 1\n";
        assert!(matches!(
            ScenarioConfig::from_yaml(unknown),
            Err(CliError::Yaml(_))
        ));

        let empty = "steps: []\n";
        assert!(matches!(
            ScenarioConfig::from_yaml(empty),
            Err(CliError::InvalidConfig(_))
        ));

        let missing_amount = "steps:\n  - action: deposit\n";
        assert!(matches!(
            ScenarioConfig::from_yaml(missing_amount),
            Err(CliError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_resolves_program_path_against_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "program_path: deploy/anchor_vault.so").unwrap();
        writeln!(file, "stop_on_error: false").unwrap();
        writeln!(file, "steps:\n  - action: close").unwrap();

        let config = ScenarioConfig::load(&path).unwrap();

        assert_eq!(
            config.program_path,
            Some(dir.path().join("deploy/anchor_vault.so"))
        );
        assert!(!config.stop_on_error);
        assert_eq!(config.steps, vec![ScenarioStep::Close]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScenarioConfig::load(&dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
