use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Test fixture error: {0}")]
    Fixture(#[from] anchor_vault_testing::FixtureError),

    #[error("Step {index} ({action}) failed: {reason}")]
    StepFailed {
        index: usize,
        action: String,
        reason: String,
    },

    #[error("SDK error: {0}")]
    Sdk(#[from] anchor_vault_sdk::VaultSdkError),
}
