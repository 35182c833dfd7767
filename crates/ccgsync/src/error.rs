//! CLI error type.
//!
//! Each variant corresponds to one step of the run and carries the exit
//! code wrapper scripts key off. There is no retryable class: whatever
//! fails, the run logs it, prints one status line, and exits.

use ccgsync_config::ConfigError;
use ccgsync_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Login failed -- refused credentials, a token-less response, or
    /// credentials never entered.
    #[error("login failed: {message}")]
    Login { message: String },

    /// Device/SSID collection failed.
    #[error("failed to collect SSID list: {0}")]
    CollectSsids(#[source] CoreError),

    /// CCG collection failed.
    #[error("failed to collect CCGs: {0}")]
    CollectCcgs(#[source] CoreError),

    /// CSV export failed.
    #[error("failed to create CSV file: {0}")]
    Csv(#[source] CoreError),

    /// A membership update was rejected.
    #[error("failed to update CCG {name}: {source}")]
    UpdateCcg {
        name: String,
        #[source]
        source: CoreError,
    },

    /// A group creation was rejected.
    #[error("failed to create CCG {name}: {source}")]
    CreateCcg {
        name: String,
        #[source]
        source: CoreError,
    },

    /// Listing external accounts failed.
    #[error("failed to collect external accounts: {0}")]
    Accounts(#[source] xiq_api::Error),

    /// Switching into an external account failed (including an --account
    /// ID that isn't in the list).
    #[error("account switch failed: {message}")]
    Switch { message: String },

    /// Configuration could not be loaded. Happens before login, so it
    /// shares the login exit code.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An interactive prompt failed (terminal closed, not a TTY).
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl CliError {
    /// The step-specific process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Login { .. } | Self::Config(_) | Self::Prompt(_) => 1,
            Self::CollectSsids(_) => 2,
            Self::CollectCcgs(_) => 3,
            Self::Csv(_) => 4,
            Self::UpdateCcg { .. } => 5,
            Self::CreateCcg { .. } => 6,
            Self::Accounts(_) => 7,
            Self::Switch { .. } => 8,
        }
    }
}
