//! Configuration for ccgsync.
//!
//! Sources, lowest to highest precedence: built-in defaults, the TOML file
//! at [`config_path()`], then `CCGSYNC_*` environment variables. CLI flags
//! override the result after loading; that resolution lives in the binary.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Production API root. Overridable for labs and regional clusters.
pub const DEFAULT_BASE_URL: &str = "https://api.extremecloudiq.com";

/// Default CSV output file, written into the working directory.
pub const DEFAULT_CSV_PATH: &str = "SSID-Device.csv";

/// Errors raised while locating or loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),
}

/// ccgsync settings.
///
/// Everything is optional in the file; missing keys fall back to the
/// defaults below. `token`/`username` merely pre-seed the login step --
/// absent both, the CLI prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API root URL.
    pub base_url: String,
    /// Pre-issued API token; skips the login prompt entirely.
    pub token: Option<String>,
    /// Login username; the password is always prompted.
    pub username: Option<String>,
    /// Where to write the CSV inventory.
    pub csv_path: PathBuf,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Verify TLS certificates. Off by default; many deployments sit
    /// behind TLS inspection.
    pub verify_tls: bool,
    /// Directory for the rolling log file. Defaults to the working
    /// directory when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            token: None,
            username: None,
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            timeout_secs: 30,
            verify_tls: false,
            log_dir: None,
        }
    }
}

/// Default location of the config file (`<config dir>/ccgsync/config.toml`),
/// or `None` when the platform offers no config directory.
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "ccgsync")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from `path` (or the default location), merged with
/// `CCGSYNC_*` environment variables. A missing file is not an error; the
/// defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(explicit) = path {
        figment = figment.merge(Toml::file(explicit));
    } else if let Some(default_path) = config_path() {
        figment = figment.merge(Toml::file(default_path));
    }

    Ok(figment.merge(Env::prefixed("CCGSYNC_")).extract()?)
}
