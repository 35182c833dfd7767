//! Clap derive structures for the `ccgsync` CLI.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// ccgsync -- one-shot SSID → cloud config group synchronization
#[derive(Debug, Parser)]
#[command(
    name = "ccgsync",
    version,
    about = "Inventory broadcast SSIDs and reconcile ExtremeCloud IQ cloud config groups",
    long_about = "Collects every access point and the SSIDs its radios broadcast from \
        ExtremeCloud IQ, writes a CSV inventory, then reconciles one cloud config group \
        (CCG) per SSID so that group membership matches the devices actually \
        broadcasting it. Groups are created when missing and overwritten when their \
        membership drifted."
)]
pub struct Cli {
    /// API root URL (overrides config)
    #[arg(long, env = "XIQ_BASE_URL")]
    pub base_url: Option<String>,

    /// Pre-issued API token; skips the login prompt
    #[arg(long, env = "XIQ_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// Login username (email); the password is always prompted
    #[arg(long, short = 'u', env = "XIQ_USERNAME")]
    pub username: Option<String>,

    /// CSV output path (overrides config)
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Collect simulated devices instead of real ones
    #[arg(long)]
    pub simulated: bool,

    /// External account ID to switch into (skips the selection prompt)
    #[arg(long, value_name = "ID")]
    pub account: Option<u64>,

    /// Answer yes to every confirmation; stays on the home account
    /// unless --account is also given
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Verify TLS certificates (off by default)
    #[arg(long)]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, env = "XIQ_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for the rolling log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Increase console log verbosity (-v, -vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress status output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// When to use color output
    #[arg(long, default_value = "auto")]
    pub color: ColorMode,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if stdout is a terminal)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}
