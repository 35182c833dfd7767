//! ccgsync binary entry point.
//!
//! One strictly sequential run: authenticate, optionally switch into an
//! external account, collect the SSID/device inventory, write the CSV,
//! confirm, collect existing CCGs, then apply the reconciliation plan one
//! call at a time. Every step failure maps to its own exit code; prior
//! mutations are left in place (there is no rollback).

mod cli;
mod error;
mod logging;
mod prompts;
mod status;

use std::process;
use std::time::Duration;

use clap::Parser;
use indicatif::ProgressBar;
use secrecy::SecretString;
use tabled::{Table, Tabled, settings::Style};
use tracing::{error, info};

use ccgsync_config::Config;
use ccgsync_core::{CcgAction, collect, export, reconcile};
use xiq_api::models::ExternalAccount;
use xiq_api::{TransportConfig, XiqClient};

use crate::cli::Cli;
use crate::error::CliError;
use crate::prompts::{AccountChoice, Decision};
use crate::status::Status;

fn main() {
    process::exit(entry());
}

#[tokio::main(flavor = "current_thread")]
async fn entry() -> i32 {
    let args = Cli::parse();
    let status = Status::new(&args.color, args.quiet);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            status.fail(&err.to_string());
            return err.exit_code();
        }
    };

    // The guard flushes the rolling log file when `entry` returns; exit
    // codes are surfaced by `main` after that happens.
    let _guard = logging::init(args.verbose, config.log_dir.as_deref());
    info!(version = env!("CARGO_PKG_VERSION"), "starting ccgsync");

    match run(&args, &config, &status).await {
        Ok(()) => 0,
        Err(err) => {
            error!("{err}");
            status.fail(&err.to_string());
            err.exit_code()
        }
    }
}

/// Load config and fold the CLI flag overrides into it.
fn build_config(args: &Cli) -> Result<Config, CliError> {
    let mut config = ccgsync_config::load_config(args.config.as_deref())?;

    if let Some(ref url) = args.base_url {
        config.base_url = url.clone();
    }
    if let Some(ref token) = args.token {
        config.token = Some(token.clone());
    }
    if let Some(ref username) = args.username {
        config.username = Some(username.clone());
    }
    if let Some(ref csv) = args.csv {
        config.csv_path = csv.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if args.verify_tls {
        config.verify_tls = true;
    }
    if let Some(ref dir) = args.log_dir {
        config.log_dir = Some(dir.clone());
    }

    Ok(config)
}

async fn run(args: &Cli, config: &Config, status: &Status) -> Result<(), CliError> {
    let transport = TransportConfig {
        verify_tls: config.verify_tls,
        timeout: Duration::from_secs(config.timeout_secs),
    };

    // 1. Authenticate.
    let mut client = authenticate(config, &transport, status).await?;

    // 2. Optional switch into an external account.
    if !account_step(&mut client, args, status).await? {
        status.note("exiting at user request");
        return Ok(());
    }

    // 3. One collection pass feeds both the CSV and the reconciliation.
    let spinner_bar = spinner(status, "collecting devices and broadcast SSIDs");
    let collected = collect::ssid_inventory(&client, args.simulated).await;
    spinner_bar.finish_and_clear();
    let inventory = collected.map_err(CliError::CollectSsids)?;
    info!(
        bssids = inventory.records.len(),
        ssids = inventory.groups.len(),
        "SSID list collected"
    );
    status.ok(&format!(
        "SSID list collected, {} BSSIDs across {} SSIDs",
        inventory.records.len(),
        inventory.groups.len()
    ));

    // 4. CSV inventory.
    export::write_csv(&config.csv_path, &inventory.records).map_err(CliError::Csv)?;
    status.ok(&format!("CSV file created at {}", config.csv_path.display()));

    // 5. Confirmation gate before any remote mutation.
    if !args.yes {
        match prompts::yes_no("Continue with creating/updating CCGs?")? {
            Decision::Yes => {}
            Decision::No | Decision::Quit => {
                status.note("leaving CCGs untouched");
                return Ok(());
            }
        }
    }

    // 6. Current remote state.
    let spinner_bar = spinner(status, "collecting existing CCGs");
    let collected = collect::ccgs(&client).await;
    spinner_bar.finish_and_clear();
    let existing = collected.map_err(CliError::CollectCcgs)?;
    status.ok(&format!("{} CCGs collected", existing.len()));

    // 7. Plan and apply.
    let actions = reconcile::plan(&inventory.groups, &existing);
    if actions.is_empty() {
        status.ok("all CCGs already match the broadcast SSIDs");
        return Ok(());
    }
    show_plan(&actions, status);
    apply_plan(&client, &actions, status).await
}

/// Resolve credentials and produce an authenticated client.
///
/// A configured token wins and skips all prompting; otherwise the username
/// comes from config/flags or a prompt, and the password is always
/// prompted.
async fn authenticate(
    config: &Config,
    transport: &TransportConfig,
    status: &Status,
) -> Result<XiqClient, CliError> {
    if let Some(ref token) = config.token {
        let client =
            XiqClient::with_token(&config.base_url, SecretString::from(token.clone()), transport)
                .map_err(|e| CliError::Login {
                    message: e.to_string(),
                })?;
        info!("logged in with pre-issued token");
        status.ok("using pre-issued API token");
        return Ok(client);
    }

    status.note("enter your XIQ login credentials");
    let username = match config.username.clone() {
        Some(username) => username,
        None => prompts::username()?,
    };
    let password = prompts::password()?;
    if username.is_empty() {
        return Err(CliError::Login {
            message: "username or password was not entered".into(),
        });
    }

    let client = XiqClient::login(&config.base_url, &username, &password, transport)
        .await
        .map_err(|e| CliError::Login {
            message: e.to_string(),
        })?;
    info!(user = %username, "logged in with credentials");
    status.ok(&format!("user {username} logged in"));
    Ok(client)
}

/// List external accounts and resolve the switch decision.
///
/// Returns `false` when the user chose to abandon the run.
async fn account_step(
    client: &mut XiqClient,
    args: &Cli,
    status: &Status,
) -> Result<bool, CliError> {
    let accounts = client.external_accounts().await.map_err(CliError::Accounts)?;
    if accounts.is_empty() {
        return Ok(true);
    }

    if let Some(id) = args.account {
        if !accounts.iter().any(|a| a.id == id) {
            return Err(CliError::Switch {
                message: format!("{id} is not an accessible external account"),
            });
        }
        switch(client, id, &accounts, status).await?;
        return Ok(true);
    }

    if args.yes {
        info!("external accounts available, staying on the home account (--yes)");
        return Ok(true);
    }

    status.note("external accounts are available:");
    show_accounts(&accounts, status);
    match prompts::select_account(&accounts, status)? {
        AccountChoice::Stay => Ok(true),
        AccountChoice::Quit => Ok(false),
        AccountChoice::Switch(id) => {
            switch(client, id, &accounts, status).await?;
            Ok(true)
        }
    }
}

async fn switch(
    client: &mut XiqClient,
    id: u64,
    accounts: &[ExternalAccount],
    status: &Status,
) -> Result<(), CliError> {
    client
        .switch_account(id)
        .await
        .map_err(|e| CliError::Switch {
            message: e.to_string(),
        })?;
    let name = accounts
        .iter()
        .find(|a| a.id == id)
        .map_or("", |a| a.name.as_str());
    status.ok(&format!("switched into account {name} ({id})"));
    Ok(())
}

/// Apply the plan one call at a time, fail-fast. Earlier mutations stay.
async fn apply_plan(
    client: &XiqClient,
    actions: &[CcgAction],
    status: &Status,
) -> Result<(), CliError> {
    let mut created = 0usize;
    let mut updated = 0usize;

    for action in actions {
        match reconcile::apply_action(client, action).await {
            Ok(_) => {
                if action.is_create() {
                    created += 1;
                    status.ok(&format!(
                        "CCG {} created with {} devices",
                        action.name(),
                        action.device_ids().len()
                    ));
                } else {
                    updated += 1;
                    status.ok(&format!("device list in CCG {} updated", action.name()));
                }
            }
            Err(source) => {
                return Err(if action.is_create() {
                    CliError::CreateCcg {
                        name: action.name().to_owned(),
                        source,
                    }
                } else {
                    CliError::UpdateCcg {
                        name: action.name().to_owned(),
                        source,
                    }
                });
            }
        }
    }

    info!(created, updated, "reconciliation complete");
    status.ok(&format!(
        "reconciliation complete: {created} created, {updated} updated"
    ));
    Ok(())
}

// ── Table views ─────────────────────────────────────────────────────

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Account")]
    name: String,
}

fn show_accounts(accounts: &[ExternalAccount], status: &Status) {
    if status.quiet() {
        return;
    }
    let rows: Vec<AccountRow> = accounts
        .iter()
        .map(|a| AccountRow {
            id: a.id,
            name: a.name.clone(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
}

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Action")]
    action: &'static str,
    #[tabled(rename = "Devices")]
    devices: usize,
}

fn show_plan(actions: &[CcgAction], status: &Status) {
    if status.quiet() {
        return;
    }
    let rows: Vec<PlanRow> = actions
        .iter()
        .map(|action| PlanRow {
            ssid: action.name().to_owned(),
            action: if action.is_create() { "create" } else { "update" },
            devices: action.device_ids().len(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
}

fn spinner(status: &Status, message: &str) -> ProgressBar {
    if status.quiet() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner().with_message(message.to_owned());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
