//! Interactive prompts.
//!
//! Every loop here resolves to a plain value before the core procedures
//! run; nothing below the CLI ever blocks on input. Malformed entries
//! re-prompt locally -- they are user input, not call failures.

use dialoguer::{Input, Password};
use secrecy::SecretString;

use xiq_api::models::ExternalAccount;

use crate::error::CliError;
use crate::status::Status;

/// Outcome of a yes/no/quit question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Yes,
    No,
    Quit,
}

/// Outcome of the external-account selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountChoice {
    /// Keep the home account.
    Stay,
    /// Switch into this account.
    Switch(u64),
    /// Abandon the run.
    Quit,
}

/// Ask a yes/no question, also accepting quit. Anything else re-asks.
pub fn yes_no(question: &str) -> Result<Decision, CliError> {
    loop {
        let answer: String = Input::new()
            .with_prompt(format!("{question} (y/n/q)"))
            .interact_text()?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Decision::Yes),
            "n" | "no" => return Ok(Decision::No),
            "q" | "quit" => return Ok(Decision::Quit),
            _ => {}
        }
    }
}

/// Prompt for the login username (email).
pub fn username() -> Result<String, CliError> {
    Ok(Input::new().with_prompt("Email").interact_text()?)
}

/// Prompt for the login password, hidden.
pub fn password() -> Result<SecretString, CliError> {
    let entered = Password::new().with_prompt("Password").interact()?;
    Ok(SecretString::from(entered))
}

/// Ask which external account to switch into, if any.
///
/// Blank keeps the home account, `q` abandons the run. A non-integer or
/// unknown ID re-prompts.
pub fn select_account(
    accounts: &[ExternalAccount],
    status: &Status,
) -> Result<AccountChoice, CliError> {
    loop {
        let answer: String = Input::new()
            .with_prompt("Account ID to switch into (blank = stay, q = quit)")
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();

        if answer.is_empty() {
            return Ok(AccountChoice::Stay);
        }
        if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
            return Ok(AccountChoice::Quit);
        }

        match answer.parse::<u64>() {
            Ok(id) if accounts.iter().any(|a| a.id == id) => {
                return Ok(AccountChoice::Switch(id));
            }
            Ok(id) => status.note(&format!("{id} is not one of the listed account IDs")),
            Err(_) => status.note("please enter a numeric account ID"),
        }
    }
}
