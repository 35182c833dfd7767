use thiserror::Error;

/// Top-level error type for the `xiq-api` crate.
///
/// Every failure mode of every call collapses into one of these variants:
/// transport problems, non-2xx statuses, and bodies that fail to parse.
/// None of them is retryable -- callers log the message and abort the
/// enclosing step.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login or account switch did not yield a usable access token.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// The API answered with a status other than 200 or 201.
    ///
    /// `message` carries the body's `error_message` field when the API
    /// provides one, otherwise the raw status line.
    #[error("API call failed (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Unable to parse response body: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The HTTP status behind this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
