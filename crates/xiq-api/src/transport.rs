// Transport configuration for building the underlying reqwest::Client.
//
// XIQ is a public cloud API, but deployments routinely sit behind TLS
// inspection, so certificate verification is OFF unless explicitly enabled.
// Proxies are disabled outright; the API must be reached directly.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::Error;

/// Shared transport settings for the API client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Verify TLS certificates. Defaults to `false`.
    pub verify_tls: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            verify_tls: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// JSON `Accept`/`Content-Type` headers are installed as defaults so
    /// every request carries them, including empty-body POSTs.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("ccgsync/0.1.0")
            .default_headers(headers)
            .no_proxy();

        if !self.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(Error::Transport)
    }
}
