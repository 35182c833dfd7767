// XIQ HTTP client
//
// Wraps `reqwest::Client` with bearer-token handling and the response
// validation contract shared by every endpoint: a call succeeds only if a
// response arrives, its status is 200 or 201, and its body parses as the
// expected shape. Endpoint modules (devices, ccgs, accounts) add inherent
// methods in separate files to keep this one focused on transport mechanics.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::error::Error;
use crate::models::TokenResponse;
use crate::transport::TransportConfig;

/// Authenticated client for the XIQ management API.
///
/// Exclusively owns the active bearer credential: `login` installs it,
/// `switch_account` replaces it, and nothing else touches it. All calls are
/// issued one at a time by the owner; the client holds no other state.
#[derive(Debug)]
pub struct XiqClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl XiqClient {
    /// Authenticate with username/password via `POST /login` and install
    /// the returned access token as the bearer credential.
    pub async fn login(
        base_url: &str,
        username: &str,
        password: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut client = Self::unauthenticated(base_url, transport)?;

        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let url = client.endpoint("login");
        let resp: TokenResponse = client
            .post(
                url,
                &LoginRequest {
                    username,
                    password: password.expose_secret(),
                },
            )
            .await?;

        match resp.access_token {
            Some(token) => {
                client.token = Some(SecretString::from(token));
                Ok(client)
            }
            None => Err(Error::Authentication {
                message: "login response carried no access token".into(),
            }),
        }
    }

    /// Create a client from a pre-supplied API token. No network call.
    pub fn with_token(
        base_url: &str,
        token: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut client = Self::unauthenticated(base_url, transport)?;
        client.token = Some(token);
        Ok(client)
    }

    fn unauthenticated(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url: Url::parse(base_url)?,
            token: None,
        })
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Install a replacement bearer token (used by `switch_account`).
    pub(crate) fn set_token(&mut self, token: SecretString) {
        self.token = Some(token);
    }

    /// Build a full URL for an API path with query string already attached.
    /// `path_and_query` must not start with a slash.
    pub(crate) fn endpoint(&self, path_and_query: &str) -> String {
        let base = self.base_url.as_str();
        if base.ends_with('/') {
            format!("{base}{path_and_query}")
        } else {
            format!("{base}/{path_and_query}")
        }
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        builder
    }

    /// Send a GET request and validate/parse the response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, Error> {
        debug!("GET {url}");
        let resp = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_response(resp).await
    }

    /// Send a POST request with a JSON body and validate/parse the response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: String,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        debug!("POST {url}");
        let resp = self
            .request(reqwest::Method::POST, &url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_response(resp).await
    }

    /// Send a POST request with an empty body (the `:switch` endpoint takes
    /// its input as a query parameter).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, url: String) -> Result<T, Error> {
        debug!("POST {url}");
        let resp = self
            .request(reqwest::Method::POST, &url)
            .body("")
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_response(resp).await
    }

    /// Send a PUT request with a JSON body and validate/parse the response.
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        url: String,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        debug!("PUT {url}");
        let resp = self
            .request(reqwest::Method::PUT, &url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_response(resp).await
    }

    /// Apply the uniform response contract: status 200/201, parsable body.
    ///
    /// Non-2xx bodies are mined for the API's `error_message` field so the
    /// surfaced error is readable; anything else falls back to the status.
    async fn check_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !matches!(status.as_u16(), 200 | 201) {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error_message")
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_owned()
                });
            error!("HTTP {status}: {message}");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
