// External (managed) account endpoints
//
// An XIQ login may have access to other tenants. Switching into one
// replaces the active bearer token for the remainder of the run.

use secrecy::SecretString;
use tracing::{debug, info};

use crate::client::XiqClient;
use crate::error::Error;
use crate::models::{ExternalAccount, TokenResponse};

impl XiqClient {
    /// List the external accounts reachable from the authenticated one.
    ///
    /// `GET /account/external`
    pub async fn external_accounts(&self) -> Result<Vec<ExternalAccount>, Error> {
        let url = self.endpoint("account/external");
        debug!("listing external accounts");
        self.get(url).await
    }

    /// Switch into an external account.
    ///
    /// `POST /account/:switch?id={id}` -- the literal `:switch` is part of
    /// the path. On success the returned access token replaces the active
    /// bearer credential; a response without one is an authentication
    /// failure.
    pub async fn switch_account(&mut self, account_id: u64) -> Result<(), Error> {
        let url = self.endpoint(&format!("account/:switch?id={account_id}"));
        let resp: TokenResponse = self.post_empty(url).await?;

        match resp.access_token {
            Some(token) => {
                self.set_token(SecretString::from(token));
                info!(account_id, "switched into external account");
                Ok(())
            }
            None => Err(Error::Authentication {
                message: format!("account switch returned no access token (account {account_id})"),
            }),
        }
    }
}
