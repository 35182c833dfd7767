// Cloud config group endpoints
//
// CCGs are the server-side device groupings ccgsync reconciles. Create and
// update both take the full payload; an update replaces name, description,
// and membership wholesale.

use tracing::debug;

use crate::client::XiqClient;
use crate::error::Error;
use crate::models::{Ccg, CcgPage, CcgPayload};

impl XiqClient {
    /// Fetch one page of the CCG listing.
    ///
    /// `GET /ccgs?page=&limit=`
    pub async fn ccgs_page(&self, page: u32, limit: u32) -> Result<CcgPage, Error> {
        let url = self.endpoint(&format!("ccgs?page={page}&limit={limit}"));
        debug!(page, "listing CCGs");
        self.get(url).await
    }

    /// Create a CCG.
    ///
    /// `POST /ccgs`
    pub async fn create_ccg(&self, payload: &CcgPayload) -> Result<Ccg, Error> {
        let url = self.endpoint("ccgs");
        debug!(name = %payload.name, members = payload.device_ids.len(), "creating CCG");
        self.post(url, payload).await
    }

    /// Replace a CCG's name, description, and membership.
    ///
    /// `PUT /ccgs/{id}`
    pub async fn update_ccg(&self, id: u64, payload: &CcgPayload) -> Result<Ccg, Error> {
        let url = self.endpoint(&format!("ccgs/{id}"));
        debug!(id, name = %payload.name, members = payload.device_ids.len(), "updating CCG");
        self.put(url, payload).await
    }
}
