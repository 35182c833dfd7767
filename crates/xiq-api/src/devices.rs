// Device and radio endpoints
//
// Both listings are paginated with page/limit query parameters. The radio
// endpoint additionally takes the batch of device IDs it should describe,
// comma-joined; it caps at 50 devices per call, which is why callers pin
// their page size to 50.

use tracing::debug;

use crate::client::XiqClient;
use crate::error::Error;
use crate::models::{DevicePage, RadioInfoPage};

impl XiqClient {
    /// Fetch one page of the device listing.
    ///
    /// `GET /devices?page=&limit=` (plus `&deviceTypes=SIMULATED` when
    /// `simulated` is set).
    pub async fn devices_page(
        &self,
        page: u32,
        limit: u32,
        simulated: bool,
    ) -> Result<DevicePage, Error> {
        let mut url = self.endpoint(&format!("devices?page={page}&limit={limit}"));
        if simulated {
            url.push_str("&deviceTypes=SIMULATED");
        }
        debug!(page, "listing devices");
        self.get(url).await
    }

    /// Fetch radio details for a batch of devices.
    ///
    /// `GET /devices/radio-information?page=&limit=&deviceIds=a,b,c`
    pub async fn radio_information(
        &self,
        page: u32,
        limit: u32,
        device_ids: &[u64],
    ) -> Result<RadioInfoPage, Error> {
        let ids = device_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let url = self.endpoint(&format!(
            "devices/radio-information?page={page}&limit={limit}&deviceIds={ids}"
        ));
        debug!(page, batch = device_ids.len(), "fetching radio information");
        self.get(url).await
    }
}
