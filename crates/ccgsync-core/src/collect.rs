// Paginated collection procedures
//
// Two walks over the API, with deliberately different paging policies:
//
// - `ssid_inventory` pages through /devices and takes the `total_pages`
//   from the FIRST response as the bound for the whole loop, advancing a
//   local counter. Later pages' totals are ignored.
// - `ccgs` pages through /ccgs, re-reading `total_pages` from EVERY
//   response and advancing to the server-echoed `page + 1`.
//
// The asymmetry is intentional and preserved from the production behavior;
// the tests in tests/collect_test.rs pin both policies side by side. Both
// loops assume the remote collection is stable for the duration of one run.

use std::collections::HashMap;

use tracing::info;

use xiq_api::XiqClient;
use xiq_api::models::Ccg;

use crate::error::CoreError;
use crate::model::{FlatRecord, Inventory, SsidGroups};

/// Page size for every paginated listing. The radio-information endpoint
/// caps at 50 devices per call, and the device page feeds it one batch per
/// page, so both listings use the same size.
pub const PAGE_SIZE: u32 = 50;

/// Collect every AP's radios and WLANs into the two derived views.
///
/// Per page: list devices, keep the APs, and fetch radio details for that
/// page's AP IDs in one batch. Each (device, radio, wlan) triple appends a
/// [`FlatRecord`] and records the device under the WLAN's SSID. A device
/// page with no APs still issues the radio query with an empty ID list.
///
/// BSSID handling: `"Simulated"` in simulated mode, otherwise the radio's
/// BSSID or `"Unknown"` when absent. Any page failure aborts the whole
/// collection; no partial inventory is returned.
pub async fn ssid_inventory(client: &XiqClient, simulated: bool) -> Result<Inventory, CoreError> {
    let mut records = Vec::new();
    let mut groups = SsidGroups::new();

    let mut page = 1u32;
    let mut page_count = 1u32;
    let mut first_page = true;

    while page <= page_count {
        let batch = client.devices_page(page, PAGE_SIZE, simulated).await?;
        if first_page {
            page_count = batch.total_pages;
            first_page = false;
        }

        let aps: Vec<_> = batch.data.iter().filter(|d| d.is_ap()).collect();
        let hostnames: HashMap<u64, &str> =
            aps.iter().map(|d| (d.id, d.hostname.as_str())).collect();
        let ids: Vec<u64> = aps.iter().map(|d| d.id).collect();

        let radio_page = client.radio_information(page, PAGE_SIZE, &ids).await?;
        for details in &radio_page.data {
            let device_name = hostnames.get(&details.device_id).copied().unwrap_or("Unknown");
            for radio in &details.radios {
                for wlan in &radio.wlans {
                    let bssid = if simulated {
                        "Simulated".to_owned()
                    } else {
                        wlan.bssid.clone().unwrap_or_else(|| "Unknown".to_owned())
                    };
                    records.push(FlatRecord {
                        device_name: device_name.to_owned(),
                        radio: radio.name.clone(),
                        ssid: wlan.ssid.clone(),
                        bssid,
                    });
                    groups.record(&wlan.ssid, details.device_id);
                }
            }
        }

        info!(page, page_count, "completed device page");
        page += 1;
    }

    Ok(Inventory { records, groups })
}

/// Collect every CCG across all pages.
///
/// The cursor is the page number the server says it served, plus one, and
/// the bound is re-read from each response -- unlike the device walk above.
pub async fn ccgs(client: &XiqClient) -> Result<Vec<Ccg>, CoreError> {
    let mut all = Vec::new();

    let mut page = 1u32;
    let mut page_count = 1u32;

    while page <= page_count {
        let batch = client.ccgs_page(page, PAGE_SIZE).await?;
        all.extend(batch.data);

        page_count = batch.total_pages;
        page = batch.page + 1;

        info!(served = batch.page, page_count, "completed CCG page");
    }

    Ok(all)
}
