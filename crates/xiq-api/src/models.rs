// Wire models for the XIQ management API.
//
// Shapes mirror the JSON the API actually returns. `#[serde(default)]` is
// used where the API omits fields (`wlans` on dormant radios, `bssid` on
// radios that aren't broadcasting), and left off where a missing field
// means the response is unusable (`total_pages` on paged listings).

use serde::{Deserialize, Serialize};

// ── Auth ─────────────────────────────────────────────────────────────

/// Response shape of `POST /login` and `POST /account/:switch`.
///
/// `access_token` is optional at the serde level so that its absence can be
/// reported as an authentication failure instead of a parse failure.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// An external (managed) account reachable from the authenticated one,
/// from `GET /account/external`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalAccount {
    pub id: u64,
    pub name: String,
}

// ── Devices & radios ─────────────────────────────────────────────────

/// One page of `GET /devices`.
#[derive(Debug, Deserialize)]
pub struct DevicePage {
    pub data: Vec<Device>,
    pub total_pages: u32,
}

/// Device entry from the device listing. Only the fields ccgsync reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub id: u64,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub device_function: Option<String>,
}

impl Device {
    /// Whether this device is an access point.
    pub fn is_ap(&self) -> bool {
        self.device_function.as_deref() == Some("AP")
    }
}

/// Response shape of `GET /devices/radio-information`.
#[derive(Debug, Deserialize)]
pub struct RadioInfoPage {
    pub data: Vec<RadioInfo>,
}

/// Per-device radio details.
#[derive(Debug, Clone, Deserialize)]
pub struct RadioInfo {
    pub device_id: u64,
    #[serde(default)]
    pub radios: Vec<Radio>,
}

/// A single radio and the WLANs it broadcasts.
#[derive(Debug, Clone, Deserialize)]
pub struct Radio {
    pub name: String,
    #[serde(default)]
    pub wlans: Vec<Wlan>,
}

/// A WLAN broadcast by a radio. `bssid` is absent on simulated devices
/// and on radios that aren't up.
#[derive(Debug, Clone, Deserialize)]
pub struct Wlan {
    pub ssid: String,
    #[serde(default)]
    pub bssid: Option<String>,
}

// ── CCGs ─────────────────────────────────────────────────────────────

/// One page of `GET /ccgs`.
///
/// Unlike the device listing, this endpoint echoes the current `page`,
/// which the collection loop uses as its cursor.
#[derive(Debug, Deserialize)]
pub struct CcgPage {
    pub data: Vec<Ccg>,
    pub total_pages: u32,
    pub page: u32,
}

/// A cloud config group.
#[derive(Debug, Clone, Deserialize)]
pub struct Ccg {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub device_ids: Vec<u64>,
}

/// Request body for `POST /ccgs` and `PUT /ccgs/{id}`.
///
/// Updates are full replacements: name, description, and the complete
/// membership set are sent every time.
#[derive(Debug, Clone, Serialize)]
pub struct CcgPayload {
    pub name: String,
    pub description: String,
    pub device_ids: Vec<u64>,
}
