// Derived views of one collection pass.
//
// A single walk over the device/radio listings produces both the flat CSV
// rows and the SSID grouping; keeping them in one `Inventory` guarantees
// they describe the same snapshot.

use indexmap::IndexMap;
use serde::Serialize;

/// One CSV row: a (device, radio, wlan) triple as observed.
///
/// No uniqueness is implied -- a device broadcasting the same SSID on two
/// radios yields two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRecord {
    pub device_name: String,
    pub radio: String,
    pub ssid: String,
    pub bssid: String,
}

/// SSID → broadcasting device IDs, in first-observation order.
///
/// Each device appears at most once per SSID, however many of its radios
/// broadcast it. Iteration order is the order SSIDs were first seen, which
/// downstream reconciliation relies on.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SsidGroups(IndexMap<String, Vec<u64>>);

impl SsidGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `device_id` broadcasts `ssid`. Duplicate observations
    /// of the same pair are ignored.
    pub fn record(&mut self, ssid: &str, device_id: u64) {
        let devices = self.0.entry(ssid.to_owned()).or_default();
        if !devices.contains(&device_id) {
            devices.push(device_id);
        }
    }

    /// Device IDs broadcasting `ssid`, if any were observed.
    pub fn get(&self, ssid: &str) -> Option<&[u64]> {
        self.0.get(ssid).map(Vec::as_slice)
    }

    /// Number of distinct SSIDs observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in first-observation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// The two views produced by one collection pass.
#[derive(Debug, Default)]
pub struct Inventory {
    pub records: Vec<FlatRecord>,
    pub groups: SsidGroups,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn record_dedups_device_within_ssid() {
        let mut groups = SsidGroups::new();
        groups.record("guest", 101);
        groups.record("guest", 101);
        groups.record("guest", 102);

        assert_eq!(groups.get("guest"), Some(&[101, 102][..]));
    }

    #[test]
    fn same_device_can_back_multiple_ssids() {
        let mut groups = SsidGroups::new();
        groups.record("guest", 101);
        groups.record("corp", 101);

        assert_eq!(groups.get("guest"), Some(&[101][..]));
        assert_eq!(groups.get("corp"), Some(&[101][..]));
    }

    #[test]
    fn iteration_follows_first_observation_order() {
        let mut groups = SsidGroups::new();
        groups.record("zulu", 1);
        groups.record("alpha", 2);
        groups.record("zulu", 3);

        let order: Vec<&str> = groups.iter().map(|(ssid, _)| ssid).collect();
        assert_eq!(order, vec!["zulu", "alpha"]);
    }
}
