// CCG reconciliation
//
// Planning is pure: walk the SSID grouping in first-observation order,
// match each SSID against the collected CCGs by exact name (first match
// wins), and emit an action only where remote state differs. Application
// is one call per action; the caller loops and stops at the first failure,
// leaving earlier mutations in place.

use std::collections::HashSet;

use tracing::{debug, info};

use xiq_api::XiqClient;
use xiq_api::models::{Ccg, CcgPayload};

use crate::error::CoreError;
use crate::model::SsidGroups;

/// A corrective call the reconciliation decided on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CcgAction {
    /// No group carries this SSID's name yet.
    Create {
        name: String,
        description: String,
        device_ids: Vec<u64>,
    },
    /// A group exists but its membership drifted. The update keeps the
    /// group's id and description and replaces the membership wholesale.
    Update {
        id: u64,
        name: String,
        description: String,
        device_ids: Vec<u64>,
    },
}

impl CcgAction {
    /// The group name this action targets.
    pub fn name(&self) -> &str {
        match self {
            Self::Create { name, .. } | Self::Update { name, .. } => name,
        }
    }

    /// The full membership the action will install.
    pub fn device_ids(&self) -> &[u64] {
        match self {
            Self::Create { device_ids, .. } | Self::Update { device_ids, .. } => device_ids,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create { .. })
    }
}

/// Membership comparison is unordered set equality; duplicates on either
/// side are irrelevant.
fn same_members(current: &[u64], desired: &[u64]) -> bool {
    let current: HashSet<u64> = current.iter().copied().collect();
    let desired: HashSet<u64> = desired.iter().copied().collect();
    current == desired
}

/// Compute the minimal set of corrective actions, in SSID first-observation
/// order. SSIDs whose group already matches produce nothing.
pub fn plan(groups: &SsidGroups, existing: &[Ccg]) -> Vec<CcgAction> {
    let mut actions = Vec::new();

    for (ssid, device_ids) in groups.iter() {
        match existing.iter().find(|ccg| ccg.name == ssid) {
            Some(ccg) => {
                if same_members(&ccg.device_ids, device_ids) {
                    debug!(ssid, "membership already matches");
                } else {
                    info!(ssid, "membership drifted, scheduling update");
                    actions.push(CcgAction::Update {
                        id: ccg.id,
                        name: ssid.to_owned(),
                        description: ccg.description.clone(),
                        device_ids: device_ids.to_vec(),
                    });
                }
            }
            None => {
                info!(ssid, "no matching CCG, scheduling create");
                actions.push(CcgAction::Create {
                    name: ssid.to_owned(),
                    description: format!("group for SSID {ssid}"),
                    device_ids: device_ids.to_vec(),
                });
            }
        }
    }

    actions
}

/// Issue the single create or update call for one action.
pub async fn apply_action(client: &XiqClient, action: &CcgAction) -> Result<Ccg, CoreError> {
    match action {
        CcgAction::Create {
            name,
            description,
            device_ids,
        } => {
            let created = client
                .create_ccg(&CcgPayload {
                    name: name.clone(),
                    description: description.clone(),
                    device_ids: device_ids.clone(),
                })
                .await?;
            info!(name = %created.name, members = device_ids.len(), "CCG created");
            Ok(created)
        }
        CcgAction::Update {
            id,
            name,
            description,
            device_ids,
        } => {
            let updated = client
                .update_ccg(
                    *id,
                    &CcgPayload {
                        name: name.clone(),
                        description: description.clone(),
                        device_ids: device_ids.clone(),
                    },
                )
                .await?;
            info!(name = %updated.name, members = device_ids.len(), "CCG updated");
            Ok(updated)
        }
    }
}
