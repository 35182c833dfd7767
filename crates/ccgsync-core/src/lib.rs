//! Business logic for ccgsync: one collection pass over the XIQ device and
//! radio listings, the two derived views it produces, and the reconciliation
//! of CCG membership against those views.
//!
//! - **[`collect`]** -- the paginated collection procedures. One pass yields
//!   an [`Inventory`]: a flat record per (device, radio, wlan) triple for
//!   CSV export, and an insertion-ordered SSID → device-ID grouping for
//!   reconciliation. Both views come from the same snapshot.
//! - **[`export`]** -- CSV inventory output.
//! - **[`reconcile`]** -- diffs desired vs. actual CCG membership into
//!   [`CcgAction`]s and applies them one call at a time.
//!
//! Everything here is strictly sequential; a failed call aborts the
//! enclosing procedure with no partial result.

pub mod collect;
pub mod error;
pub mod export;
pub mod model;
pub mod reconcile;

pub use error::CoreError;
pub use model::{FlatRecord, Inventory, SsidGroups};
pub use reconcile::CcgAction;
