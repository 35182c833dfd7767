// xiq-api: Async Rust client for the ExtremeCloud IQ management API
//
// Covers the subset ccgsync needs: login / token auth, external-account
// switching, paginated device and radio listings, and CCG CRUD. Every call
// either yields a parsed payload or a single uniform `Error` -- there is no
// retry logic at this layer.

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod accounts;
mod ccgs;
mod devices;

pub use client::XiqClient;
pub use error::Error;
pub use transport::TransportConfig;
