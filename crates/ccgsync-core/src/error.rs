use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for collection, export, and reconciliation procedures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An API call failed. Carries the uniform `xiq-api` failure.
    #[error(transparent)]
    Api(#[from] xiq_api::Error),

    /// Writing the CSV inventory failed.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
