// CSV inventory export
//
// Deliberately not the `csv` crate: the established file format is a bare
// comma join with no quoting or escaping, and consumers of the sheet expect
// those exact bytes. A field containing a comma will shift columns.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::CoreError;
use crate::model::FlatRecord;

/// Column header, matching the established sheet layout.
pub const CSV_HEADER: &str = "Device Name,Radio,SSID,BSSID";

/// Write the flat inventory to `path`, one row per record, in encounter
/// order. The file is truncated if it exists and closed on every path.
pub fn write_csv(path: &Path, records: &[FlatRecord]) -> Result<(), CoreError> {
    let csv_err = |source| CoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(csv_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{CSV_HEADER}").map_err(csv_err)?;
    for record in records {
        writeln!(
            out,
            "{},{},{},{}",
            record.device_name, record.radio, record.ssid, record.bssid
        )
        .map_err(csv_err)?;
    }
    out.flush().map_err(csv_err)?;

    info!(rows = records.len(), path = %path.display(), "wrote CSV inventory");
    Ok(())
}
