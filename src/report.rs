//! Timestamp report output.
//!
//! The sole output artifact of a scan is a JSON array of floating-point
//! second offsets, e.g. `[12.4,13.2,57.6]`. Nothing is written unless the
//! caller asks for it; there is no implicit output path.

use std::io::{Error as IoError, Write};
use std::{fs, path::Path};

use crate::error::BlipscanError;

/// Render the timestamps as a JSON array.
pub fn to_json(timestamps: &[f64]) -> Result<String, BlipscanError> {
    serde_json::to_string(timestamps).map_err(|e| IoError::from(e).into())
}

/// Write the timestamps as a JSON array to `path`, replacing any existing
/// file.
pub fn write_json(path: impl AsRef<Path>, timestamps: &[f64]) -> Result<(), BlipscanError> {
    let path = path.as_ref();
    log::debug!("Writing {} timestamp(s) to {}", timestamps.len(), path.display());

    let file = fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer(&mut writer, timestamps).map_err(IoError::from)?;
    writer.flush()?;
    Ok(())
}
