//! CSV Writer
//!
//! Serializes records to the data file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::model::{Country, FIELD_NAMES};

/// Write all records to `path`, replacing its contents
pub fn save(records: &[Country], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    save_to_writer(records, file)?;
    tracing::info!("Saved {} countries to {}", records.len(), path.display());
    Ok(())
}

/// Write the header followed by one row per record
///
/// The header is written explicitly so an empty store still produces it.
pub fn save_to_writer<W: Write>(records: &[Country], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(FIELD_NAMES)?;
    for country in records {
        csv_writer.serialize(country)?;
    }
    csv_writer.flush()?;
    Ok(())
}
