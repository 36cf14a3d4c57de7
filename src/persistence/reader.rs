//! CSV Reader
//!
//! Parses the data file into records.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::{RegistryError, Result};
use crate::model::{Country, FIELD_NAMES};
use crate::store::RecordStore;

/// Load every record from `path`
pub fn load(path: &Path) -> Result<Vec<Country>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RegistryError::DataFileMissing(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let records = load_from_reader(file)?;
    tracing::info!("Loaded {} countries from {}", records.len(), path.display());
    Ok(records)
}

/// Load and build a store, rejecting duplicate names
pub fn load_store(path: &Path) -> Result<RecordStore> {
    RecordStore::from_records(load(path)?)
}

/// Parse CSV data from any reader
///
/// An empty input (no header at all) yields no records.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Country>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if !headers.iter().eq(FIELD_NAMES) {
        return Err(RegistryError::InvalidHeader {
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut countries = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(malformed)?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let country: Country = row
            .deserialize(Some(&headers))
            .map_err(|e| RegistryError::MalformedRow {
                line,
                reason: e.to_string(),
            })?;
        country.validate().map_err(|e| RegistryError::MalformedRow {
            line,
            reason: e.to_string(),
        })?;

        countries.push(country);
    }

    Ok(countries)
}

/// Map a row-level CSV error (wrong field count, bad UTF-8) to `MalformedRow`
fn malformed(err: csv::Error) -> RegistryError {
    if err.is_io_error() {
        return RegistryError::Csv(err);
    }
    RegistryError::MalformedRow {
        line: err.position().map(|p| p.line()).unwrap_or_default(),
        reason: err.to_string(),
    }
}
