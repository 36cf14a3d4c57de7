//! Persistence Module
//!
//! Loads and saves the record store as a UTF-8 CSV file.
//!
//! ## File Format
//! ```text
//! name,population,area,continent
//! Chile,19000000,756000,South America
//! "Korea, South",51700000,100210,Asia
//! ```
//! - Header is mandatory and fixed (column order included)
//! - Standard CSV quoting for fields containing delimiters
//! - One row per record, in store order
//!
//! ## Failure Policy
//! Loading is all-or-nothing: a missing file, an unreadable file or a single
//! malformed row fails the whole load. Callers fall back to an empty store.

mod reader;
mod writer;

pub use reader::{load, load_from_reader, load_store};
pub use writer::{save, save_to_writer};
