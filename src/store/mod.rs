//! Store Module
//!
//! The in-memory, ordered collection of country records.
//!
//! ## Responsibilities
//! - Own the authoritative records for a session
//! - Preserve insertion order
//! - Reject case-insensitive name collisions
//! - Expose read-only queries that delegate to [`crate::query`]
//!
//! Sorting never touches stored order; it always works on a copy.

mod records;

pub use records::RecordStore;
