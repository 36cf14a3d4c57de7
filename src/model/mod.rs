//! Model Module
//!
//! The single entity the registry manages.
//!
//! ## Invariants
//! - `name` and `continent` are non-empty after trimming
//! - `population` and `area` are non-negative (enforced by `u64`)
//! - Names are unique under case-insensitive comparison (enforced by the store)

mod country;

pub use country::{Country, FIELD_NAMES};
