//! Query Module
//!
//! Pure functions over a slice of records: search, filters, sorting and
//! aggregate statistics. Nothing here mutates its input.
//!
//! ## Matching Rules
//! - Name search: case-insensitive substring, empty query matches everything
//! - Continent filter: case-insensitive equality
//! - Range filters: inclusive bounds, `min > max` is an error (not an empty result)

mod filter;
mod sort;
mod stats;

pub use filter::{
    continents, filter_by_area_range, filter_by_continent, filter_by_population_range,
    find_by_substring,
};
pub use sort::{sort, SortDirection, SortKey};
pub use stats::{statistics, ContinentCount, Statistics};
