//! Sorting
//!
//! Always returns a sorted copy. The sort is stable in both directions:
//! records with equal keys keep their relative input order.

use std::cmp::Ordering;

use crate::model::Country;

/// Field to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexical (code-point) order of the name
    Name,
    Population,
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortKey {
    fn compare(self, a: &Country, b: &Country) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Population => a.population.cmp(&b.population),
            SortKey::Area => a.area.cmp(&b.area),
        }
    }
}

/// Sorted copy of `records`
pub fn sort(records: &[Country], key: SortKey, direction: SortDirection) -> Vec<Country> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| key.compare(a, b)),
        // Swapped operands rather than `.reverse()` on the result, so ties stay in input order
        SortDirection::Descending => sorted.sort_by(|a, b| key.compare(b, a)),
    }
    sorted
}
