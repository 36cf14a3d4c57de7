//! Search and filter operations

use crate::error::{RegistryError, Result};
use crate::model::Country;

/// Case-insensitive substring match on `name`, in input order
pub fn find_by_substring<'a>(records: &'a [Country], query: &str) -> Vec<&'a Country> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

/// Case-insensitive exact match on `continent`, in input order
pub fn filter_by_continent<'a>(records: &'a [Country], continent: &str) -> Vec<&'a Country> {
    records.iter().filter(|c| c.in_continent(continent)).collect()
}

/// Records with `min <= population <= max`
pub fn filter_by_population_range(records: &[Country], min: u64, max: u64) -> Result<Vec<&Country>> {
    filter_by_range(records, min, max, |c| c.population)
}

/// Records with `min <= area <= max`
pub fn filter_by_area_range(records: &[Country], min: u64, max: u64) -> Result<Vec<&Country>> {
    filter_by_range(records, min, max, |c| c.area)
}

fn filter_by_range<F>(records: &[Country], min: u64, max: u64, field: F) -> Result<Vec<&Country>>
where
    F: Fn(&Country) -> u64,
{
    if min > max {
        return Err(RegistryError::InvalidRange { min, max });
    }

    let range = min..=max;
    Ok(records.iter().filter(|c| range.contains(&field(*c))).collect())
}

/// Distinct continent labels, in first-seen order
///
/// Labels are compared exactly, so "Asia" and "asia" are listed separately.
pub fn continents(records: &[Country]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for country in records {
        if !seen.contains(&country.continent.as_str()) {
            seen.push(&country.continent);
        }
    }
    seen
}
