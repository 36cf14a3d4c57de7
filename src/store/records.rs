//! RecordStore implementation
//!
//! Vec-backed store; lookups are linear scans.

use crate::error::{RegistryError, Result};
use crate::model::Country;
use crate::query::{self, SortDirection, SortKey, Statistics};

/// Ordered collection of countries with unique (case-insensitive) names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Country>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded records, keeping their order
    ///
    /// Fails on the first invalid record or name collision.
    pub fn from_records(records: Vec<Country>) -> Result<Self> {
        let mut store = Self::with_capacity(records.len());
        for country in records {
            store.add(country)?;
        }
        Ok(store)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a record
    ///
    /// Returns `DuplicateName` if a record with the same name (ignoring case)
    /// already exists; the store is left unchanged.
    pub fn add(&mut self, country: Country) -> Result<()> {
        country.validate()?;

        if self.contains(&country.name) {
            tracing::debug!("Rejected duplicate country '{}'", country.name);
            return Err(RegistryError::DuplicateName(country.name));
        }

        tracing::debug!("Added country '{}'", country.name);
        self.records.push(country);
        Ok(())
    }

    /// Replace population and area of the first record matching `name`
    ///
    /// Name and continent are left untouched.
    pub fn update(&mut self, name: &str, population: u64, area: u64) -> Result<&Country> {
        let country = self
            .records
            .iter_mut()
            .find(|c| c.has_name(name))
            .ok_or_else(|| RegistryError::NotFound(name.trim().to_string()))?;

        country.population = population;
        country.area = area;

        tracing::debug!(
            "Updated country '{}': population={}, area={}",
            country.name,
            population,
            area
        );
        Ok(&*country)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Find a record by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Country> {
        self.records.iter().find(|c| c.has_name(name))
    }

    /// Check whether a name is already taken (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in store order
    pub fn records(&self) -> &[Country] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.records.iter()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Records whose name contains `query` (case-insensitive)
    pub fn find_by_substring(&self, query: &str) -> Vec<&Country> {
        query::find_by_substring(&self.records, query)
    }

    /// Records whose continent equals `continent` (case-insensitive)
    pub fn filter_by_continent(&self, continent: &str) -> Vec<&Country> {
        query::filter_by_continent(&self.records, continent)
    }

    /// Records with `min <= population <= max`
    pub fn filter_by_population_range(&self, min: u64, max: u64) -> Result<Vec<&Country>> {
        query::filter_by_population_range(&self.records, min, max)
    }

    /// Records with `min <= area <= max`
    pub fn filter_by_area_range(&self, min: u64, max: u64) -> Result<Vec<&Country>> {
        query::filter_by_area_range(&self.records, min, max)
    }

    /// Sorted copy of the records
    pub fn sorted(&self, key: SortKey, direction: SortDirection) -> Vec<Country> {
        query::sort(&self.records, key, direction)
    }

    /// Aggregate statistics, `None` when the store is empty
    pub fn statistics(&self) -> Option<Statistics<'_>> {
        query::statistics(&self.records)
    }

    /// Distinct continents, in first-seen order
    pub fn continents(&self) -> Vec<&str> {
        query::continents(&self.records)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
