//! Country record

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Column names, in the order they appear in the data file header
pub const FIELD_NAMES: [&str; 4] = ["name", "population", "area", "continent"];

/// A single country record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Display name, unique within a store (case-insensitive)
    pub name: String,

    /// Number of inhabitants
    pub population: u64,

    /// Surface in square kilometers
    pub area: u64,

    /// Free-form grouping label
    pub continent: String,
}

impl Country {
    /// Build a validated record
    ///
    /// Text fields are trimmed; blank name or continent is rejected.
    pub fn new(
        name: impl Into<String>,
        population: u64,
        area: u64,
        continent: impl Into<String>,
    ) -> Result<Self> {
        let country = Self {
            name: name.into().trim().to_string(),
            population,
            area,
            continent: continent.into().trim().to_string(),
        };
        country.validate()?;
        Ok(country)
    }

    /// Check the text-field invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::EmptyField("name"));
        }
        if self.continent.trim().is_empty() {
            return Err(RegistryError::EmptyField("continent"));
        }
        Ok(())
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Case-insensitive continent comparison
    pub fn in_continent(&self, continent: &str) -> bool {
        self.continent.trim().to_lowercase() == continent.trim().to_lowercase()
    }
}
