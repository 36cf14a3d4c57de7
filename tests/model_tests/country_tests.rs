//! Country Tests
//!
//! Tests verify:
//! - Construction trims and validates text fields
//! - Case-insensitive name and continent matching

use country_registry::model::Country;
use country_registry::RegistryError;

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_trims_text_fields() {
    let country = Country::new("  Chile ", 19_000_000, 756_000, " South America ").unwrap();

    assert_eq!(country.name, "Chile");
    assert_eq!(country.continent, "South America");
    assert_eq!(country.population, 19_000_000);
    assert_eq!(country.area, 756_000);
}

#[test]
fn test_new_rejects_blank_name() {
    let result = Country::new("   ", 1, 1, "Europe");
    assert!(matches!(result, Err(RegistryError::EmptyField("name"))));
}

#[test]
fn test_new_rejects_blank_continent() {
    let result = Country::new("Spain", 1, 1, "");
    assert!(matches!(result, Err(RegistryError::EmptyField("continent"))));
}

#[test]
fn test_zero_population_and_area_are_valid() {
    let country = Country::new("Atlantis", 0, 0, "Ocean").unwrap();
    assert_eq!(country.population, 0);
    assert_eq!(country.area, 0);
}

// =============================================================================
// Matching Tests
// =============================================================================

#[test]
fn test_has_name_ignores_case() {
    let country = Country::new("Chile", 1, 1, "South America").unwrap();

    assert!(country.has_name("chile"));
    assert!(country.has_name("CHILE"));
    assert!(country.has_name(" Chile "));
    assert!(!country.has_name("Chil"));
}

#[test]
fn test_in_continent_ignores_case() {
    let country = Country::new("Chile", 1, 1, "South America").unwrap();

    assert!(country.in_continent("south america"));
    assert!(!country.in_continent("america"));
}
