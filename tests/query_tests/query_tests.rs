//! Query Tests
//!
//! Tests verify:
//! - Substring search and continent filter semantics
//! - Inclusive range filters and the `min > max` error
//! - Stable multi-key sorting on copies
//! - Statistics totals, means, extremes and continent groups

use country_registry::query::{self, SortDirection, SortKey};
use country_registry::{Country, RegistryError};

// =============================================================================
// Helper Functions
// =============================================================================

fn country(name: &str, population: u64, area: u64, continent: &str) -> Country {
    Country::new(name, population, area, continent).unwrap()
}

fn world() -> Vec<Country> {
    vec![
        country("Chile", 19_000_000, 756_000, "South America"),
        country("Peru", 33_000_000, 1_285_000, "South America"),
        country("Japan", 125_000_000, 377_975, "Asia"),
        country("Portugal", 10_300_000, 92_212, "Europe"),
        country("Nepal", 30_000_000, 147_516, "Asia"),
    ]
}

fn names<'a, I: IntoIterator<Item = &'a Country>>(records: I) -> Vec<&'a str> {
    records.into_iter().map(|c| c.name.as_str()).collect()
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_find_by_substring_case_insensitive() {
    let records = world();
    let result = query::find_by_substring(&records, "PE");
    assert_eq!(names(result), vec!["Peru"]);
}

#[test]
fn test_find_by_substring_keeps_store_order() {
    let records = world();
    let result = query::find_by_substring(&records, "p");
    assert_eq!(names(result), vec!["Peru", "Japan", "Portugal", "Nepal"]);
}

#[test]
fn test_find_by_substring_no_match() {
    let records = world();
    assert!(query::find_by_substring(&records, "zzz").is_empty());
}

#[test]
fn test_filter_by_continent_exact_match_only() {
    let records = world();

    assert_eq!(names(query::filter_by_continent(&records, "ASIA")), vec!["Japan", "Nepal"]);
    assert!(query::filter_by_continent(&records, "America").is_empty());
}

// =============================================================================
// Range Filter Tests
// =============================================================================

#[test]
fn test_population_range() {
    let records = world();
    let result = query::filter_by_population_range(&records, 15_000_000, 31_000_000).unwrap();
    assert_eq!(names(result), vec!["Chile", "Nepal"]);
}

#[test]
fn test_population_range_single_point() {
    let records = world();
    let result = query::filter_by_population_range(&records, 33_000_000, 33_000_000).unwrap();
    assert_eq!(names(result), vec!["Peru"]);
}

#[test]
fn test_population_range_inverted_is_error() {
    let records = world();
    let result = query::filter_by_population_range(&records, 10, 5);
    assert!(matches!(result, Err(RegistryError::InvalidRange { min: 10, max: 5 })));
}

#[test]
fn test_area_range() {
    let records = world();
    let result = query::filter_by_area_range(&records, 100_000, 800_000).unwrap();
    assert_eq!(names(result), vec!["Chile", "Japan", "Nepal"]);
}

#[test]
fn test_area_range_inverted_is_error() {
    let records = world();
    assert!(matches!(
        query::filter_by_area_range(&records, 2, 1),
        Err(RegistryError::InvalidRange { .. })
    ));
}

#[test]
fn test_range_with_no_matches_is_empty_ok() {
    let records = world();
    let result = query::filter_by_area_range(&records, 0, 10).unwrap();
    assert!(result.is_empty());
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_by_name() {
    let records = world();

    let asc = query::sort(&records, SortKey::Name, SortDirection::Ascending);
    assert_eq!(names(&asc), vec!["Chile", "Japan", "Nepal", "Peru", "Portugal"]);

    let desc = query::sort(&records, SortKey::Name, SortDirection::Descending);
    assert_eq!(names(&desc), vec!["Portugal", "Peru", "Nepal", "Japan", "Chile"]);
}

#[test]
fn test_sort_by_population() {
    let records = world();
    let sorted = query::sort(&records, SortKey::Population, SortDirection::Ascending);
    assert_eq!(names(&sorted), vec!["Portugal", "Chile", "Nepal", "Peru", "Japan"]);
}

#[test]
fn test_sort_by_area_descending() {
    let records = world();
    let sorted = query::sort(&records, SortKey::Area, SortDirection::Descending);
    assert_eq!(names(&sorted), vec!["Peru", "Chile", "Japan", "Nepal", "Portugal"]);
}

#[test]
fn test_sort_is_stable_on_ties() {
    let records = vec![
        country("B", 1, 5, "X"),
        country("A", 2, 5, "X"),
        country("C", 3, 5, "X"),
    ];

    let asc = query::sort(&records, SortKey::Area, SortDirection::Ascending);
    assert_eq!(names(&asc), vec!["B", "A", "C"]);

    let desc = query::sort(&records, SortKey::Area, SortDirection::Descending);
    assert_eq!(names(&desc), vec!["B", "A", "C"]);
}

#[test]
fn test_sort_does_not_touch_input() {
    let records = world();
    let before = records.clone();
    let _ = query::sort(&records, SortKey::Population, SortDirection::Descending);
    assert_eq!(records, before);
}

// =============================================================================
// Statistics Tests
// =============================================================================

#[test]
fn test_statistics_totals_and_means() {
    let records = vec![
        country("Chile", 19_000_000, 756_000, "South America"),
        country("Peru", 33_000_000, 1_285_000, "South America"),
    ];

    let stats = query::statistics(&records).unwrap();

    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_population, 52_000_000);
    assert_eq!(stats.total_area, 2_041_000);
    assert_eq!(stats.mean_population, 26_000_000.0);
    assert_eq!(stats.mean_area, 1_020_500.0);
}

#[test]
fn test_statistics_extremes() {
    let records = world();
    let stats = query::statistics(&records).unwrap();

    assert_eq!(stats.most_populous.name, "Japan");
    assert_eq!(stats.least_populous.name, "Portugal");
    assert_eq!(stats.largest.name, "Peru");
    assert_eq!(stats.smallest.name, "Portugal");
}

#[test]
fn test_statistics_continent_groups_first_seen_order() {
    let records = world();
    let stats = query::statistics(&records).unwrap();

    let groups: Vec<(&str, usize)> = stats
        .by_continent
        .iter()
        .map(|g| (g.continent, g.count))
        .collect();
    assert_eq!(
        groups,
        vec![("South America", 2), ("Asia", 2), ("Europe", 1)]
    );
}

#[test]
fn test_statistics_single_record() {
    let records = vec![country("Malta", 520_000, 316, "Europe")];
    let stats = query::statistics(&records).unwrap();

    assert_eq!(stats.most_populous, stats.least_populous);
    assert_eq!(stats.largest.name, "Malta");
    assert_eq!(stats.mean_area, 316.0);
}

#[test]
fn test_continents_listing() {
    let records = world();
    assert_eq!(query::continents(&records), vec!["South America", "Asia", "Europe"]);
}
