//! Aggregate statistics

use crate::model::Country;

/// Number of records sharing a continent label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinentCount<'a> {
    pub continent: &'a str,
    pub count: usize,
}

/// Summary of a non-empty set of records
///
/// Extremes borrow from the input. On ties the earliest record wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    pub count: usize,

    pub total_population: u128,
    pub total_area: u128,
    pub mean_population: f64,
    pub mean_area: f64,

    pub most_populous: &'a Country,
    pub least_populous: &'a Country,
    pub largest: &'a Country,
    pub smallest: &'a Country,

    /// Groups in first-seen order
    pub by_continent: Vec<ContinentCount<'a>>,
}

/// Compute statistics, `None` for an empty slice
pub fn statistics(records: &[Country]) -> Option<Statistics<'_>> {
    let first = records.first()?;
    let count = records.len();

    let total_population: u128 = records.iter().map(|c| u128::from(c.population)).sum();
    let total_area: u128 = records.iter().map(|c| u128::from(c.area)).sum();

    let mut by_continent: Vec<ContinentCount<'_>> = Vec::new();
    for country in records {
        match by_continent.iter_mut().find(|g| g.continent == country.continent) {
            Some(group) => group.count += 1,
            None => by_continent.push(ContinentCount {
                continent: &country.continent,
                count: 1,
            }),
        }
    }

    Some(Statistics {
        count,
        total_population,
        total_area,
        mean_population: total_population as f64 / count as f64,
        mean_area: total_area as f64 / count as f64,
        most_populous: first_max_by_key(records, |c| c.population).unwrap_or(first),
        least_populous: first_min_by_key(records, |c| c.population).unwrap_or(first),
        largest: first_max_by_key(records, |c| c.area).unwrap_or(first),
        smallest: first_min_by_key(records, |c| c.area).unwrap_or(first),
        by_continent,
    })
}

// Strict comparisons keep the earliest record on ties. (`Iterator::max_by_key`
// would return the last maximum.)
fn first_max_by_key<F>(records: &[Country], key: F) -> Option<&Country>
where
    F: Fn(&Country) -> u64,
{
    records
        .iter()
        .reduce(|best, c| if key(c) > key(best) { c } else { best })
}

fn first_min_by_key<F>(records: &[Country], key: F) -> Option<&Country>
where
    F: Fn(&Country) -> u64,
{
    records
        .iter()
        .reduce(|best, c| if key(c) < key(best) { c } else { best })
}
