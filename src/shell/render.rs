//! Table and statistics rendering

use std::io::Write;

use crate::error::Result;
use crate::model::Country;
use crate::query::Statistics;

/// Format an integer with `,` thousands separators
pub fn format_thousands(value: impl Into<u128>) -> String {
    let digits = value.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render records as a fixed-width table ruled to `width`
pub fn render_table<'a, W, I>(out: &mut W, records: I, width: usize) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Country>,
{
    let records: Vec<&Country> = records.into_iter().collect();
    if records.is_empty() {
        writeln!(out, "No countries to show.")?;
        return Ok(());
    }

    let rule = "=".repeat(width);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{:<20} {:<15} {:<15} {:<15}",
        "NAME", "POPULATION", "AREA (km²)", "CONTINENT"
    )?;
    writeln!(out, "{}", rule)?;
    for country in records {
        writeln!(
            out,
            "{:<20} {:<15} {:<15} {:<15}",
            country.name,
            format_thousands(country.population),
            format_thousands(country.area),
            country.continent
        )?;
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}

/// Render a statistics summary
pub fn render_statistics<W: Write>(out: &mut W, stats: &Statistics<'_>) -> Result<()> {
    writeln!(out, "Total countries: {}", stats.count)?;
    writeln!(out, "Total population: {}", format_thousands(stats.total_population))?;
    writeln!(out, "Total area: {} km²", format_thousands(stats.total_area))?;
    writeln!(out, "Average population: {}", format_mean(stats.mean_population))?;
    writeln!(out, "Average area: {} km²", format_mean(stats.mean_area))?;

    writeln!(out)?;
    writeln!(
        out,
        "Most populous: {} ({})",
        stats.most_populous.name,
        format_thousands(stats.most_populous.population)
    )?;
    writeln!(
        out,
        "Least populous: {} ({})",
        stats.least_populous.name,
        format_thousands(stats.least_populous.population)
    )?;
    writeln!(
        out,
        "Largest area: {} ({} km²)",
        stats.largest.name,
        format_thousands(stats.largest.area)
    )?;
    writeln!(
        out,
        "Smallest area: {} ({} km²)",
        stats.smallest.name,
        format_thousands(stats.smallest.area)
    )?;

    writeln!(out)?;
    writeln!(out, "Countries per continent:")?;
    for group in &stats.by_continent {
        writeln!(out, "   {}: {}", group.continent, group.count)?;
    }
    Ok(())
}

/// Halves round to even, so a mean of 2.5 prints as 2
fn format_mean(mean: f64) -> String {
    format_thousands(mean.round_ties_even() as u128)
}
