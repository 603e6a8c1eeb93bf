//! CSV Export
//!
//! Writes the ranked category table to a CSV file.

use std::path::Path;

use crate::domain::feedback::{CategoryStats, Severity};

/// Write one row per category, ranked by count
pub fn write_rows(
    path: &Path,
    stats: &CategoryStats,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    wtr.write_record(["category", "count", "percent", "severity"])?;

    let ranked = stats.ranked();
    for (rank, row) in ranked.iter().enumerate() {
        wtr.write_record([
            row.category.label().to_string(),
            row.count.to_string(),
            row.percent_label(),
            Severity::from_rank(rank).label().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(ranked.len())
}
