//! JSON Export
//!
//! Writes summary numbers and the ranked categories to a JSON file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::domain::feedback::{CategoryStats, Severity};

#[derive(Serialize)]
struct ExportableReport {
    generated_at: String,
    summary: ExportableSummary,
    categories: Vec<ExportableCategory>,
}

#[derive(Serialize)]
struct ExportableSummary {
    total: usize,
    categories: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    most_common: Option<&'static str>,
}

#[derive(Serialize)]
struct ExportableCategory {
    category: &'static str,
    description: &'static str,
    count: usize,
    /// Rounded to one decimal, as displayed
    percent: f64,
    severity: &'static str,
}

/// Write the report; returns the number of categories written
pub fn write_report(
    path: &Path,
    stats: &CategoryStats,
) -> Result<usize, Box<dyn std::error::Error>> {
    let summary = stats.summary();
    let categories: Vec<ExportableCategory> = stats
        .ranked()
        .iter()
        .enumerate()
        .map(|(rank, row)| ExportableCategory {
            category: row.category.label(),
            description: row.category.description(),
            count: row.count,
            percent: (row.percent * 10.0).round() / 10.0,
            severity: Severity::from_rank(rank).label(),
        })
        .collect();

    let report = ExportableReport {
        generated_at: Local::now().to_rfc3339(),
        summary: ExportableSummary {
            total: summary.total,
            categories: summary.categories,
            most_common: summary.most_common.map(|c| c.label()),
        },
        categories,
    };

    let mut file = File::create(path)?;
    let json = serde_json::to_string_pretty(&report)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(report.categories.len())
}
