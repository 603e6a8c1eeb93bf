//! Export Module
//!
//! Writes the current aggregation to disk.
//!
//! - 'e' exports the ranked category table as CSV
//! - 'E' exports summary plus rows as JSON
//! - Files are saved to `<data dir>/exports/`

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config;
use crate::core::{Action, NotifyLevel};
use crate::domain::feedback::{CategoryStats, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Get the export directory path, creating it if needed
fn get_export_dir() -> std::io::Result<PathBuf> {
    let export_dir = config::exports_dir()
        .unwrap_or_else(|| PathBuf::from(".review-stats").join("exports"));
    fs::create_dir_all(&export_dir)?;
    Ok(export_dir)
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Export the aggregation and report the outcome as a notification
pub fn export_stats(stats: &CategoryStats, format: ExportFormat) -> Action {
    if stats.is_empty() {
        return Action::Notify("Nothing to export yet".to_string(), NotifyLevel::Warn);
    }

    let export_dir = match get_export_dir() {
        Ok(dir) => dir,
        Err(e) => {
            return Action::Notify(
                format!("Failed to create export directory: {}", e),
                NotifyLevel::Error,
            )
        }
    };

    match export_to(&export_dir, stats, format) {
        Ok((path, count)) => {
            log::info!("exported {count} categories to {}", path.display());
            Action::Notify(
                format!("Exported {} categories to {}", count, path.display()),
                NotifyLevel::Info,
            )
        }
        Err(e) => {
            log::error!("export failed: {e}");
            Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error)
        }
    }
}

/// Write a timestamped export file into `dir`
pub fn export_to(
    dir: &Path,
    stats: &CategoryStats,
    format: ExportFormat,
) -> Result<(PathBuf, usize), Box<dyn std::error::Error>> {
    let path = dir.join(generate_filename("error-stats", format.extension()));
    let count = match format {
        ExportFormat::Csv => csv_export::write_rows(&path, stats)?,
        ExportFormat::Json => json_export::write_report(&path, stats)?,
    };
    Ok((path, count))
}

/// Plain-text summary table, used for the clipboard and `--summary`
pub fn summary_text(stats: &CategoryStats) -> String {
    let summary = stats.summary();
    let mut out = format!(
        "Total Issues: {}\nCategories: {}\nMost Common: {}\n",
        summary.total,
        summary.categories,
        summary.most_common_label()
    );
    for (rank, row) in stats.ranked().iter().enumerate() {
        out.push_str(&format!(
            "{:<16} {:>6} {:>6}%  {}\n",
            row.category.label(),
            row.count,
            row.percent_label(),
            Severity::from_rank(rank).label()
        ));
    }
    out
}
