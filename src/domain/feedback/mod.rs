//! Review feedback: categories, entries and their aggregation

mod category;
mod entry;
mod stats;

pub use category::{classify, palette_color, Category, PALETTE};
pub use entry::{FeedbackEntry, UNKNOWN_SUGGESTION};
pub use stats::{percent_of, Bucket, CategoryRow, CategoryStats, Severity, Summary};
