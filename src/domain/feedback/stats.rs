//! Per-category aggregation of feedback entries

use super::category::{classify, Category};
use super::entry::FeedbackEntry;

/// Entries that share one category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    pub count: usize,
    pub items: Vec<FeedbackEntry>,
}

/// Severity badge derived from a category's rank by count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0 => Severity::High,
            1 => Severity::Medium,
            _ => Severity::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Severity::High => "🔴 High",
            Severity::Medium => "🟡 Medium",
            Severity::Low => "🟢 Low",
        }
    }
}

/// One row of derived numbers for a category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub count: usize,
    /// Share of the total, 0.0..=100.0
    pub percent: f64,
    /// Position in insertion order (drives the chart palette)
    pub position: usize,
}

impl CategoryRow {
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.percent)
    }
}

/// Category -> bucket mapping, kept in first-seen order.
///
/// Only non-empty buckets exist, so `len()` is the number of distinct
/// categories present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
    buckets: Vec<(Category, Bucket)>,
}

impl CategoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and group a full entry list
    pub fn from_entries(entries: Vec<FeedbackEntry>) -> Self {
        let mut stats = Self::new();
        for entry in entries {
            let category = classify(entry.classification_text());
            stats.push(category, entry);
        }
        stats
    }

    fn push(&mut self, category: Category, entry: FeedbackEntry) {
        let idx = match self.buckets.iter().position(|(c, _)| *c == category) {
            Some(idx) => idx,
            None => {
                self.buckets.push((category, Bucket::default()));
                self.buckets.len() - 1
            }
        };
        let bucket = &mut self.buckets[idx].1;
        bucket.count += 1;
        bucket.items.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct non-empty categories
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, bucket)| bucket.count).sum()
    }

    pub fn get(&self, category: Category) -> Option<&Bucket> {
        self.buckets
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, bucket)| bucket)
    }

    pub fn count(&self, category: Category) -> usize {
        self.get(category).map(|bucket| bucket.count).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &Bucket)> {
        self.buckets.iter().map(|(c, bucket)| (*c, bucket))
    }

    /// Rows in insertion order
    pub fn rows(&self) -> Vec<CategoryRow> {
        let total = self.total();
        self.buckets
            .iter()
            .enumerate()
            .map(|(position, (category, bucket))| CategoryRow {
                category: *category,
                count: bucket.count,
                percent: percent_of(bucket.count, total),
                position,
            })
            .collect()
    }

    /// Rows sorted descending by count. The sort is stable, so equal counts
    /// keep insertion order.
    pub fn ranked(&self) -> Vec<CategoryRow> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    pub fn most_common(&self) -> Option<Category> {
        self.ranked().first().map(|row| row.category)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.total(),
            categories: self.len(),
            most_common: self.most_common(),
        }
    }
}

/// Headline numbers shown above every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub categories: usize,
    pub most_common: Option<Category>,
}

impl Summary {
    pub const MOST_COMMON_FALLBACK: &'static str = "N/A";

    pub fn most_common_label(&self) -> &'static str {
        self.most_common
            .map(|category| category.label())
            .unwrap_or(Self::MOST_COMMON_FALLBACK)
    }
}

/// `count / total * 100`, or 0 when there is nothing to divide by
pub fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
