//! Classification and aggregation over whole entry lists
//!
//! Checks that:
//! 1. Every entry lands in exactly one bucket
//! 2. Keyword priority decides overlapping matches
//! 3. Totals, category counts and percentages line up
//! 4. An empty list produces a safe summary

use review_stats::domain::feedback::{classify, Category, CategoryStats, FeedbackEntry};

fn entries(texts: &[&str]) -> Vec<FeedbackEntry> {
    texts.iter().map(|t| FeedbackEntry::with_suggestion(*t)).collect()
}

#[test]
fn test_three_distinct_categories() {
    let stats = CategoryStats::from_entries(entries(&[
        "missing semicolon",
        "unused variable",
        "possible SQL injection risk",
    ]));

    assert_eq!(stats.total(), 3);
    assert_eq!(stats.len(), 3);
    assert_eq!(stats.count(Category::SyntaxError), 1);
    assert_eq!(stats.count(Category::CodeSmell), 1);
    assert_eq!(stats.count(Category::SecurityIssue), 1);

    for row in stats.rows() {
        assert_eq!(row.percent_label(), "33.3");
    }
}

#[test]
fn test_empty_list() {
    let stats = CategoryStats::from_entries(Vec::new());
    let summary = stats.summary();

    assert_eq!(summary.total, 0);
    assert_eq!(summary.categories, 0);
    assert_eq!(summary.most_common, None);
    assert_eq!(summary.most_common_label(), "N/A");
    assert!(stats.rows().is_empty());
}

#[test]
fn test_buckets_partition_entries() {
    let texts = [
        "syntax error near brace",
        "slow loop",
        "null dereference",
        "fix indent",
        "deprecated call",
        "looks fine",
        "",
        "SECURITY hole",
        "unexpected token",
    ];
    let stats = CategoryStats::from_entries(entries(&texts));

    assert_eq!(stats.total(), texts.len());
    let bucketed: usize = stats.iter().map(|(_, bucket)| bucket.items.len()).sum();
    assert_eq!(bucketed, texts.len());

    // Only non-empty buckets are materialised
    assert!(stats.iter().all(|(_, bucket)| bucket.count > 0));
}

#[test]
fn test_priority_order_breaks_ties() {
    assert_eq!(classify("syntax is slow"), Category::SyntaxError);
    assert_eq!(classify("unused and insecure: security"), Category::CodeSmell);
    assert_eq!(classify("null check has bad spacing"), Category::LogicError);
}

#[test]
fn test_missing_suggestion_is_other() {
    let stats = CategoryStats::from_entries(vec![
        FeedbackEntry::default(),
        FeedbackEntry::with_suggestion(""),
    ]);

    assert_eq!(stats.count(Category::Other), 2);
    assert_eq!(stats.len(), 1);
}

#[test]
fn test_percentages_sum_to_hundred() {
    let stats = CategoryStats::from_entries(entries(&[
        "missing ;",
        "missing )",
        "slow",
        "style nit",
        "unused import",
        "unused var",
        "unused fn",
    ]));

    let sum: f64 = stats.rows().iter().map(|row| row.percent).sum();
    assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
}

#[test]
fn test_most_common_is_deterministic() {
    let texts = ["slow", "missing ;", "missing )", "slow"];
    let first = CategoryStats::from_entries(entries(&texts)).most_common();
    for _ in 0..5 {
        assert_eq!(CategoryStats::from_entries(entries(&texts)).most_common(), first);
    }
    // Equal counts: the category seen first wins
    assert_eq!(first, Some(Category::Performance));
}

#[test]
fn test_ranked_is_descending() {
    let stats = CategoryStats::from_entries(entries(&[
        "style",
        "unused",
        "unused",
        "unused",
        "missing",
        "missing",
    ]));
    let counts: Vec<usize> = stats.ranked().iter().map(|row| row.count).collect();
    assert_eq!(counts, vec![3, 2, 1]);
    assert_eq!(stats.most_common(), Some(Category::CodeSmell));
}
