//! Feedback backend - HTTP access to stored review feedback

mod client;
mod source;

pub use client::HttpFeedbackSource;
pub use source::{parse_entries, FeedbackSource, FetchError, SourceConfig, DEFAULT_ENDPOINT};
