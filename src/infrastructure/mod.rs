//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - reqwest-based access to the feedback backend
//! - Tokio runtime bridge for async operations

pub mod feedback;
pub mod runtime;

pub use feedback::{FeedbackSource, FetchError, HttpFeedbackSource, SourceConfig};
pub use runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
