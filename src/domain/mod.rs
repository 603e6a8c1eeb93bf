//! Domain layer - core business logic and models
//!
//! Pure types and functions with no I/O: the keyword classifier,
//! feedback records and per-category aggregation.

pub mod feedback;

pub use feedback::{Category, CategoryStats, FeedbackEntry};
