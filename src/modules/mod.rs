//! UI Modules
//!
//! - dashboard: the card, chart and detailed presentations
//! - export: CSV/JSON export of the aggregation

pub mod dashboard;
pub mod export;
