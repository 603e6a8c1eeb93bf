//! Terminal dashboard for code review feedback statistics.
//!
//! Feedback entries are fetched from an HTTP backend, classified into error
//! categories by keyword, and shown as cards, charts or a detailed table.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod modules;
pub mod ui;
