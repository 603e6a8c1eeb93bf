//! Shared context passed to modules

use crate::domain::CategoryStats;

/// Read-only view of app state available to modules
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Aggregation from the last successful fetch
    pub stats: &'a CategoryStats,

    /// Whether a fetch is in flight
    pub refreshing: bool,
}

impl<'a> Context<'a> {
    pub fn new(stats: &'a CategoryStats, refreshing: bool) -> Self {
        Self { stats, refreshing }
    }
}
