//! Actions that modules can return to communicate with the app

use crate::app::ViewMode;
use crate::modules::export::ExportFormat;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Re-fetch feedback from the backend
    Refresh,

    /// Switch to a specific view mode
    SetView(ViewMode),

    /// Write the current aggregation to disk
    Export(ExportFormat),

    /// Copy the summary text to the clipboard
    CopySummary,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open or close the help popup
    ToggleHelp,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
