use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::core::{Action, Context, NotifyLevel};
use crate::domain::feedback::Summary;
use crate::domain::{CategoryStats, FeedbackEntry};
use crate::modules::dashboard::Dashboard;

/// User-selected presentation over the same aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Cards,
    Chart,
    Detailed,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Cards, ViewMode::Chart, ViewMode::Detailed];

    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Cards => "Card View",
            ViewMode::Chart => "Chart View",
            ViewMode::Detailed => "Detailed View",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            ViewMode::Cards => '1',
            ViewMode::Chart => '2',
            ViewMode::Detailed => '3',
        }
    }

    pub fn next(&self) -> ViewMode {
        match self {
            ViewMode::Cards => ViewMode::Chart,
            ViewMode::Chart => ViewMode::Detailed,
            ViewMode::Detailed => ViewMode::Cards,
        }
    }
}

/// Fetch lifecycle. There is no error phase: failures fall back to `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Refreshing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

pub struct App {
    pub phase: Phase,
    pub stats: CategoryStats,
    pub dashboard: Dashboard,
    pub endpoint: String,
    pub last_updated: Option<DateTime<Local>>,
    pub last_fetch: Option<Duration>,
    pub help_open: bool,
    pub should_quit: bool,
    pub tick: u64,
    status: Option<StatusMessage>,
    next_request_id: u64,
    in_flight: Option<u64>,
    pending_fetch: Option<u64>,
}

impl App {
    /// New app in `Loading`, with the initial fetch already queued
    pub fn new(endpoint: impl Into<String>, view: ViewMode) -> Self {
        let mut app = Self {
            phase: Phase::Loading,
            stats: CategoryStats::new(),
            dashboard: Dashboard::new(view),
            endpoint: endpoint.into(),
            last_updated: None,
            last_fetch: None,
            help_open: false,
            should_quit: false,
            tick: 0,
            status: None,
            next_request_id: 0,
            in_flight: None,
            pending_fetch: None,
        };
        app.queue_fetch();
        app
    }

    pub fn context(&self) -> Context<'_> {
        Context::new(&self.stats, self.is_refreshing())
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase == Phase::Refreshing
    }

    pub fn view_mode(&self) -> ViewMode {
        self.dashboard.mode()
    }

    /// Switch presentation; fetched data and in-flight requests are untouched
    pub fn set_view(&mut self, mode: ViewMode) {
        self.dashboard.set_mode(mode);
    }

    pub fn summary(&self) -> Summary {
        self.stats.summary()
    }

    /// Manual refresh. Ignored while a fetch is outstanding.
    pub fn request_refresh(&mut self) -> bool {
        if self.in_flight.is_some() {
            log::debug!("refresh ignored: request {:?} still in flight", self.in_flight);
            return false;
        }
        self.phase = Phase::Refreshing;
        self.queue_fetch();
        true
    }

    fn queue_fetch(&mut self) {
        self.next_request_id += 1;
        self.in_flight = Some(self.next_request_id);
        self.pending_fetch = Some(self.next_request_id);
    }

    /// Request id the main loop should send to the worker, if any
    pub fn take_fetch_request(&mut self) -> Option<u64> {
        self.pending_fetch.take()
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Replace the aggregation with a fresh one. Returns false for results
    /// that do not belong to the outstanding request.
    pub fn apply_feedback(
        &mut self,
        request_id: u64,
        entries: Vec<FeedbackEntry>,
        elapsed: Duration,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            log::debug!("dropping stale feedback result for request {request_id}");
            return false;
        }
        let count = entries.len();
        self.stats = CategoryStats::from_entries(entries);
        self.last_updated = Some(Local::now());
        self.last_fetch = Some(elapsed);
        self.dashboard.clamp_selection(self.stats.len());
        self.finish_fetch();
        self.set_status(
            format!("Loaded {count} entries in {}ms", elapsed.as_millis()),
            StatusLevel::Info,
        );
        true
    }

    /// Keep the previous aggregation and return to `Ready`
    pub fn apply_fetch_failure(&mut self, request_id: u64, message: impl Into<String>) -> bool {
        if self.in_flight != Some(request_id) {
            log::debug!("dropping stale failure for request {request_id}");
            return false;
        }
        self.finish_fetch();
        self.set_status(
            format!("Fetch failed: {}", message.into()),
            StatusLevel::Error,
        );
        true
    }

    /// The worker itself failed; nothing is in flight anymore
    pub fn apply_worker_error(&mut self, message: impl Into<String>) {
        self.pending_fetch = None;
        self.finish_fetch();
        self.set_status(message, StatusLevel::Error);
    }

    fn finish_fetch(&mut self) {
        self.in_flight = None;
        self.phase = Phase::Ready;
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(4) {
                self.status = None;
            }
        }
    }

    /// Apply an action that only touches app state. Side effects that need
    /// the terminal or the filesystem are handled by the caller.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Refresh => {
                if !self.request_refresh() {
                    self.set_status("Refresh already in progress", StatusLevel::Warn);
                }
            }
            Action::SetView(mode) => self.set_view(mode),
            Action::Notify(text, level) => self.set_status(text, level.into()),
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
            Action::Export(_) | Action::CopySummary => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(texts: &[&str]) -> Vec<FeedbackEntry> {
        texts.iter().map(|t| FeedbackEntry::with_suggestion(*t)).collect()
    }

    #[test]
    fn test_initial_fetch_queued() {
        let mut app = App::new("http://localhost:5000/api/feedback/all", ViewMode::Cards);
        assert!(app.is_loading());
        assert_eq!(app.take_fetch_request(), Some(1));
        assert_eq!(app.take_fetch_request(), None);
        assert_eq!(app.in_flight(), Some(1));
    }

    #[test]
    fn test_loading_to_ready() {
        let mut app = App::new("x", ViewMode::Cards);
        let id = app.take_fetch_request().unwrap();
        assert!(app.apply_feedback(id, entries(&["missing ;"]), Duration::from_millis(5)));
        assert_eq!(app.phase, Phase::Ready);
        assert_eq!(app.stats.total(), 1);
        assert!(app.last_updated.is_some());
    }

    #[test]
    fn test_failure_on_first_load_is_ready_and_empty() {
        let mut app = App::new("x", ViewMode::Cards);
        let id = app.take_fetch_request().unwrap();
        assert!(app.apply_fetch_failure(id, "connection refused"));
        assert_eq!(app.phase, Phase::Ready);
        assert!(app.stats.is_empty());
        let (text, level) = app.status_text().unwrap();
        assert!(text.contains("connection refused"));
        assert_eq!(level, StatusLevel::Error);
    }

    #[test]
    fn test_refresh_ignored_while_in_flight() {
        let mut app = App::new("x", ViewMode::Cards);
        app.take_fetch_request();
        assert!(!app.request_refresh());
        assert_eq!(app.take_fetch_request(), None);
        assert!(app.is_loading());
    }

    #[test]
    fn test_refresh_action_reports_busy() {
        let mut app = App::new("x", ViewMode::Cards);
        app.apply_action(Action::Refresh);
        let (text, level) = app.status_text().unwrap();
        assert_eq!(text, "Refresh already in progress");
        assert_eq!(level, StatusLevel::Warn);
    }

    #[test]
    fn test_worker_error_unblocks_refresh() {
        let mut app = App::new("x", ViewMode::Chart);
        app.take_fetch_request();
        app.apply_worker_error("Worker exited");
        assert_eq!(app.phase, Phase::Ready);
        assert!(app.request_refresh());
    }

    #[test]
    fn test_actions() {
        let mut app = App::new("x", ViewMode::Cards);
        app.apply_action(Action::SetView(ViewMode::Detailed));
        assert_eq!(app.view_mode(), ViewMode::Detailed);
        app.apply_action(Action::ToggleHelp);
        assert!(app.help_open);
        app.apply_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_view_mode_cycle() {
        assert_eq!(ViewMode::Cards.next(), ViewMode::Chart);
        assert_eq!(ViewMode::Chart.next(), ViewMode::Detailed);
        assert_eq!(ViewMode::Detailed.next(), ViewMode::Cards);
    }
}
