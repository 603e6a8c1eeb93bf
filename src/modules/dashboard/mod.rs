//! Dashboard module - the three presentations over one aggregation
//!
//! Switching views only changes which renderer runs; the aggregation in
//! [`Context::stats`] is never recomputed here.

mod cards;
mod chart;
mod detailed;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::ViewMode;
use crate::core::{Action, Context, Module};
use crate::modules::export::ExportFormat;

#[derive(Debug, Clone)]
pub struct Dashboard {
    mode: ViewMode,
    /// Selected row in the detailed table (ranked order)
    selected: usize,
}

impl Dashboard {
    pub fn new(mode: ViewMode) -> Self {
        Self { mode, selected: 0 }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Module for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        match key.code {
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('v') | KeyCode::Tab => Action::SetView(self.mode.next()),
            KeyCode::Char(c) => match ViewMode::ALL.iter().find(|m| m.shortcut() == c) {
                Some(mode) => Action::SetView(*mode),
                None => match c {
                    'j' => self.move_down(ctx),
                    'k' => self.move_up(),
                    'e' => Action::Export(ExportFormat::Csv),
                    'E' => Action::Export(ExportFormat::Json),
                    'y' => Action::CopySummary,
                    _ => Action::None,
                },
            },
            KeyCode::Down => self.move_down(ctx),
            KeyCode::Up => self.move_up(),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        match self.mode {
            ViewMode::Cards => cards::render(frame, area, ctx),
            ViewMode::Chart => chart::render(frame, area, ctx),
            ViewMode::Detailed => detailed::render(frame, area, ctx, self.selected),
        }
    }
}

/// Placeholder shown by every view when there is nothing aggregated
fn render_empty(frame: &mut Frame, area: Rect, ctx: &Context) {
    use ratatui::layout::Alignment;
    use ratatui::style::{Color, Style};
    use ratatui::widgets::{Block, Borders, Paragraph};

    let message = if ctx.refreshing {
        "Fetching feedback..."
    } else {
        "No feedback entries yet. Press r to refresh."
    };
    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

impl Dashboard {
    fn move_down(&mut self, ctx: &Context) -> Action {
        if self.mode == ViewMode::Detailed {
            self.select_next(ctx.stats.len());
        }
        Action::None
    }

    fn move_up(&mut self) -> Action {
        if self.mode == ViewMode::Detailed {
            self.select_prev();
        }
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryStats, FeedbackEntry};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn stats(texts: &[&str]) -> CategoryStats {
        CategoryStats::from_entries(
            texts.iter().map(|t| FeedbackEntry::with_suggestion(*t)).collect(),
        )
    }

    #[test]
    fn test_view_keys() {
        let stats = CategoryStats::new();
        let ctx = Context::new(&stats, false);
        let mut dashboard = Dashboard::new(ViewMode::Cards);
        assert_eq!(
            dashboard.handle_key(key(KeyCode::Char('3')), &ctx),
            Action::SetView(ViewMode::Detailed)
        );
        assert_eq!(
            dashboard.handle_key(key(KeyCode::Tab), &ctx),
            Action::SetView(ViewMode::Chart)
        );
        assert_eq!(dashboard.handle_key(key(KeyCode::Char('r')), &ctx), Action::Refresh);
        assert_eq!(
            dashboard.handle_key(key(KeyCode::Char('E')), &ctx),
            Action::Export(ExportFormat::Json)
        );
    }

    #[test]
    fn test_selection_bounded() {
        let stats = stats(&["missing ;", "slow", "unused x"]);
        let ctx = Context::new(&stats, false);
        let mut dashboard = Dashboard::new(ViewMode::Detailed);
        for _ in 0..10 {
            dashboard.handle_key(key(KeyCode::Down), &ctx);
        }
        assert_eq!(dashboard.selected(), 2);
        dashboard.handle_key(key(KeyCode::Char('k')), &ctx);
        assert_eq!(dashboard.selected(), 1);

        dashboard.clamp_selection(1);
        assert_eq!(dashboard.selected(), 0);
    }

    #[test]
    fn test_empty_placeholder_follows_refresh() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        fn rendered(refreshing: bool) -> String {
            let stats = CategoryStats::new();
            let ctx = Context::new(&stats, refreshing);
            let dashboard = Dashboard::new(ViewMode::Chart);
            let mut terminal = Terminal::new(TestBackend::new(60, 5)).unwrap();
            terminal
                .draw(|f| {
                    let area = f.size();
                    dashboard.render(f, area, &ctx)
                })
                .unwrap();
            terminal
                .backend()
                .buffer()
                .content
                .iter()
                .map(|cell| cell.symbol())
                .collect()
        }

        assert!(rendered(false).contains("No feedback entries yet"));
        assert!(rendered(true).contains("Fetching feedback..."));
    }

    #[test]
    fn test_dashboard_id() {
        assert_eq!(Dashboard::new(ViewMode::Cards).id(), "dashboard");
    }

    #[test]
    fn test_selection_only_moves_in_detailed() {
        let stats = stats(&["missing ;", "slow"]);
        let ctx = Context::new(&stats, false);
        let mut dashboard = Dashboard::new(ViewMode::Cards);
        dashboard.handle_key(key(KeyCode::Down), &ctx);
        assert_eq!(dashboard.selected(), 0);
    }
}
