//! Module trait for extensible UI components

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// Trait for UI modules that can handle input and draw themselves
pub trait Module {
    /// Stable identifier, used in logs
    fn id(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    /// Render into `area`
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);
}
