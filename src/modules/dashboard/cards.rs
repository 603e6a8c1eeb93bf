//! Card view - one tile per category

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::Context;
use crate::domain::feedback::CategoryRow;
use crate::ui::widgets::FillBar;

const CARDS_PER_ROW: usize = 3;
const CARD_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, ctx: &Context) {
    let rows = ctx.stats.rows();
    if rows.is_empty() {
        super::render_empty(frame, area, ctx);
        return;
    }

    let row_count = rows.len().div_ceil(CARDS_PER_ROW);
    let mut constraints = vec![Constraint::Length(CARD_HEIGHT); row_count];
    constraints.push(Constraint::Min(0));
    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (band, chunk) in rows.chunks(CARDS_PER_ROW).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
            .split(bands[band]);
        for (row, cell) in chunk.iter().zip(cells.iter()) {
            render_card(frame, *cell, row);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, row: &CategoryRow) {
    let (start, end) = row.category.gradient();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(start))
        .title(Span::styled(
            format!(" {} {} ", row.category.icon(), row.category.label()),
            Style::default().fg(end).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // count
            Constraint::Length(1), // share
            Constraint::Length(1), // spacer
            Constraint::Length(1), // bar
            Constraint::Min(0),
        ])
        .split(inner);

    let count = Paragraph::new(Line::from(Span::styled(
        row.count.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(count, parts[0]);

    let share = Paragraph::new(Line::from(Span::styled(
        format!("{}% of total", row.percent_label()),
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(share, parts[1]);

    let bar_area = Rect {
        x: parts[3].x + 1,
        width: parts[3].width.saturating_sub(2),
        ..parts[3]
    };
    frame.render_widget(
        FillBar::new(row.percent / 100.0).gradient(start, end),
        bar_area,
    );
}
