//! Chart view - bar chart of counts and pie chart of shares

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::Context;
use crate::domain::feedback::{palette_color, CategoryRow};
use crate::ui::widgets::Pie;

pub fn render(frame: &mut Frame, area: Rect, ctx: &Context) {
    let rows = ctx.stats.rows();
    if rows.is_empty() {
        super::render_empty(frame, area, ctx);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_bars(frame, halves[0], &rows);
    render_pie(frame, halves[1], &rows);
}

fn render_bars(frame: &mut Frame, area: Rect, rows: &[CategoryRow]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 📊 Error Distribution ");
    let inner_width = block.inner(area).width as usize;

    let gap = 1usize;
    let bar_width = (inner_width.saturating_sub(gap * rows.len()) / rows.len().max(1)).clamp(1, 12);

    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            let color = palette_color(row.position);
            Bar::default()
                .value(row.count as u64)
                .label(Line::from(row.category.short_label()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width as u16)
        .bar_gap(gap as u16);
    frame.render_widget(chart, area);
}

fn render_pie(frame: &mut Frame, area: Rect, rows: &[CategoryRow]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🥧 Category Breakdown ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let legend_height = (rows.len() as u16).min(inner.height / 2);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(legend_height)])
        .split(inner);

    let slices: Vec<(f64, Color)> = rows
        .iter()
        .map(|row| (row.count as f64, palette_color(row.position)))
        .collect();
    frame.render_widget(Pie::new(&slices), parts[0]);

    let legend: Vec<Line> = rows.iter().map(legend_line).collect();
    frame.render_widget(Paragraph::new(legend), parts[1]);
}

fn legend_line(row: &CategoryRow) -> Line<'static> {
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(palette_color(row.position))),
        Span::styled(
            row.category.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(": {}%", row.percent_label())),
    ])
}
