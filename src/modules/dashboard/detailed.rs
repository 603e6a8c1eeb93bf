//! Detailed view - ranked table plus entries of the selected category

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState,
};
use ratatui::Frame;

use crate::core::Context;
use crate::domain::feedback::{CategoryRow, FeedbackEntry, Severity};
use crate::ui::widgets::fill_bar_text;

const SMALL_BAR_WIDTH: usize = 8;
const SUGGESTION_PREVIEW: usize = 120;

pub fn render(frame: &mut Frame, area: Rect, ctx: &Context, selected: usize) {
    let ranked = ctx.stats.ranked();
    if ranked.is_empty() {
        super::render_empty(frame, area, ctx);
        return;
    }
    let selected = selected.min(ranked.len() - 1);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_table(frame, columns[0], &ranked, selected);
    render_entries(frame, columns[1], ctx, &ranked[selected]);
}

fn render_table(frame: &mut Frame, area: Rect, ranked: &[CategoryRow], selected: usize) {
    let header = Row::new(["Error Type", "Count", "Percentage", "Trend"])
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = ranked
        .iter()
        .enumerate()
        .map(|(rank, row)| table_row(rank, row))
        .collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(7),
        Constraint::Length(8 + SMALL_BAR_WIDTH as u16),
        Constraint::Length(11),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 📋 Detailed Error Analysis "),
        )
        .highlight_style(Style::default().bg(Color::Rgb(0x2a, 0x2a, 0x3a)))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn table_row(rank: usize, row: &CategoryRow) -> Row<'static> {
    let name = Text::from(vec![
        Line::from(vec![
            Span::raw(format!("{} ", row.category.icon())),
            Span::styled(
                row.category.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            row.category.description(),
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let percent = Line::from(vec![
        Span::raw(format!("{:>5}% ", row.percent_label())),
        Span::styled(
            fill_bar_text(row.percent / 100.0, SMALL_BAR_WIDTH),
            Style::default().fg(Color::Rgb(0x66, 0x7e, 0xea)),
        ),
    ]);

    let severity = Severity::from_rank(rank);
    Row::new(vec![
        Cell::from(name),
        Cell::from(Span::styled(
            row.count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Cell::from(percent),
        Cell::from(Span::styled(severity.badge(), severity_style(severity))),
    ])
    .height(2)
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::High => Style::default().fg(Color::LightRed),
        Severity::Medium => Style::default().fg(Color::Yellow),
        Severity::Low => Style::default().fg(Color::LightGreen),
    }
}

fn render_entries(frame: &mut Frame, area: Rect, ctx: &Context, row: &CategoryRow) {
    let title = format!(
        " {} {} ({}) ",
        row.category.icon(),
        row.category.label(),
        row.count
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    let Some(bucket) = ctx.stats.get(row.category) else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let items: Vec<ListItem> = bucket.items.iter().map(entry_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn entry_item(entry: &FeedbackEntry) -> ListItem<'static> {
    let mut meta = Vec::new();
    if let Some(language) = entry.language.as_deref() {
        meta.push(Span::styled(
            format!("[{language}] "),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(decision) = entry.decision.as_deref() {
        let color = match decision {
            "accepted" => Color::LightGreen,
            "rejected" => Color::LightRed,
            _ => Color::Gray,
        };
        meta.push(Span::styled(
            format!("{decision} "),
            Style::default().fg(color),
        ));
    }
    if let Some(created) = entry.created_at.as_deref() {
        meta.push(Span::styled(
            created.chars().take(10).collect::<String>(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let text = truncate(entry.classification_text(), SUGGESTION_PREVIEW);
    let mut lines = Vec::with_capacity(2);
    if !meta.is_empty() {
        lines.push(Line::from(meta));
    }
    lines.push(Line::from(format!("  {text}")));
    ListItem::new(Text::from(lines))
}

fn truncate(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let cut: String = single_line.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("line one\nline two", 40), "line one line two");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
