use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, StatusLevel, ViewMode};
use crate::config;
use crate::core::Module;

const SPINNER: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    if app.is_loading() {
        draw_loading(f, size, app);
        return;
    }

    let areas = layout::areas(size);

    draw_header(f, areas.header, app);
    draw_summary(f, areas.summary, app);
    app.dashboard.render(f, areas.main, &app.context());
    draw_status_line(f, areas.status_line, app);
    draw_hints(f, areas.hints);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_loading(f: &mut Frame, area: Rect, app: &App) {
    let box_area = layout::centered(area, 44, 8);
    f.render_widget(Clear, box_area);

    let spinner = SPINNER[(app.tick as usize) % SPINNER.len()];
    let lines = vec![
        Line::from("📊"),
        Line::from(Span::styled(
            "Loading Error Statistics",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Analyzing code review patterns...",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            spinner.to_string(),
            Style::default().fg(Color::LightCyan),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, box_area);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let refresh = if app.is_refreshing() {
        Span::styled("🔄 Refreshing...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("🔄 Refresh Data [r]", Style::default().fg(Color::DarkGray))
    };
    let updated = app
        .last_updated
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--".to_string());

    let title = Line::from(vec![
        Span::styled(
            "📊 Error Analytics Dashboard",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        refresh,
        Span::raw("  "),
        Span::styled("Updated ", Style::default().fg(Color::DarkGray)),
        Span::raw(updated),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL).title(Span::styled(
            format!(" {} ", app.endpoint),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Left);
    f.render_widget(left, chunks[0]);

    let titles: Vec<Line> = ViewMode::ALL
        .iter()
        .map(|mode| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", mode.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(mode.title()),
            ])
        })
        .collect();
    let selected = ViewMode::ALL
        .iter()
        .position(|mode| *mode == app.view_mode())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");
    f.render_widget(tabs, chunks[1]);
}

fn draw_summary(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.summary();
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let most_common_style = if summary.most_common.is_some() {
        Style::default().fg(Color::LightYellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    draw_tile(
        f,
        tiles[0],
        "🎯 Total Issues",
        summary.total.to_string(),
        Style::default().fg(Color::White),
    );
    draw_tile(
        f,
        tiles[1],
        "🏷️ Categories",
        summary.categories.to_string(),
        Style::default().fg(Color::LightBlue),
    );
    draw_tile(
        f,
        tiles[2],
        "🔥 Most Common",
        summary.most_common_label().to_string(),
        most_common_style,
    );
}

fn draw_tile(f: &mut Frame, area: Rect, title: &str, value: String, style: Style) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(value, style.add_modifier(Modifier::BOLD))),
    ];
    let tile = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .title_alignment(Alignment::Center),
        )
        .alignment(Alignment::Center);
    f.render_widget(tile, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.view_mode().title())),
    ];
    if let Some(elapsed) = app.last_fetch {
        spans.push(Span::styled("Fetch ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("{}ms  ", elapsed.as_millis())));
    }
    if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::Yellow,
            StatusLevel::Error => Color::LightRed,
        };
        spans.push(Span::styled(text.to_string(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn draw_hints(f: &mut Frame, area: Rect) {
    let keys = [
        ("r", "refresh"),
        ("v", "view"),
        ("1-3", "jump"),
        ("j/k", "select"),
        ("e/E", "export"),
        ("y", "copy"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, label) in keys {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let config_path = config::config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(unknown)".to_string());

    let lines = vec![
        Line::from("Views"),
        Line::from("  v / Tab    Cycle view"),
        Line::from("  1 / 2 / 3  Cards / Chart / Detailed"),
        Line::from("  j / k      Move selection (Detailed)"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  r          Refresh data"),
        Line::from("  e          Export CSV"),
        Line::from("  E          Export JSON"),
        Line::from("  y          Copy summary"),
        Line::from("  ?          Toggle help"),
        Line::from("  q / Esc    Quit"),
        Line::from(""),
        Line::from(format!("Endpoint: {}", app.endpoint)),
        Line::from(format!("Config:   {}", config_path)),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
