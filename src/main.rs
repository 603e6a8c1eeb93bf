use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use review_stats::app::{App, StatusLevel, ViewMode};
use review_stats::config::{self, Config};
use review_stats::core::{Action, Context, Module};
use review_stats::domain::CategoryStats;
use review_stats::infrastructure::feedback::{FeedbackSource, HttpFeedbackSource, SourceConfig};
use review_stats::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use review_stats::modules::export::{export_stats, summary_text};
use review_stats::ui;

#[derive(Debug, Parser)]
#[command(
    name = "review-stats",
    version,
    about = "Terminal dashboard for code review error statistics"
)]
struct Args {
    /// Feedback endpoint (e.g. http://localhost:5000/api/feedback/all)
    #[arg(long)]
    endpoint: Option<String>,

    /// Only include feedback for this team
    #[arg(long)]
    team: Option<String>,

    /// Only include feedback for this user
    #[arg(long)]
    user: Option<String>,

    /// Initial view
    #[arg(long, value_enum)]
    view: Option<ViewMode>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Config file (defaults to $REVIEW_STATS_CONFIG or the XDG location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (logs never go to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Fetch once, print the summary and exit
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    let log_file = args
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .or_else(config::log_path);
    if let Err(err) = init_logging(log_file) {
        eprintln!("logging disabled: {err:#}");
    }

    let source_config = source_config_from_args(&args, &config);
    let view = args
        .view
        .or(config.default_view)
        .unwrap_or(ViewMode::Cards);
    log::info!("starting with endpoint {}", source_config.display());

    let source = HttpFeedbackSource::new(&source_config)
        .with_context(|| format!("invalid endpoint {}", source_config.endpoint))?;

    if args.summary {
        return print_summary(source);
    }

    let runtime = RuntimeBridge::new(Arc::new(source))?;
    let app = App::new(source_config.display(), view);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        restore_terminal();
        return Err(err.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            restore_terminal();
            return Err(err.into());
        }
    };

    let res = run_app(&mut terminal, app, runtime);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("exited with error: {err:?}");
        eprintln!("{err:?}");
    }

    Ok(())
}

/// Best-effort cleanup when setup fails halfway
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn source_config_from_args(args: &Args, config: &Config) -> SourceConfig {
    let mut source = config.source_config();
    if let Some(endpoint) = args.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
        source.endpoint = endpoint.trim().to_string();
    }
    if let Some(team) = args.team.as_deref().filter(|t| !t.is_empty()) {
        source.team_id = Some(team.to_string());
    }
    if let Some(user) = args.user.as_deref().filter(|u| !u.is_empty()) {
        source.user_id = Some(user.to_string());
    }
    if let Some(secs) = args.timeout.filter(|secs| *secs > 0) {
        source.timeout = Duration::from_secs(secs);
    }
    source
}

fn print_summary(source: HttpFeedbackSource) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    match runtime.block_on(source.fetch_all()) {
        Ok(entries) => {
            let stats = CategoryStats::from_entries(entries);
            print!("{}", summary_text(&stats));
            Ok(())
        }
        Err(err) => {
            log::error!("summary fetch from {} failed: {err}", source.endpoint_name());
            eprintln!("Failed to fetch feedback: {err}");
            std::process::exit(1);
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &runtime);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn pump_background(app: &mut App, runtime: &RuntimeBridge) {
    for event in runtime.poll_events() {
        match event {
            RuntimeEvent::FeedbackLoaded {
                request_id,
                entries,
                elapsed,
            } => {
                app.apply_feedback(request_id, entries, elapsed);
            }
            RuntimeEvent::FetchFailed {
                request_id,
                message,
            } => {
                app.apply_fetch_failure(request_id, message);
            }
            RuntimeEvent::Error { message } => app.apply_worker_error(message),
        }
    }

    if let Some(request_id) = app.take_fetch_request() {
        if let Err(err) = runtime.send(RuntimeCommand::Fetch { request_id }) {
            log::error!("failed to queue fetch {request_id}: {err}");
            app.apply_fetch_failure(request_id, err.to_string());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc if app.help_open => Action::ToggleHelp,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ if app.help_open => Action::None,
        _ => {
            let ctx = Context::new(&app.stats, app.is_refreshing());
            app.dashboard.handle_key(key, &ctx)
        }
    };
    if action != Action::None {
        log::debug!("{}: {:?} -> {:?}", app.dashboard.id(), key.code, action);
    }

    match action {
        Action::Export(format) => {
            let notify = export_stats(&app.stats, format);
            app.apply_action(notify);
        }
        Action::CopySummary => handle_copy_to_clipboard(app),
        other => app.apply_action(other),
    }
}

fn handle_copy_to_clipboard(app: &mut App) {
    use arboard::Clipboard;

    if app.stats.is_empty() {
        app.set_status("Nothing to copy", StatusLevel::Warn);
        return;
    }

    let text = summary_text(&app.stats);
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(text).is_ok() {
                app.set_status("Copied summary to clipboard", StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(_) => {
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}
