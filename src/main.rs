use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use estate::app::App;
use estate::config;
use estate::domain::TabId;
use estate::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "estate",
    version,
    about = "Moses Estate: a calm terminal dashboard for personal finance"
)]
struct Args {
    /// Config file (defaults to ~/.config/estate/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tab to open on startup: loans, taxes, debt, income, expenses
    #[arg(long)]
    tab: Option<TabId>,

    /// Date shown in the footer (YYYY-MM-DD)
    #[arg(long, conflicts_with = "live_clock")]
    date: Option<NaiveDate>,

    /// Show today's local date instead of the pinned one
    #[arg(long)]
    live_clock: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_path = logging::init();
    let config_path = config::resolve_path(args.config.as_deref());
    let config = config::load(config_path.as_deref());

    let date_source = config.date_source(args.date, args.live_clock);
    let app = App::new(config.start_tab(args.tab), date_source.today())
        .with_config_path(config_path);
    tracing::info!(
        tab = %app.active_tab,
        ?date_source,
        log = ?log_path,
        "starting dashboard"
    );

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "dashboard exited with error");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            tracing::info!("quit requested");
            return Ok(());
        }

        if !event::poll(tick_rate)? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) => input::map_key(&app, key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                input::map_mouse(&app, mouse, screen_rect(size))
            }
            _ => continue,
        };
        app.apply(action);
    }
}

fn screen_rect(size: Rect) -> Rect {
    Rect { x: 0, y: 0, ..size }
}
