//! Terminal UI for Toguz Kumalak.

#![warn(missing_docs)]

mod app;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::info;

use app::{App, AppEvent};

/// Play Toguz Kumalak in the terminal against a pluggable engine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seeds placed in every pit at game start.
    #[arg(long, default_value_t = toguz_core::DEFAULT_SEEDS)]
    seeds: u32,

    /// Log file path. Logging goes to a file so it cannot corrupt the
    /// terminal UI.
    #[arg(long, default_value = "toguz_tui.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(seeds = cli.seeds, "Starting Toguz Kumalak TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let app = App::new(cli.seeds, event_tx);

    let res = run_app(&mut terminal, app, event_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut event_rx: mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Drain app events (redraw requests, finished engine moves).
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        // One input event at a time; no transition overlaps another.
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyCode::Char('r') => app.reset(),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        app.click(mouse.column, mouse.row);
                    }
                }
                // The next frame recomputes all geometry from the new size.
                Event::Resize(..) => {}
                _ => {}
            }
        }
    }
}
