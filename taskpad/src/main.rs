//! `Taskpad` — terminal to-do list client backed by a REST API.
//!
//! Launches the TUI, fetches the task collection from the configured
//! backend, and keeps the local list in sync by patching it after each
//! confirmed server response. Configuration via CLI flags, environment
//! variables, or config file (`~/.config/taskpad/config.toml`).
//!
//! ```bash
//! # Against a local backend (debug-build default)
//! cargo run --bin taskpad
//!
//! # Against an explicit backend
//! cargo run --bin taskpad -- --api-url http://localhost:3000/api
//!
//! # Or via environment variable
//! TASKPAD_API_URL=http://localhost:3000/api cargo run
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use taskpad::app::App;
use taskpad::config::{CliArgs, ClientConfig};
use taskpad::sync::{self, SyncCommand, SyncEvent};
use taskpad::ui;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > env > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(base_url = %config.base_url, "taskpad starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("taskpad exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("taskpad.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new().with_max_title_len(config.max_title_len);

    // Spawn the sync background task and kick off the initial full fetch.
    let (cmd_tx, mut evt_rx) = match sync::spawn_sync(&config.to_sync_config()) {
        Ok((tx, rx)) => {
            let load = app.start_load();
            let _ = tx.try_send(load);
            (Some(tx), Some(rx))
        }
        Err(e) => {
            app.set_notice(format!("Backend unreachable — check configuration ({e})"));
            (None, None)
        }
    };

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Drain all pending SyncEvents (non-blocking).
        if let Some(ref mut rx) = evt_rx {
            drain_sync_events(&mut app, rx);
        }

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // handle_key_event returns Some(SyncCommand) when a user action
            // requires a network request (add, toggle, delete, reload).
            if let Some(sync_cmd) = app.handle_key_event(key)
                && let Some(ref tx) = cmd_tx
            {
                match tx.try_send(sync_cmd) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(_)) => {
                        // The command is discarded, not queued; be honest
                        // about it so the user repeats the action.
                        app.command_dropped();
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => {
                        app.set_notice("Sync task stopped — restart to reconnect");
                    }
                }
            }
        }

        if app.should_quit {
            if let Some(ref tx) = cmd_tx {
                let _ = tx.try_send(SyncCommand::Shutdown);
            }
            return Ok(());
        }
    }
}

/// Drain all pending `SyncEvent`s from the receiver and apply them to the app.
fn drain_sync_events(app: &mut App, rx: &mut mpsc::Receiver<SyncEvent>) {
    while let Ok(event) = rx.try_recv() {
        app.apply_sync_event(event);
    }
}
