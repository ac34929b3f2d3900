//! Docgen TUI - terminal client for the repository documentation generator.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - HTTP details of the backend API (see `crates/client`).
//! - Configuration resolution and persistence (see `crates/config`).
//! - Async backend calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - The UI starts even when the backend is down; the first health check
//!   decides whether the unreachable banner is shown.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use docgen_config::ConfigManager;
use docgen_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use docgen_tui::action::{Action, RedactedAction};
use docgen_tui::app::App;
use docgen_tui::cli::Cli;
use docgen_tui::runtime::{
    client::create_client,
    config::{load_config, load_config_manager, save_and_quit},
    side_effects::{SharedClient, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};

/// Handles shared by every dispatched action.
struct Runtime {
    client: SharedClient,
    tx: Sender<Action>,
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
    output_dir: PathBuf,
}

impl Runtime {
    /// Apply `action` to the app, run its side effect, then its followup.
    async fn dispatch(&self, app: &mut App, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            app.update(action.clone());
            next = app.followup_action(&action);
            handle_side_effects(
                action,
                self.client.clone(),
                self.tx.clone(),
                self.config_manager.clone(),
                self.task_tracker.clone(),
                self.output_dir.clone(),
            )
            .await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "docgen-tui.log");
    // _guard must live for the whole of main() so buffered logs are flushed
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = load_config(&cli)?;
    tracing::info!(base_url = %config.api.base_url, "Starting docgen-tui");
    let client: SharedClient = Arc::new(create_client(&config)?);
    let (config_manager, persisted_state) = load_config_manager(&cli)?;

    let task_tracker = TaskTracker::new();
    let shutdown = CancellationToken::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _terminal_guard = TerminalGuard::new(no_mouse);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Key and resize events are never dropped; mouse events are when the channel is full.
    let tx_input = tx.clone();
    let input_shutdown = shutdown.clone();
    task_tracker.spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let event = tokio::select! {
                _ = input_shutdown.cancelled() => break,
                event = reader.next() => event,
            };
            let Some(Ok(event)) = event else { break };

            let sent = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    tx_input.send(Action::Input(key)).await.is_ok()
                }
                Event::Resize(width, height) => {
                    tx_input.send(Action::Resize(width, height)).await.is_ok()
                }
                Event::Mouse(mouse) => match tx_input.try_send(Action::Mouse(mouse)) {
                    Ok(()) => true,
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                        true
                    }
                    Err(TrySendError::Closed(_)) => false,
                },
                _ => true,
            };
            if !sent {
                break;
            }
        }
    });

    let mut app = App::new(persisted_state);
    let runtime = Runtime {
        client,
        tx: tx.clone(),
        config_manager: config_manager.clone(),
        task_tracker: task_tracker.clone(),
        output_dir: cli.output_dir.clone(),
    };

    runtime.dispatch(&mut app, Action::CheckHealth).await;

    let mut tick = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::trace!(action = ?RedactedAction(&action), "Received action");
                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                match action {
                    Some(Action::Quit) => break,
                    Some(action) => runtime.dispatch(&mut app, action).await,
                    None => {}
                }
            }
            _ = tick.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    if let Err(e) = save_and_quit(&app, &config_manager).await {
        tracing::error!(error = %e, "Failed to save preferences on exit");
    }

    shutdown.cancel();
    // In-flight requests get a short grace period, then are abandoned.
    drop(rx);
    task_tracker.close();
    let _ = tokio::time::timeout(Duration::from_secs(1), task_tracker.wait()).await;

    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    terminal.show_cursor()?;

    tracing::info!("docgen-tui exited");
    Ok(())
}
