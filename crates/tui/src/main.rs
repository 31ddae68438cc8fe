//! Save Search TUI - name and save search queries from the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, metrics, configuration and the terminal.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - The save REST call (see `crates/client`).
//! - Configuration parsing rules (see `crates/config`).
//!
//! Invariants:
//! - Configuration is loaded before the terminal enters raw mode, so
//!   configuration errors print normally.
//! - Mouse capture is enabled unless `--no-mouse` is specified.
//! - Logs go to a daily rolling file; stdout belongs to the UI.

use anyhow::Result;
use clap::Parser;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use savesearch_client::{MetricsExporter, SessionProvider, StaticSession};
use savesearch_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use savesearch_tui::action::{Action, RedactedAction};
use savesearch_tui::app::{App, ConnectionContext, OnSave};
use savesearch_tui::cli::Cli;
use savesearch_tui::runtime::{
    client::create_client,
    config::{load_config, load_messages, select_theme},
    side_effects::{SideEffectContext, handle_side_effects},
    terminal::TerminalGuard,
};
use std::sync::Arc;
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "savesearch-tui.log");
    // _guard must live for the entire main() so buffered logs are flushed
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let metrics_exporter = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                tracing::error!("Failed to start metrics exporter: {}", e);
                None
            }
        },
        None => None,
    };
    let metrics_enabled = metrics_exporter.is_some();

    let config = load_config(&cli)?;
    let messages = load_messages(&config);
    let client = create_client(&config, metrics_enabled)?;
    let session = StaticSession::from_token(config.auth.api_token.clone());

    let connection_ctx = ConnectionContext {
        base_url: config.connection.base_url.clone(),
        signed_in: session.current_user().is_some(),
    };
    let ctx = SideEffectContext::new(Arc::new(client), Arc::new(session));

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // The parent callback posts back into the loop so the saved list updates.
    let tx_saved = tx.clone();
    let on_save: OnSave = Box::new(move |created| {
        if let Err(e) = tx_saved.try_send(Action::SavedSearchRecorded(created.clone())) {
            tracing::warn!("Failed to record saved search: {}", e);
        }
    });

    let mut app = App::new(connection_ctx, messages, Some(on_save));
    app.theme = select_theme();
    app.mouse_enabled = !cli.no_mouse;

    let _terminal_guard = TerminalGuard::enter(!cli.no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    // Input stream task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};
        use tokio::sync::mpsc::error::TrySendError;

        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let sent = match event {
                // Key and resize events carry user intent; wait for channel space.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    tx_input.send(Action::Input(key)).await.is_ok()
                }
                Event::Resize(width, height) => {
                    tx_input.send(Action::Resize(width, height)).await.is_ok()
                }
                // Mouse events are droppable.
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

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    tracing::info!(base_url = %config.connection.base_url, "Save Search TUI started");

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!("Handling action: {:?}", RedactedAction(&action));

                let follow_up = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = follow_up else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    break;
                }

                app.update(action.clone());
                handle_side_effects(action, ctx.clone(), tx.clone()).await;
            }
            _ = tick_interval.tick() => {}
        }
    }

    terminal.show_cursor()?;
    tracing::info!("Save Search TUI exiting");
    Ok(())
}
