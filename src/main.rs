// linkdeck - Terminal dashboard for a URL-shortening service
//
// The dashboard submits shortening and lookup requests to a remote
// backend API and renders the responses in five independent panels.
//
// Architecture:
// - api (reqwest): HTTP gateway to the backend, one request per trigger
// - render: pure mapping from parsed responses to display structures
// - TUI (ratatui): panels, navigation, clipboard, toast notifications
// - Event system: an mpsc channel carries gateway completions to the UI loop

mod api;
mod cli;
mod config;
mod events;
mod logging;
mod render;
mod tui;
mod util;

use anyhow::Result;
use api::ApiClient;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::app::App;
use tui::theme::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --path, --reset)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Log capture buffer: the TUI owns the terminal, so log output goes
    // to this buffer (and optionally to rotating files) instead of stdout
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("linkdeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the duration of the program so file
    // logs flush on exit
    let _file_guard = init_tracing(&config, filter, log_buffer.clone());

    // Single injected backend origin; every gateway call goes through it
    let api = ApiClient::new(&config.api_url);

    // Completion events from gateway tasks to the UI loop
    let (events_tx, events_rx) = mpsc::channel(100);

    let theme = Theme::by_name(&config.theme);

    tracing::info!(
        "linkdeck {} starting (backend: {}, theme: {})",
        config::VERSION,
        config.api_url,
        theme.name
    );
    let app = App::new(theme, log_buffer, api, events_tx);

    // Run the TUI in the main task; blocks until the user quits
    tui::run_tui(app, events_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber: the in-app buffer layer always,
/// plus an optional JSON file layer with rotation.
///
/// Returns the non-blocking writer guard when file logging is enabled.
fn init_tracing(
    config: &Config,
    filter: EnvFilter,
    buffer: LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if !config.logging.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(buffer))
            .init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.logging.file_dir, e
        );
        // Fall back to buffer-only logging
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(buffer))
            .init();
        return None;
    }

    let file_appender = match config.logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
        LogRotation::Daily => tracing_appender::rolling::daily(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
        LogRotation::Never => tracing_appender::rolling::never(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
    };

    // Writes happen in a background thread; JSON format for structured
    // log parsing
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(buffer))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}
