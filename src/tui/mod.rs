// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, gateway completions)
// - Dispatching keyboard input to the active panel

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::events::{ApiEvent, PanelKind};
use anyhow::{Context, Result};
use app::{App, ShortenFocus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. Blocks until the user quits.
pub async fn run_tui(mut app: App, mut event_rx: mpsc::Receiver<ApiEvent>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input (navigation, editing, triggers)
/// 2. A periodic tick (spinner animation, redraw)
/// 3. Gateway completion events
///
/// Completions are applied in the order they arrive on the channel;
/// nothing reorders or drops them.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<ApiEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for spinner animation
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Gateway completions, applied in arrival order
            Some(api_event) = event_rx.recv() => {
                app.apply_api_event(api_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → view-only shortcuts → active panel
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    // Letter/digit shortcuts only apply on panels without text input;
    // on editing panels those keys belong to the focused field.
    if !app.is_editing() && handle_view_keys(app, &key_event) {
        return;
    }

    match app.active {
        PanelKind::Shorten => handle_shorten_keys(app, &key_event),
        PanelKind::Analytics => handle_analytics_keys(app, &key_event),
        // Fetch panels: Enter triggers the request
        _ => {
            if key_event.code == KeyCode::Enter {
                app.submit_active_panel();
            }
        }
    }
}

/// Global keys - work regardless of the active panel. Returns true if handled.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        // Copy the most recent short URL
        KeyCode::Char('y') if ctrl => {
            copy_short_url(app);
            true
        }
        // Toggle the log strip
        KeyCode::Char('l') if ctrl => {
            app.show_logs = !app.show_logs;
            true
        }
        KeyCode::Tab => {
            app.next_panel();
            true
        }
        KeyCode::BackTab => {
            app.prev_panel();
            true
        }
        KeyCode::F(n @ 1..=5) => {
            app.set_panel(PanelKind::ALL[(n - 1) as usize]);
            true
        }
        _ => false,
    }
}

/// Shortcuts available on the view-only panels. Returns true if handled.
fn handle_view_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char(c @ '1'..='5') => {
            app.set_panel(PanelKind::ALL[(c as usize) - ('1' as usize)]);
            true
        }
        // Refresh alias for the fetch panels
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.submit_active_panel();
            true
        }
        _ => false,
    }
}

/// Shorten panel: field focus, expiry selector, text editing, submit
fn handle_shorten_keys(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Enter => app.submit_active_panel(),
        KeyCode::Up => app.shorten_inputs.focus_prev(),
        KeyCode::Down => app.shorten_inputs.focus_next(),
        code => match app.shorten_inputs.focus {
            ShortenFocus::Url => {
                app.shorten_inputs.url.handle_key(code);
            }
            ShortenFocus::Custom => {
                app.shorten_inputs.custom.handle_key(code);
            }
            ShortenFocus::Expiry => match code {
                KeyCode::Left => {
                    app.shorten_inputs.expiry = app.shorten_inputs.expiry.prev();
                }
                KeyCode::Right => {
                    app.shorten_inputs.expiry = app.shorten_inputs.expiry.next();
                }
                _ => {}
            },
        },
    }
}

/// Analytics panel: code editing and submit
fn handle_analytics_keys(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Enter => app.submit_active_panel(),
        code => {
            app.analytics_code.handle_key(code);
        }
    }
}

/// Copy the most recent short URL to the clipboard and report the outcome
/// as a toast. All failures are captured here; nothing propagates.
fn copy_short_url(app: &mut App) {
    match app.last_short_url.clone() {
        Some(url) => match clipboard::copy_to_clipboard(&url) {
            Ok(()) => app.show_toast(format!("✓ Copied {}", url)),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {:#}", err);
                app.show_toast("✗ Failed to copy");
            }
        },
        None => app.show_toast("Nothing to copy yet"),
    }
}
