// UI rendering logic
//
// Builds the shell layout (title bar, content slot, optional log strip,
// status bar) and dispatches the content slot to the active panel's
// component. Called on every frame.

use super::app::App;
use super::components;
use crate::events::PanelKind;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let mut constraints = vec![Constraint::Length(2), Constraint::Min(10)];
    if app.show_logs {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::vertical(constraints).split(f.area());

    components::title_bar::render(f, chunks[0], app);

    // Content slot: exactly one panel is visible at a time
    match app.active {
        PanelKind::Shorten => components::shorten_panel::render(f, chunks[1], app),
        PanelKind::Analytics => components::analytics_panel::render(f, chunks[1], app),
        PanelKind::TopUrls => components::top_urls_panel::render(f, chunks[1], app),
        PanelKind::ActiveUrls => components::active_urls_panel::render(f, chunks[1], app),
        PanelKind::History => components::history_panel::render(f, chunks[1], app),
    }

    if app.show_logs {
        components::logs_panel::render(f, chunks[2], app);
    }

    components::status_bar::render(f, chunks[chunks.len() - 1], app);

    // Toast notification on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}
