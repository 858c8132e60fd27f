// Status bar component
//
// Renders session statistics at the bottom: uptime, request counters,
// backend origin, and key hints.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: counters plus backend origin and key hints
/// - Narrow: counters only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let failures = if app.requests_failed > 0 {
        format!(" ✗ {}", app.requests_failed)
    } else {
        String::new()
    };

    let status_text = if bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ 📡 {}{} │ {} │ Tab: panels  Enter: submit  ^Y: copy  ^L: logs  q: quit",
            app.uptime(),
            app.requests_sent,
            failures,
            app.backend_origin(),
        )
    } else {
        format!(" {} │ 📡 {}{}", app.uptime(), app.requests_sent, failures)
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(status, area);
}
