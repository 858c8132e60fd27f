// Analytics panel - short-code lookup plus per-URL statistics
//
// A single code field; Enter fetches the analytics record. The output
// shows click totals, expiry status as the server reports it, and the
// most recent access-log rows.

use super::render_output;
use crate::events::PanelKind;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const CODE_LABEL: &str = "Short code: ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(5)]).split(area);

    render_form(f, chunks[0], app);
    render_output(
        f,
        chunks[1],
        app,
        PanelKind::Analytics,
        "Analytics",
        "Look up a short code to see its statistics",
    );
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Look up analytics ")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                CODE_LABEL,
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                app.analytics_code.value(),
                Style::default().fg(theme.foreground),
            ),
        ]),
        Line::from(Span::styled(
            "Enter: fetch analytics",
            Style::default().fg(theme.muted),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);

    if app.active == PanelKind::Analytics {
        let x = inner.x + CODE_LABEL.width() as u16 + app.analytics_code.cursor_column() as u16;
        if x < inner.right() {
            f.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
