// Title bar component
//
// Renders the app name, the panel tabs with the active one highlighted,
// and a spinner while any panel has a request in flight.

use super::SPINNER;
use crate::config::VERSION;
use crate::events::PanelKind;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut spans = vec![
        Span::styled(
            format!(" linkdeck v{} ", VERSION),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│", Style::default().fg(theme.border)),
    ];

    for panel in PanelKind::ALL {
        let style = if panel == app.active {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {} ", panel.name()), style));
    }

    if app.any_loading() {
        let spinner = SPINNER[app.animation_frame % SPINNER.len()];
        spans.push(Span::styled(
            format!(" {}", spinner),
            Style::default().fg(theme.warning),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(title, area);
}
