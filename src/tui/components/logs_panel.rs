//! Logs panel component
//!
//! A bottom strip showing the most recent entries captured by the
//! tracing buffer. Toggled with Ctrl+L; purely informational.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Logs ")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = inner.height as usize;
    let entries = app.log_buffer.recent(visible);

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => theme.error,
                LogLevel::Warn => theme.warning,
                LogLevel::Info => theme.foreground,
                LogLevel::Debug | LogLevel::Trace => theme.muted,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!("{:5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
