// Shorten panel - input form plus result output
//
// The form collects the long URL, an expiration choice, and (for the
// Custom choice) a free-text duration. Enter submits; the output slot
// below shows the shortened result, a validation notice, or an error.

use super::render_output;
use crate::api::models::ExpiryChoice;
use crate::events::PanelKind;
use crate::tui::app::{App, ShortenFocus};
use crate::tui::input::TextField;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const URL_LABEL: &str = "Long URL: ";
const EXPIRY_LABEL: &str = "Expires in: ";
const CUSTOM_LABEL: &str = "Custom duration: ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    // Form on top, output below
    let chunks = Layout::vertical([Constraint::Length(7), Constraint::Min(5)]).split(area);

    render_form(f, chunks[0], app);
    render_output(
        f,
        chunks[1],
        app,
        PanelKind::Shorten,
        "Result",
        "Shorten a URL to see the result here",
    );
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let inputs = &app.shorten_inputs;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Shorten a URL ")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        field_line(theme, URL_LABEL, inputs.url.value(), inputs.focus == ShortenFocus::Url),
        selector_line(theme, inputs.expiry, inputs.focus == ShortenFocus::Expiry),
    ];
    if inputs.expiry == ExpiryChoice::Custom {
        lines.push(field_line(
            theme,
            CUSTOM_LABEL,
            inputs.custom.value(),
            inputs.focus == ShortenFocus::Custom,
        ));
    }
    lines.push(Line::from(Span::styled(
        "Up/Down: field  Left/Right: expiry  Enter: shorten",
        Style::default().fg(theme.muted),
    )));

    f.render_widget(Paragraph::new(lines), inner);

    // Place the terminal cursor inside the focused text field
    if app.active == PanelKind::Shorten {
        match inputs.focus {
            ShortenFocus::Url => set_cursor(f, inner, 0, URL_LABEL, &inputs.url),
            ShortenFocus::Custom => set_cursor(f, inner, 2, CUSTOM_LABEL, &inputs.custom),
            ShortenFocus::Expiry => {}
        }
    }
}

/// One label+value input row, highlighted when focused
fn field_line<'a>(
    theme: &crate::tui::theme::Theme,
    label: &'a str,
    value: &'a str,
    focused: bool,
) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(value, Style::default().fg(theme.foreground)),
    ])
}

/// The expiration selector row: `< label >` cycled with Left/Right
fn selector_line(
    theme: &crate::tui::theme::Theme,
    choice: ExpiryChoice,
    focused: bool,
) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    Line::from(vec![
        Span::styled(EXPIRY_LABEL, label_style),
        Span::styled(
            format!("< {} >", choice.label()),
            Style::default().fg(theme.foreground),
        ),
    ])
}

fn set_cursor(f: &mut Frame, inner: Rect, row: u16, label: &str, field: &TextField) {
    let x = inner.x + label.width() as u16 + field.cursor_column() as u16;
    let y = inner.y + row;
    if x < inner.right() && y < inner.bottom() {
        f.set_cursor_position(Position::new(x, y));
    }
}
