// Components module - reusable UI building blocks
//
// Shell components (title bar, status bar, toast, log strip) frame every
// panel; the five panel modules render one dashboard feature each. All
// panel output flows through `render_output`, which turns the pure
// `PanelView` structures from the render module into widgets.

pub mod active_urls_panel;
pub mod analytics_panel;
pub mod history_panel;
pub mod logs_panel;
pub mod shorten_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod top_urls_panel;

pub use toast::Toast;

use crate::events::PanelKind;
use crate::render::{NoticeKind, PanelView, Report};
use crate::tui::app::{App, Phase};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Loading spinner frames, advanced by the app's animation tick
pub(crate) const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Widest column a table cell may occupy before truncation
const MAX_CELL_WIDTH: usize = 48;

/// Render one panel's output slot: loading indicator, notice, or report
pub(crate) fn render_output(
    f: &mut Frame,
    area: Rect,
    app: &App,
    panel: PanelKind,
    title: &str,
    hint: &str,
) {
    let theme = &app.theme;
    let state = app.panel_state(panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.phase == Phase::Loading {
        let spinner = SPINNER[app.animation_frame % SPINNER.len()];
        let loading = Paragraph::new(format!("{} Loading...", spinner))
            .style(Style::default().fg(theme.warning));
        f.render_widget(loading, inner);
        return;
    }

    match &state.view {
        PanelView::Blank => {
            let placeholder = Paragraph::new(hint).style(Style::default().fg(theme.muted));
            f.render_widget(placeholder, inner);
        }
        PanelView::Notice { kind, text } => {
            let color = match kind {
                NoticeKind::Error => theme.error,
                NoticeKind::Info => theme.muted,
            };
            let notice = Paragraph::new(text.as_str()).style(Style::default().fg(color));
            f.render_widget(notice, inner);
        }
        PanelView::Report(report) => render_report(f, inner, app, report),
    }
}

/// Render a report: labeled fields on top, optional table below
fn render_report(f: &mut Frame, area: Rect, app: &App, report: &Report) {
    let theme = &app.theme;

    let field_lines: Vec<Line> = report
        .fields
        .iter()
        .map(|field| {
            Line::from(vec![
                ratatui::text::Span::styled(
                    format!("{}: ", field.label),
                    Style::default().fg(theme.muted),
                ),
                ratatui::text::Span::styled(
                    field.value.clone(),
                    Style::default().fg(theme.foreground),
                ),
            ])
        })
        .collect();

    let Some(table) = &report.table else {
        f.render_widget(Paragraph::new(field_lines), area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(field_lines.len() as u16 + 1),
        Constraint::Min(3),
    ])
    .split(area);

    f.render_widget(Paragraph::new(field_lines), chunks[0]);

    // Column widths: widest of header and cells, capped so long URLs
    // don't starve the other columns
    let mut widths: Vec<usize> = table.header.iter().map(|h| h.width()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width().min(MAX_CELL_WIDTH));
            }
        }
    }

    let header = Row::new(
        table
            .header
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(theme.title));

    let rows = table.rows.iter().map(|row| {
        Row::new(
            row.iter()
                .map(|cell| Cell::from(truncate_to_width(cell, MAX_CELL_WIDTH))),
        )
        .style(Style::default().fg(theme.foreground))
    });

    let constraints: Vec<Constraint> = widths
        .iter()
        .map(|w| Constraint::Length(*w as u16 + 2))
        .collect();

    let widget = Table::new(rows, constraints).header(header).block(
        Block::default()
            .borders(Borders::TOP)
            .title(format!(" {} ", table.title))
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(widget, chunks[1]);
}
