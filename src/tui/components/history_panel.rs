// History panel - recent shortening operations
//
// Parameterless fetch; entries keep the server's most-recent-first order
// with positional numbering.

use super::render_output;
use crate::events::PanelKind;
use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    render_output(
        f,
        area,
        app,
        PanelKind::History,
        "History",
        "Press Enter to load the shortening history",
    );
}
