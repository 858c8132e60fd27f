// Active URLs panel - listing of non-expired mappings
//
// Parameterless fetch. Expiry status in this listing is recomputed
// against the client clock when the response is rendered; the analytics
// panel instead trusts the server's flag.

use super::render_output;
use crate::events::PanelKind;
use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    render_output(
        f,
        area,
        app,
        PanelKind::ActiveUrls,
        "Active URLs",
        "Press Enter to load the active URL listing",
    );
}
