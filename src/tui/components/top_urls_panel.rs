// Top URLs panel - most-clicked leaderboard
//
// Parameterless fetch; ranks are positional, assigned at render time.

use super::render_output;
use crate::events::PanelKind;
use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    render_output(
        f,
        area,
        app,
        PanelKind::TopUrls,
        "Top URLs",
        "Press Enter to load the most-clicked URLs",
    );
}
