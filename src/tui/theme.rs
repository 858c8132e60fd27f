// Theme support for the TUI
//
// Provides color palettes selected by name from config. "auto" uses the
// terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Text colors
    pub foreground: Color,
    pub muted: Color,

    // UI element colors
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            foreground: Color::White,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
        }
    }

    /// Dracula palette
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            title: Color::Rgb(0xbd, 0x93, 0xf9),
            border: Color::Rgb(0x62, 0x72, 0xa4),
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),
            error: Color::Rgb(0xff, 0x55, 0x55),
            warning: Color::Rgb(0xff, 0xb8, 0x6c),
        }
    }

    /// Nord palette
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            foreground: Color::Rgb(0xec, 0xef, 0xf4),
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),
            error: Color::Rgb(0xbf, 0x61, 0x6a),
            warning: Color::Rgb(0xd0, 0x87, 0x70),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_auto() {
        assert_eq!(Theme::by_name("nonexistent").name, "auto");
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
        assert_eq!(Theme::by_name("NORD").name, "nord");
    }
}
