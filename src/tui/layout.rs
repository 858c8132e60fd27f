/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers
/// scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 90 cols: counters only in the status bar
    Compact,
    /// 90+ cols: full status bar with origin and key hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        if width < 90 {
            Breakpoint::Compact
        } else {
            Breakpoint::Wide
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Wide => 1,
        }
    }
}
