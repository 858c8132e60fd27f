// Events that flow from the gateway request tasks to the TUI event loop
//
// Each user trigger spawns one task that performs a single backend call
// and reports back with one of these completion events over an mpsc
// channel. The UI loop applies completions in arrival order; there is no
// generation tracking, so within one panel a slower earlier request can
// overwrite a faster later one.

use crate::api::models::{
    ActiveUrlsResponse, HistoryResponse, ShortenResponse, TopUrlsResponse, UrlAnalytics,
};
use crate::api::ApiError;

/// The five dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelKind {
    #[default]
    Shorten,
    Analytics,
    TopUrls,
    ActiveUrls,
    History,
}

impl PanelKind {
    /// Navigation order used when cycling with Tab/BackTab
    pub const ALL: [PanelKind; 5] = [
        PanelKind::Shorten,
        PanelKind::Analytics,
        PanelKind::TopUrls,
        PanelKind::ActiveUrls,
        PanelKind::History,
    ];

    /// Display name for the title bar tabs
    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::Shorten => "Shorten",
            PanelKind::Analytics => "Analytics",
            PanelKind::TopUrls => "Top URLs",
            PanelKind::ActiveUrls => "Active URLs",
            PanelKind::History => "History",
        }
    }

    /// Next panel in navigation order (wraps around)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous panel in navigation order (wraps around)
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Completion of one backend call, tagged by the operation that issued it
#[derive(Debug)]
pub enum ApiEvent {
    ShortenFinished(Result<ShortenResponse, ApiError>),
    AnalyticsFinished(Result<UrlAnalytics, ApiError>),
    TopUrlsFinished(Result<TopUrlsResponse, ApiError>),
    ActiveUrlsFinished(Result<ActiveUrlsResponse, ApiError>),
    HistoryFinished(Result<HistoryResponse, ApiError>),
}

impl ApiEvent {
    /// The panel whose output slot this completion belongs to
    pub fn panel(&self) -> PanelKind {
        match self {
            ApiEvent::ShortenFinished(_) => PanelKind::Shorten,
            ApiEvent::AnalyticsFinished(_) => PanelKind::Analytics,
            ApiEvent::TopUrlsFinished(_) => PanelKind::TopUrls,
            ApiEvent::ActiveUrlsFinished(_) => PanelKind::ActiveUrls,
            ApiEvent::HistoryFinished(_) => PanelKind::History,
        }
    }
}
