// TUI application state
//
// `App` holds one independent state machine per dashboard panel plus the
// navigation state selecting which panel is visible. Each panel owns its
// output slot exclusively: a trigger validates local input, spawns one
// gateway call, and the completion event later replaces that slot's
// content. Completions are applied in arrival order with no generation
// tracking, so overlapping triggers on one panel resolve to whichever
// response lands last.

use super::components::Toast;
use super::input::TextField;
use super::theme::Theme;
use crate::api::models::{ExpiryChoice, ShortenRequest};
use crate::api::ApiClient;
use crate::events::{ApiEvent, PanelKind};
use crate::logging::LogBuffer;
use crate::render::{self, PanelView};
use chrono::Local;
use std::time::Instant;
use tokio::sync::mpsc;

/// Inline message shown when the Shorten panel is triggered without a URL
const MSG_ENTER_URL: &str = "Please enter a URL";

/// Inline message shown when the Analytics panel is triggered without a code
const MSG_ENTER_CODE: &str = "Please enter a short code";

/// Request phase of a single panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A gateway call is in flight; the panel shows a loading indicator
    Loading,
}

/// One panel's output slot plus its request phase
#[derive(Debug, Default)]
pub struct PanelState {
    pub phase: Phase,
    pub view: PanelView,
}

/// Which input row of the Shorten panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortenFocus {
    #[default]
    Url,
    Expiry,
    Custom,
}

/// Input fields of the Shorten panel
#[derive(Debug, Default)]
pub struct ShortenInputs {
    pub url: TextField,
    pub expiry: ExpiryChoice,
    pub custom: TextField,
    pub focus: ShortenFocus,
}

impl ShortenInputs {
    /// Cleared after a successful shorten; failures leave inputs intact
    fn clear(&mut self) {
        self.url.clear();
        self.custom.clear();
        self.expiry = ExpiryChoice::None;
        self.focus = ShortenFocus::Url;
    }

    /// Move focus to the next input row.
    /// The custom duration row only exists while Custom is selected.
    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.expiry) {
            (ShortenFocus::Url, _) => ShortenFocus::Expiry,
            (ShortenFocus::Expiry, ExpiryChoice::Custom) => ShortenFocus::Custom,
            (ShortenFocus::Expiry, _) => ShortenFocus::Url,
            (ShortenFocus::Custom, _) => ShortenFocus::Url,
        };
    }

    /// Move focus to the previous input row
    pub fn focus_prev(&mut self) {
        self.focus = match (self.focus, self.expiry) {
            (ShortenFocus::Url, ExpiryChoice::Custom) => ShortenFocus::Custom,
            (ShortenFocus::Url, _) => ShortenFocus::Expiry,
            (ShortenFocus::Expiry, _) => ShortenFocus::Url,
            (ShortenFocus::Custom, _) => ShortenFocus::Expiry,
        };
    }
}

/// Main application state for the TUI
pub struct App {
    /// Which panel is visible; exactly one at a time
    pub active: PanelKind,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for the system log strip
    pub log_buffer: LogBuffer,

    /// Whether the log strip is visible
    pub show_logs: bool,

    /// Transient notification overlay
    pub toast: Option<Toast>,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Requests issued this session
    pub requests_sent: u64,

    /// Requests that came back as failures this session
    pub requests_failed: u64,

    /// Animation frame counter for the loading spinner
    pub animation_frame: usize,

    /// Shorten panel input fields
    pub shorten_inputs: ShortenInputs,

    /// Analytics panel short-code field
    pub analytics_code: TextField,

    /// Most recent short URL, kept for clipboard copy
    pub last_short_url: Option<String>,

    shorten: PanelState,
    analytics: PanelState,
    top_urls: PanelState,
    active_urls: PanelState,
    history: PanelState,

    api: ApiClient,
    events_tx: mpsc::Sender<ApiEvent>,
}

impl App {
    pub fn new(
        theme: Theme,
        log_buffer: LogBuffer,
        api: ApiClient,
        events_tx: mpsc::Sender<ApiEvent>,
    ) -> Self {
        Self {
            active: PanelKind::default(),
            should_quit: false,
            theme,
            log_buffer,
            show_logs: false,
            toast: None,
            start_time: Instant::now(),
            requests_sent: 0,
            requests_failed: 0,
            animation_frame: 0,
            shorten_inputs: ShortenInputs::default(),
            analytics_code: TextField::new(),
            last_short_url: None,
            shorten: PanelState::default(),
            analytics: PanelState::default(),
            top_urls: PanelState::default(),
            active_urls: PanelState::default(),
            history: PanelState::default(),
            api,
            events_tx,
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Switch to a specific panel. Other panels keep their rendered
    /// content and any in-flight request.
    pub fn set_panel(&mut self, panel: PanelKind) {
        self.active = panel;
    }

    pub fn next_panel(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_panel(&mut self) {
        self.active = self.active.prev();
    }

    /// Whether the active panel is currently capturing text input
    pub fn is_editing(&self) -> bool {
        matches!(self.active, PanelKind::Shorten | PanelKind::Analytics)
    }

    pub fn panel_state(&self, panel: PanelKind) -> &PanelState {
        match panel {
            PanelKind::Shorten => &self.shorten,
            PanelKind::Analytics => &self.analytics,
            PanelKind::TopUrls => &self.top_urls,
            PanelKind::ActiveUrls => &self.active_urls,
            PanelKind::History => &self.history,
        }
    }

    fn panel_state_mut(&mut self, panel: PanelKind) -> &mut PanelState {
        match panel {
            PanelKind::Shorten => &mut self.shorten,
            PanelKind::Analytics => &mut self.analytics,
            PanelKind::TopUrls => &mut self.top_urls,
            PanelKind::ActiveUrls => &mut self.active_urls,
            PanelKind::History => &mut self.history,
        }
    }

    /// True if any panel has a request in flight (drives the title spinner)
    pub fn any_loading(&self) -> bool {
        PanelKind::ALL
            .iter()
            .any(|p| self.panel_state(*p).phase == Phase::Loading)
    }

    // ── Triggers ────────────────────────────────────────────────────────

    /// Trigger the active panel's operation
    pub fn submit_active_panel(&mut self) {
        match self.active {
            PanelKind::Shorten => {
                if let Some(request) = self.prepare_shorten() {
                    self.spawn_shorten(request);
                }
            }
            PanelKind::Analytics => {
                if let Some(code) = self.prepare_analytics() {
                    self.spawn_analytics(code);
                }
            }
            PanelKind::TopUrls => {
                self.prepare_fetch(PanelKind::TopUrls);
                let api = self.api.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = api.fetch_top_urls().await;
                    let _ = tx.send(ApiEvent::TopUrlsFinished(result)).await;
                });
            }
            PanelKind::ActiveUrls => {
                self.prepare_fetch(PanelKind::ActiveUrls);
                let api = self.api.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = api.fetch_active_urls().await;
                    let _ = tx.send(ApiEvent::ActiveUrlsFinished(result)).await;
                });
            }
            PanelKind::History => {
                self.prepare_fetch(PanelKind::History);
                let api = self.api.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = api.fetch_history().await;
                    let _ = tx.send(ApiEvent::HistoryFinished(result)).await;
                });
            }
        }
    }

    /// Validate the Shorten inputs and build the request.
    ///
    /// On validation failure the panel stays Idle and shows an inline
    /// notice; no network call is issued. A custom expiry with an empty
    /// custom field resolves to no expiration at all.
    fn prepare_shorten(&mut self) -> Option<ShortenRequest> {
        if self.shorten_inputs.url.is_empty() {
            self.shorten.view = PanelView::error(MSG_ENTER_URL);
            return None;
        }

        let request = ShortenRequest {
            long_url: self.shorten_inputs.url.value().to_string(),
            expires_in: self
                .shorten_inputs
                .expiry
                .resolve(self.shorten_inputs.custom.value()),
        };
        self.shorten.phase = Phase::Loading;
        self.requests_sent += 1;
        Some(request)
    }

    fn spawn_shorten(&self, request: ShortenRequest) {
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.shorten(&request).await;
            let _ = tx.send(ApiEvent::ShortenFinished(result)).await;
        });
    }

    /// Validate the Analytics input and return the code to look up
    fn prepare_analytics(&mut self) -> Option<String> {
        let code = self.analytics_code.value().trim().to_string();
        if code.is_empty() {
            self.analytics.view = PanelView::error(MSG_ENTER_CODE);
            return None;
        }
        self.analytics.phase = Phase::Loading;
        self.requests_sent += 1;
        Some(code)
    }

    fn spawn_analytics(&self, code: String) {
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_analytics(&code).await;
            let _ = tx.send(ApiEvent::AnalyticsFinished(result)).await;
        });
    }

    /// Mark a parameterless fetch panel as loading
    fn prepare_fetch(&mut self, panel: PanelKind) {
        self.panel_state_mut(panel).phase = Phase::Loading;
        self.requests_sent += 1;
    }

    // ── Completions ─────────────────────────────────────────────────────

    /// Apply one completion event to its panel.
    ///
    /// Events are applied in the order they arrive on the channel; a
    /// slower earlier request can therefore overwrite a faster later one.
    pub fn apply_api_event(&mut self, event: ApiEvent) {
        let panel = event.panel();
        let view = match event {
            ApiEvent::ShortenFinished(Ok(response)) => {
                self.last_short_url = Some(response.short_url.clone());
                self.shorten_inputs.clear();
                render::shorten_view(&response)
            }
            ApiEvent::AnalyticsFinished(Ok(analytics)) => render::analytics_view(&analytics),
            ApiEvent::TopUrlsFinished(Ok(top)) => render::top_urls_view(&top),
            ApiEvent::ActiveUrlsFinished(Ok(active)) => {
                render::active_urls_view(&active, Local::now().naive_local())
            }
            ApiEvent::HistoryFinished(Ok(history)) => render::history_view(&history),
            ApiEvent::ShortenFinished(Err(err))
            | ApiEvent::AnalyticsFinished(Err(err))
            | ApiEvent::TopUrlsFinished(Err(err))
            | ApiEvent::ActiveUrlsFinished(Err(err))
            | ApiEvent::HistoryFinished(Err(err)) => {
                tracing::warn!(operation = ?err.operation(), "request failed: {}", err);
                self.requests_failed += 1;
                render::error_view(&err)
            }
        };

        let state = self.panel_state_mut(panel);
        state.phase = Phase::Idle;
        state.view = view;
    }

    // ── Toast / misc ────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Advance the loading spinner animation
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// The backend origin the gateway talks to (for the status bar)
    pub fn backend_origin(&self) -> &str {
        self.api.base_url()
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ShortenResponse;
    use crate::api::{ApiError, Operation};
    use crate::render::NoticeKind;
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::channel(16);
        App::new(
            Theme::default(),
            LogBuffer::new(),
            ApiClient::new("http://localhost:8080"),
            tx,
        )
    }

    fn type_str(field: &mut TextField, s: &str) {
        for ch in s.chars() {
            field.handle_key(KeyCode::Char(ch));
        }
    }

    fn shorten_ok() -> ShortenResponse {
        ShortenResponse {
            original_url: "http://example.com".to_string(),
            short_url: "http://localhost:8080/r/abc123".to_string(),
            short_code: "abc123".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            expires_at: None,
        }
    }

    #[test]
    fn empty_url_shows_validation_notice_without_request() {
        let mut app = test_app();
        let sent_before = app.requests_sent;

        assert!(app.prepare_shorten().is_none());
        assert_eq!(app.requests_sent, sent_before);
        assert_eq!(app.panel_state(PanelKind::Shorten).phase, Phase::Idle);
        assert_eq!(
            app.panel_state(PanelKind::Shorten).view,
            PanelView::Notice {
                kind: NoticeKind::Error,
                text: MSG_ENTER_URL.to_string()
            }
        );
    }

    #[test]
    fn valid_url_without_expiry_builds_bare_request() {
        let mut app = test_app();
        type_str(&mut app.shorten_inputs.url, "http://example.com");

        let request = app.prepare_shorten().expect("request");
        assert_eq!(request.long_url, "http://example.com");
        assert!(request.expires_in.is_none());
        assert_eq!(app.panel_state(PanelKind::Shorten).phase, Phase::Loading);
        assert_eq!(app.requests_sent, 1);
    }

    #[test]
    fn custom_expiry_with_empty_field_is_omitted() {
        let mut app = test_app();
        type_str(&mut app.shorten_inputs.url, "http://example.com");
        app.shorten_inputs.expiry = ExpiryChoice::Custom;

        let request = app.prepare_shorten().expect("request");
        assert!(request.expires_in.is_none());
    }

    #[test]
    fn successful_shorten_clears_inputs_and_keeps_short_url() {
        let mut app = test_app();
        type_str(&mut app.shorten_inputs.url, "http://example.com");
        app.shorten_inputs.expiry = ExpiryChoice::OneHour;
        app.prepare_shorten().expect("request");

        app.apply_api_event(ApiEvent::ShortenFinished(Ok(shorten_ok())));

        assert_eq!(app.panel_state(PanelKind::Shorten).phase, Phase::Idle);
        assert!(app.shorten_inputs.url.is_empty());
        assert_eq!(app.shorten_inputs.expiry, ExpiryChoice::None);
        assert_eq!(
            app.last_short_url.as_deref(),
            Some("http://localhost:8080/r/abc123")
        );
        assert!(matches!(
            app.panel_state(PanelKind::Shorten).view,
            PanelView::Report(_)
        ));
    }

    #[test]
    fn failed_shorten_keeps_inputs_and_shows_error() {
        let mut app = test_app();
        type_str(&mut app.shorten_inputs.url, "http://example.com");
        app.prepare_shorten().expect("request");

        app.apply_api_event(ApiEvent::ShortenFinished(Err(ApiError::RequestFailed {
            operation: Operation::Shorten,
        })));

        assert_eq!(app.panel_state(PanelKind::Shorten).phase, Phase::Idle);
        assert_eq!(app.shorten_inputs.url.value(), "http://example.com");
        assert_eq!(app.requests_failed, 1);
        assert_eq!(
            app.panel_state(PanelKind::Shorten).view,
            PanelView::error("Error: Failed to shorten URL")
        );
    }

    #[test]
    fn empty_code_shows_validation_notice() {
        let mut app = test_app();
        app.set_panel(PanelKind::Analytics);
        assert!(app.prepare_analytics().is_none());
        assert_eq!(
            app.panel_state(PanelKind::Analytics).view,
            PanelView::error(MSG_ENTER_CODE)
        );
    }

    #[test]
    fn completions_apply_in_arrival_order() {
        let mut app = test_app();

        // Two overlapping failures: the one arriving last owns the slot
        app.prepare_fetch(PanelKind::TopUrls);
        app.prepare_fetch(PanelKind::TopUrls);

        app.apply_api_event(ApiEvent::TopUrlsFinished(Err(ApiError::RequestFailed {
            operation: Operation::TopUrls,
        })));
        app.apply_api_event(ApiEvent::TopUrlsFinished(Err(ApiError::Transport {
            operation: Operation::TopUrls,
            message: "connection reset".to_string(),
        })));

        assert_eq!(
            app.panel_state(PanelKind::TopUrls).view,
            PanelView::error("Error: connection reset")
        );
    }

    #[test]
    fn switching_panels_preserves_rendered_content() {
        let mut app = test_app();
        type_str(&mut app.shorten_inputs.url, "http://example.com");
        app.prepare_shorten().expect("request");
        app.apply_api_event(ApiEvent::ShortenFinished(Ok(shorten_ok())));

        app.set_panel(PanelKind::History);
        app.set_panel(PanelKind::Shorten);
        assert!(matches!(
            app.panel_state(PanelKind::Shorten).view,
            PanelView::Report(_)
        ));
    }

    #[test]
    fn shorten_focus_skips_custom_unless_selected() {
        let mut inputs = ShortenInputs::default();
        inputs.focus_next();
        assert_eq!(inputs.focus, ShortenFocus::Expiry);
        inputs.focus_next();
        assert_eq!(inputs.focus, ShortenFocus::Url);

        inputs.expiry = ExpiryChoice::Custom;
        inputs.focus_next();
        inputs.focus_next();
        assert_eq!(inputs.focus, ShortenFocus::Custom);
        inputs.focus_next();
        assert_eq!(inputs.focus, ShortenFocus::Url);
    }
}
