// Response rendering - pure mapping from parsed API results to
// display-ready panel content
//
// Each function here is total: given a well-formed result it always
// produces a view, defending against the optional fields the backend may
// omit. The ratatui widgets in tui/components consume these structures;
// nothing in this module touches the terminal, which keeps the mapping
// unit-testable.

use crate::api::models::{
    ActiveUrlsResponse, HistoryResponse, ShortenResponse, TopUrlsResponse, UrlAnalytics,
};
use crate::api::ApiError;
use chrono::{Local, NaiveDateTime, TimeZone};

/// Label for an absent expiry or last-access timestamp
pub const NEVER: &str = "Never";

/// Label for an absent per-row value (e.g. missing IP address)
pub const NOT_AVAILABLE: &str = "N/A";

/// Only this many access-log rows are displayed; the record count always
/// reflects the true total
const ACCESS_LOG_ROWS: usize = 5;

/// Severity of a notice replacing a panel's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Empty result sets and usage hints
    Info,
    /// Validation messages and request failures
    Error,
}

/// Display-ready content for one panel's output slot
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelView {
    /// Nothing fetched yet
    #[default]
    Blank,
    /// A short notice replacing the panel body
    Notice { kind: NoticeKind, text: String },
    /// Labeled fields, optionally followed by a table
    Report(Report),
}

impl PanelView {
    pub fn info(text: impl Into<String>) -> Self {
        Self::Notice {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// A rendered result: labeled values plus an optional table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub fields: Vec<Field>,
    pub table: Option<TableView>,
}

/// One labeled value in a report
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A rendered table: header plus rows of already-formatted cells
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub title: String,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Timestamp formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Date+time rendering for detail fields and log rows
pub fn fmt_date_time(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Date-only rendering for compact listings
pub fn fmt_date(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Epoch milliseconds rendered through the client's local time zone
pub fn fmt_epoch_millis(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}

/// Optional timestamp: present renders as date+time, absent as `Never`
fn fmt_expiry(ts: Option<NaiveDateTime>) -> String {
    ts.map(fmt_date_time).unwrap_or_else(|| NEVER.to_string())
}

/// Binary expiry status label; there is no third state
fn status_label(expired: bool) -> &'static str {
    if expired {
        "Expired"
    } else {
        "Active"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-result renderers
// ─────────────────────────────────────────────────────────────────────────────

/// Single-shorten result panel
pub fn shorten_view(result: &ShortenResponse) -> PanelView {
    PanelView::Report(Report {
        fields: vec![
            Field::new("Original URL", &result.original_url),
            Field::new("Short URL", &result.short_url),
            Field::new("Short code", &result.short_code),
            Field::new("Created", fmt_date_time(result.created_at)),
            Field::new("Expires", fmt_expiry(result.expires_at)),
        ],
        table: None,
    })
}

/// Per-code analytics panel
///
/// The expiry status here is a function of the server's `isExpired` flag
/// alone; the client clock plays no part.
pub fn analytics_view(analytics: &UrlAnalytics) -> PanelView {
    let fields = vec![
        Field::new("Short code", &analytics.short_code),
        Field::new("Original URL", &analytics.original_url),
        Field::new("Status", status_label(analytics.is_expired)),
        Field::new("Total clicks", analytics.total_clicks.to_string()),
        Field::new("Created", fmt_date_time(analytics.created_at)),
        Field::new(
            "Last accessed",
            analytics
                .last_accessed_at
                .map(fmt_date_time)
                .unwrap_or_else(|| NEVER.to_string()),
        ),
        Field::new("Expires", fmt_expiry(analytics.expires_at)),
        Field::new("Access records", analytics.total_access_records.to_string()),
    ];

    let table = if analytics.access_logs.is_empty() {
        None
    } else {
        let rows = analytics
            .access_logs
            .iter()
            .take(ACCESS_LOG_ROWS)
            .enumerate()
            .map(|(i, log)| {
                vec![
                    (i + 1).to_string(),
                    fmt_date_time(log.accessed_at),
                    log.ip_address
                        .clone()
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                ]
            })
            .collect();
        Some(TableView {
            title: "Recent accesses".to_string(),
            header: vec!["#", "Time", "IP address"],
            rows,
        })
    };

    PanelView::Report(Report { fields, table })
}

/// Top-N leaderboard panel; rank is positional, not a server field
pub fn top_urls_view(top: &TopUrlsResponse) -> PanelView {
    if top.count == 0 || top.urls.is_empty() {
        return PanelView::info("No URLs have been shortened yet");
    }

    let rows = top
        .urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            vec![
                (i + 1).to_string(),
                url.short_code.clone(),
                url.click_count.to_string(),
                fmt_date(url.created_at),
            ]
        })
        .collect();

    PanelView::Report(Report {
        fields: vec![Field::new("Tracked URLs", top.count.to_string())],
        table: Some(TableView {
            title: "Most clicked".to_string(),
            header: vec!["Rank", "Short code", "Clicks", "Created"],
            rows,
        }),
    })
}

/// Active-URL listing panel
///
/// Expiration here is recomputed from `expires_at` against the supplied
/// clock; the server's own flag is not consulted. This deliberately
/// mirrors the observed behavior, which disagrees with the analytics
/// panel's server-trusted status.
pub fn active_urls_view(active: &ActiveUrlsResponse, now: NaiveDateTime) -> PanelView {
    if active.count == 0 || active.urls.is_empty() {
        return PanelView::info("No active URLs");
    }

    let rows = active
        .urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            vec![
                (i + 1).to_string(),
                url.short_code.clone(),
                url.click_count.to_string(),
                fmt_date(url.created_at),
                fmt_expiry(url.expires_at),
                status_label(url.is_expired_at(now)).to_string(),
            ]
        })
        .collect();

    PanelView::Report(Report {
        fields: vec![Field::new("Active URLs", active.count.to_string())],
        table: Some(TableView {
            title: "Active".to_string(),
            header: vec!["#", "Short code", "Clicks", "Created", "Expires", "Status"],
            rows,
        }),
    })
}

/// Request-history panel; entries keep server order with positional numbering
pub fn history_view(history: &HistoryResponse) -> PanelView {
    if history.history_size == 0 || history.history.is_empty() {
        return PanelView::info("No shortening history yet");
    }

    let rows = history
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            vec![
                (i + 1).to_string(),
                entry.short_code.clone(),
                entry.original_url.clone(),
                fmt_epoch_millis(entry.timestamp),
            ]
        })
        .collect();

    PanelView::Report(Report {
        fields: vec![Field::new(
            "History",
            format!("{} / {}", history.history_size, history.max_size),
        )],
        table: Some(TableView {
            title: "Recent shortenings".to_string(),
            header: vec!["#", "Short code", "Original URL", "Shortened at"],
            rows,
        }),
    })
}

/// Failure notice for any operation
pub fn error_view(err: &ApiError) -> PanelView {
    PanelView::error(format!("Error: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{
        AccessLogEntry, ActiveUrlEntry, HistoryEntry, TopUrlEntry,
    };
    use crate::api::Operation;
    use chrono::{Duration, NaiveDate};

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn report(view: PanelView) -> Report {
        match view {
            PanelView::Report(report) => report,
            other => panic!("expected report, got {:?}", other),
        }
    }

    fn field_value(report: &Report, label: &str) -> String {
        report
            .fields
            .iter()
            .find(|f| f.label == label)
            .unwrap_or_else(|| panic!("missing field {}", label))
            .value
            .clone()
    }

    fn shorten_response(expires_at: Option<NaiveDateTime>) -> ShortenResponse {
        ShortenResponse {
            original_url: "http://example.com/long/path".to_string(),
            short_url: "http://localhost:8080/r/abc123".to_string(),
            short_code: "abc123".to_string(),
            created_at: ts(9, 30),
            expires_at,
        }
    }

    fn analytics(access_logs: Vec<AccessLogEntry>, is_expired: bool) -> UrlAnalytics {
        let total = access_logs.len() as u64;
        UrlAnalytics {
            short_code: "abc123".to_string(),
            original_url: "http://example.com".to_string(),
            total_clicks: total,
            created_at: ts(8, 0),
            last_accessed_at: None,
            expires_at: None,
            is_expired,
            access_logs,
            total_access_records: total,
        }
    }

    fn access_log(minute: u32) -> AccessLogEntry {
        AccessLogEntry {
            accessed_at: ts(10, minute),
            ip_address: Some(format!("10.0.0.{}", minute)),
            user_agent: None,
            referer: None,
        }
    }

    #[test]
    fn absent_expiry_renders_never() {
        let view = report(shorten_view(&shorten_response(None)));
        assert_eq!(field_value(&view, "Expires"), NEVER);
    }

    #[test]
    fn present_expiry_renders_timestamp_deterministically() {
        let response = shorten_response(Some(ts(18, 45)));
        let first = report(shorten_view(&response));
        let second = report(shorten_view(&response));
        let value = field_value(&first, "Expires");
        assert_eq!(value, "2025-06-15 18:45:00");
        assert_ne!(value, NEVER);
        assert_eq!(first, second);
    }

    #[test]
    fn analytics_caps_log_rows_but_reports_true_count() {
        let logs: Vec<_> = (0..8).map(access_log).collect();
        let mut record = analytics(logs, false);
        record.total_access_records = 8;

        let view = report(analytics_view(&record));
        assert_eq!(field_value(&view, "Access records"), "8");
        let table = view.table.expect("access table");
        assert_eq!(table.rows.len(), 5);
        // Rows keep server order: first five entries
        assert_eq!(table.rows[0][2], "10.0.0.0");
        assert_eq!(table.rows[4][2], "10.0.0.4");
    }

    #[test]
    fn analytics_missing_ip_renders_not_available() {
        let mut log = access_log(0);
        log.ip_address = None;
        let record = analytics(vec![log], false);

        let view = report(analytics_view(&record));
        let table = view.table.expect("access table");
        assert_eq!(table.rows[0][2], NOT_AVAILABLE);
    }

    #[test]
    fn analytics_missing_last_access_renders_never() {
        let record = analytics(vec![], false);
        let view = report(analytics_view(&record));
        assert_eq!(field_value(&view, "Last accessed"), NEVER);
    }

    #[test]
    fn analytics_status_trusts_server_flag_only() {
        // Expiry timestamp lies in the past, but the server says not
        // expired - the label must follow the flag.
        let mut record = analytics(vec![], false);
        record.expires_at = Some(ts(0, 1));
        let view = report(analytics_view(&record));
        assert_eq!(field_value(&view, "Status"), "Active");

        let mut record = analytics(vec![], true);
        record.expires_at = None;
        let view = report(analytics_view(&record));
        assert_eq!(field_value(&view, "Status"), "Expired");
    }

    #[test]
    fn empty_top_urls_renders_notice_not_table() {
        let empty = TopUrlsResponse {
            count: 0,
            urls: vec![],
        };
        assert_eq!(
            top_urls_view(&empty),
            PanelView::info("No URLs have been shortened yet")
        );
    }

    #[test]
    fn top_urls_rank_is_positional_one_based() {
        let top = TopUrlsResponse {
            count: 2,
            urls: vec![
                TopUrlEntry {
                    short_code: "first".to_string(),
                    click_count: 10,
                    created_at: ts(8, 0),
                },
                TopUrlEntry {
                    short_code: "second".to_string(),
                    click_count: 5,
                    created_at: ts(9, 0),
                },
            ],
        };
        let view = report(top_urls_view(&top));
        let table = view.table.expect("leaderboard table");
        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.rows[1][0], "2");
        // Date-only context for the leaderboard
        assert_eq!(table.rows[0][3], "2025-06-15");
    }

    #[test]
    fn top_urls_render_is_idempotent() {
        let top = TopUrlsResponse {
            count: 1,
            urls: vec![TopUrlEntry {
                short_code: "abc".to_string(),
                click_count: 7,
                created_at: ts(8, 0),
            }],
        };
        assert_eq!(top_urls_view(&top), top_urls_view(&top));
    }

    #[test]
    fn active_url_expired_an_hour_ago_renders_expired() {
        let now = ts(12, 0);
        let active = ActiveUrlsResponse {
            count: 1,
            urls: vec![ActiveUrlEntry {
                short_code: "abc".to_string(),
                click_count: 99,
                created_at: ts(8, 0),
                expires_at: Some(now - Duration::hours(1)),
            }],
        };
        let view = report(active_urls_view(&active, now));
        let table = view.table.expect("active table");
        assert_eq!(table.rows[0][5], "Expired");
    }

    #[test]
    fn active_url_without_expiry_renders_active_and_never() {
        let now = ts(12, 0);
        let active = ActiveUrlsResponse {
            count: 1,
            urls: vec![ActiveUrlEntry {
                short_code: "abc".to_string(),
                click_count: 0,
                created_at: ts(8, 0),
                expires_at: None,
            }],
        };
        let view = report(active_urls_view(&active, now));
        let table = view.table.expect("active table");
        assert_eq!(table.rows[0][4], NEVER);
        assert_eq!(table.rows[0][5], "Active");
    }

    #[test]
    fn empty_history_renders_notice() {
        let empty = HistoryResponse {
            history_size: 0,
            max_size: 100,
            history: vec![],
        };
        assert_eq!(
            history_view(&empty),
            PanelView::info("No shortening history yet")
        );
    }

    #[test]
    fn history_shows_size_against_capacity() {
        let history = HistoryResponse {
            history_size: 2,
            max_size: 100,
            history: vec![
                HistoryEntry {
                    short_code: "aaa".to_string(),
                    original_url: "http://example.com/1".to_string(),
                    timestamp: 1_750_000_000_000,
                },
                HistoryEntry {
                    short_code: "bbb".to_string(),
                    original_url: "http://example.com/2".to_string(),
                    timestamp: 1_750_000_060_000,
                },
            ],
        };
        let view = report(history_view(&history));
        assert_eq!(field_value(&view, "History"), "2 / 100");
        let table = view.table.expect("history table");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "aaa");
    }

    #[test]
    fn error_view_prefixes_message() {
        let err = ApiError::RequestFailed {
            operation: Operation::Shorten,
        };
        assert_eq!(
            error_view(&err),
            PanelView::error("Error: Failed to shorten URL")
        );
    }
}
