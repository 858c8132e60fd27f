// Wire types for the shortener backend API
//
// The backend speaks camelCase JSON. Every type here is a transient
// snapshot of a single request/response cycle; nothing is cached or
// merged across requests.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Expiration options offered by the Shorten panel
///
/// Presets are sent to the backend as fixed duration tokens; `Custom`
/// resolves to whatever the user typed in the custom duration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpiryChoice {
    /// No expiration selected - the request omits `expiresIn` entirely
    #[default]
    None,
    OneHour,
    OneDay,
    SevenDays,
    ThirtyDays,
    /// Free-text duration from the custom field
    Custom,
}

impl ExpiryChoice {
    /// Selection order used when cycling through the options
    pub const ALL: [ExpiryChoice; 6] = [
        ExpiryChoice::None,
        ExpiryChoice::OneHour,
        ExpiryChoice::OneDay,
        ExpiryChoice::SevenDays,
        ExpiryChoice::ThirtyDays,
        ExpiryChoice::Custom,
    ];

    /// Human-readable label for the selector widget
    pub fn label(&self) -> &'static str {
        match self {
            ExpiryChoice::None => "No expiration",
            ExpiryChoice::OneHour => "1 hour",
            ExpiryChoice::OneDay => "24 hours",
            ExpiryChoice::SevenDays => "7 days",
            ExpiryChoice::ThirtyDays => "30 days",
            ExpiryChoice::Custom => "Custom",
        }
    }

    /// Wire token for preset durations; `None` for the non-preset variants
    fn token(&self) -> Option<&'static str> {
        match self {
            ExpiryChoice::None | ExpiryChoice::Custom => None,
            ExpiryChoice::OneHour => Some("1h"),
            ExpiryChoice::OneDay => Some("24h"),
            ExpiryChoice::SevenDays => Some("7d"),
            ExpiryChoice::ThirtyDays => Some("30d"),
        }
    }

    /// Resolve the `expiresIn` value for a request.
    ///
    /// `Custom` takes the custom field's trimmed text; an empty custom
    /// field means no expiration, so no empty-string duration is ever sent.
    pub fn resolve(&self, custom: &str) -> Option<String> {
        match self {
            ExpiryChoice::Custom => {
                let trimmed = custom.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            other => other.token().map(str::to_string),
        }
    }

    /// Next option in selection order (wraps around)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous option in selection order (wraps around)
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Body of `POST /shorten`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
    /// Omitted from the JSON body when no expiration was selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
}

/// Successful response of `POST /shorten`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub created_at: NaiveDateTime,
    /// Absent means the mapping never expires
    #[serde(default)]
    pub expires_at: Option<NaiveDateTime>,
}

/// Response of `GET /analytics/{shortCode}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAnalytics {
    pub short_code: String,
    pub original_url: String,
    pub total_clicks: u64,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub last_accessed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub expires_at: Option<NaiveDateTime>,
    /// Expiry as judged by the server; trusted as-is for this panel
    pub is_expired: bool,
    /// Historical access log in server-provided order
    #[serde(default)]
    pub access_logs: Vec<AccessLogEntry>,
    /// True record count, independent of how many rows are displayed
    pub total_access_records: u64,
}

/// One row of the per-URL access log
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogEntry {
    pub accessed_at: NaiveDateTime,
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Captured by the server but not rendered in the dashboard
    #[allow(dead_code)]
    #[serde(default)]
    pub user_agent: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub referer: Option<String>,
}

/// Response of `GET /analytics/top/urls`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUrlsResponse {
    pub count: u64,
    #[serde(default)]
    pub urls: Vec<TopUrlEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUrlEntry {
    pub short_code: String,
    pub click_count: u64,
    pub created_at: NaiveDateTime,
}

/// Response of `GET /analytics/active/urls`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUrlsResponse {
    pub count: u64,
    #[serde(default)]
    pub urls: Vec<ActiveUrlEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUrlEntry {
    pub short_code: String,
    pub click_count: u64,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub expires_at: Option<NaiveDateTime>,
}

impl ActiveUrlEntry {
    /// Expiry recomputed against the supplied clock.
    ///
    /// The server's own expiry flag is not consulted for this listing;
    /// an entry is expired iff `expires_at` is present and strictly
    /// earlier than `now`.
    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        self.expires_at.map(|exp| exp < now).unwrap_or(false)
    }
}

/// Response of `GET /analytics/history`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub history_size: u64,
    pub max_size: u64,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub short_code: String,
    pub original_url: String,
    /// Epoch milliseconds, converted to local time at render
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn shorten_request_omits_absent_expiry() {
        let request = ShortenRequest {
            long_url: "http://example.com".to_string(),
            expires_in: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"longUrl":"http://example.com"}"#);
    }

    #[test]
    fn shorten_request_includes_present_expiry() {
        let request = ShortenRequest {
            long_url: "http://example.com".to_string(),
            expires_in: Some("24h".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"longUrl":"http://example.com","expiresIn":"24h"}"#);
    }

    #[test]
    fn custom_choice_with_empty_field_resolves_to_none() {
        assert_eq!(ExpiryChoice::Custom.resolve(""), None);
        assert_eq!(ExpiryChoice::Custom.resolve("   "), None);
    }

    #[test]
    fn custom_choice_uses_trimmed_field_value() {
        assert_eq!(
            ExpiryChoice::Custom.resolve(" 90m "),
            Some("90m".to_string())
        );
    }

    #[test]
    fn preset_choices_ignore_custom_field() {
        assert_eq!(ExpiryChoice::OneHour.resolve("ignored"), Some("1h".to_string()));
        assert_eq!(ExpiryChoice::OneDay.resolve(""), Some("24h".to_string()));
        assert_eq!(ExpiryChoice::SevenDays.resolve(""), Some("7d".to_string()));
        assert_eq!(ExpiryChoice::ThirtyDays.resolve(""), Some("30d".to_string()));
        assert_eq!(ExpiryChoice::None.resolve("ignored"), None);
    }

    #[test]
    fn expiry_choice_cycle_wraps() {
        let mut choice = ExpiryChoice::None;
        for _ in 0..ExpiryChoice::ALL.len() {
            choice = choice.next();
        }
        assert_eq!(choice, ExpiryChoice::None);
        assert_eq!(ExpiryChoice::None.prev(), ExpiryChoice::Custom);
    }

    #[test]
    fn analytics_parses_with_optional_fields_absent() {
        let json = r#"{
            "shortCode": "abc123",
            "originalUrl": "http://example.com/page",
            "totalClicks": 3,
            "createdAt": "2025-06-15T08:30:00",
            "isExpired": false,
            "accessLogs": [],
            "totalAccessRecords": 0
        }"#;
        let analytics: UrlAnalytics = serde_json::from_str(json).unwrap();
        assert_eq!(analytics.short_code, "abc123");
        assert!(analytics.last_accessed_at.is_none());
        assert!(analytics.expires_at.is_none());
        assert!(!analytics.is_expired);
    }

    #[test]
    fn access_log_entry_tolerates_missing_ip() {
        let json = r#"{"accessedAt": "2025-06-15T08:30:00"}"#;
        let entry: AccessLogEntry = serde_json::from_str(json).unwrap();
        assert!(entry.ip_address.is_none());
    }

    #[test]
    fn active_entry_without_expiry_never_expires() {
        let entry = ActiveUrlEntry {
            short_code: "abc".to_string(),
            click_count: 0,
            created_at: ts(8, 0),
            expires_at: None,
        };
        assert!(!entry.is_expired_at(ts(23, 59)));
    }

    #[test]
    fn active_entry_expiry_is_strict_comparison() {
        let now = ts(12, 0);
        let expired = ActiveUrlEntry {
            short_code: "a".to_string(),
            click_count: 0,
            created_at: ts(8, 0),
            expires_at: Some(now - Duration::hours(1)),
        };
        let boundary = ActiveUrlEntry {
            expires_at: Some(now),
            ..expired.clone()
        };
        assert!(expired.is_expired_at(now));
        assert!(!boundary.is_expired_at(now));
    }

    #[test]
    fn history_parses_epoch_millis() {
        let json = r#"{
            "historySize": 1,
            "maxSize": 100,
            "history": [
                {"shortCode": "abc", "originalUrl": "http://example.com", "timestamp": 1750000000000}
            ]
        }"#;
        let history: HistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(history.max_size, 100);
        assert_eq!(history.history[0].timestamp, 1_750_000_000_000);
    }
}
