// HTTP gateway to the shortener backend
//
// One reqwest call per operation against a single base origin injected
// from config at startup. Classification is uniform: any non-2xx status
// is a generic per-operation failure (the body is not inspected), and
// network or parse problems surface the underlying cause message.
// There is no retry, caching, or deduplication, and deliberately no
// client-side timeout: a request that never resolves leaves its panel
// loading until the user re-triggers it.

pub mod models;

use models::{
    ActiveUrlsResponse, HistoryResponse, ShortenRequest, ShortenResponse, TopUrlsResponse,
    UrlAnalytics,
};
use serde::de::DeserializeOwned;
use std::fmt;

/// The operations the gateway performs, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Shorten,
    Analytics,
    TopUrls,
    ActiveUrls,
    History,
}

impl Operation {
    /// Generic failure text shown when the backend answers non-2xx
    pub fn failure_text(&self) -> &'static str {
        match self {
            Operation::Shorten => "Failed to shorten URL",
            Operation::Analytics => "Failed to fetch analytics",
            Operation::TopUrls => "Failed to fetch top URLs",
            Operation::ActiveUrls => "Failed to fetch active URLs",
            Operation::History => "Failed to fetch history",
        }
    }
}

/// Gateway failure taxonomy
#[derive(Debug)]
pub enum ApiError {
    /// Backend returned a non-success status; message is generic per operation
    RequestFailed { operation: Operation },
    /// The call never completed or the body was malformed; carries the cause
    Transport {
        operation: Operation,
        message: String,
    },
}

impl ApiError {
    fn transport(operation: Operation, err: reqwest::Error) -> Self {
        Self::Transport {
            operation,
            message: err.to_string(),
        }
    }

    /// The operation this failure belongs to
    pub fn operation(&self) -> Operation {
        match self {
            Self::RequestFailed { operation } | Self::Transport { operation, .. } => *operation,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { operation } => write!(f, "{}", operation.failure_text()),
            Self::Transport { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// HTTP client for the shortener backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the configured backend origin.
    ///
    /// The origin is read once at startup and shared by every call site.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured backend origin
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an operation path onto the base origin
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /shorten`
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ApiError> {
        let operation = Operation::Shorten;
        tracing::debug!(long_url = %request.long_url, "submitting shorten request");
        let response = self
            .http
            .post(self.endpoint("/shorten"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::transport(operation, e))?;
        Self::read(operation, response).await
    }

    /// `GET /analytics/{shortCode}`
    pub async fn fetch_analytics(&self, short_code: &str) -> Result<UrlAnalytics, ApiError> {
        self.get(Operation::Analytics, &format!("/analytics/{}", short_code))
            .await
    }

    /// `GET /analytics/top/urls`
    pub async fn fetch_top_urls(&self) -> Result<TopUrlsResponse, ApiError> {
        self.get(Operation::TopUrls, "/analytics/top/urls").await
    }

    /// `GET /analytics/active/urls`
    pub async fn fetch_active_urls(&self) -> Result<ActiveUrlsResponse, ApiError> {
        self.get(Operation::ActiveUrls, "/analytics/active/urls")
            .await
    }

    /// `GET /analytics/history`
    pub async fn fetch_history(&self) -> Result<HistoryResponse, ApiError> {
        self.get(Operation::History, "/analytics/history").await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| ApiError::transport(operation, e))?;
        Self::read(operation, response).await
    }

    /// Classify the response and decode the JSON body
    async fn read<T: DeserializeOwned>(
        operation: Operation,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            tracing::warn!(?operation, status = %response.status(), "backend returned failure status");
            return Err(ApiError::RequestFailed { operation });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(operation, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_doubled_slash() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(
            client.endpoint("/shorten"),
            "http://localhost:8080/shorten"
        );

        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(
            client.endpoint("/analytics/abc123"),
            "http://localhost:8080/analytics/abc123"
        );
    }

    #[test]
    fn request_failure_message_is_generic_per_operation() {
        let err = ApiError::RequestFailed {
            operation: Operation::Shorten,
        };
        assert_eq!(err.to_string(), "Failed to shorten URL");

        let err = ApiError::RequestFailed {
            operation: Operation::History,
        };
        assert_eq!(err.to_string(), "Failed to fetch history");
    }

    #[test]
    fn transport_failure_carries_cause_message() {
        let err = ApiError::Transport {
            operation: Operation::TopUrls,
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.operation(), Operation::TopUrls);
    }
}
