//! Error handling for remote panel sources

use crate::panel::FallbackReason;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The upstream refused the request with HTTP 429.
    #[error("Rate limited (retry after {retry_after_secs:?}s)")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Any other non-success HTTP status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not valid JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body was JSON but not in the shape the panel expects.
    #[error("Unexpected response shape: {0}")]
    Parse(String),

    /// The panel has no backing integration.
    #[error("No live integration")]
    NoIntegration,

    /// Network access disabled for this session.
    #[error("Offline")]
    Offline,
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        if status == 429 {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(parse_retry_after);
            return FetchError::RateLimited { retry_after_secs };
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetchError::Http { status, message }
    }

    /// Server-provided delay before the next poll, if any.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            FetchError::RateLimited { retry_after_secs } => *retry_after_secs,
            _ => None,
        }
    }

    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            FetchError::RateLimited { .. } => FallbackReason::RateLimited,
            FetchError::Http { status, .. } => FallbackReason::Http(*status),
            FetchError::Reqwest(_) => FallbackReason::Network,
            FetchError::Decode(_) | FetchError::Parse(_) => FallbackReason::Parse,
            FetchError::NoIntegration => FallbackReason::NoIntegration,
            FetchError::Offline => FallbackReason::Offline,
        }
    }
}

/// `Retry-After` is either delta-seconds or an HTTP date; only the former is honoured.
fn parse_retry_after(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after("120"), Some(120));
        assert_eq!(parse_retry_after(" 5 "), Some(5));
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }

    #[test]
    fn test_fallback_reason_mapping() {
        assert_eq!(
            FetchError::RateLimited {
                retry_after_secs: None
            }
            .fallback_reason(),
            FallbackReason::RateLimited
        );
        assert_eq!(
            FetchError::Http {
                status: 500,
                message: String::new()
            }
            .fallback_reason(),
            FallbackReason::Http(500)
        );
        assert_eq!(
            FetchError::Parse("x".to_string()).fallback_reason(),
            FallbackReason::Parse
        );
        assert_eq!(
            FetchError::NoIntegration.fallback_reason(),
            FallbackReason::NoIntegration
        );
    }

    #[test]
    fn test_retry_after_only_for_rate_limit() {
        let throttled = FetchError::RateLimited {
            retry_after_secs: Some(42),
        };
        assert_eq!(throttled.retry_after_secs(), Some(42));
        assert_eq!(FetchError::Offline.retry_after_secs(), None);
    }
}
