use crate::network::FetchError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &FetchError) -> LogLevel {
        match error {
            // Throttling is expected on public endpoints
            FetchError::RateLimited { .. } => LogLevel::Warn,

            // Critical: Auth, malformed responses
            FetchError::Http { status, .. } if *status == 401 => LogLevel::Error,
            FetchError::Http { status, .. } if *status == 403 => LogLevel::Error,
            FetchError::Decode(_) | FetchError::Parse(_) => LogLevel::Error,

            // Panels without a live integration fall back every time
            FetchError::NoIntegration | FetchError::Offline => LogLevel::Debug,

            // Network issues and server errors - usually temporary
            _ => LogLevel::Warn,
        }
    }

    /// One-line description for the activity log. Throttling gets its own
    /// wording so it can be told apart from an outage.
    pub fn describe_fetch_error(&self, error: &FetchError) -> String {
        match error {
            FetchError::RateLimited {
                retry_after_secs: Some(secs),
            } => format!("rate limited by upstream (HTTP 429), retry after {}s", secs),
            FetchError::RateLimited {
                retry_after_secs: None,
            } => "rate limited by upstream (HTTP 429)".to_string(),
            FetchError::Reqwest(e) if e.is_timeout() => {
                "network failure: request timed out".to_string()
            }
            FetchError::Reqwest(e) if e.is_connect() => {
                "network failure: connection refused".to_string()
            }
            FetchError::Reqwest(_) => "network failure".to_string(),
            FetchError::Http { status, .. } => format!("upstream returned HTTP {}", status),
            FetchError::Decode(e) => format!("response was not valid JSON: {}", e),
            FetchError::Parse(msg) => format!("unexpected response shape: {}", msg),
            FetchError::NoIntegration => "no live integration for this panel".to_string(),
            FetchError::Offline => "offline mode".to_string(),
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
