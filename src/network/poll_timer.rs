//! Poll scheduling for timer-triggered refreshes
//!
//! Server-provided retry delays (HTTP 429 `Retry-After`) push the next poll out
//! further than the configured interval. The timer only decides *when* a poll
//! is due; it never retries a failed request on its own.

use std::time::{Duration, Instant};

/// Configuration for poll timing behavior
#[derive(Debug, Clone)]
pub struct PollTimerConfig {
    /// Interval between polls; `None` disables polling.
    pub interval: Option<Duration>,
    /// Upper bound applied to server-provided retry delays
    pub max_server_delay: Duration,
}

impl PollTimerConfig {
    /// Poll every `interval`.
    pub fn every(interval: Duration, max_server_delay: Duration) -> Self {
        Self {
            interval: Some(interval),
            max_server_delay,
        }
    }

    /// Never poll; refreshes are manual only.
    pub fn disabled() -> Self {
        Self {
            interval: None,
            max_server_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug)]
pub struct PollTimer {
    config: PollTimerConfig,
    last_attempt: Option<Instant>,
    server_retry_until: Option<Instant>,
}

impl PollTimer {
    pub fn new(config: PollTimerConfig) -> Self {
        Self {
            config,
            last_attempt: None,
            server_retry_until: None,
        }
    }

    /// Whether a timer-triggered poll should start now.
    /// Server retry delay takes priority over the interval.
    pub fn is_due(&mut self) -> bool {
        self.is_due_at(Instant::now())
    }

    fn is_due_at(&mut self, now: Instant) -> bool {
        let Some(interval) = self.config.interval else {
            return false;
        };

        if let Some(retry_until) = self.server_retry_until {
            if now < retry_until {
                return false;
            }
            self.server_retry_until = None;
        }

        match self.last_attempt {
            Some(last) => now.duration_since(last) >= interval,
            None => true,
        }
    }

    /// Record that a refresh started, whether manual or polled.
    pub fn record_attempt(&mut self) {
        self.last_attempt = Some(Instant::now());
    }

    /// Record an upstream throttle; the next poll waits at least `delay`.
    pub fn record_server_delay(&mut self, delay: Duration) {
        let delay = delay.min(self.config.max_server_delay);
        self.server_retry_until = Some(Instant::now() + delay);
    }

    /// Time until the next poll is due, or `None` when polling is disabled.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        let interval = self.config.interval?;
        let now = Instant::now();

        if let Some(retry_until) = self.server_retry_until {
            if now < retry_until {
                return Some(retry_until.duration_since(now));
            }
            self.server_retry_until = None;
        }

        Some(match self.last_attempt {
            Some(last) => interval.saturating_sub(now.duration_since(last)),
            None => Duration::ZERO,
        })
    }
}
