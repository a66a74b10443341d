pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the tunables for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the worker -> UI event and result channels
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // PANEL CONFIGURATION
    // =============================================================================

    pub mod panel {
        use std::time::Duration;

        /// Responses faster than this are labelled "cached" (display only)
        pub const CACHED_LATENCY_THRESHOLD_MS: u64 = 100;

        /// Default polling interval; 0 in the config disables polling
        pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

        /// Ceiling for server-provided `Retry-After` delays
        pub const MAX_SERVER_RETRY_DELAY_SECS: u64 = 60 * 10;

        pub const fn max_server_retry_delay() -> Duration {
            Duration::from_secs(MAX_SERVER_RETRY_DELAY_SECS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up
        pub const SPLASH_DURATION_MS: u64 = 2000;

        /// Key polling interval, also the redraw cadence
        pub const TICK_MS: u64 = 100;

        /// Points in the Analytics Lab mock price series
        pub const MOCK_SERIES_LEN: usize = 48;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn tick() -> Duration {
            Duration::from_millis(TICK_MS)
        }
    }
}
