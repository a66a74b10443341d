//! Dashboard state management
//!
//! Contains the main dashboard state struct and the refresh counters

use super::tabs::Tab;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, ui};
use crate::environment::Environment;
use crate::events::Event as PanelEvent;
use crate::fusion::FusionReading;
use crate::mock_series::MockSeries;
use crate::network::{PollTimer, PollTimerConfig};
use crate::panel::PanelSet;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Running totals of applied results, shown in the footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    pub live: u64,
    pub cached: u64,
    pub fallback: u64,
    pub rate_limited: u64,
    pub stale: u64,
}

#[derive(Debug)]
pub struct DashboardState {
    /// The environment the panels read from.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Every mounted panel. Only the UI thread mutates these.
    pub panels: PanelSet,
    /// Tab currently on screen.
    pub active_tab: Tab,
    /// Composite score, recomputed every tick.
    pub fusion: FusionReading,
    /// Randomised price path for the Analytics Lab chart.
    pub series: MockSeries,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<PanelEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<PanelEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Requests go nowhere; every panel shows its fallback.
    pub offline: bool,
    pub stats: RefreshStats,
    /// Animation tick counter
    pub tick: usize,

    poll_timer: PollTimer,
    next_poll_in: Option<Duration>,
}

impl DashboardState {
    pub fn new(
        environment: Environment,
        start_time: Instant,
        panels: PanelSet,
        ui_config: UIConfig,
    ) -> Self {
        let poll_config = match ui_config.poll_interval {
            Some(interval) => PollTimerConfig::every(
                interval,
                crate::consts::cli_consts::panel::max_server_retry_delay(),
            ),
            None => PollTimerConfig::disabled(),
        };
        let fusion = FusionReading::compute(&panels);

        Self {
            environment,
            start_time,
            panels,
            active_tab: Tab::default(),
            fusion,
            series: MockSeries::from_clock(3.15, ui::MOCK_SERIES_LEN),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            offline: ui_config.offline,
            stats: RefreshStats::default(),
            tick: 0,
            poll_timer: PollTimer::new(poll_config),
            next_poll_in: None,
        }
    }

    pub fn poll_timer_mut(&mut self) -> &mut PollTimer {
        &mut self.poll_timer
    }

    /// Seconds until the next timed refresh, as of the last tick.
    pub fn next_poll_in(&self) -> Option<Duration> {
        self.next_poll_in
    }

    pub(super) fn set_next_poll_in(&mut self, next: Option<Duration>) {
        self.next_poll_in = next;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: PanelEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: PanelEvent) {
        self.pending_events.push_back(event);
    }
}
