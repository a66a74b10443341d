//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui;
use crate::environment::Environment;
use crate::events::{Event as PanelEvent, EventType};
use crate::panel::PanelSet;
use crate::ui::dashboard::{DashboardState, Tab, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::refresher::{PanelRefresher, PanelResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Timed refresh interval; `None` means manual refresh only.
    pub poll_interval: Option<Duration>,
    pub offline: bool,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        poll_interval: Option<Duration>,
        offline: bool,
    ) -> Self {
        Self {
            with_background_color,
            poll_interval,
            offline,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the panel tabs.
    Dashboard(Box<DashboardState>),
}

/// What a key press asks the dashboard to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectTab(Tab),
    NextTab,
    PreviousTab,
    RefreshVisible,
    RefreshAll,
}

impl Action {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Right => Some(Action::NextTab),
            KeyCode::BackTab | KeyCode::Left => Some(Action::PreviousTab),
            KeyCode::Char('r') => Some(Action::RefreshVisible),
            KeyCode::Char('a') => Some(Action::RefreshAll),
            KeyCode::Char(c) => Tab::from_hotkey(c).map(Action::SelectTab),
            _ => None,
        }
    }
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Panels waiting for the dashboard to mount them.
    pending_panels: Option<PanelSet>,

    /// Runs panel requests off the UI thread.
    refresher: PanelRefresher,

    /// Completed requests from the refresher.
    result_receiver: mpsc::Receiver<PanelResult>,

    /// Receives events from the refresher.
    event_receiver: mpsc::Receiver<PanelEvent>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        panels: PanelSet,
        refresher: PanelRefresher,
        result_receiver: mpsc::Receiver<PanelResult>,
        event_receiver: mpsc::Receiver<PanelEvent>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            pending_panels: Some(panels),
            refresher,
            result_receiver,
            event_receiver,
            ui_config,
        }
    }

    /// Leave the splash screen and refresh every panel.
    fn enter_dashboard(&mut self) {
        let Some(panels) = self.pending_panels.take() else {
            return;
        };
        let mut state = DashboardState::new(
            self.environment,
            self.start_time,
            panels,
            self.ui_config.clone(),
        );
        state.add_event(PanelEvent::dashboard(
            format!("dashboard mounted on {}", self.environment),
            EventType::Refresh,
        ));
        self.refresher.refresh_all(&mut state.panels);
        state.record_refresh();
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Apply a dashboard action. Returns `false` when the app should exit.
    fn handle_action(&mut self, action: Action) -> bool {
        let Screen::Dashboard(state) = &mut self.current_screen else {
            return action != Action::Quit;
        };
        match action {
            Action::Quit => return false,
            Action::SelectTab(tab) => state.select_tab(tab),
            Action::NextTab => state.next_tab(),
            Action::PreviousTab => state.previous_tab(),
            Action::RefreshVisible => {
                let visible = state.visible_panels();
                self.refresher.refresh(&mut state.panels, visible);
                state.add_event(PanelEvent::dashboard(
                    format!("refreshing {}", state.active_tab.title()),
                    EventType::Refresh,
                ));
            }
            Action::RefreshAll => {
                self.refresher.refresh_all(&mut state.panels);
                state.record_refresh();
                state.add_event(PanelEvent::dashboard(
                    "refreshing all panels".to_string(),
                    EventType::Refresh,
                ));
            }
        }
        true
    }

    /// Pull finished requests and events into the dashboard, and start a
    /// timed refresh when one is due.
    fn pump(&mut self) {
        let Screen::Dashboard(state) = &mut self.current_screen else {
            return;
        };

        while let Ok(event) = self.event_receiver.try_recv() {
            state.add_event(event);
        }
        while let Ok(result) = self.result_receiver.try_recv() {
            state.apply_result(result);
        }

        if state.poll_due() {
            self.refresher.refresh_all(&mut state.panels);
            state.record_refresh();
            state.add_event(PanelEvent::dashboard(
                "scheduled refresh".to_string(),
                EventType::Refresh,
            ));
        }

        state.update();
    }

    /// Cancel outstanding requests and log the teardown.
    fn shutdown(&mut self) {
        self.refresher.shutdown();
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.add_event(PanelEvent::dashboard(
                "shutting down, in-flight requests cancelled".to_string(),
                EventType::Shutdown,
            ));
            state.update();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Screen::Splash = self.current_screen {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return false;
            }
            // Any other key skips the splash screen
            self.enter_dashboard();
            return true;
        }
        match Action::from_key(key.code) {
            Some(action) => self.handle_action(action),
            None => true,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        app.pump();
        terminal.draw(|f| render(f, &app.current_screen))?;

        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= ui::splash_duration() {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui::tick())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(key) {
                    app.shutdown();
                    terminal.draw(|f| render(f, &app.current_screen))?;
                    return Ok(());
                }
            }
        }

        // Let spawned requests make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Endpoints;
    use crate::feeds;
    use crate::network::OfflineTransport;
    use crate::workers::core::EventSender;
    use std::sync::Arc;

    fn offline_app() -> App {
        let (result_sender, result_receiver) = mpsc::channel(16);
        let (event_sender, event_receiver) = mpsc::channel(16);
        let refresher = PanelRefresher::new(
            Arc::new(OfflineTransport),
            result_sender,
            EventSender::new(event_sender),
        );
        let endpoints = Endpoints::for_environment(Environment::Mainnet);
        App::new(
            Environment::Mainnet,
            feeds::mount_all(&endpoints, Duration::from_millis(100)),
            refresher,
            result_receiver,
            event_receiver,
            UIConfig::new(false, None, true),
        )
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(Action::from_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(
            Action::from_key(KeyCode::Char('3')),
            Some(Action::SelectTab(Tab::Network))
        );
        assert_eq!(Action::from_key(KeyCode::Char('r')), Some(Action::RefreshVisible));
        assert_eq!(Action::from_key(KeyCode::Char('a')), Some(Action::RefreshAll));
        assert_eq!(Action::from_key(KeyCode::Char('z')), None);
    }

    #[tokio::test]
    async fn test_entering_dashboard_refreshes_every_panel() {
        let mut app = offline_app();
        app.enter_dashboard();

        let Screen::Dashboard(state) = &app.current_screen else {
            panic!("dashboard not mounted");
        };
        assert!(state.panels.iter().all(|panel| panel.is_loading()));

        // Every offline request comes back as a fallback.
        for _ in 0..state.panels.ids().len() {
            let result = app.result_receiver.recv().await.unwrap();
            let Screen::Dashboard(state) = &mut app.current_screen else {
                unreachable!();
            };
            state.apply_result(result);
        }

        let Screen::Dashboard(state) = &app.current_screen else {
            unreachable!();
        };
        assert!(!state.any_loading());
        assert_eq!(state.stats.fallback as usize, state.panels.ids().len());
    }

    #[tokio::test]
    async fn test_quit_from_dashboard() {
        let mut app = offline_app();
        app.enter_dashboard();
        assert!(app.handle_action(Action::SelectTab(Tab::AnalyticsLab)));
        assert!(!app.handle_action(Action::Quit));
    }

    #[tokio::test]
    async fn test_shutdown_logs_and_cancels_requests() {
        let mut app = offline_app();
        app.enter_dashboard();
        app.shutdown();

        let Screen::Dashboard(state) = &app.current_screen else {
            panic!("dashboard not mounted");
        };
        assert_eq!(
            state.activity_logs.back().map(|event| event.event_type),
            Some(EventType::Shutdown)
        );

        // Requests were cancelled before they could run.
        tokio::task::yield_now().await;
        assert!(app.result_receiver.try_recv().is_err());
    }
}
