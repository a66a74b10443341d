//! Dashboard main renderer

use super::components::{chart, footer, fusion, header, logs, panel_card};
use super::state::DashboardState;
use super::tabs::Tab;
use crate::panel::PanelId;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(12, 18, 28))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(28),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    match state.active_tab {
        Tab::Home => render_home(f, main_chunks[1], state),
        Tab::AnalyticsLab => render_analytics_lab(f, main_chunks[1], state),
        Tab::Network => render_network(f, main_chunks[1], state),
    }
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

fn render_home(f: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    panel_card::render_panel_card(f, columns[0], state, PanelId::XrpQuote);
    panel_card::render_panel_card(f, columns[1], state, PanelId::GlobalMarket);
    fusion::render_fusion(f, columns[2], state);
}

fn render_analytics_lab(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(8)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    panel_card::render_panel_card(f, columns[0], state, PanelId::MarketBoard);
    panel_card::render_panel_card(f, columns[1], state, PanelId::PredictionMarkets);
    chart::render_chart(f, rows[1], state);
}

fn render_network(f: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    panel_card::render_panel_card(f, columns[0], state, PanelId::LedgerStatus);
    panel_card::render_panel_card(f, columns[1], state, PanelId::FeeStats);
}
