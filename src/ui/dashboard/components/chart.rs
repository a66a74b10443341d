//! Analytics Lab price chart
//!
//! Illustrative only: the series is randomised, not market data.

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Sparkline};

const CHART_HEIGHT: u64 = 100;

pub fn render_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let data = state.series.scaled(CHART_HEIGHT);
    let last = state
        .series
        .last()
        .map(|price| format!(" ${:.4}", price))
        .unwrap_or_default();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .title(format!(" XRP PRICE PATH (simulated){} ", last))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(state.active_tab.accent())),
        )
        .data(&data)
        .max(CHART_HEIGHT)
        .style(Style::default().fg(Color::LightMagenta));
    f.render_widget(sparkline, area);
}
