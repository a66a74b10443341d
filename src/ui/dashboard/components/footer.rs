//! Dashboard footer component
//!
//! Renders key bindings, refresh counters and the poll countdown

use super::super::state::DashboardState;
use super::super::utils::spinner_frame;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let stats = &state.stats;
    let poll = match state.next_poll_in() {
        Some(next) => format!("next poll {}s", next.as_secs()),
        None => "polling off".to_string(),
    };
    let activity = if state.any_loading() {
        format!("{} refreshing | ", spinner_frame(state.tick))
    } else {
        String::new()
    };
    let footer_text = format!(
        "[Q] Quit  [Tab/1-3] Switch  [R] Refresh tab  [A] Refresh all | {}live {} cached {} fallback {} | {}",
        activity, stats.live, stats.cached, stats.fallback, poll
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
