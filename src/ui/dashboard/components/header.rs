//! Dashboard header component
//!
//! Renders the title line and the tab bar

use super::super::state::DashboardState;
use super::super::tabs::Tab;
use super::super::utils::format_uptime;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use strum::IntoEnumIterator;

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let mode = if state.offline { " | OFFLINE" } else { "" };
    let title_text = format!(
        "XRPL PULSE v{} | {}{} | up {}",
        version,
        state.environment,
        mode,
        format_uptime(state.start_time.elapsed())
    );
    let title_color = if state.offline {
        Color::LightYellow
    } else {
        Color::Cyan
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let titles: Vec<Line> = Tab::iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(format!("{} ", tab.glyph()), Style::default().fg(tab.accent())),
                Span::raw(format!("{} [{}]", tab.title(), tab.hotkey())),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_tab.index())
        .highlight_style(
            Style::default()
                .fg(state.active_tab.accent())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" | ")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, header_chunks[1]);
}
