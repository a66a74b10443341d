//! Signal Fusion card
//!
//! Composite gauge plus each panel's contribution.

use super::super::state::DashboardState;
use super::super::utils::provenance_badge;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

pub fn render_fusion(f: &mut Frame, area: Rect, state: &DashboardState) {
    let fusion = &state.fusion;
    let block = Block::default()
        .title(" SIGNAL FUSION ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(state.active_tab.accent()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let gauge_color = match fusion.score {
        s if s >= 65.0 => Color::LightGreen,
        s if s >= 45.0 => Color::LightYellow,
        _ => Color::LightRed,
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::BOTTOM))
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(fusion.score.round().clamp(0.0, 100.0) as u16)
        .label(format!("{:.0} {}", fusion.score, fusion.label()));
    f.render_widget(gauge, chunks[0]);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{} of {} inputs fresh",
            fusion.fresh_inputs, fusion.total_inputs
        ),
        Style::default().fg(if fusion.is_degraded() {
            Color::Yellow
        } else {
            Color::LightGreen
        }),
    ))];
    for panel in state.panels.iter() {
        let Some(signal) = panel.signal() else {
            continue;
        };
        let weight = panel.id().fusion_weight();
        if weight <= 0.0 {
            continue;
        }
        let (badge, color) = provenance_badge(panel.provenance());
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", panel.id().title()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!("{:>5.2} x{:.2} ", signal, weight)),
            Span::styled(badge, Style::default().fg(color)),
        ]));
    }
    f.render_widget(Paragraph::new(lines), chunks[1]);
}
