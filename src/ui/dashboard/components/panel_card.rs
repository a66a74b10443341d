//! Panel card component
//!
//! One bordered card per panel: rows, provenance badge, loading indicator
//! and the last error. The previous value stays on screen while loading.

use super::super::state::DashboardState;
use super::super::utils::{provenance_badge, spinner_frame, tone_color};
use crate::panel::{Panel, PanelId};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_panel_card(f: &mut Frame, area: Rect, state: &DashboardState, id: PanelId) {
    let Some(panel) = state.panels.get(id) else {
        return;
    };
    let accent = state.active_tab.accent();
    let card = Paragraph::new(card_lines(panel, state.tick))
        .block(card_block(panel, accent, state.tick))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn card_block(panel: &dyn Panel, accent: Color, tick: usize) -> Block<'static> {
    let (badge, badge_color) = provenance_badge(panel.provenance());
    let mut title = vec![
        Span::styled(
            format!(" {} ", panel.id().title()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}]", badge),
            Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
        ),
    ];
    if panel.is_loading() {
        title.push(Span::styled(
            format!(" {} ", spinner_frame(tick)),
            Style::default().fg(Color::LightYellow),
        ));
    }

    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .padding(Padding::horizontal(1))
}

fn card_lines(panel: &dyn Panel, tick: usize) -> Vec<Line<'static>> {
    let rows = panel.rows();
    let label_width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", row.label, width = label_width),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(row.value, Style::default().fg(tone_color(row.tone))),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    if panel.is_loading() {
        lines.push(Line::from(Span::styled(
            format!("{} refreshing...", spinner_frame(tick)),
            Style::default().fg(Color::LightYellow),
        )));
    } else if let Some(updated) = panel.last_updated() {
        let latency = panel
            .last_latency()
            .map(|latency| format!(" ({}ms)", latency.as_millis()))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("updated {}{}", updated.format("%H:%M:%S"), latency),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(error) = panel.error() {
        lines.push(Line::from(Span::styled(
            format!("! {}", error),
            Style::default().fg(Color::LightRed),
        )));
    }
    lines
}
