//! Dashboard logs panel component
//!
//! Renders activity logs with event formatting

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_source_color};
use crate::error_classifier::LogLevel;
use crate::events::EventType;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Borders plus padding take three rows
    let max_logs = (area.height.saturating_sub(3)) as usize;
    let log_count = max_logs.max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(|event| {
            let (status_icon, icon_color) = match (event.event_type, event.log_level) {
                (EventType::Success, _) => ("✔", Color::LightGreen),
                (EventType::RateLimited, _) => ("⏳", Color::Yellow),
                (EventType::Fallback, LogLevel::Error) => ("✖", Color::LightRed),
                (EventType::Fallback, _) => ("↺", Color::Yellow),
                (EventType::Stale, _) => ("·", Color::DarkGray),
                (EventType::Refresh, _) => ("↻", Color::Cyan),
                (EventType::Shutdown, _) => ("■", Color::DarkGray),
            };

            let compact_time = format_compact_timestamp(&event.timestamp);
            Line::from(vec![
                Span::styled(format!("{} ", status_icon), Style::default().fg(icon_color)),
                Span::styled(
                    format!("{} ", compact_time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}: ", event.source),
                    Style::default().fg(get_source_color(&event.source)),
                ),
                Span::raw(event.msg.clone()),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for the first refresh...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let log_widget = log_paragraph.block(logs_block).wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}
