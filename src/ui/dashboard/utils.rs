//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::panel::{Provenance, Tone};
use ratatui::prelude::Color;
use std::time::Duration;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Badge text and colour for a panel's provenance.
pub fn provenance_badge(provenance: Provenance) -> (&'static str, Color) {
    match provenance {
        Provenance::Live => ("LIVE", Color::LightGreen),
        Provenance::Cached => ("CACHED", Color::LightCyan),
        Provenance::Fallback => ("FALLBACK", Color::Yellow),
    }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::White,
        Tone::Positive => Color::LightGreen,
        Tone::Negative => Color::LightRed,
        Tone::Accent => Color::Cyan,
    }
}

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Panel(_) => Color::LightBlue,
        Source::Dashboard => Color::Cyan,
    }
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Uptime as `Xd Yh Zm`, `Xh Ym Zs` or `Xm Ys`.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8))
        {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2025-03-04 12:34:56"),
            "03-04 12:34:56"
        );
        assert_eq!(format_compact_timestamp("garbled"), "garbled");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(75)), "1m 15s");
        assert_eq!(format_uptime(Duration::from_secs(3 * 3600 + 61)), "3h 1m 1s");
        assert_eq!(
            format_uptime(Duration::from_secs(2 * 86400 + 5 * 3600 + 120)),
            "2d 5h 2m"
        );
    }

    #[test]
    fn test_badges_are_distinct() {
        let live = provenance_badge(Provenance::Live);
        let cached = provenance_badge(Provenance::Cached);
        let fallback = provenance_badge(Provenance::Fallback);
        assert_ne!(live.1, fallback.1);
        assert_ne!(cached.0, live.0);
    }
}
