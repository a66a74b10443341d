//! Typed panel payloads and their display rows

use serde::Serialize;
use std::fmt::Debug;

/// Visual treatment for a displayed row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
    Accent,
}

impl Tone {
    /// Positive for gains, negative for losses.
    pub fn for_change(change: f64) -> Self {
        if change > 0.0 {
            Tone::Positive
        } else if change < 0.0 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

/// One label/value line inside a panel card.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone: Tone::Neutral,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// A payload a panel can hold and render.
pub trait PanelValue: Clone + Debug + PartialEq + Serialize + Send + 'static {
    /// Display rows, top to bottom.
    fn rows(&self) -> Vec<Row>;

    /// Normalised contribution to the Signal Fusion score, in `[0, 1]`.
    fn signal(&self) -> Option<f64> {
        None
    }
}
