//! Signal Fusion: one composite score across all panel signals
//!
//! Read-only over a [`PanelSet`]. Fallback values still contribute, the
//! reading just reports how many of its inputs were fresh.

use crate::panel::PanelSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionReading {
    /// Weighted mean of contributing signals, scaled to 0..=100.
    pub score: f64,
    pub fresh_inputs: usize,
    pub total_inputs: usize,
}

impl FusionReading {
    pub fn compute(panels: &PanelSet) -> Self {
        let mut weighted = 0.0;
        let mut weight_total = 0.0;
        let mut fresh_inputs = 0;
        let mut total_inputs = 0;

        for panel in panels.iter() {
            let weight = panel.id().fusion_weight();
            let Some(signal) = panel.signal() else {
                continue;
            };
            if weight <= 0.0 {
                continue;
            }
            weighted += signal.clamp(0.0, 1.0) * weight;
            weight_total += weight;
            total_inputs += 1;
            if panel.provenance().is_fresh() {
                fresh_inputs += 1;
            }
        }

        let score = if weight_total > 0.0 {
            weighted / weight_total * 100.0
        } else {
            0.0
        };

        Self {
            score,
            fresh_inputs,
            total_inputs,
        }
    }

    /// Short label for the gauge.
    pub fn label(&self) -> &'static str {
        match self.score {
            s if s >= 65.0 => "BULLISH",
            s if s >= 45.0 => "NEUTRAL",
            _ => "BEARISH",
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.fresh_inputs < self.total_inputs
    }
}
