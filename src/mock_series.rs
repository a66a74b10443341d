//! Randomised display series for the Analytics Lab sparkline
//!
//! The generator takes its randomness as a parameter so a fixed seed always
//! produces the same series.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest single-step move, as a fraction of the previous point.
const MAX_STEP: f64 = 0.03;
const FLOOR: f64 = 0.0001;

#[derive(Debug, Clone, PartialEq)]
pub struct MockSeries {
    points: Vec<f64>,
}

impl MockSeries {
    /// Random walk of `len` points starting at `start`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, start: f64, len: usize) -> Self {
        let mut points = Vec::with_capacity(len);
        let mut current = start.max(FLOOR);
        for _ in 0..len {
            points.push(current);
            let step = rng.gen_range(-MAX_STEP..=MAX_STEP);
            current = (current * (1.0 + step)).max(FLOOR);
        }
        Self { points }
    }

    /// Series seeded from a fixed value.
    pub fn seeded(seed: u64, start: f64, len: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng, start, len)
    }

    /// Series seeded from the current time.
    pub fn from_clock(start: f64, len: usize) -> Self {
        let seed = chrono::Local::now().timestamp_millis() as u64;
        Self::seeded(seed, start, len)
    }

    pub fn last(&self) -> Option<f64> {
        self.points.last().copied()
    }

    /// Scale points onto `0..=height` for a sparkline widget.
    pub fn scaled(&self, height: u64) -> Vec<u64> {
        let min = self.points.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.points.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;
        self.points
            .iter()
            .map(|point| {
                if span <= f64::EPSILON {
                    height / 2
                } else {
                    (((point - min) / span) * height as f64).round() as u64
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_series() {
        assert_eq!(
            MockSeries::seeded(42, 3.15, 48),
            MockSeries::seeded(42, 3.15, 48)
        );
        assert_ne!(
            MockSeries::seeded(42, 3.15, 48),
            MockSeries::seeded(43, 3.15, 48)
        );
    }

    #[test]
    fn test_series_never_negative() {
        for seed in 0..50 {
            let series = MockSeries::seeded(seed, 0.0, 200);
            assert_eq!(series.points.len(), 200);
            assert!(series.points.iter().all(|p| *p > 0.0));
        }
    }

    #[test]
    fn test_scaled_fits_height() {
        let series = MockSeries::seeded(7, 3.15, 48);
        let scaled = series.scaled(20);
        assert_eq!(scaled.len(), 48);
        assert!(scaled.iter().all(|v| *v <= 20));
        assert!(scaled.contains(&0));
        assert!(scaled.contains(&20));
    }

    #[test]
    fn test_first_point_is_start() {
        let series = MockSeries::seeded(1, 3.15, 5);
        assert_eq!(series.points[0], 3.15);
        assert!(MockSeries::seeded(1, 3.15, 0).last().is_none());
    }
}
