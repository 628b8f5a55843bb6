//! Bipolar square wave generator

use super::SampleGenerator;
use crate::error::TransformError;

/// Square wave alternating between -1.0 and +1.0
///
/// Integer phase accumulator seeded at `period_length * 7 / 4`, which keeps
/// the first falling edge about a quarter period in.
#[derive(Debug, Clone)]
pub struct SquareWaveGenerator {
    period_length: usize,
    phase: usize,
}

impl SquareWaveGenerator {
    /// Create a square wave generator
    ///
    /// # Arguments
    /// * `period_length` - Samples per period (must be non-zero)
    pub fn new(period_length: usize) -> Result<Self, TransformError> {
        if period_length == 0 {
            return Err(TransformError::ZeroPeriod);
        }

        // floor(7p/4) without forming 7p
        let phase = (period_length / 4)
            .wrapping_mul(7)
            .wrapping_add(period_length % 4 * 7 / 4);
        tracing::trace!(period_length, phase, "square wave generator");

        Ok(Self {
            period_length,
            phase,
        })
    }

    /// Current phase counter
    pub fn phase(&self) -> usize {
        self.phase
    }
}

impl SampleGenerator for SquareWaveGenerator {
    fn next_sample(&mut self) -> f64 {
        let level = (self.phase.wrapping_mul(2) / self.period_length) % 2;
        self.phase = self.phase.wrapping_add(1);
        (level * 2) as f64 - 1.0
    }

    fn period_length(&self) -> usize {
        self.period_length
    }
}

impl Iterator for SquareWaveGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_sample())
    }
}
