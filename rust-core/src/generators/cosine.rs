//! Cosine generator

use super::SampleGenerator;
use crate::error::TransformError;
use std::f64::consts::PI;

/// Cosine with a period given in samples, starting at phase zero
#[derive(Debug, Clone)]
pub struct CosineGenerator {
    period_length: usize,
    phase: usize,
}

impl CosineGenerator {
    /// Create a cosine generator
    ///
    /// # Arguments
    /// * `period_length` - Samples per period (must be non-zero)
    pub fn new(period_length: usize) -> Result<Self, TransformError> {
        if period_length == 0 {
            return Err(TransformError::ZeroPeriod);
        }

        tracing::trace!(period_length, "cosine generator");

        Ok(Self {
            period_length,
            phase: 0,
        })
    }
}

impl SampleGenerator for CosineGenerator {
    fn next_sample(&mut self) -> f64 {
        let sample = (self.phase as f64 * 2.0 * PI / self.period_length as f64).cos();
        self.phase += 1;
        sample
    }

    fn period_length(&self) -> usize {
        self.period_length
    }
}

impl Iterator for CosineGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let mut osc = CosineGenerator::new(8).unwrap();
        assert_eq!(osc.next_sample(), 1.0);
    }

    #[test]
    fn test_periodicity() {
        let samples: Vec<f64> = CosineGenerator::new(8).unwrap().take(16).collect();

        for i in 0..8 {
            assert!((samples[i] - samples[i + 8]).abs() < 1e-12);
        }
        assert!((samples[4] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fresh_instance_restarts() {
        let mut first = CosineGenerator::new(5).unwrap();
        first.next_sample();
        first.next_sample();

        let mut second = CosineGenerator::new(5).unwrap();
        assert_eq!(second.next_sample(), 1.0);
        assert_eq!(second.period_length(), 5);
    }
}
