//! Direct discrete Fourier transform
//!
//! Straight O(N²) evaluation of the DFT sum. Both directions run through one
//! routine so they cannot drift apart.

use crate::error::TransformError;
use crate::signal::Signal;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time → frequency: exponent sign −1, divided by N
    Forward,

    /// Frequency → time: exponent sign +1, not normalized
    Backward,
}

impl Direction {
    /// Sign applied to the exponent angle
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        }
    }

    /// Normalization divisor for a signal of `len` samples
    pub fn divisor(&self, len: usize) -> f64 {
        match self {
            Direction::Forward => len as f64,
            Direction::Backward => 1.0,
        }
    }
}

/// Compute the DFT of `signal` in the given direction
///
/// output[k] = (1/D) · Σ input[n] · exp(s·2πi·k·n/N)
///
/// where s is `direction.sign()` and D is `direction.divisor(N)`.
/// Accumulation runs over n = 0..N-1 in order, starting from zero.
///
/// # Arguments
/// * `signal` - Input samples (not modified)
/// * `direction` - Forward or backward transform
///
/// # Returns
/// New signal of the same length, or `EmptySignal` when N = 0
pub fn fourier_transform(signal: &Signal, direction: Direction) -> Result<Signal, TransformError> {
    let len = signal.len();
    if len == 0 {
        return Err(TransformError::EmptySignal);
    }

    tracing::debug!(len, ?direction, "fourier transform");

    let polarity = 2.0 * PI * direction.sign();
    let divisor = direction.divisor(len);
    let input = signal.samples();

    let output = (0..len)
        .map(|k| {
            let sum = input
                .iter()
                .enumerate()
                .fold(Complex64::new(0.0, 0.0), |acc, (n, &sample)| {
                    let angle = polarity * k as f64 * n as f64 / len as f64;
                    acc + sample * Complex64::from_polar(1.0, angle)
                });
            sum / divisor
        })
        .collect();

    Ok(output)
}

/// Forward transform, normalized by the signal length
pub fn forward_transform(signal: &Signal) -> Result<Signal, TransformError> {
    fourier_transform(signal, Direction::Forward)
}

/// Inverse (backward) transform, not normalized
pub fn inverse_transform(signal: &Signal) -> Result<Signal, TransformError> {
    fourier_transform(signal, Direction::Backward)
}
