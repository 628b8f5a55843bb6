//! Synthetic test-signal generators
//!
//! Each generator owns a phase counter that advances on every sample pull.
//! A generator is consumed to fill one signal; build a new one to restart.

pub mod cosine;
pub mod square;

pub use cosine::CosineGenerator;
pub use square::SquareWaveGenerator;

use crate::error::TransformError;
use crate::signal::Signal;
use num_complex::Complex64;

/// Producer of successive real samples of a periodic waveform
pub trait SampleGenerator {
    /// Produce the next sample and advance the phase
    fn next_sample(&mut self) -> f64;

    /// Period length in samples
    fn period_length(&self) -> usize;
}

/// Fill a signal by pulling exactly `sample_count` samples from `generator`
///
/// # Arguments
/// * `sample_count` - Number of samples to pull
/// * `generator` - Generator to consume
///
/// # Returns
/// Signal with real parts from the generator and zero imaginary parts
pub fn signal_from_generator<G: SampleGenerator>(sample_count: usize, mut generator: G) -> Signal {
    (0..sample_count)
        .map(|_| Complex64::new(generator.next_sample(), 0.0))
        .collect()
}

/// Sampled cosine cos(2π·i/period_length) for i in 0..sample_count
pub fn generate_cosine(
    sample_count: usize,
    period_length: usize,
) -> Result<Signal, TransformError> {
    Ok(signal_from_generator(sample_count, CosineGenerator::new(period_length)?))
}

/// Bipolar (±1) square wave with the given period
pub fn generate_square_wave(
    sample_count: usize,
    period_length: usize,
) -> Result<Signal, TransformError> {
    Ok(signal_from_generator(sample_count, SquareWaveGenerator::new(period_length)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_from_generator_length() {
        let signal = signal_from_generator(37, CosineGenerator::new(10).unwrap());
        assert_eq!(signal.len(), 37);
        assert!(signal.imag_parts().iter().all(|&im| im == 0.0));
    }

    #[test]
    fn test_zero_samples() {
        let signal = generate_square_wave(0, 50).unwrap();
        assert!(signal.is_empty());
    }

    #[test]
    fn test_zero_period_rejected() {
        assert_eq!(generate_cosine(100, 0), Err(TransformError::ZeroPeriod));
        assert_eq!(generate_square_wave(100, 0), Err(TransformError::ZeroPeriod));
    }

    #[test]
    fn test_square_wave_with_huge_period() {
        let square = generate_square_wave(4, usize::MAX / 4).unwrap();

        assert_eq!(square.len(), 4);
        assert!(square.real_parts().iter().all(|&s| s == 1.0 || s == -1.0));
    }

    #[test]
    fn test_cosine_reference_points() {
        let cosine = generate_cosine(100, 50).unwrap();
        let re = cosine.real_parts();

        assert_eq!(re[0], 1.0);
        assert!(re[12].abs() < 0.07);  // quarter period falls between 12 and 13
        assert!(re[13].abs() < 0.07);
        assert!((re[25] + 1.0).abs() < 1e-12);
        assert!((re[50] - 1.0).abs() < 1e-12);

        for (i, &value) in re.iter().enumerate() {
            let expected = (2.0 * std::f64::consts::PI * i as f64 / 50.0).cos();
            assert!((value - expected).abs() < 1e-12);
        }
    }
}
