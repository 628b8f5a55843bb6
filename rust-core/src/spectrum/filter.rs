//! Frequency-domain filtering by bin zeroing
//!
//! Zeroes the middle of a spectrum, keeping the lowest bins and their
//! mirror images at the top, then transforms back.

use super::dft::{forward_transform, inverse_transform};
use crate::error::TransformError;
use crate::signal::Signal;
use num_complex::Complex64;

/// Intermediate and final signals of a filter round-trip
#[derive(Debug, Clone)]
pub struct FilterRoundTrip {
    /// Forward transform of the input
    pub spectrum: Signal,

    /// Spectrum after zeroing the middle bins
    pub filtered_spectrum: Signal,

    /// Inverse transform of the filtered spectrum
    pub reconstructed: Signal,
}

/// Zero bins [kept_bins, N - kept_bins)
///
/// # Arguments
/// * `spectrum` - Frequency-domain signal
/// * `kept_bins` - Bins kept at each end
///
/// # Returns
/// Copy of the spectrum with the middle zeroed. Nothing is zeroed when
/// `2 * kept_bins >= N`.
pub fn zero_middle_bins(spectrum: &Signal, kept_bins: usize) -> Signal {
    let len = spectrum.len();
    let stop = len.saturating_sub(kept_bins);

    spectrum
        .iter()
        .enumerate()
        .map(|(bin, &c)| {
            if bin >= kept_bins && bin < stop {
                Complex64::new(0.0, 0.0)
            } else {
                c
            }
        })
        .collect()
}

/// Forward-transform, zero the middle bins, inverse-transform
///
/// # Arguments
/// * `signal` - Time-domain input
/// * `kept_bins` - Bins kept at each end of the spectrum
pub fn filter_round_trip(
    signal: &Signal,
    kept_bins: usize,
) -> Result<FilterRoundTrip, TransformError> {
    let spectrum = forward_transform(signal)?;
    let filtered_spectrum = zero_middle_bins(&spectrum, kept_bins);
    let reconstructed = inverse_transform(&filtered_spectrum)?;

    tracing::debug!(len = signal.len(), kept_bins, "filter round-trip");

    Ok(FilterRoundTrip {
        spectrum,
        filtered_spectrum,
        reconstructed,
    })
}
