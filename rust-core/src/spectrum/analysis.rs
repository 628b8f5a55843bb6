//! Spectrum inspection helpers
//!
//! Magnitude, power and bin bookkeeping over a full complex spectrum
//! (all N bins, negative frequencies mirrored at the top).

use crate::signal::Signal;

/// Magnitude spectrum |X[k]| for k = 0..N
pub fn magnitude(spectrum: &Signal) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Power spectrum |X[k]|²
pub fn power(spectrum: &Signal) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm_sqr()).collect()
}

/// Magnitude spectrum in dB
///
/// # Arguments
/// * `spectrum` - Complex spectrum
/// * `reference` - Reference value for dB calculation
///
/// # Returns
/// 20*log10(|X[k]|/reference)
pub fn magnitude_db(spectrum: &Signal, reference: f64) -> Vec<f64> {
    magnitude(spectrum)
        .iter()
        .map(|&mag| {
            let mag_clamped = mag.max(1e-10);  // Avoid log(0)
            20.0 * (mag_clamped / reference).log10()
        })
        .collect()
}

/// Power spectrum in dB
pub fn power_db(spectrum: &Signal, reference: f64) -> Vec<f64> {
    power(spectrum)
        .iter()
        .map(|&p| {
            let p_clamped = p.max(1e-20);
            10.0 * (p_clamped / (reference * reference)).log10()
        })
        .collect()
}

/// Convert bin index to normalized frequency in cycles per sample
pub fn bin_to_frequency(bin: usize, len: usize) -> f64 {
    bin as f64 / len as f64
}

/// Frequency axis for every bin of an N-point spectrum
pub fn frequency_axis(len: usize) -> Vec<f64> {
    (0..len).map(|bin| bin_to_frequency(bin, len)).collect()
}

/// Bin holding the conjugate frequency of `bin`
pub fn mirror_bin(bin: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (len - bin % len) % len
}

/// Indices of the `count` strongest bins
///
/// Sorted by descending magnitude; equal magnitudes keep ascending bin order.
pub fn dominant_bins(spectrum: &Signal, count: usize) -> Vec<usize> {
    let magnitudes = magnitude(spectrum);
    let mut bins: Vec<usize> = (0..magnitudes.len()).collect();

    bins.sort_by(|&a, &b| magnitudes[b].total_cmp(&magnitudes[a]).then(a.cmp(&b)));
    bins.truncate(count);
    bins
}
