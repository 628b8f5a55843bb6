//! Demonstration workflow
//!
//! Generates a cosine and a square wave, transforms both and low-passes the
//! square wave through the frequency domain.

use crate::config::DemoConfig;
use crate::error::TransformError;
use crate::generators::{generate_cosine, generate_square_wave};
use crate::signal::Signal;
use crate::spectrum::{filter_round_trip, forward_transform, FilterRoundTrip};

/// Every signal produced by one demo run
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub cosine: Signal,
    pub cosine_spectrum: Signal,
    pub square_wave: Signal,
    pub square_filter: FilterRoundTrip,
}

/// Run the workflow for `config`
pub fn run_demo(config: &DemoConfig) -> Result<DemoReport, TransformError> {
    config.validate()?;

    tracing::info!(
        sample_count = config.sample_count,
        period_length = config.period_length,
        kept_bins = config.kept_bins,
        "running demo"
    );

    let cosine = generate_cosine(config.sample_count, config.period_length)?;
    let square_wave = generate_square_wave(config.sample_count, config.period_length)?;

    let square_filter = filter_round_trip(&square_wave, config.kept_bins)?;
    let cosine_spectrum = forward_transform(&cosine)?;

    Ok(DemoReport {
        cosine,
        cosine_spectrum,
        square_wave,
        square_filter,
    })
}
