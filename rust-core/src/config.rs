//! Demo workflow configuration

use crate::error::TransformError;

/// Parameters of the demonstration workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of samples per generated signal
    pub sample_count: usize,

    /// Generator period in samples
    pub period_length: usize,

    /// Spectrum bins kept at each end by the filter round-trip
    pub kept_bins: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::for_sample_count(100)
    }
}

impl DemoConfig {
    /// Configuration with two periods across `sample_count` samples
    pub fn for_sample_count(sample_count: usize) -> Self {
        Self {
            sample_count,
            period_length: sample_count / 2,
            kept_bins: 10,
        }
    }

    /// Check that the workflow can run with these parameters
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.sample_count == 0 {
            return Err(TransformError::EmptySignal);
        }
        if self.period_length == 0 {
            return Err(TransformError::ZeroPeriod);
        }
        Ok(())
    }
}
