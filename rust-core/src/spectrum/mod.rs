//! Discrete Fourier transform and spectral helpers

pub mod dft;
pub mod filter;
pub mod analysis;

pub use dft::{fourier_transform, forward_transform, inverse_transform, Direction};
pub use filter::{filter_round_trip, zero_middle_bins, FilterRoundTrip};
pub use analysis::dominant_bins;
