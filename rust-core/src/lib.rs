//! Fourier Workbench - Direct Discrete Fourier Transform Core
//! 
//! Naive O(N²) DFT pair, synthetic test-signal generators and a
//! frequency-domain filter round-trip for validating the pipeline.

pub mod config;
pub mod demo;
pub mod error;
pub mod generators;
pub mod output;
pub mod signal;
pub mod spectrum;

pub use config::DemoConfig;
pub use error::TransformError;
pub use generators::{generate_cosine, generate_square_wave, signal_from_generator, SampleGenerator};
pub use signal::Signal;
pub use spectrum::{forward_transform, inverse_transform, Direction};
