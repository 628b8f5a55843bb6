//! Error types for transforms and signal generation

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("Cannot transform an empty signal")]
    EmptySignal,

    #[error("Period length must be at least one sample")]
    ZeroPeriod,
}
