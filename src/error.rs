use std::fmt;

use thiserror::Error;

/// The two shapes of motion data an input source can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Instantaneous,
    Integrated,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKind::Instantaneous => write!(f, "instantaneous"),
            DataKind::Integrated => write!(f, "integrated"),
        }
    }
}

/// Failures raised by an input source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("not implemented: {0} input data was not calculated")]
    NotImplemented(DataKind),

    #[error("no input data covers the interval [{t1}, {t2}]")]
    OutOfRange { t1: f64, t2: f64 },
}

/// Reasons a timestamp grid is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("timestamp grid is empty")]
    Empty,

    #[error("timestamp {value} at index {index} is not finite")]
    NonFinite { index: usize, value: f64 },

    #[error("timestamps are not strictly increasing at index {index}: {previous} then {current}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("grid step must be positive and finite, found {0}")]
    InvalidStep(f64),

    #[error("decimation factor must be at least 1")]
    ZeroDecimation,
}

/// Returned when a scheme name does not match any known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm scheme `{0}`, expected `average-speed` or `panov`")]
pub struct ParseSchemeError(pub String);

/// Errors that can occur while propagating an orientation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid timestamp grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error("input source failed: {0}")]
    Input(#[from] InputError),
}
