//! Error types for lattice construction and payload decoding.

use thiserror::Error;

use crate::ffi::{VL_ERR_CONFIG, VL_ERR_FORMAT};

/// Errors reported by the automaton engine.
///
/// Out-of-bounds cell reads and writes are not errors; they read as dead and
/// are ignored respectively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// Invalid construction or resize parameters, or an unusable density.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Malformed payload, out-of-range cell, or bad rule counts.
    #[error("invalid data format: {0}")]
    DataFormat(String),
}

impl LatticeError {
    /// The C ABI status code for this error.
    pub fn status(&self) -> i32 {
        match self {
            LatticeError::Config(_) => VL_ERR_CONFIG,
            LatticeError::DataFormat(_) => VL_ERR_FORMAT,
        }
    }
}

impl From<serde_json::Error> for LatticeError {
    fn from(err: serde_json::Error) -> Self {
        LatticeError::DataFormat(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LatticeError>;
