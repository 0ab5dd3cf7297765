//! Error types for calprof

use thiserror::Error;

/// Result type for calprof operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when validating or encoding calibration data
///
/// All variants are deterministic input-validation failures detected
/// before any output bytes exist; an encode call either returns a
/// complete buffer or one of these.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Chromaticity with y == 0 (or at a formula pole) cannot be converted
    #[error("invalid chromaticity (x={x}, y={y})")]
    InvalidChromaticity { x: f64, y: f64 },

    /// Gamma exponent must be positive
    #[error("invalid gamma {0}: must be > 0")]
    InvalidGamma(f64),

    /// Value does not fit in s15Fixed16 [-32768, 32767.99998]
    #[error("value {0} outside s15Fixed16 range")]
    EncodingOverflow(f64),

    /// Text destined for a `desc`/`text` tag contains non-ASCII characters
    #[error("non-ASCII text in {field}")]
    NonAsciiText { field: &'static str },

    /// Transfer-function input outside its valid domain
    #[error("value {value} outside domain [{min}, {max}]")]
    DomainRange { value: f64, min: f64, max: f64 },

    /// Explicit tone curve with no entries
    #[error("tone curve table is empty")]
    EmptyCurve,

    /// JSON mirror serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error writing a profile or mirror file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
