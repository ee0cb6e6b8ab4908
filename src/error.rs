//! Error types for the band equalizer
//!
//! Parameter assignment is the only fallible operation in the signal path.
//! Both rejection kinds (`OutOfRange`, `InvalidValue`) surface to hosts as
//! `INVALID_PARAMETER`, and no partial mutation is ever performed.

use thiserror::Error;

/// Result type alias using EqError
pub type Result<T> = std::result::Result<T, EqError>;

/// All possible errors in the band equalizer
#[derive(Error, Debug)]
pub enum EqError {
    // Parameter errors
    #[error("Parameter index {index} is not a band (valid bands: 1..={count})")]
    OutOfRange { index: usize, count: usize },

    #[error("Invalid value for {param}: {value} (valid range: {min}..{max})")]
    InvalidValue {
        param: String,
        value: f32,
        min: f32,
        max: f32,
    },

    // Configuration errors
    #[error("Invalid gain bounds: min {min} must be finite and below max {max}, and the range must contain unity")]
    InvalidBounds { min: f32, max: f32 },

    #[error("Invalid segment count: {segments} (must be at least 1)")]
    InvalidSegments { segments: usize },

    #[error("Missing parameter: {param}")]
    MissingParameter { param: String },

    // Generic
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl EqError {
    /// Host-facing error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } | Self::InvalidValue { .. } => "INVALID_PARAMETER",
            Self::InvalidBounds { .. } | Self::InvalidSegments { .. } => "INVALID_CONFIG",
            Self::MissingParameter { .. } => "MISSING_PARAMETER",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether this error is a rejected parameter assignment
    pub fn is_invalid_parameter(&self) -> bool {
        self.error_code() == "INVALID_PARAMETER"
    }

    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "Use a band parameter index (1 to 11); index 0 is the wet slot",
            Self::InvalidValue { .. } => "Adjust the gain to be within the band's declared range",
            Self::InvalidBounds { .. } => "Choose finite bounds with min < max that include 1.0",
            Self::InvalidSegments { .. } => "Use a positive segment count (default 16)",
            Self::MissingParameter { .. } => "Include the parameter in the request",
            Self::SerializationError(_) => "Check the JSON structure of the parameters",
        }
    }
}
