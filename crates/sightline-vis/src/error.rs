//! Error types for visibility configuration.

use std::error::Error;
use std::fmt;

/// Errors arising from an invalid [`VisibilityConfig`](crate::VisibilityConfig).
#[derive(Clone, Debug, PartialEq)]
pub enum VisibilityError {
    /// The side-ray angular offset must be finite and positive.
    InvalidAngularOffset {
        /// The rejected offset, in radians.
        value: f64,
    },
}

impl fmt::Display for VisibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAngularOffset { value } => {
                write!(f, "angular offset must be finite and > 0, got {value}")
            }
        }
    }
}

impl Error for VisibilityError {}
