//! Visibility query parameters.

use crate::error::VisibilityError;

/// Configuration for a [`VisibilityCalculator`](crate::VisibilityCalculator).
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityConfig {
    /// Angle in radians between the centre ray aimed at an edge endpoint
    /// and each of its two side rays.
    ///
    /// The side rays slip just past a silhouette corner so the polygon
    /// wraps around it instead of stopping at the corner. The offset must
    /// stay smaller than the angular gap between distinct endpoints at
    /// the scene's scale. Default: 1e-4.
    pub angular_offset: f64,
}

impl VisibilityConfig {
    /// Default side-ray offset in radians.
    pub const DEFAULT_ANGULAR_OFFSET: f64 = 1e-4;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            angular_offset: Self::DEFAULT_ANGULAR_OFFSET,
        }
    }

    /// Set the side-ray offset in radians.
    pub fn angular_offset(mut self, offset: f64) -> Self {
        self.angular_offset = offset;
        self
    }

    /// Check every parameter.
    pub fn validate(&self) -> Result<(), VisibilityError> {
        if !self.angular_offset.is_finite() || self.angular_offset <= 0.0 {
            return Err(VisibilityError::InvalidAngularOffset {
                value: self.angular_offset,
            });
        }
        Ok(())
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self::new()
    }
}
