//! Vertices of a visibility polygon.

use sightline_core::Point2;

/// A visible point together with its angle as seen from the query origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityPoint {
    /// Where the ray stopped.
    pub position: Point2,
    /// `atan2` of `position - origin`, in `-π..=π`.
    pub angle: f64,
}

impl VisibilityPoint {
    /// Create a point from raw coordinates and angle.
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            angle,
        }
    }

    /// Create a point at `position`, measuring its angle from `origin`.
    pub fn seen_from(origin: Point2, position: Point2) -> Self {
        Self {
            position,
            angle: origin.angle_to(position),
        }
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// Sort points ascending by angle.
///
/// Stable, so points sharing an angle keep their discovery order.
pub fn sort_by_angle(points: &mut [VisibilityPoint]) {
    points.sort_by(|a, b| a.angle.total_cmp(&b.angle));
}
