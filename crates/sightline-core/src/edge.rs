//! Axis-aligned boundary segments.

use crate::geom::{GridPoint, Point2};
use std::fmt;

/// A straight boundary segment between occupied and unoccupied space.
///
/// Edges produced by a boundary sweep are always horizontal or vertical,
/// with `start` at the smaller coordinate: horizontal edges grow east,
/// vertical edges grow south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// First endpoint.
    pub start: GridPoint,
    /// Second endpoint.
    pub end: GridPoint,
}

impl Edge {
    /// Create an edge between two points.
    pub const fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Shorthand for `Edge::new(GridPoint::new(x0, y0), GridPoint::new(x1, y1))`.
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            start: GridPoint::new(x0, y0),
            end: GridPoint::new(x1, y1),
        }
    }

    /// Both endpoints, start first.
    pub fn endpoints(&self) -> [GridPoint; 2] {
        [self.start, self.end]
    }

    /// Segment vector `end - start` in floating point.
    pub fn delta(&self) -> Point2 {
        Point2::new(
            f64::from(self.end.x - self.start.x),
            f64::from(self.end.y - self.start.y),
        )
    }

    /// `true` when both endpoints share a `y` coordinate.
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// `true` when both endpoints share an `x` coordinate.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Length along its axis. Only meaningful for axis-aligned edges.
    pub fn axis_len(&self) -> u32 {
        (self.end.x - self.start.x).unsigned_abs() + (self.end.y - self.start.y).unsigned_abs()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation() {
        let h = Edge::from_coords(0, 10, 30, 10);
        let v = Edge::from_coords(20, 0, 20, 40);
        assert!(h.is_horizontal() && !h.is_vertical());
        assert!(v.is_vertical() && !v.is_horizontal());
        assert_eq!(h.axis_len(), 30);
        assert_eq!(v.axis_len(), 40);
    }

    #[test]
    fn delta_matches_endpoints() {
        let e = Edge::from_coords(10, 20, 10, 50);
        assert_eq!(e.delta(), Point2::new(0.0, 30.0));
        assert_eq!(e.endpoints(), [GridPoint::new(10, 20), GridPoint::new(10, 50)]);
    }

    #[test]
    fn display() {
        assert_eq!(Edge::from_coords(1, 2, 3, 2).to_string(), "(1, 2)-(3, 2)");
    }
}
