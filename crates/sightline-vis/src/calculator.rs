//! Visibility polygon computation.

use crate::config::VisibilityConfig;
use crate::error::VisibilityError;
use crate::point::{sort_by_angle, VisibilityPoint};
use crate::ray::Ray;
use log::debug;
use sightline_core::{Edge, Point2};
use smallvec::{smallvec, SmallVec};

/// Computes visibility polygons against a list of occluding edges.
///
/// Stateless apart from its configuration; one calculator can serve any
/// number of queries and edge lists.
///
/// # Examples
///
/// ```
/// use sightline_core::{Edge, Point2};
/// use sightline_vis::VisibilityCalculator;
///
/// // A 20x20 box around the origin.
/// let edges = [
///     Edge::from_coords(-10, -10, 10, -10),
///     Edge::from_coords(-10, 10, 10, 10),
///     Edge::from_coords(10, -10, 10, 10),
///     Edge::from_coords(-10, -10, -10, 10),
/// ];
/// let calc = VisibilityCalculator::new();
/// let points = calc.compute_visibility(Point2::new(1.5, 2.5), 100.0, &edges);
///
/// assert!(!points.is_empty());
/// assert!(points.windows(2).all(|w| w[0].angle <= w[1].angle));
/// assert!(points
///     .iter()
///     .all(|p| p.x().abs().max(p.y().abs()) > 9.999 && p.x().abs().max(p.y().abs()) < 10.001));
/// ```
#[derive(Clone, Debug, Default)]
pub struct VisibilityCalculator {
    config: VisibilityConfig,
}

impl VisibilityCalculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator from a validated [`VisibilityConfig`].
    pub fn with_config(config: VisibilityConfig) -> Result<Self, VisibilityError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Compute the visible points around `origin`, sorted ascending by angle.
    ///
    /// Every endpoint of every edge is probed with three rays of length
    /// `radius`; each ray contributes its nearest hit among all `edges`,
    /// if any. Returns an empty list when there are no edges, no ray hits
    /// anything, or `origin`/`radius` cannot form a ray (non-finite
    /// values, or a radius that is not positive).
    pub fn compute_visibility(
        &self,
        origin: Point2,
        radius: f64,
        edges: &[Edge],
    ) -> Vec<VisibilityPoint> {
        let mut out = Vec::with_capacity(edges.len() * 6);
        self.compute_into(origin, radius, edges, &mut out);
        out
    }

    /// Like [`compute_visibility`](Self::compute_visibility), but writes into
    /// a caller-owned buffer.
    ///
    /// `out` is cleared first; its capacity is kept, so per-frame callers
    /// avoid reallocating.
    pub fn compute_into(
        &self,
        origin: Point2,
        radius: f64,
        edges: &[Edge],
        out: &mut Vec<VisibilityPoint>,
    ) {
        out.clear();
        if !origin.is_finite() || !radius.is_finite() || radius <= 0.0 {
            debug!("skipping visibility query: origin {origin}, radius {radius}");
            return;
        }

        for edge in edges {
            for endpoint in edge.endpoints() {
                let base = origin.angle_to(endpoint.to_f64());
                for angle in self.probe_angles(base) {
                    let ray = Ray::from_angle(origin, angle, radius);
                    if let Some(hit) = ray.nearest_hit(edges) {
                        out.push(VisibilityPoint::seen_from(origin, hit.position));
                    }
                }
            }
        }

        sort_by_angle(out);
        debug!(
            "visibility from {origin}: {} edges, {} points",
            edges.len(),
            out.len()
        );
    }

    /// The three ray angles aimed at an endpoint seen at `base`.
    fn probe_angles(&self, base: f64) -> SmallVec<[f64; 3]> {
        let eps = self.config.angular_offset;
        smallvec![base - eps, base, base + eps]
    }
}

/// Compute a visibility polygon with the default configuration.
///
/// Shorthand for `VisibilityCalculator::new().compute_visibility(..)`.
pub fn compute_visibility(origin: Point2, radius: f64, edges: &[Edge]) -> Vec<VisibilityPoint> {
    VisibilityCalculator::new().compute_visibility(origin, radius, edges)
}
