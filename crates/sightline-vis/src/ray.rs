//! Rays and ray/segment intersection.

use sightline_core::{Edge, Point2};

/// A ray from `origin` along `vector`.
///
/// The vector's length sets the parameter scale: a hit at `t` lies at
/// `origin + t * vector`. Hits are not clipped to `t <= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Point2,
    /// Direction scaled to the query radius.
    pub vector: Point2,
}

/// Where a ray meets an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Ray parameter of the hit; always `> 0`.
    pub t: f64,
    /// World position of the hit.
    pub position: Point2,
}

impl Ray {
    /// Create a ray from an origin and a direction vector.
    pub fn new(origin: Point2, vector: Point2) -> Self {
        Self { origin, vector }
    }

    /// Create a ray of the given length pointing along `angle` radians.
    pub fn from_angle(origin: Point2, angle: f64, length: f64) -> Self {
        Self {
            origin,
            vector: Point2::new(length * angle.cos(), length * angle.sin()),
        }
    }

    /// Intersect the ray with an edge.
    ///
    /// Solves `origin + t1 * vector == start + t2 * (end - start)` and
    /// accepts the hit when `t1` is finite and positive and `0 <= t2 <= 1`.
    /// A ray too short for its hit parameter to be represented (`t1`
    /// overflowing to infinity) misses.
    ///
    /// Pairs where the segment vector and the ray vector agree on either
    /// component are skipped outright. This catches the parallel case
    /// for axis-aligned rays but is not a general parallelism test: it can
    /// also reject a genuine crossing, and near-parallel pairs fall
    /// through to the division.
    pub fn intersect(&self, edge: &Edge) -> Option<Hit> {
        let o = self.origin;
        let r = self.vector;
        let s = edge.start.to_f64();
        let d = edge.delta();

        if !((d.x - r.x).abs() > 0.0 && (d.y - r.y).abs() > 0.0) {
            return None;
        }

        let t2 = (r.x * (s.y - o.y) + r.y * (o.x - s.x)) / (d.x * r.y - d.y * r.x);
        let t1 = (s.x + d.x * t2 - o.x) / r.x;

        if t1 > 0.0 && t1.is_finite() && (0.0..=1.0).contains(&t2) {
            Some(Hit {
                t: t1,
                position: Point2::new(o.x + r.x * t1, o.y + r.y * t1),
            })
        } else {
            None
        }
    }

    /// The nearest hit of this ray among `edges`.
    pub fn nearest_hit(&self, edges: &[Edge]) -> Option<Hit> {
        edges
            .iter()
            .filter_map(|e| self.intersect(e))
            .fold(None, |best: Option<Hit>, hit| match best {
                Some(b) if b.t <= hit.t => Some(b),
                _ => Some(hit),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(ox: f64, oy: f64, vx: f64, vy: f64) -> Ray {
        Ray::new(Point2::new(ox, oy), Point2::new(vx, vy))
    }

    #[test]
    fn hits_crossing_segment() {
        let hit = ray(0.0, 0.0, 100.0, 0.0)
            .intersect(&Edge::from_coords(50, -10, 50, 10))
            .unwrap();
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.position, Point2::new(50.0, 0.0));
    }

    #[test]
    fn segment_behind_origin_is_missed() {
        assert!(ray(0.0, 0.0, 100.0, 0.0)
            .intersect(&Edge::from_coords(-50, -10, -50, 10))
            .is_none());
    }

    #[test]
    fn ray_passing_beside_segment_is_missed() {
        assert!(ray(0.0, 0.0, 100.0, 0.0)
            .intersect(&Edge::from_coords(50, 10, 50, 30))
            .is_none());
    }

    #[test]
    fn segment_endpoint_counts_as_hit() {
        let hit = ray(0.0, 0.0, 100.0, 0.0)
            .intersect(&Edge::from_coords(50, 0, 50, 30))
            .unwrap();
        assert_eq!(hit.position, Point2::new(50.0, 0.0));
    }

    #[test]
    fn hits_past_ray_length_are_kept() {
        let hit = ray(0.0, 0.0, 100.0, 0.0)
            .intersect(&Edge::from_coords(150, -10, 150, 10))
            .unwrap();
        assert_eq!(hit.t, 1.5);
    }

    #[test]
    fn parallel_axis_ray_is_skipped() {
        assert!(ray(0.0, 0.0, 100.0, 0.0)
            .intersect(&Edge::from_coords(10, 5, 30, 5))
            .is_none());
    }

    #[test]
    fn matching_component_skips_even_a_real_crossing() {
        // The ray crosses the segment at (10, 0), but its x component
        // equals the segment's, so the guard rejects the pair.
        assert!(ray(0.0, -5.0, 20.0, 10.0)
            .intersect(&Edge::from_coords(0, 0, 20, 0))
            .is_none());
    }

    #[test]
    fn from_angle_scales_to_length() {
        let r = Ray::from_angle(Point2::new(1.0, 1.0), 0.0, 250.0);
        assert_eq!(r.vector, Point2::new(250.0, 0.0));
        let r = Ray::from_angle(Point2::new(0.0, 0.0), std::f64::consts::FRAC_PI_2, 10.0);
        assert!(r.vector.x.abs() < 1e-12);
        assert!((r.vector.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn nearest_hit_picks_smallest_t() {
        let edges = [
            Edge::from_coords(80, -10, 80, 10),
            Edge::from_coords(30, -10, 30, 10),
            Edge::from_coords(-20, -10, -20, 10),
            Edge::from_coords(55, -10, 55, 10),
        ];
        let hit = ray(0.0, 0.0, 100.0, 0.0).nearest_hit(&edges).unwrap();
        assert_eq!(hit.position, Point2::new(30.0, 0.0));
    }

    #[test]
    fn overflowing_hit_parameter_is_a_miss() {
        // 50 / 1e-310 overflows to +inf.
        assert!(ray(0.0, 0.0, 1e-310, 0.0)
            .intersect(&Edge::from_coords(50, -10, 50, 10))
            .is_none());
        assert!(Ray::from_angle(Point2::new(0.0, 0.0), 0.1, 1e-310)
            .nearest_hit(&[Edge::from_coords(50, -10, 50, 10)])
            .is_none());
    }

    #[test]
    fn nearest_hit_none_without_edges() {
        assert!(ray(0.0, 0.0, 1.0, 1.0).nearest_hit(&[]).is_none());
    }
}
