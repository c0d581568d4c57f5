//! Reusable grid and visibility fixtures.
//!
//! - [`grid_from_ascii`]: build a grid from rows of `#` (solid) and `.` (open).
//! - [`random_mutations`]: deterministic occupancy edits from a seed.
//! - [`assert_sorted_by_angle`] / [`on_any_edge`]: visibility output checks.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sightline_core::{Edge, Point2};
use sightline_grid::{BorderBehavior, BoundaryGrid, GridConfig};
use sightline_vis::VisibilityPoint;

/// Build a grid from ASCII rows, north row first.
///
/// `#` marks an occupied cell; any other character is open. Rows shorter
/// than the longest row are padded with open cells.
///
/// # Panics
///
/// Panics if `rows` is empty or every row is empty.
pub fn grid_from_ascii(rows: &[&str], tile_size: u32, border: BorderBehavior) -> BoundaryGrid {
    let height = rows.len() as u32;
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
    let mut grid = BoundaryGrid::with_config(
        GridConfig::new(width, height)
            .tile_size(tile_size)
            .border(border),
    )
    .expect("ascii fixture must describe a non-empty grid");

    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '#' {
                grid.set(x as i32, y as i32, true);
            }
        }
    }
    grid
}

/// One occupancy write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mutation {
    pub x: i32,
    pub y: i32,
    pub value: bool,
}

/// Generate `count` random in-range writes for a `width x height` grid.
///
/// The same seed always yields the same sequence.
pub fn random_mutations(seed: u64, count: usize, width: u32, height: u32) -> Vec<Mutation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Mutation {
            x: rng.random_range(0..width) as i32,
            y: rng.random_range(0..height) as i32,
            value: rng.random_bool(0.5),
        })
        .collect()
}

/// Apply mutations in order through [`BoundaryGrid::set`].
pub fn apply_mutations(grid: &mut BoundaryGrid, mutations: &[Mutation]) {
    for m in mutations {
        grid.set(m.x, m.y, m.value);
    }
}

/// Assert that `points` is sorted ascending by angle.
pub fn assert_sorted_by_angle(points: &[VisibilityPoint]) {
    for (i, w) in points.windows(2).enumerate() {
        assert!(
            w[0].angle <= w[1].angle,
            "points {i} and {} out of order: {} > {}",
            i + 1,
            w[0].angle,
            w[1].angle
        );
    }
}

/// Whether `point` lies within `tol` of any edge.
pub fn on_any_edge(point: Point2, edges: &[Edge], tol: f64) -> bool {
    edges.iter().any(|e| {
        let (s, t) = (e.start.to_f64(), e.end.to_f64());
        let (lo_x, hi_x) = (s.x.min(t.x) - tol, s.x.max(t.x) + tol);
        let (lo_y, hi_y) = (s.y.min(t.y) - tol, s.y.max(t.y) + tol);
        // Axis-aligned, so the padded bounding box is the tolerance band.
        point.x >= lo_x && point.x <= hi_x && point.y >= lo_y && point.y <= hi_y
    })
}
