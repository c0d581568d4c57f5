//! Visibility queries against edges extracted from real grids.

use proptest::prelude::*;
use sightline_core::Point2;
use sightline_grid::{BorderBehavior, BoundaryGrid, GridConfig};
use sightline_test_utils::{
    apply_mutations, assert_sorted_by_angle, grid_from_ascii, on_any_edge, random_mutations,
};
use sightline_vis::{compute_visibility, VisibilityCalculator, VisibilityConfig};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const ROOM: [&str; 5] = ["#####", "#...#", "#...#", "#...#", "#####"];

const PILLAR_ROOM: [&str; 7] = [
    "#######",
    "#.....#",
    "#.....#",
    "#..#..#",
    "#.....#",
    "#.....#",
    "#######",
];

#[test]
fn origin_inside_room_sees_all_walls() {
    let grid = grid_from_ascii(&ROOM, 10, BorderBehavior::Sealed);
    let edges = grid.edges();
    let pts = compute_visibility(Point2::new(22.3, 27.1), 1000.0, edges);

    // Enclosed: nearly every probe ray lands on a wall.
    assert!(pts.len() > 16 && pts.len() <= 6 * edges.len(), "{} points", pts.len());
    assert_sorted_by_angle(&pts);
    for p in &pts {
        assert!(on_any_edge(p.position, edges, 1e-6), "stray point {:?}", p.position);
    }
    // Points wrap all the way around the origin.
    let (first, last) = (pts[0].angle, pts[pts.len() - 1].angle);
    assert!(first < -FRAC_PI_2);
    assert!(last > FRAC_PI_2);
    assert!(last - first > PI, "span {} too narrow", last - first);

    // Each inner corner is seen, at its own bearing.
    let origin = Point2::new(22.3, 27.1);
    for corner in [(10.0, 10.0), (40.0, 10.0), (40.0, 40.0), (10.0, 40.0)] {
        let corner = Point2::new(corner.0, corner.1);
        let seen = pts.iter().any(|p| {
            p.position.distance(corner) < 1e-6 && (p.angle - origin.angle_to(corner)).abs() < 1e-6
        });
        assert!(seen, "corner {corner} not in polygon");
    }
}

#[test]
fn centred_origin_sees_corners_on_the_diagonals() {
    let grid = grid_from_ascii(&ROOM, 10, BorderBehavior::Sealed);
    let pts = compute_visibility(Point2::new(25.0, 25.0), 1000.0, grid.edges());

    assert_sorted_by_angle(&pts);
    let (first, last) = (pts[0].angle, pts[pts.len() - 1].angle);
    assert!(last - first > PI, "span {} too narrow", last - first);

    for bearing in [-3.0 * FRAC_PI_4, -FRAC_PI_4, FRAC_PI_4, 3.0 * FRAC_PI_4] {
        assert!(
            pts.iter().any(|p| (p.angle - bearing).abs() < 1e-9),
            "no point at bearing {bearing}"
        );
    }
}

#[test]
fn pillar_casts_a_shadow() {
    let grid = grid_from_ascii(&PILLAR_ROOM, 10, BorderBehavior::Sealed);
    let edges = grid.edges();
    let origin = Point2::new(15.5, 25.5);
    let pts = compute_visibility(origin, 1000.0, edges);

    assert!(!pts.is_empty());
    assert_sorted_by_angle(&pts);
    for p in &pts {
        assert!(on_any_edge(p.position, edges, 1e-6), "stray point {:?}", p.position);
        // Nothing behind the pillar: no point on the east wall at the
        // pillar's height is visible from the west side.
        let hidden = p.x() > 59.0 && p.y() > 35.0 && p.y() < 45.0;
        assert!(!hidden, "saw {:?} through the pillar", p.position);
    }
    // The pillar's west face is seen.
    assert!(pts
        .iter()
        .any(|p| (p.x() - 30.0).abs() < 1e-9 && p.y() > 30.0 && p.y() < 40.0));
}

#[test]
fn lone_pillar_seen_from_outside() {
    let grid = grid_from_ascii(&[".....", "..#..", "....."], 10, BorderBehavior::Outline);
    let edges = grid.edges();
    assert_eq!(edges.len(), 4);
    let pts = compute_visibility(Point2::new(7.5, 12.5), 1000.0, edges);

    assert!(!pts.is_empty() && pts.len() <= 24);
    assert_sorted_by_angle(&pts);
    // Only the west face [x = 20] faces the origin.
    for p in &pts {
        assert!((p.x() - 20.0).abs() < 1e-9, "{:?}", p.position);
        assert!(p.y() >= 10.0 - 1e-9 && p.y() <= 20.0 + 1e-9);
    }
}

#[test]
fn empty_grid_sees_nothing() {
    let grid = BoundaryGrid::with_config(GridConfig::new(8, 8).tile_size(10)).unwrap();
    assert!(compute_visibility(Point2::new(40.0, 40.0), 500.0, grid.edges()).is_empty());
}

#[test]
fn wider_offset_still_sorted() {
    let grid = grid_from_ascii(&PILLAR_ROOM, 10, BorderBehavior::Sealed);
    let calc =
        VisibilityCalculator::with_config(VisibilityConfig::new().angular_offset(1e-3)).unwrap();
    let pts = calc.compute_visibility(Point2::new(45.5, 52.5), 1000.0, grid.edges());
    assert!(!pts.is_empty());
    assert_sorted_by_angle(&pts);
}

proptest! {
    #[test]
    fn random_maps_stay_bounded_and_sorted(
        seed in any::<u64>(),
        edits in 0usize..120,
        ox in 0.5f64..159.5,
        oy in 0.5f64..119.5,
    ) {
        let mut grid = BoundaryGrid::with_config(
            GridConfig::new(16, 12).tile_size(10).border(BorderBehavior::Sealed),
        )
        .unwrap();
        apply_mutations(&mut grid, &random_mutations(seed, edits, 16, 12));

        let edges = grid.edges();
        let pts = compute_visibility(Point2::new(ox, oy), 2000.0, edges);
        prop_assert!(pts.len() <= 6 * edges.len());
        prop_assert!(pts.windows(2).all(|w| w[0].angle <= w[1].angle));
        prop_assert!(pts.iter().all(|p| p.position.is_finite()));
    }
}
