//! ASCII walkthrough of the edge and visibility pipeline.
//!
//! Demonstrates: build a map → extract edges → query visibility → carve a
//! doorway → query again. Run with `RUST_LOG=debug` to see the library's
//! rebuild and query logging.

use log::info;
use sightline_core::Point2;
use sightline_grid::{BorderBehavior, BoundaryGrid};
use sightline_test_utils::grid_from_ascii;
use sightline_vis::{compute_visibility, VisibilityPoint};

const MAP: [&str; 10] = [
    "################",
    "#......#.......#",
    "#......#.......#",
    "#..##..#..##...#",
    "#..##..........#",
    "#......#.......#",
    "#......#...#...#",
    "#......#...#...#",
    "#......#.......#",
    "################",
];

const TILE: u32 = 8;

/// Draw the map with `@` at the origin and `*` on cells whose wall a
/// visible point touches.
fn render(grid: &BoundaryGrid, origin: Point2, points: &[VisibilityPoint]) -> String {
    let (w, h) = (grid.width() as usize, grid.height() as usize);
    let mut canvas: Vec<Vec<char>> = (0..h)
        .map(|y| {
            (0..w)
                .map(|x| match grid.get(x as i32, y as i32) {
                    Ok(true) => '#',
                    _ => '.',
                })
                .collect()
        })
        .collect();

    for p in points {
        // Step slightly past the hit so it lands in the wall cell.
        let dir = p.position - origin;
        let len = origin.distance(p.position).max(f64::EPSILON);
        let probe = p.position + Point2::new(dir.x / len * 0.5, dir.y / len * 0.5);
        if let Some((cx, cy)) = grid.cell_at(probe.x, probe.y) {
            canvas[cy as usize][cx as usize] = '*';
        }
    }
    if let Some((cx, cy)) = grid.cell_at(origin.x, origin.y) {
        canvas[cy as usize][cx as usize] = '@';
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn query(grid: &BoundaryGrid, origin: Point2) {
    let points = compute_visibility(origin, 4000.0, grid.edges());
    info!(
        "{} edges, {} visible points from {origin}",
        grid.edges().len(),
        points.len()
    );
    println!("{}\n", render(grid, origin, &points));
}

fn main() {
    env_logger::init();

    println!("=== sightline ASCII demo ===\n");

    let mut grid = grid_from_ascii(&MAP, TILE, BorderBehavior::Sealed);
    let origin = Point2::new(2.5 * f64::from(TILE), 6.5 * f64::from(TILE));

    println!("West room, dividing wall intact:");
    query(&grid, origin);

    // Knock a doorway through the dividing wall.
    grid.set(7, 6, false);
    grid.set(7, 7, false);
    println!("After opening a doorway at column 7:");
    query(&grid, origin);

    println!("Edges:");
    for (i, edge) in grid.edges().iter().enumerate() {
        println!("  {i:2}: {edge}");
    }
}
