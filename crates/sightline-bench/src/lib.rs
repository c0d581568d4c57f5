//! Benchmark profiles and utilities for sightline.
//!
//! Provides pre-built grids for benchmarks and examples:
//!
//! - [`reference_grid`]: 32x24 screen-sized map with seeded random walls
//! - [`stress_grid`]: 256x192 map for scaling checks
//! - [`interior_origin`]: deterministic open cell centre to query from

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sightline_core::Point2;
use sightline_grid::{BorderBehavior, BoundaryGrid, GridConfig, GridError};
use sightline_test_utils::{apply_mutations, random_mutations};

/// Tile size shared by the profiles, in world units.
pub const TILE_SIZE: u32 = 16;

/// Build a `width x height` sealed grid with `edits` seeded random writes.
pub fn seeded_grid(
    width: u32,
    height: u32,
    edits: usize,
    seed: u64,
) -> Result<BoundaryGrid, GridError> {
    let mut grid = BoundaryGrid::with_config(
        GridConfig::new(width, height)
            .tile_size(TILE_SIZE)
            .border(BorderBehavior::Sealed),
    )?;
    apply_mutations(&mut grid, &random_mutations(seed, edits, width, height));
    Ok(grid)
}

/// Build the reference profile: 32x24 grid (768 cells), roughly a third solid.
pub fn reference_grid(seed: u64) -> Result<BoundaryGrid, GridError> {
    seeded_grid(32, 24, 400, seed)
}

/// Build the stress profile: 256x192 grid (~49K cells).
pub fn stress_grid(seed: u64) -> Result<BoundaryGrid, GridError> {
    seeded_grid(256, 192, 25_000, seed)
}

/// Centre of the first open cell in sweep order, or the grid centre if
/// every cell is solid.
pub fn interior_origin(grid: &BoundaryGrid) -> Point2 {
    let ts = f64::from(grid.tile_size());
    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            if grid.get(x, y) == Ok(false) {
                return Point2::new((f64::from(x) + 0.5) * ts, (f64::from(y) + 0.5) * ts);
            }
        }
    }
    let size = grid.world_size();
    Point2::new(f64::from(size.x) / 2.0, f64::from(size.y) / 2.0)
}
