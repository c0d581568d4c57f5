//! Sightline: line-of-sight for 2D tile maps.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the sightline sub-crates. A [`grid::BoundaryGrid`] tracks which tiles are
//! solid and keeps the merged boundary edges between solid and open space;
//! [`vis::compute_visibility`] casts rays against those edges to produce a
//! visibility polygon.
//!
//! # Quick start
//!
//! ```rust
//! use sightline::prelude::*;
//!
//! // A 6x4 map of 16-unit tiles with a wall segment in the middle.
//! let mut grid = BoundaryGrid::with_config(
//!     GridConfig::new(6, 4).tile_size(16).border(BorderBehavior::Sealed),
//! )
//! .unwrap();
//! grid.set(3, 1, true);
//! grid.set(3, 2, true);
//!
//! let origin = Point2::new(20.5, 30.5);
//! let points = compute_visibility(origin, 1000.0, grid.edges());
//!
//! assert!(!points.is_empty());
//! assert!(points.windows(2).all(|w| w[0].angle <= w[1].angle));
//! // Every visible point sits on the wall's west face.
//! assert!(points.iter().all(|p| (p.x() - 48.0).abs() < 1e-9));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sightline-core` | Points, edges, directions, grid errors |
//! | [`grid`] | `sightline-grid` | Occupancy grid and boundary-edge extraction |
//! | [`vis`] | `sightline-vis` | Ray casting and visibility polygons |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core geometry types and errors (`sightline-core`).
pub use sightline_core as types;

/// Occupancy grid and boundary edges (`sightline-grid`).
///
/// [`grid::BoundaryGrid`] is the entry point; [`grid::BorderBehavior`]
/// decides how the grid's outer rim is treated.
pub use sightline_grid as grid;

/// Visibility polygons (`sightline-vis`).
///
/// [`vis::compute_visibility`] for one-off queries,
/// [`vis::VisibilityCalculator`] to tune the probe offset or reuse an
/// output buffer.
pub use sightline_vis as vis;

/// Common imports for typical sightline usage.
///
/// ```rust
/// use sightline::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use sightline_core::{Direction, Edge, GridError, GridPoint, Point2};

    // Grid
    pub use sightline_grid::{BorderBehavior, BoundaryGrid, GridConfig};

    // Visibility
    pub use sightline_vis::{
        compute_visibility, VisibilityCalculator, VisibilityConfig, VisibilityError,
        VisibilityPoint,
    };
}
