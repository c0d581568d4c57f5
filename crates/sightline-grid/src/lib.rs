//! Tile occupancy grids and boundary-edge extraction.
//!
//! A [`BoundaryGrid`] stores which cells of a fixed-size tile map are
//! solid and keeps the list of axis-aligned [`Edge`](sightline_core::Edge)s
//! separating solid from open space. Contiguous colinear faces are merged
//! into one maximal edge during a single sweep, so the list stays short
//! enough to feed straight into a visibility query.
//!
//! # Border handling
//!
//! Cells beyond the grid are never stored. [`BorderBehavior`] decides
//! whether they count as open (the grid's extent is outlined) or as wall
//! (border cells expose no outward faces).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod border;
pub mod config;
pub mod grid;
mod sweep;

pub use border::BorderBehavior;
pub use config::GridConfig;
pub use grid::BoundaryGrid;
pub use sightline_core::GridError;
