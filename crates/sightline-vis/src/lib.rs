//! Visibility polygons from ray casting against boundary edges.
//!
//! Given an origin, a ray length and a list of occluding
//! [`Edge`](sightline_core::Edge)s, [`VisibilityCalculator`] casts three
//! rays towards every edge endpoint (one straight at it and one just to
//! either side), keeps the nearest hit of each ray and returns the hits
//! sorted by angle. Consecutive points bound the visible region, closing
//! from the largest angle back to the smallest.
//!
//! Cost is O(E²) per query for E edges; reuse the edge list between
//! queries unless the occupancy changed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod point;
pub mod ray;

pub use calculator::{compute_visibility, VisibilityCalculator};
pub use config::VisibilityConfig;
pub use error::VisibilityError;
pub use point::VisibilityPoint;
pub use ray::{Hit, Ray};
