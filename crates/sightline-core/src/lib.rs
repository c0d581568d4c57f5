//! Core types for the sightline visibility kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! geometry shared by the grid and visibility crates: integer world
//! points, floating-point points, boundary [`Edge`]s with their arena
//! [`EdgeId`]s, cardinal [`Direction`]s, and the [`GridError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod edge;
pub mod error;
pub mod geom;
pub mod id;

pub use direction::Direction;
pub use edge::Edge;
pub use error::GridError;
pub use geom::{GridPoint, Point2};
pub use id::EdgeId;
