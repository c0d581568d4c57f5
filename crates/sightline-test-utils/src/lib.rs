//! Test fixtures and helpers for sightline development.
//!
//! Provides ASCII grid construction ([`grid_from_ascii`]), seeded random
//! occupancy edits ([`random_mutations`]) and assertions shared by the
//! grid and visibility integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    apply_mutations, assert_sorted_by_angle, grid_from_ascii, on_any_edge, random_mutations,
    Mutation,
};
