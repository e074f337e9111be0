//! Travel time and travel distance matrices.
//!
//! Both matrices share one node indexing: depots first, then stops.

mod matrix;

pub use matrix::{TravelMatrix, SYMMETRY_TOLERANCE};
