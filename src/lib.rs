//! Perfect maze generation by randomized Kruskal carving
//!
//! Cells start fully walled in their own component. Visiting cells in a
//! shuffled order, each one merges with a random neighbour from another
//! component and the wall between them is removed, until a single component
//! spans the grid. Wall state can be emitted after every merge for animated,
//! cancellable generation.

#![forbid(unsafe_code)]

/// Maze carving, merging and paced generation
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color hashing and range mapping utilities
pub mod math;
/// Grid model, sizing, wall geometry and level endpoints
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
