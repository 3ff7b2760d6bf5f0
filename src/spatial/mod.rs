//! Spatial data structures for the maze
//!
//! This module contains spatial-related functionality including:
//! - The cell grid with group tags and wall flags
//! - Grid sizing from a viewport
//! - Wall geometry and the renderer contract
//! - Start and destination placement

/// Grid sizing from viewport and difficulty
pub mod dimensions;
/// Start and destination placement
pub mod endpoints;
/// Cell grid state
pub mod grid;
/// Wall geometry and renderer contract
pub mod walls;

pub use grid::{CellPosition, MazeGrid};
