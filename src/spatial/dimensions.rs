//! Grid sizing from the available play area and difficulty

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Grid size and the viewport length of one square cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    /// Cells per row
    pub width: usize,
    /// Cells per column
    pub height: usize,
    /// Side length of a cell in viewport units
    pub cell_length: u32,
}

impl GridDimensions {
    /// Build dimensions directly, bypassing the viewport policy
    ///
    /// # Errors
    ///
    /// Returns an error if any component is zero, a side exceeds
    /// `MAX_GRID_DIMENSION`, or the canvas extent overflows `u32`
    pub fn new(width: usize, height: usize, cell_length: u32) -> Result<Self> {
        if width == 0 || width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter("width", &width, &"out of range"));
        }
        if height == 0 || height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter("height", &height, &"out of range"));
        }
        if cell_length == 0 {
            return Err(invalid_parameter(
                "cell_length",
                &cell_length,
                &"must be at least 1",
            ));
        }
        for side in [width, height] {
            let extent = u32::try_from(side)
                .ok()
                .and_then(|side| side.checked_mul(cell_length));
            if extent.is_none() {
                return Err(invalid_parameter(
                    "cell_length",
                    &cell_length,
                    &format!("canvas side of {side} cells overflows u32"),
                ));
            }
        }
        Ok(Self {
            width,
            height,
            cell_length,
        })
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Viewport extent covered by the grid as `(width, height)`
    pub const fn canvas_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.cell_length,
            self.height as u32 * self.cell_length,
        )
    }
}

/// Size the grid so `difficulty` square cells fill the viewport height
///
/// The cell length is the viewport height divided by the difficulty, and as
/// many whole cells as fit are laid out horizontally.
///
/// # Errors
///
/// Returns an error if the difficulty is zero, the viewport is too short for
/// one-unit cells, or too narrow for a single column
pub fn compute_grid_dimensions(
    viewport_width: u32,
    viewport_height: u32,
    difficulty: u32,
) -> Result<GridDimensions> {
    if difficulty == 0 {
        return Err(invalid_parameter(
            "difficulty",
            &difficulty,
            &"must be at least 1",
        ));
    }

    let cell_length = viewport_height / difficulty;
    if cell_length == 0 {
        return Err(invalid_parameter(
            "viewport_height",
            &viewport_height,
            &format!("too small for {difficulty} rows"),
        ));
    }

    let width = (viewport_width / cell_length) as usize;
    if width == 0 {
        return Err(invalid_parameter(
            "viewport_width",
            &viewport_width,
            &format!("narrower than one {cell_length}-unit cell"),
        ));
    }

    GridDimensions::new(width, difficulty as usize, cell_length)
}
