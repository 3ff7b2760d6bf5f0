//! Wall geometry and the renderer contract
//!
//! A renderer receives whole frames: every wall still standing, expressed as
//! centre-positioned rectangles in viewport units. Each cell contributes at
//! most its bottom and right walls, so the outer bottom and right edges are
//! drawn by the cells along them.

use crate::io::configuration::{MAX_WALL_THICKNESS, MIN_WALL_THICKNESS, WALL_THICKNESS_DIVISOR};
use crate::spatial::grid::{CellPosition, MazeGrid};

/// Which side of its cell a wall closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallOrientation {
    /// Bottom wall, spanning the cell horizontally
    Horizontal,
    /// Right wall, spanning the cell vertically
    Vertical,
}

/// A static rectangular obstacle for one wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Cell that owns the wall
    pub cell: CellPosition,
    /// Side of the cell the wall closes
    pub orientation: WallOrientation,
    /// Centre x in viewport units
    pub x: f64,
    /// Centre y in viewport units
    pub y: f64,
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
}

/// One emission of wall state
#[derive(Debug, Clone, PartialEq)]
pub struct WallFrame {
    /// Walls standing at emission time
    pub segments: Vec<WallSegment>,
    /// Cosmetic color seed fixed for the whole generation run
    pub color_seed: u64,
    /// Merges performed so far in this run
    pub merges: usize,
    /// Whether this frame carries the completed maze
    pub is_final: bool,
}

/// Consumer of wall frames, e.g. a physics world or an image encoder
pub trait WallRenderer {
    /// Replace the previously rendered walls with `frame`
    fn emit_walls(&mut self, frame: &WallFrame);
}

impl<F> WallRenderer for F
where
    F: FnMut(&WallFrame),
{
    fn emit_walls(&mut self, frame: &WallFrame) {
        self(frame);
    }
}

/// Wall thickness for a given cell length
///
/// Thin cells would produce zero or negative thickness, so the result is
/// clamped to `MIN_WALL_THICKNESS`.
pub fn wall_thickness(cell_length: u32) -> f64 {
    (f64::from(cell_length) / WALL_THICKNESS_DIVISOR - 1.0)
        .clamp(MIN_WALL_THICKNESS, MAX_WALL_THICKNESS)
}

/// Convert the grid's standing walls into obstacle rectangles
///
/// Segments are produced column by column, bottom wall before right wall
/// for each cell.
pub fn wall_segments(grid: &MazeGrid, cell_length: u32) -> Vec<WallSegment> {
    let length = f64::from(cell_length);
    let thickness = wall_thickness(cell_length);
    let mut segments = Vec::with_capacity(grid.wall_count());

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let cell = CellPosition::new(x, y);
            let (fx, fy) = (x as f64, y as f64);

            if grid.has_bottom_wall(cell) {
                segments.push(WallSegment {
                    cell,
                    orientation: WallOrientation::Horizontal,
                    x: fx * length + length / 2.0,
                    y: (fy + 1.0) * length,
                    width: length + thickness,
                    height: thickness,
                });
            }
            if grid.has_right_wall(cell) {
                segments.push(WallSegment {
                    cell,
                    orientation: WallOrientation::Vertical,
                    x: (fx + 1.0) * length,
                    y: fy * length + length / 2.0,
                    width: thickness,
                    height: length + thickness,
                });
            }
        }
    }

    segments
}
