//! Start and destination placement for a generated level
//!
//! The start lands in the top-left quadrant; the destination lands on the
//! far bottom or right edge so the two are always well separated.

use rand::Rng;

use crate::algorithm::executor::RandomSelector;
use crate::spatial::dimensions::GridDimensions;
use crate::spatial::grid::CellPosition;

/// Random cell in the top-left quadrant of the grid
pub fn random_start_point<R: Rng>(
    dimensions: &GridDimensions,
    random_selector: &mut RandomSelector<R>,
) -> CellPosition {
    let span_x = dimensions.width.saturating_sub(1) as f64 / 2.0;
    let span_y = dimensions.height.saturating_sub(1) as f64 / 2.0;
    CellPosition::new(
        (random_selector.unit() * span_x).floor() as usize,
        (random_selector.unit() * span_y).floor() as usize,
    )
}

/// Random cell on the bottom row's right half or the right column's lower half
pub fn random_end_point<R: Rng>(
    dimensions: &GridDimensions,
    random_selector: &mut RandomSelector<R>,
) -> CellPosition {
    let last_x = dimensions.width - 1;
    let last_y = dimensions.height - 1;

    if random_selector.unit() < 0.5 {
        let x = far_half(random_selector.unit(), dimensions.width);
        CellPosition::new(x.min(last_x), last_y)
    } else {
        let y = far_half(random_selector.unit(), dimensions.height);
        CellPosition::new(last_x, y.min(last_y))
    }
}

/// Centre of a cell in viewport units
pub fn cell_center(position: CellPosition, cell_length: u32) -> (f64, f64) {
    let length = f64::from(cell_length);
    (
        position.x as f64 * length + length / 2.0,
        position.y as f64 * length + length / 2.0,
    )
}

fn far_half(sample: f64, extent: usize) -> usize {
    ((sample * 0.5 + 0.5) * extent as f64).floor() as usize
}
