//! Disjoint-set merging over grid group tags
//!
//! Unions relabel by scanning the whole grid rather than keeping parent
//! pointers. Each cell starts at most one merge per visitation pass, so the
//! scan cost stays acceptable for interactive grid sizes.

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::grid::{CellPosition, GroupId, MazeGrid};

/// Result of a merge attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Components were joined and the wall between the cells removed
    Merged,
    /// Both cells already shared a group; nothing changed
    AlreadyConnected,
}

/// Hands out previously unused group ids for one generation run
#[derive(Debug, Clone, Default)]
pub struct GroupAllocator {
    next: u32,
}

impl GroupAllocator {
    /// Start allocating from group zero
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Reserve the next group id
    pub const fn allocate(&mut self) -> GroupId {
        let group = GroupId(self.next);
        self.next += 1;
        group
    }

    /// Number of ids handed out so far
    pub const fn allocated(&self) -> u32 {
        self.next
    }
}

/// Join the components of two adjacent cells and open the wall between them
///
/// # Errors
///
/// Returns an error if either cell is outside the grid or the cells are not
/// axis neighbours. No state is changed in that case.
pub fn try_merge(
    grid: &mut MazeGrid,
    allocator: &mut GroupAllocator,
    first: CellPosition,
    second: CellPosition,
) -> Result<MergeOutcome> {
    for position in [first, second] {
        if !grid.contains(position) {
            return Err(AlgorithmError::OutOfBounds {
                position: position.to_array(),
                grid_dimensions: (grid.width(), grid.height()),
            });
        }
    }
    if !first.is_adjacent(second) {
        return Err(AlgorithmError::NonAdjacentCells {
            first: first.to_array(),
            second: second.to_array(),
        });
    }

    match (grid.group(first), grid.group(second)) {
        (None, None) => {
            let group = allocator.allocate();
            grid.set_group(first, group);
            grid.set_group(second, group);
        }
        (None, Some(group)) => grid.set_group(first, group),
        (Some(group), None) => grid.set_group(second, group),
        (Some(kept), Some(absorbed)) if kept == absorbed => {
            return Ok(MergeOutcome::AlreadyConnected);
        }
        (Some(kept), Some(absorbed)) => {
            grid.relabel_group(absorbed, kept);
        }
    }

    remove_wall_between(grid, first, second);
    Ok(MergeOutcome::Merged)
}

// The shared wall belongs to whichever cell has the lower coordinate
fn remove_wall_between(grid: &mut MazeGrid, first: CellPosition, second: CellPosition) {
    if first.x == second.x {
        grid.clear_bottom_wall(if first.y < second.y { first } else { second });
    } else {
        grid.clear_right_wall(if first.x < second.x { first } else { second });
    }
}
