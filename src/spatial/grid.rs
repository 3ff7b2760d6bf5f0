//! Maze grid state: per-cell connectivity groups and wall flags
//!
//! Groups live in a row-major `Array2` indexed `[y, x]`. The two wall kinds
//! are kept in separate bitsets because every cell starts with both walls
//! present and a wall is only ever cleared, never restored.

use bitvec::{bitvec, vec::BitVec};
use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};

/// Grid coordinate of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    /// Column, growing rightwards
    pub x: usize,
    /// Row, growing downwards
    pub y: usize,
}

impl CellPosition {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Coordinates as an `[x, y]` pair
    pub const fn to_array(self) -> [usize; 2] {
        [self.x, self.y]
    }

    /// Whether the two cells share a wall
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

/// Connectivity class tag; cells with equal ids are reachable from each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

/// Snapshot of one cell's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Connectivity group, `None` while the cell is an unvisited singleton
    pub group: Option<GroupId>,
    /// Wall between this cell and the one below it
    pub has_bottom_wall: bool,
    /// Wall between this cell and the one to its right
    pub has_right_wall: bool,
}

/// Rectangular maze grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    groups: Array2<Option<GroupId>>,
    bottom_walls: BitVec,
    right_walls: BitVec,
}

impl MazeGrid {
    /// Allocate a grid with every cell ungrouped and fully walled
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let cell_count = width * height;
        Ok(Self {
            width,
            height,
            groups: Array2::from_elem((height, width), None),
            bottom_walls: bitvec![1; cell_count],
            right_walls: bitvec![1; cell_count],
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Test whether signed coordinates fall inside the grid
    pub const fn is_in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Test whether a position falls inside the grid
    pub const fn contains(&self, position: CellPosition) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Snapshot of the cell at `position`, `None` when out of bounds
    pub fn cell(&self, position: CellPosition) -> Option<Cell> {
        let index = self.linear_index(position)?;
        Some(Cell {
            group: self.group(position),
            has_bottom_wall: bit_is_set(&self.bottom_walls, index),
            has_right_wall: bit_is_set(&self.right_walls, index),
        })
    }

    /// Group of the cell at `position`
    ///
    /// Out-of-bounds positions report `None` just like unvisited cells.
    pub fn group(&self, position: CellPosition) -> Option<GroupId> {
        self.groups
            .get([position.y, position.x])
            .copied()
            .unwrap_or(None)
    }

    /// Whether the cell below `position` is walled off
    pub fn has_bottom_wall(&self, position: CellPosition) -> bool {
        self.linear_index(position)
            .is_some_and(|index| bit_is_set(&self.bottom_walls, index))
    }

    /// Whether the cell to the right of `position` is walled off
    pub fn has_right_wall(&self, position: CellPosition) -> bool {
        self.linear_index(position)
            .is_some_and(|index| bit_is_set(&self.right_walls, index))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| CellPosition::new(x, y)))
    }

    /// In-bounds axis neighbours in left, right, up, down order
    pub fn neighbors(&self, position: CellPosition) -> Vec<CellPosition> {
        let x = position.x as isize;
        let y = position.y as isize;
        [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
            .into_iter()
            .filter(|&(nx, ny)| self.is_in_bounds(nx, ny))
            .map(|(nx, ny)| CellPosition::new(nx as usize, ny as usize))
            .collect()
    }

    /// Number of wall flags still set across both wall kinds
    pub fn wall_count(&self) -> usize {
        self.bottom_walls.count_ones() + self.right_walls.count_ones()
    }

    /// Distinct non-null groups present in the grid, sorted
    pub fn distinct_groups(&self) -> Vec<GroupId> {
        let mut groups: Vec<GroupId> = self.groups.iter().filter_map(|group| *group).collect();
        groups.sort_unstable();
        groups.dedup();
        groups
    }

    /// Whether every cell belongs to the same component
    ///
    /// A single-cell grid is connected without ever receiving a group.
    pub fn is_single_component(&self) -> bool {
        if self.cell_count() == 1 {
            return true;
        }
        let first = self.groups.iter().next().copied().flatten();
        first.is_some() && self.groups.iter().all(|group| *group == first)
    }

    pub(crate) fn set_group(&mut self, position: CellPosition, group: GroupId) {
        if let Some(slot) = self.groups.get_mut([position.y, position.x]) {
            *slot = Some(group);
        }
    }

    /// Move every cell tagged `from` into `to`, returning how many changed
    pub(crate) fn relabel_group(&mut self, from: GroupId, to: GroupId) -> usize {
        let mut relabelled = 0;
        for slot in &mut self.groups {
            if *slot == Some(from) {
                *slot = Some(to);
                relabelled += 1;
            }
        }
        relabelled
    }

    pub(crate) fn clear_bottom_wall(&mut self, position: CellPosition) {
        if let Some(index) = self.linear_index(position) {
            self.bottom_walls.set(index, false);
        }
    }

    pub(crate) fn clear_right_wall(&mut self, position: CellPosition) {
        if let Some(index) = self.linear_index(position) {
            self.right_walls.set(index, false);
        }
    }

    const fn linear_index(&self, position: CellPosition) -> Option<usize> {
        if self.contains(position) {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(AlgorithmError::InvalidParameter {
            parameter,
            value: value.to_string(),
            reason: format!("must not exceed {MAX_GRID_DIMENSION}"),
        });
    }
    Ok(())
}

fn bit_is_set(bits: &BitVec, index: usize) -> bool {
    bits.get(index).as_deref() == Some(&true)
}
