use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, instrument};

use crate::algorithm::merge::{GroupAllocator, MergeOutcome, try_merge};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::dimensions::GridDimensions;
use crate::spatial::grid::{CellPosition, MazeGrid};
use crate::spatial::walls::{WallFrame, WallRenderer, wall_segments};

/// Injectable random source for every stochastic choice in a run
///
/// Wraps any `Rng`, so tests can pin a seeded generator and hosts can pass
/// their own.
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Use an existing generator as the random source
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform Fisher–Yates shuffle in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform 64-bit value, used for per-run seeds
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random::<u64>()
    }
}

/// When wall frames are handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Only the completed maze is emitted
    FinalOnly,
    /// A frame follows every successful merge, then the completed maze
    EveryMerge,
}

/// What a single visitation step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The visited cell merged with a neighbour
    Merged {
        /// Cell being visited
        cell: CellPosition,
        /// Neighbour it was joined to
        neighbor: CellPosition,
    },
    /// The visited cell had no neighbour outside its own group
    Unchanged {
        /// Cell being visited
        cell: CellPosition,
    },
    /// Every cell is in one component; further steps do nothing
    Finished,
}

/// Randomized Kruskal maze carver
///
/// Visits cells in a shuffled order and lets each one merge with the first
/// neighbour, in shuffled order, that lies outside its group. A single pass
/// can leave separate components behind, so passes repeat with a fresh
/// order until one component remains.
pub struct KruskalCarver<R = StdRng> {
    /// Grid being carved
    grid: MazeGrid,
    /// Sizing the grid was built from
    dimensions: GridDimensions,
    /// Random source for visitation and neighbour order
    random_selector: RandomSelector<R>,
    /// Group id source for this run
    allocator: GroupAllocator,
    /// Visitation order of the current pass
    visit_order: Vec<CellPosition>,
    /// Next index into `visit_order`
    cursor: usize,
    /// Zero-based visitation pass
    pass: usize,
    /// Number of disjoint components left; ungrouped cells count as one each
    components: usize,
    /// Successful merges so far
    merges: usize,
    /// Cosmetic seed carried by every frame of this run
    color_seed: u64,
}

impl<R: Rng> KruskalCarver<R> {
    /// Allocate a fresh grid and draw the first visitation order
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be allocated for `dimensions`
    pub fn new(dimensions: GridDimensions, mut random_selector: RandomSelector<R>) -> Result<Self> {
        let grid = MazeGrid::new(dimensions.width, dimensions.height)?;
        let color_seed = random_selector.next_seed();

        let mut visit_order: Vec<CellPosition> = grid.positions().collect();
        random_selector.shuffle(&mut visit_order);

        Ok(Self::from_parts(
            grid,
            dimensions,
            random_selector,
            visit_order,
            color_seed,
        ))
    }

    /// Start a run whose first pass visits cells in `visit_order`
    ///
    /// Later passes and every neighbour order still come from
    /// `random_selector`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be allocated or `visit_order` is
    /// not a permutation of the grid's cells
    pub fn with_visit_order(
        dimensions: GridDimensions,
        mut random_selector: RandomSelector<R>,
        visit_order: Vec<CellPosition>,
    ) -> Result<Self> {
        let grid = MazeGrid::new(dimensions.width, dimensions.height)?;

        let mut given = visit_order.clone();
        given.sort_unstable();
        let mut expected: Vec<CellPosition> = grid.positions().collect();
        expected.sort_unstable();
        if given != expected {
            return Err(invalid_parameter(
                "visit_order",
                &visit_order.len(),
                &"must list every cell exactly once",
            ));
        }

        let color_seed = random_selector.next_seed();
        Ok(Self::from_parts(
            grid,
            dimensions,
            random_selector,
            visit_order,
            color_seed,
        ))
    }

    fn from_parts(
        grid: MazeGrid,
        dimensions: GridDimensions,
        random_selector: RandomSelector<R>,
        visit_order: Vec<CellPosition>,
        color_seed: u64,
    ) -> Self {
        info!(
            width = dimensions.width,
            height = dimensions.height,
            cell_length = dimensions.cell_length,
            "Grid size: {} x {}",
            dimensions.width,
            dimensions.height
        );

        Self {
            components: grid.cell_count(),
            grid,
            dimensions,
            random_selector,
            allocator: GroupAllocator::new(),
            visit_order,
            cursor: 0,
            pass: 0,
            merges: 0,
            color_seed,
        }
    }

    /// Visit the next cell and attempt at most one merge
    ///
    /// # Errors
    ///
    /// Propagates merge failures, which only occur if the neighbour
    /// enumeration produced a non-adjacent or out-of-bounds cell
    pub fn execute_step(&mut self) -> Result<StepOutcome> {
        if self.is_complete() {
            return Ok(StepOutcome::Finished);
        }

        if self.cursor >= self.visit_order.len() {
            self.start_next_pass();
        }

        let Some(&cell) = self.visit_order.get(self.cursor) else {
            return Ok(StepOutcome::Finished);
        };
        self.cursor += 1;

        let mut neighbors = self.grid.neighbors(cell);
        self.random_selector.shuffle(&mut neighbors);

        // Captured once; the cell's own group cannot change before it merges
        let own_group = self.grid.group(cell);

        for neighbor in neighbors {
            if own_group.is_some() && own_group == self.grid.group(neighbor) {
                continue;
            }

            return match try_merge(&mut self.grid, &mut self.allocator, cell, neighbor)? {
                MergeOutcome::Merged => {
                    self.components -= 1;
                    self.merges += 1;
                    Ok(StepOutcome::Merged { cell, neighbor })
                }
                MergeOutcome::AlreadyConnected => Ok(StepOutcome::Unchanged { cell }),
            };
        }

        Ok(StepOutcome::Unchanged { cell })
    }

    /// Carve until one component remains, emitting frames to `renderer`
    ///
    /// # Errors
    ///
    /// Propagates failures from `execute_step`
    #[instrument(skip_all)]
    pub fn run_to_completion<W>(&mut self, renderer: &mut W, emission: Emission) -> Result<()>
    where
        W: WallRenderer + ?Sized,
    {
        loop {
            match self.execute_step()? {
                StepOutcome::Merged { .. } if emission == Emission::EveryMerge => {
                    renderer.emit_walls(&self.frame(false));
                }
                StepOutcome::Merged { .. } | StepOutcome::Unchanged { .. } => {}
                StepOutcome::Finished => break,
            }
        }

        renderer.emit_walls(&self.frame(true));
        debug!(merges = self.merges, passes = self.pass + 1, "Maze complete");
        Ok(())
    }

    /// Snapshot the current walls as a renderer frame
    pub fn frame(&self, is_final: bool) -> WallFrame {
        WallFrame {
            segments: wall_segments(&self.grid, self.dimensions.cell_length),
            color_seed: self.color_seed,
            merges: self.merges,
            is_final,
        }
    }

    /// Whether every cell belongs to one component
    pub const fn is_complete(&self) -> bool {
        self.components <= 1
    }

    /// Grid in its current state
    pub const fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Give up ownership of the carved grid
    pub fn into_grid(self) -> MazeGrid {
        self.grid
    }

    /// Sizing this run was created with
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Successful merges so far; equals the number of walls removed
    pub const fn merge_count(&self) -> usize {
        self.merges
    }

    /// Zero-based index of the current visitation pass
    pub const fn pass(&self) -> usize {
        self.pass
    }

    /// Components left, counting each ungrouped cell separately
    pub const fn components(&self) -> usize {
        self.components
    }

    /// Cosmetic seed fixed at the start of this run
    pub const fn color_seed(&self) -> u64 {
        self.color_seed
    }

    /// Merges a finished run performs: one fewer than the cell count
    pub const fn expected_merges(&self) -> usize {
        self.dimensions.cell_count() - 1
    }

    /// Mutable access to the random source, e.g. for endpoint placement
    pub const fn random_selector(&mut self) -> &mut RandomSelector<R> {
        &mut self.random_selector
    }

    fn start_next_pass(&mut self) {
        self.pass += 1;
        self.cursor = 0;
        self.random_selector.shuffle(&mut self.visit_order);
        debug!(
            pass = self.pass,
            components = self.components,
            "Starting another visitation pass"
        );
    }
}

/// Generate a complete maze in one call
///
/// # Errors
///
/// Returns an error if the grid cannot be allocated or carving fails
pub fn generate_maze<R, W>(
    dimensions: GridDimensions,
    random_selector: RandomSelector<R>,
    renderer: &mut W,
    emission: Emission,
) -> Result<MazeGrid>
where
    R: Rng,
    W: WallRenderer + ?Sized,
{
    let mut carver = KruskalCarver::new(dimensions, random_selector)?;
    carver.run_to_completion(renderer, emission)?;
    Ok(carver.into_grid())
}
