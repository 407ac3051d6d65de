//! Recursive backtracker engine: randomized depth-first search with an
//! explicit backtrack stack
//!
//! One call to [`MazeGenerator::step`] performs one algorithmic step. The
//! engine knows nothing about rendering or timing; a driver invokes `step` on
//! whatever cadence it chooses and reads state through
//! [`MazeGenerator::snapshot`]. Correctness is cadence-independent.

use crate::algorithm::snapshot::MazeSnapshot;
use crate::grid::Grid;
use crate::io::error::Result;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Maze generation engine over a fixed-size grid
///
/// Carves passages by depth-first traversal: from the current cell, pick a
/// uniformly random unvisited neighbor, knock down the wall pair between
/// them and advance; when no unvisited neighbor exists, backtrack by popping
/// the stack. The removed-wall adjacencies among visited cells form a tree
/// at every instant, so the finished maze is perfect (exactly one path
/// between any two cells).
///
/// The algorithm's long-corridor bias is characteristic of the recursive
/// backtracker and is preserved deliberately; this is not a uniform
/// spanning-tree sampler.
pub struct MazeGenerator {
    grid: Grid,
    current: usize,
    stack: Vec<usize>,
    visited_count: usize,
    complete: bool,
    steps_taken: usize,
    rng: StdRng,
}

impl MazeGenerator {
    /// Create an engine over a fully walled grid, starting at index 0
    ///
    /// A seeded engine is fully deterministic: two runs with the same
    /// dimensions and seed produce identical wall configurations and
    /// identical current/stack trajectories. Without a seed the RNG is
    /// drawn from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidDimensions`] if either dimension
    /// is zero.
    pub fn new(cols: usize, rows: usize, seed: Option<u64>) -> Result<Self> {
        let grid = Grid::new(cols, rows)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            grid,
            current: 0,
            stack: Vec::with_capacity(grid_stack_capacity(cols, rows)),
            visited_count: 0,
            complete: false,
            steps_taken: 0,
            rng,
        })
    }

    /// Perform one algorithmic step
    ///
    /// Marks the current cell visited, then either advances into a random
    /// unvisited neighbor (carving the wall between them) or backtracks one
    /// stack entry. When neither is possible the run is complete; further
    /// calls are no-ops and never mutate state.
    pub fn step(&mut self) {
        if self.complete {
            return;
        }
        self.steps_taken += 1;

        if self.grid.mark_visited(self.current) {
            self.visited_count += 1;
        }

        let neighbors = self.grid.unvisited_neighbors(self.current);
        if neighbors.is_empty() {
            match self.stack.pop() {
                Some(previous) => self.current = previous,
                None => {
                    debug_assert_eq!(
                        self.visited_count,
                        self.grid.cell_count(),
                        "stack emptied before every cell was visited"
                    );
                    self.complete = true;
                }
            }
            return;
        }

        // Uniform tie-break; any unvisited neighbor is equally valid
        let choice = self.rng.random_range(0..neighbors.len());
        let Some(&next) = neighbors.get(choice) else {
            return;
        };

        self.stack.push(self.current);
        self.grid.remove_wall_between(self.current, next);
        self.current = next;
    }

    /// Run `step` until the maze is complete
    ///
    /// Batch cadence for callers that do not animate; takes exactly
    /// [`Self::expected_steps`] calls from a fresh engine.
    pub fn generate(&mut self) {
        while !self.complete {
            self.step();
        }
    }

    /// Whether every cell is visited and the stack has emptied
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Detached copy of the full engine state
    pub fn snapshot(&self) -> MazeSnapshot {
        MazeSnapshot::capture(&self.grid, self.current, &self.stack, self.complete)
    }

    /// The grid being carved
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Flattened index of the cell currently being explored
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Backtrack stack contents, oldest entry first
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    /// Steps performed so far; stops advancing once complete
    pub const fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Exact number of steps a full run takes for an n-cell grid
    ///
    /// Every cell except the start is entered once (n - 1 advances), every
    /// stack entry is popped once (n - 1 backtracks), and one final step
    /// observes the empty stack: `2n - 1`.
    pub const fn expected_steps(cols: usize, rows: usize) -> usize {
        2 * cols * rows - 1
    }
}

// Depth can reach every cell on a single winding corridor
const fn grid_stack_capacity(cols: usize, rows: usize) -> usize {
    cols * rows
}
