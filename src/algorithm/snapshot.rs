//! Read-only engine state views handed to drivers and renderers
//!
//! A snapshot is a detached copy: taking one never blocks or mutates the
//! engine, and holding one places no constraint on further stepping.

use crate::algorithm::cellset::CellSet;
use crate::grid::{Grid, Walls};

/// One cell's state as seen by a driver
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellView {
    /// Column within `[0, cols)`
    pub col: usize,
    /// Row within `[0, rows)`
    pub row: usize,
    /// Wall flags, true meaning intact
    pub walls: Walls,
    /// Whether the engine has visited this cell
    pub visited: bool,
}

/// Complete engine state at one instant
///
/// Cells appear in flattened column-major order (`i = col * rows + row`),
/// matching the index space used by `current_index` and `stack`.
#[derive(Clone, Debug)]
pub struct MazeSnapshot {
    /// All cells in flattened-index order
    pub cells: Vec<CellView>,
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// Flattened index of the cell being explored
    pub current_index: usize,
    /// Backtrack stack, oldest entry first
    pub stack: Vec<usize>,
    /// Whether generation has finished
    pub complete: bool,
}

impl MazeSnapshot {
    pub(crate) fn capture(grid: &Grid, current: usize, stack: &[usize], complete: bool) -> Self {
        let cells = grid
            .cells()
            .iter()
            .map(|cell| CellView {
                col: cell.col,
                row: cell.row,
                walls: cell.walls,
                visited: cell.visited,
            })
            .collect();

        Self {
            cells,
            cols: grid.cols(),
            rows: grid.rows(),
            current_index: current,
            stack: stack.to_vec(),
            complete,
        }
    }

    /// The cell at a flattened index, if in range
    pub fn cell(&self, index: usize) -> Option<&CellView> {
        self.cells.get(index)
    }

    /// The cell at a position, if in range
    pub fn cell_at(&self, col: usize, row: usize) -> Option<&CellView> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(col * self.rows + row)
    }

    /// Stack membership as a bitset for O(1) queries while painting
    pub fn stack_members(&self) -> CellSet {
        CellSet::from_indices(&self.stack, self.cells.len())
    }

    /// Number of cells with `visited` set
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }
}
