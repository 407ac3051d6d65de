//! Cell arena with flattened column-major storage and index-derived adjacency
//!
//! Cells live in a single `Vec` addressed by `i = col * rows + row`. Adjacency
//! is computed from that mapping alone; no edge structure is stored. The grid
//! is created once with fixed dimensions and mutated in place by the engine.

use crate::grid::cell::{Cell, Direction};
use crate::io::error::{MazeError, Result};

/// Arena of maze cells with neighbor adjacency over flattened indices
///
/// The grid owns every cell exclusively. Wall removal and visit marking go
/// through its methods so the engine remains the sole mutator.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// Create a fully walled, unvisited grid
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is zero.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(MazeError::InvalidDimensions { cols, rows });
        }

        let mut cells = Vec::with_capacity(cols * rows);
        for col in 0..cols {
            for row in 0..rows {
                cells.push(Cell::new(col, row));
            }
        }

        Ok(Self { cells, cols, rows })
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Flattened index of a position, column-major
    pub const fn index_of(&self, col: usize, row: usize) -> usize {
        col * self.rows + row
    }

    /// Position of a flattened index, inverse of [`Self::index_of`]
    pub const fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.rows, index % self.rows)
    }

    /// All cells in flattened-index order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at a flattened index, if in range
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Flattened index of the adjacent cell in the given direction
    ///
    /// Returns `None` when the cell sits on that edge of the grid. Boundary
    /// checks are derived from the `(col, row)` mapping rather than offset
    /// arithmetic on the flat index, so the relation is symmetric:
    /// `neighbor_index(neighbor_index(i, d)?, d.opposite()) == Some(i)`.
    pub const fn neighbor_index(&self, index: usize, direction: Direction) -> Option<usize> {
        if index >= self.cols * self.rows {
            return None;
        }
        let (col, row) = self.position_of(index);

        match direction {
            Direction::Top => {
                if row == 0 {
                    None
                } else {
                    Some(self.index_of(col, row - 1))
                }
            }
            Direction::Right => {
                if col + 1 == self.cols {
                    None
                } else {
                    Some(self.index_of(col + 1, row))
                }
            }
            Direction::Bottom => {
                if row + 1 == self.rows {
                    None
                } else {
                    Some(self.index_of(col, row + 1))
                }
            }
            Direction::Left => {
                if col == 0 {
                    None
                } else {
                    Some(self.index_of(col - 1, row))
                }
            }
        }
    }

    /// In-range neighbors whose `visited` flag is still false
    ///
    /// At most four entries, in [`Direction::ALL`] order.
    pub fn unvisited_neighbors(&self, index: usize) -> Vec<usize> {
        let mut neighbors = Vec::with_capacity(4);
        for direction in Direction::ALL {
            if let Some(neighbor) = self.neighbor_index(index, direction) {
                if self.cells.get(neighbor).is_some_and(|cell| !cell.visited) {
                    neighbors.push(neighbor);
                }
            }
        }
        neighbors
    }

    /// Mark a cell visited, returning whether it was previously unvisited
    pub fn mark_visited(&mut self, index: usize) -> bool {
        self.cells.get_mut(index).is_some_and(|cell| {
            let newly = !cell.visited;
            cell.visited = true;
            newly
        })
    }

    /// Clear the wall pair between two adjacent cells
    ///
    /// The pair must be one of the four neighbor relations. A non-adjacent
    /// pair indicates an engine bug: debug builds assert, release builds
    /// leave both cells untouched.
    pub fn remove_wall_between(&mut self, a: usize, b: usize) {
        let direction = Direction::ALL
            .into_iter()
            .find(|&d| self.neighbor_index(a, d) == Some(b));
        debug_assert!(
            direction.is_some(),
            "remove_wall_between called on non-adjacent cells {a} and {b}"
        );

        if let Some(direction) = direction {
            if let Some(cell) = self.cells.get_mut(a) {
                cell.walls.clear(direction);
            }
            if let Some(cell) = self.cells.get_mut(b) {
                cell.walls.clear(direction.opposite());
            }
        }
    }

    /// Count of removed wall pairs, i.e. edges in the passage graph
    ///
    /// Each removed pair clears one flag on each side, so the flag total is
    /// twice the edge count.
    pub fn removed_wall_count(&self) -> usize {
        let cleared: usize = self.cells.iter().map(|cell| 4 - cell.walls.count()).sum();
        cleared / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(MazeError::InvalidDimensions { cols: 0, rows: 5 })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(MazeError::InvalidDimensions { cols: 5, rows: 0 })
        ));
    }

    #[test]
    fn column_major_flattening_round_trips() {
        let grid = Grid::new(4, 3).unwrap();
        for col in 0..4 {
            for row in 0..3 {
                let index = grid.index_of(col, row);
                assert_eq!(index, col * 3 + row);
                assert_eq!(grid.position_of(index), (col, row));
            }
        }
    }

    #[test]
    fn neighbor_index_respects_edges() {
        let grid = Grid::new(3, 3).unwrap();
        let corner = grid.index_of(0, 0);
        assert_eq!(grid.neighbor_index(corner, Direction::Top), None);
        assert_eq!(grid.neighbor_index(corner, Direction::Left), None);
        assert_eq!(
            grid.neighbor_index(corner, Direction::Right),
            Some(grid.index_of(1, 0))
        );
        assert_eq!(
            grid.neighbor_index(corner, Direction::Bottom),
            Some(grid.index_of(0, 1))
        );

        let far_corner = grid.index_of(2, 2);
        assert_eq!(grid.neighbor_index(far_corner, Direction::Right), None);
        assert_eq!(grid.neighbor_index(far_corner, Direction::Bottom), None);
    }

    #[test]
    fn neighbor_index_is_symmetric() {
        let grid = Grid::new(5, 4).unwrap();
        for index in 0..grid.cell_count() {
            for direction in Direction::ALL {
                if let Some(neighbor) = grid.neighbor_index(index, direction) {
                    assert_eq!(
                        grid.neighbor_index(neighbor, direction.opposite()),
                        Some(index),
                        "asymmetric adjacency at {index} going {direction:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_range_index_has_no_neighbors() {
        let grid = Grid::new(2, 2).unwrap();
        for direction in Direction::ALL {
            assert_eq!(grid.neighbor_index(4, direction), None);
        }
    }

    #[test]
    fn remove_wall_clears_matching_pair() {
        let mut grid = Grid::new(2, 2).unwrap();
        let a = grid.index_of(0, 0);
        let b = grid.index_of(1, 0);

        grid.remove_wall_between(a, b);

        let cell_a = grid.cell(a).unwrap();
        let cell_b = grid.cell(b).unwrap();
        assert!(!cell_a.walls.right);
        assert!(!cell_b.walls.left);
        // Unrelated flags stay intact
        assert!(cell_a.walls.top && cell_a.walls.bottom && cell_a.walls.left);
        assert!(cell_b.walls.top && cell_b.walls.bottom && cell_b.walls.right);
        assert_eq!(grid.removed_wall_count(), 1);
    }

    #[test]
    fn unvisited_neighbors_shrinks_as_cells_are_marked() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = grid.index_of(1, 1);
        assert_eq!(grid.unvisited_neighbors(center).len(), 4);

        assert!(grid.mark_visited(grid.index_of(1, 0)));
        assert!(grid.mark_visited(grid.index_of(2, 1)));
        assert_eq!(grid.unvisited_neighbors(center).len(), 2);

        // Re-marking reports not newly visited
        assert!(!grid.mark_visited(grid.index_of(1, 0)));
    }
}
