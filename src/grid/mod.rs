//! Grid data structures for maze generation
//!
//! This module contains the walled-cell data model:
//! - Cells with four wall flags and a visited flag
//! - The grid arena holding all cells in flattened column-major order
//! - Neighbor adjacency computed from index arithmetic alone

/// Cell, wall flags and cardinal directions
pub mod cell;
/// Cell arena and flattened-index adjacency
pub mod grid;

pub use cell::{Cell, Direction, Walls};
pub use grid::Grid;
