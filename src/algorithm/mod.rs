/// Bitvec-backed set of cell indices for O(1) membership tests
pub mod cellset;
/// Maze generation engine driving the backtracking state machine
pub mod generator;
/// Read-only views of engine state for drivers and renderers
pub mod snapshot;

pub use cellset::CellSet;
pub use generator::MazeGenerator;
pub use snapshot::{CellView, MazeSnapshot};
