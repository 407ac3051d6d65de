//! Randomized depth-first search maze generation with step-level control
//!
//! The engine carves a perfect maze (a spanning tree over the grid graph) one
//! algorithmic step per call, so a driver can run it at any cadence: batch to
//! completion, animated frame by frame, or single-stepped under test.

#![forbid(unsafe_code)]

/// Maze generation engine, step state machine and snapshots
pub mod algorithm;
/// Grid of walled cells with flattened-index adjacency
pub mod grid;
/// Input/output operations and error handling
pub mod io;

pub use algorithm::generator::MazeGenerator;
pub use io::error::{MazeError, Result};
