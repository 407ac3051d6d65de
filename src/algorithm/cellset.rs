use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset over flattened cell indices
///
/// Renderers need to test "is this cell on the backtrack stack" for every
/// cell they paint; scanning the stack per cell would be quadratic over the
/// grid. This gives O(1) membership with one bit per cell.
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
    cell_count: usize,
}

impl CellSet {
    /// Create a set with no cells present
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
            cell_count,
        }
    }

    /// Build a set from a sequence of cell indices
    ///
    /// Out-of-range indices are ignored.
    pub fn from_indices(indices: &[usize], cell_count: usize) -> Self {
        let mut set = Self::new(cell_count);
        for &index in indices {
            set.insert(index);
        }
        set
    }

    /// Insert a cell index
    pub fn insert(&mut self, index: usize) {
        if index < self.cell_count {
            self.bits.set(index, true);
        }
    }

    /// Remove a cell index
    pub fn remove(&mut self, index: usize) {
        if index < self.cell_count {
            self.bits.set(index, false);
        }
    }

    /// Test cell membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all member indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellSet({} cells: {:?})", self.len(), self.to_vec())
    }
}
