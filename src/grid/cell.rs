//! Cells, wall flags and the four cardinal directions

/// Cardinal direction from one cell to an adjacent cell
///
/// Row 0 is the top row and column 0 is the leftmost column, so `Top`
/// decreases the row index and `Left` decreases the column index.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Toward row - 1
    Top,
    /// Toward col + 1
    Right,
    /// Toward row + 1
    Bottom,
    /// Toward col - 1
    Left,
}

impl Direction {
    /// All four directions in wall-flag order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The direction pointing back at the originating cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

/// Wall flags for one cell, true meaning the wall is intact
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Walls {
    /// Wall toward row - 1
    pub top: bool,
    /// Wall toward col + 1
    pub right: bool,
    /// Wall toward row + 1
    pub bottom: bool,
    /// Wall toward col - 1
    pub left: bool,
}

impl Walls {
    /// A fully walled cell
    pub const fn intact() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    /// Test the wall flag facing the given direction
    pub const fn has(self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Clear the wall flag facing the given direction
    pub const fn clear(&mut self, direction: Direction) {
        match direction {
            Direction::Top => self.top = false,
            Direction::Right => self.right = false,
            Direction::Bottom => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }

    /// Count of intact walls
    pub const fn count(self) -> usize {
        self.top as usize + self.right as usize + self.bottom as usize + self.left as usize
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::intact()
    }
}

/// One grid cell: position, wall flags and visitation state
///
/// Cells are plain data owned by the grid arena. Wall clearing and visit
/// marking happen through [`crate::grid::Grid`] and the engine, never on the
/// cell's own initiative.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    /// Column within `[0, cols)`
    pub col: usize,
    /// Row within `[0, rows)`
    pub row: usize,
    /// Wall flags, all intact at construction
    pub walls: Walls,
    /// Whether the engine has visited this cell
    pub visited: bool,
}

impl Cell {
    /// Create an unvisited, fully walled cell at the given position
    pub const fn new(col: usize, row: usize) -> Self {
        Self {
            col,
            row,
            walls: Walls::intact(),
            visited: false,
        }
    }
}
