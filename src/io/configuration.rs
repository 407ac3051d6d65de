//! Runtime defaults, safety limits and render colors

/// Default number of grid columns
pub const DEFAULT_COLS: usize = 8;
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 8;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default side length of a rendered cell in pixels
pub const DEFAULT_CELL_SIZE: usize = 16;
/// Maximum side length of a rendered cell in pixels
pub const MAX_CELL_SIZE: usize = 256;

/// Default output path for the rendered maze
pub const DEFAULT_OUTPUT: &str = "maze.png";
/// Suffix replacing the output extension for GIF visualization
pub const VISUALIZATION_SUFFIX: &str = "_steps.gif";

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Render palette, RGBA: stack green, visited purple, current blue
/// Background color behind unvisited cells
pub const BACKGROUND_COLOR: [u8; 4] = [245, 245, 245, 255];
/// Wall line color
pub const WALL_COLOR: [u8; 4] = [25, 25, 25, 255];
/// Fill color for visited cells
pub const VISITED_COLOR: [u8; 4] = [128, 26, 204, 255];
/// Fill color for cells on the backtrack stack
pub const STACK_COLOR: [u8; 4] = [26, 179, 51, 255];
/// Fill color for the current cell
pub const CURRENT_COLOR: [u8; 4] = [26, 26, 230, 255];

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
