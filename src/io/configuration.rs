//! Puzzle constants and runtime configuration defaults

// Board geometry is fixed; every module indexes slots row-major against these
/// Number of tile rows
pub const GRID_ROWS: usize = 4;
/// Number of tile columns
pub const GRID_COLS: usize = 3;
/// Number of slots on the board
pub const TILE_COUNT: usize = GRID_ROWS * GRID_COLS;
/// Slot index of the blank tile in the solved arrangement
pub const EMPTY_HOME_INDEX: usize = TILE_COUNT - 1;

// Image preparation
/// Path of the picture loaded when none is given on the command line
pub const DEFAULT_IMAGE_PATH: &str = "resources/puzzle.jpeg";
/// Width the source picture is scaled to before slicing
pub const DEFAULT_TARGET_WIDTH: u32 = 300;
/// Height of the placeholder picture relative to its width, in percent
pub const PLACEHOLDER_ASPECT_PERCENT: u32 = 120;

// Window chrome
/// Title shown while the puzzle is unsolved
pub const WINDOW_TITLE: &str = "Puzzle";
/// Title shown once the tiles are back in order
pub const SOLVED_TITLE: &str = "Congratulations - Finished";
/// Width of the line drawn around each tile, in pixels
pub const TILE_BORDER: u32 = 1;
/// Width of the line drawn around the whole grid, in pixels
pub const PANEL_BORDER: u32 = 1;

// Colours in 0x00RRGGBB
/// Window background, also shown through the blank slot
pub const BACKGROUND_COLOR: u32 = 0x00EE_EEEE;
/// Tile and panel border colour
pub const BORDER_COLOR: u32 = 0x0080_8080;
/// Border colour of the tile under the cursor
pub const HOVER_COLOR: u32 = 0x00FF_FF00;

// Logging
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
