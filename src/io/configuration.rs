//! Generation constants and runtime configuration defaults

// Placement
/// Consecutive rejected draws before a random placement gives up
pub const DEFAULT_MAX_CONSECUTIVE_FAILURES: usize = 100;

/// Number of checkpoint and teleporter groups in the tile catalog
pub const CHECKPOINT_GROUPS: usize = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension along either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum allowed number of cells in one grid
pub const MAX_GRID_CELLS: usize = 4_000_000;

// Generation
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default cap on regenerate-and-evaluate attempts
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: usize = 1000;

// Output settings
/// Line width used when wrapping map codes for forum posts
pub const DEFAULT_FORUM_LINE_WIDTH: usize = 60;
/// Map editor page that accepts a map code as its `code` query parameter
pub const MAP_EDITOR_URL: &str = "http://blue.pathery.net/mapeditor";
/// Line terminator used in forum posts
pub const FORUM_NEWLINE: &str = "\r\n";
