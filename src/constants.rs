// Grid defaults
pub const DEFAULT_GRID_WIDTH: u32 = 64;
pub const DEFAULT_GRID_HEIGHT: u32 = 64;
pub const DEFAULT_CELL_SIZE: u32 = 32;

// Queries
pub const DEFAULT_QUERY_RADIUS: u32 = 1;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
