//! Grid limits and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed half-extent along any axis
pub const MAX_HALF_EXTENT: u32 = 512;

/// Default half-extent for generated maps
pub const DEFAULT_HALF_EXTENT: u32 = 8;

/// Default probability that a generated cell is free
pub const DEFAULT_DENSITY: f64 = 0.7;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Number of cells processed between progress bar updates
pub const PROGRESS_UPDATE_INTERVAL: u64 = 4096;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// File extension used for persisted grids
pub const OUTPUT_EXTENSION: &str = "grid";
