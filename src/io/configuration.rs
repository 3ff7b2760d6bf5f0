//! Generation constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension along either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of cells per column
pub const DEFAULT_DIFFICULTY: u32 = 10;

/// Default play-area width in viewport units
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;

/// Default play-area height in viewport units
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

/// Default number of levels generated by the CLI
pub const DEFAULT_LEVELS: usize = 1;

/// Speed used when visualization is requested without an explicit speed
pub const DEFAULT_GENERATION_SPEED: f64 = 0.5;

// Wall geometry
/// Upper bound for wall thickness
pub const MAX_WALL_THICKNESS: f64 = 10.0;
/// Cell length is divided by this before subtracting one to get wall thickness
pub const WALL_THICKNESS_DIVISOR: f64 = 4.0;
/// Lower bound for wall thickness so tiny cells stay visible
pub const MIN_WALL_THICKNESS: f64 = 1.0;

// Speed to delay curve: delay = ln(v)^2 with v in [MIN, MAX]
/// Lower end of the pacing curve input
pub const MIN_PACING_VALUE: f64 = 1.01;
/// Upper end of the pacing curve input
pub const MAX_PACING_VALUE: f64 = 10_000.0;

// Colors
/// Canvas background color
pub const BACKGROUND_COLOR: [u8; 4] = [20, 21, 31, 255];
/// Wall color when random colors are disabled
pub const WALL_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Marker color for the start cell
pub const START_COLOR: [u8; 4] = [0xF3, 0x5E, 0x66, 255];
/// Marker color for the destination cell
pub const DESTINATION_COLOR: [u8; 4] = [0x00, 0xFF, 0x00, 255];

// Output settings
/// Suffix inserted before the extension for multi-level output
pub const LEVEL_SUFFIX: &str = "_level_";
/// Suffix used for GIF visualizations
pub const VISUALIZATION_SUFFIX: &str = "_visualization";
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the final GIF frame so the finished maze lingers
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 25;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Logging
/// Environment variable selecting `human` or `json` log output
pub const LOG_FORMAT_ENV: &str = "MAZECARVE_LOG_FORMAT";
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
