/// Command-line interface and level runner
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Frame rasterizing and PNG export
pub mod image;
/// Structured logging setup
pub mod logging;
/// Progress bars for level generation
pub mod progress;
/// Frame recording and GIF export
pub mod visualization;
