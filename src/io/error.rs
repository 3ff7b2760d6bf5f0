//! Error types for maze generation, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A cell coordinate lies outside the grid
    OutOfBounds {
        /// Offending coordinate as `[x, y]`
        position: [usize; 2],
        /// Grid dimensions as `(width, height)`
        grid_dimensions: (usize, usize),
    },

    /// A merge was requested between cells that do not share a wall
    NonAdjacentCells {
        /// First cell as `[x, y]`
        first: [usize; 2],
        /// Second cell as `[x, y]`
        second: [usize; 2],
    },

    /// Export was requested before any wall state was emitted
    NothingToRender {
        /// Description of what was missing
        reason: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A shared lock was poisoned by a panicking holder
    LockPoisoned {
        /// Name of the guarded resource
        resource: &'static str,
    },

    /// A paced generation worker could not be started
    WorkerSpawn {
        /// Underlying OS error
        source: std::io::Error,
    },

    /// A paced generation worker panicked before reporting its outcome
    WorkerPanicked,

    /// Structured logging could not be configured
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                position,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Cell ({}, {}) is outside the {}x{} grid",
                    position[0], position[1], grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::NonAdjacentCells { first, second } => {
                write!(
                    f,
                    "Cells ({}, {}) and ({}, {}) are not adjacent",
                    first[0], first[1], second[0], second[1]
                )
            }
            Self::NothingToRender { reason } => {
                write!(f, "Nothing to render: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::LockPoisoned { resource } => {
                write!(f, "Lock guarding {resource} was poisoned")
            }
            Self::WorkerSpawn { source } => {
                write!(f, "Failed to start generation worker: {source}")
            }
            Self::WorkerPanicked => {
                write!(f, "Paced generation worker panicked")
            }
            Self::Logging { reason } => {
                write!(f, "Failed to configure logging: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::WorkerSpawn { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
