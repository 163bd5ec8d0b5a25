//! Error types for grid construction, cell access and persistence

use std::fmt;
use std::path::PathBuf;

use crate::spatial::extent::HalfExtents;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Reading from or writing to a stream failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Persisted grid stream is truncated or contains an unexpected token
    MalformedInput {
        /// Zero-based index of the offending whitespace-delimited token
        token: usize,
        /// Description of what was expected
        reason: String,
    },

    /// Requested half-extents cannot be allocated
    InvalidExtent {
        /// Name of the offending extent
        parameter: &'static str,
        /// Provided value
        value: i64,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Write addressed a cell outside the grid
    ///
    /// Reads never produce this; they report out-of-range cells as absent.
    CellOutOfBounds {
        /// Requested coordinate
        cell: [i32; 3],
        /// Extents of the grid at the time of the write
        half_extents: HalfExtents,
        /// Whether the grid had storage allocated
        allocated: bool,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { operation, source } => {
                write!(f, "Stream error during {operation}: {source}")
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
            Self::MalformedInput { token, reason } => {
                write!(f, "Malformed grid input at token {token}: {reason}")
            }
            Self::InvalidExtent {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid extent '{parameter}' = {value}: {reason}")
            }
            Self::CellOutOfBounds {
                cell,
                half_extents,
                allocated,
            } => {
                let [x, y, z] = cell;
                if *allocated {
                    write!(
                        f,
                        "Cell ({x}, {y}, {z}) is outside grid extents {half_extents}"
                    )
                } else {
                    write!(
                        f,
                        "Cell ({x}, {y}, {z}) cannot be written: grid has no storage"
                    )
                }
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
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
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed input error for the token at `token`
pub fn malformed_input(token: usize, reason: &impl ToString) -> GridError {
    GridError::MalformedInput {
        token,
        reason: reason.to_string(),
    }
}

/// Attach an operation name to a raw stream error
pub const fn stream_error(operation: &'static str, source: std::io::Error) -> GridError {
    GridError::Io { operation, source }
}
