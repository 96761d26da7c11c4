//! Error types for board generation, composition, and document assembly

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// The designated center tile file does not exist
    MissingCenterTile {
        /// Expected path of the center tile
        path: PathBuf,
    },

    /// Tile pool is too small to fill the non-center cells of a board
    InsufficientPool {
        /// Number of tiles found in the pool
        available: usize,
        /// Number of non-center cells that must be filled
        required: usize,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A bounded retry loop ran out of attempts without finding a fresh board
    ///
    /// Only reachable when a per-board attempt limit is configured; the
    /// default is an unbounded retry loop that never produces this error.
    RetriesExhausted {
        /// Attempts consumed for the current board
        attempts: u64,
        /// Boards successfully produced before exhaustion
        produced: usize,
        /// Target number of boards for the run
        target: usize,
    },

    /// Failed to render or serialize the output PDF
    PdfExport {
        /// Path where the document was headed
        path: PathBuf,
        /// Description of the underlying failure
        reason: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCenterTile { path } => {
                write!(f, "Center tile '{}' not found", path.display())
            }
            Self::InsufficientPool {
                available,
                required,
            } => {
                write!(
                    f,
                    "Not enough tiles to fill the board: {available} available, {required} required (excluding the center tile)"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RetriesExhausted {
                attempts,
                produced,
                target,
            } => {
                write!(
                    f,
                    "Gave up after {attempts} attempts without a fresh board ({produced}/{target} produced)"
                )
            }
            Self::PdfExport { path, reason } => {
                write!(f, "Failed to write PDF '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
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
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation it occurred on
pub fn fs_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
