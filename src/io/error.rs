//! Error types for image preparation, board construction and the window

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to load the source picture from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source picture cannot be cut into the tile grid
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Tile list does not form a legal board
    ///
    /// Occurs when the list:
    /// - Does not hold exactly one tile per slot
    /// - Has zero or several blank tiles
    /// - Repeats a home position or uses one outside the grid
    InvalidBoard {
        /// Description of the violated invariant
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The windowing event loop could not be created or exited abnormally
    EventLoop {
        /// Underlying event loop error
        source: winit::error::EventLoopError,
    },

    /// The operating system refused to create the window
    Window {
        /// Underlying window creation error
        source: winit::error::OsError,
    },

    /// Presenting pixels to the window surface failed
    Surface {
        /// Surface operation being performed
        operation: &'static str,
        /// Underlying surface error
        source: softbuffer::SoftBufferError,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidBoard { reason } => {
                write!(f, "Invalid board: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EventLoop { source } => {
                write!(f, "Event loop error: {source}")
            }
            Self::Window { source } => {
                write!(f, "Failed to create window: {source}")
            }
            Self::Surface { operation, source } => {
                write!(f, "Surface error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::EventLoop { source } => Some(source),
            Self::Window { source } => Some(source),
            Self::Surface { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<winit::error::EventLoopError> for PuzzleError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop { source: err }
    }
}

impl From<winit::error::OsError> for PuzzleError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid board error
pub fn invalid_board(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidBoard {
        reason: reason.to_string(),
    }
}

/// Wrap a surface error with the operation that produced it
pub fn surface_error(
    operation: &'static str,
) -> impl FnOnce(softbuffer::SoftBufferError) -> PuzzleError {
    move |source| PuzzleError::Surface { operation, source }
}
