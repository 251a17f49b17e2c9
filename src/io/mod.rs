//! Command line, configuration, errors and image loading

/// Command-line arguments and startup
pub mod cli;
/// Fixed puzzle constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Picture loading, scaling and slicing
pub mod image;
