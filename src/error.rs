//! Error types for affine-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in affine-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Operand shapes are incompatible for an algebra operation.
    #[error("{op}: dimension mismatch (expected {expected}, found {found})")]
    DimensionMismatch {
        /// Operation that rejected its operands.
        op: &'static str,
        /// Size the operation required.
        expected: usize,
        /// Size it was given.
        found: usize,
    },

    /// The homogeneous point/vector convention was violated.
    #[error("{op}: type mismatch ({reason})")]
    TypeMismatch {
        /// Operation that rejected its operands.
        op: &'static str,
        /// Which role an operand failed to play.
        reason: &'static str,
    },

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Grid cell size too small to draw a visible mark.
    #[error("Invalid grid cell size: {0} (must be at least 2)")]
    InvalidGrid(u32),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Scene description could not be parsed.
    #[cfg(feature = "yaml")]
    #[error("Scene format error: {0}")]
    SceneFormat(String),
}
