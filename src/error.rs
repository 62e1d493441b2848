//! Error types for pixelgrid operations.

use thiserror::Error;

use crate::geometry::{Position, Size};

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing a shape.
///
/// Degenerate shapes (coincident endpoints, zero-size boxes) are not errors;
/// they produce empty or single-point outputs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A Bézier curve was flattened with zero segments.
    #[error("Invalid Bezier resolution: {resolution} (at least one segment is required)")]
    InvalidResolution {
        /// Requested number of segments.
        resolution: u32,
    },

    /// A shape extends past the representable coordinate range.
    #[error("Coordinate overflow: extent {extent} from {origin} leaves the i32 grid")]
    CoordinateOverflow {
        /// Anchor of the shape (origin or center).
        origin: Position,
        /// Extent applied to the anchor.
        extent: Size,
    },
}
