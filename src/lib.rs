//! # pixelgrid
//!
//! Conversion of continuous shapes into the integer grid cells that
//! approximate them: lines, cubic Bézier curves, axis-aligned rectangles,
//! ellipses and circles.
//!
//! The crate only computes cell lists. Drawing them (framebuffers, terminals,
//! colors) is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use pixelgrid::prelude::*;
//!
//! let diagonal = line(Position::new(0, 0), Position::new(3, 2));
//! assert_eq!(diagonal.len(), 4);
//!
//! let outline = rectangle(Size::new(10, 10), Position::new(2, 2))?;
//! assert_eq!(outline.len(), 40);
//!
//! let shapes: Vec<Box<dyn Rasterize>> = vec![
//!     Box::new(Circle::new(Position::new(20, 20), 5)),
//!     Box::new(Segment::new(Position::new(0, 0), Position::new(9, 9))),
//! ];
//! for shape in &shapes {
//!     let _cells = shape.rasterize()?;
//! }
//! # Ok::<(), pixelgrid::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`geometry::Position`] and [`geometry::Size`]

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Grid positions, sizes and shape descriptions.
pub mod geometry;

/// Rasterization algorithms.
pub mod render;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pixelgrid operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use pixelgrid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, CubicBezier, Ellipse, Position, Rect, Segment, Size};
    pub use crate::render::{bezier, circle, ellipse, line, rectangle, rectangle2, Rasterize};
}
