//! Rasterization of geometric shapes into grid cells.
//!
//! Every operation is a pure function returning the ordered cells of a shape
//! outline. Outputs may contain duplicates where symmetric branches or
//! adjacent segments coincide; callers that need a set should deduplicate.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: midpoint line stepping across all octants
//! - **Midpoint Ellipse**: two-region, four-way symmetric outline
//! - **Bézier Flattening**: uniform parameter sampling joined by lines
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Kennedy, J. "A Fast Bresenham Type Algorithm For Drawing Ellipses."

use crate::error::Result;
use crate::geometry::Position;

mod bezier;
mod ellipse;
mod line;
mod rectangle;

pub use bezier::bezier;
pub use ellipse::{circle, ellipse};
pub use line::line;
pub use rectangle::{rectangle, rectangle2};

/// Trait for shapes that can be converted to grid cells.
pub trait Rasterize {
    /// Compute the cells covered by this shape's outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape parameters are invalid or the shape
    /// leaves the `i32` grid.
    fn rasterize(&self) -> Result<Vec<Position>>;
}
