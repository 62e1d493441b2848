//! Axis-aligned rectangle outlines built from line segments.

use crate::error::{Error, Result};
use crate::geometry::{Position, Rect, Size};

use super::line::line;
use super::Rasterize;

/// Rasterize the outline of the rectangle with opposite corners `p` and `q`.
///
/// Either diagonal may be given. The edges are traced clockwise starting at
/// the top-left corner: top, right, bottom, then left, each stopping one cell
/// short of the next corner so that every corner is emitted exactly once.
/// A box spanning `w` columns and `h` rows between its corners yields
/// `2 * (w + h)` cells.
///
/// Degenerate boxes:
/// - `p == q` yields `[p]`;
/// - a 1x1 span yields the four corners;
/// - a zero span on one axis yields the straight line between the corners.
#[must_use]
pub fn rectangle2(p: Position, q: Position) -> Vec<Position> {
    let (left, right) = (p.x.min(q.x), p.x.max(q.x));
    let (top, bottom) = (p.y.min(q.y), p.y.max(q.y));

    let top_left = Position::new(left, top);
    let top_right = Position::new(right, top);
    let bottom_right = Position::new(right, bottom);
    let bottom_left = Position::new(left, bottom);

    let width = i64::from(right) - i64::from(left);
    let height = i64::from(bottom) - i64::from(top);

    let points = match (width, height) {
        (0, 0) => vec![p],
        (1, 1) => vec![top_left, top_right, bottom_right, bottom_left],
        (0, _) | (_, 0) => line(top_left, bottom_right),
        _ => {
            let mut points = Vec::with_capacity(2 * (width + height) as usize);
            points.extend(line(top_left, Position::new(right - 1, top)));
            points.extend(line(top_right, Position::new(right, bottom - 1)));
            points.extend(line(bottom_right, Position::new(left + 1, bottom)));
            points.extend(line(bottom_left, Position::new(left, top + 1)));
            points
        }
    };

    log::trace!("rectangle {} {}: {} cells", p, q, points.len());
    points
}

/// Rasterize the outline of the rectangle whose top-left corner is `origin`
/// and whose bottom-right corner is `origin + size`.
///
/// Unlike [`rectangle2`], a zero size produces no cells at all rather than a
/// single point.
///
/// # Errors
///
/// Returns [`Error::CoordinateOverflow`] if `origin + size` leaves the `i32` grid.
pub fn rectangle(size: Size, origin: Position) -> Result<Vec<Position>> {
    if size.is_zero() {
        return Ok(Vec::new());
    }

    let corner = origin.checked_offset(size).ok_or_else(|| {
        log::debug!("rectangle {} at {} leaves the coordinate range", size, origin);
        Error::CoordinateOverflow {
            origin,
            extent: size,
        }
    })?;
    Ok(rectangle2(origin, corner))
}

impl Rasterize for Rect {
    fn rasterize(&self) -> Result<Vec<Position>> {
        rectangle(self.size, self.origin)
    }
}
