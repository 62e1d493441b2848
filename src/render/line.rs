//! Midpoint (Bresenham) line rasterization.

use crate::error::Result;
use crate::geometry::{Position, Segment};

use super::Rasterize;

/// Rasterize the segment from `p0` to `p1` using Bresenham's algorithm.
///
/// The output starts at `p0`, ends at `p1`, and every step moves to one of the
/// eight neighbours of the previous cell. A segment spanning `dx` columns and
/// `dy` rows produces exactly `max(dx, dy) + 1` positions; `line(p, p)` is `[p]`.
///
/// The decision variable is kept as `f64` (it starts at half of the major
/// delta) while positions stay integral.
///
/// # Example
///
/// ```
/// use pixelgrid::geometry::Position;
/// use pixelgrid::render::line;
///
/// let cells = line(Position::new(0, 0), Position::new(3, 2));
/// assert_eq!(
///     cells,
///     vec![
///         Position::new(0, 0),
///         Position::new(1, 1),
///         Position::new(2, 1),
///         Position::new(3, 2),
///     ]
/// );
/// ```
#[must_use]
pub fn line(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
    let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
    let sx = if p1.x > p0.x { 1 } else { -1 };
    let sy = if p1.y > p0.y { 1 } else { -1 };

    let dx_f = dx as f64;
    let dy_f = dy as f64;
    let mut error = if dx > dy { dx_f / 2.0 } else { -dy_f / 2.0 };

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    let mut current = p0;
    points.push(current);

    while current != p1 {
        let e2 = error;
        if e2 > -dx_f {
            error -= dy_f;
            current.x += sx;
        }
        if e2 < dy_f {
            error += dx_f;
            current.y += sy;
        }
        points.push(current);
    }

    log::trace!("line {} -> {}: {} cells", p0, p1, points.len());
    points
}

impl Rasterize for Segment {
    fn rasterize(&self) -> Result<Vec<Position>> {
        Ok(line(self.start, self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Position> {
        coords.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn test_line_single_point() {
        let p = Position::new(-4, 9);
        assert_eq!(line(p, p), vec![p]);
    }

    #[test]
    fn test_line_shallow() {
        assert_eq!(
            line(Position::new(0, 0), Position::new(3, 2)),
            pts(&[(0, 0), (1, 1), (2, 1), (3, 2)])
        );
    }

    #[test]
    fn test_line_horizontal() {
        assert_eq!(
            line(Position::new(5, 1), Position::new(1, 1)),
            pts(&[(5, 1), (4, 1), (3, 1), (2, 1), (1, 1)])
        );
    }

    #[test]
    fn test_line_vertical() {
        assert_eq!(
            line(Position::new(2, -1), Position::new(2, 2)),
            pts(&[(2, -1), (2, 0), (2, 1), (2, 2)])
        );
    }

    #[test]
    fn test_line_diagonal() {
        assert_eq!(
            line(Position::new(0, 0), Position::new(-3, 3)),
            pts(&[(0, 0), (-1, 1), (-2, 2), (-3, 3)])
        );
    }

    #[test]
    fn test_line_steep() {
        let cells = line(Position::new(0, 0), Position::new(1, 4));
        assert_eq!(cells.len(), 5);
        assert_eq!(cells.first(), Some(&Position::new(0, 0)));
        assert_eq!(cells.last(), Some(&Position::new(1, 4)));
        for (i, p) in cells.iter().enumerate() {
            assert_eq!(p.y, i as i32, "steep lines advance one row per step");
        }
    }

    #[test]
    fn test_line_starts_at_first_endpoint() {
        let forward = line(Position::new(0, 0), Position::new(7, 3));
        let backward = line(Position::new(7, 3), Position::new(0, 0));
        assert_eq!(forward.first(), Some(&Position::new(0, 0)));
        assert_eq!(backward.first(), Some(&Position::new(7, 3)));
        assert_eq!(forward.len(), backward.len());
    }

    #[test]
    fn test_segment_rasterize() {
        let segment = Segment::new(Position::new(1, 1), Position::new(4, 1));
        let cells = segment.rasterize().expect("segments always rasterize");
        assert_eq!(cells, line(segment.start, segment.end));
    }
}
