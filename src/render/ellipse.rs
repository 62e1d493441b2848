//! Midpoint ellipse and circle rasterization.
//!
//! The outline is traced in one quadrant and mirrored into the other three.
//! Region 1 walks from the top of the ellipse while the tangent slope is
//! shallow (x advances every step); region 2 walks from the right-hand
//! extreme while the slope is steep (y advances every step).

use crate::error::{Error, Result};
use crate::geometry::{Circle, Ellipse, Position, Size};

use super::Rasterize;

/// Rasterize the outline of an axis-aligned ellipse.
///
/// `size.width` and `size.height` are the semi-axis lengths, so every emitted
/// cell lies within `center.x ± width` and `center.y ± height`.
///
/// Each iteration emits the four reflections `(cx+x, cy+y)`, `(cx-x, cy+y)`,
/// `(cx+x, cy-y)`, `(cx-x, cy-y)` of the current quadrant point. All region 1
/// emissions (top of the ellipse, y decreasing) come first, followed by
/// region 2 (right extreme, y increasing). Coincident reflections on the axes
/// and the cells where the regions meet are not deduplicated.
///
/// A single zero semi-axis runs through the same region loops and yields the
/// two axis extremes, each reflected four ways. A zero size yields the center
/// four times.
///
/// # Errors
///
/// Returns [`Error::CoordinateOverflow`] if the bounding box of the ellipse
/// leaves the `i32` grid.
pub fn ellipse(size: Size, center: Position) -> Result<Vec<Position>> {
    check_extent(size, center)?;

    let w = i64::from(size.width);
    let h = i64::from(size.height);
    let mut points = Vec::with_capacity(4 * (w + h + 2) as usize);

    let mut plot4 = |x: i64, y: i64| {
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let reflections = [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
        ];
        for (px, py) in reflections {
            points.push(Position::new(px as i32, py as i32));
        }
    };

    // With both squared axes zero the region conditions reduce to `0 <= 0`.
    if size.is_zero() {
        plot4(0, 0);
    } else {
        let a2 = i128::from(w) * i128::from(w);
        let b2 = i128::from(h) * i128::from(h);
        let fa2 = 4 * a2;
        let fb2 = 4 * b2;

        // Region 1
        let (mut x, mut y) = (0i64, h);
        let mut sigma = 2 * b2 + a2 * (1 - 2 * i128::from(h));
        while b2 * i128::from(x) <= a2 * i128::from(y) {
            plot4(x, y);
            if sigma >= 0 {
                sigma += fa2 * (1 - i128::from(y));
                y -= 1;
            }
            sigma += b2 * (4 * i128::from(x) + 6);
            x += 1;
        }

        // Region 2
        let (mut x, mut y) = (w, 0i64);
        let mut sigma = 2 * a2 + b2 * (1 - 2 * i128::from(w));
        while a2 * i128::from(y) <= b2 * i128::from(x) {
            plot4(x, y);
            if sigma >= 0 {
                sigma += fb2 * (1 - i128::from(x));
                x -= 1;
            }
            sigma += a2 * (4 * i128::from(y) + 6);
            y += 1;
        }
    }

    log::trace!("ellipse {} at {}: {} cells", size, center, points.len());
    Ok(points)
}

/// Rasterize a circle outline; `diameter` is forwarded as both extents of
/// [`ellipse`], so the result is identical to `ellipse(Size::square(diameter), center)`.
///
/// # Errors
///
/// Returns [`Error::CoordinateOverflow`] under the same conditions as [`ellipse`].
pub fn circle(diameter: u32, center: Position) -> Result<Vec<Position>> {
    ellipse(Size::square(diameter), center)
}

fn check_extent(size: Size, center: Position) -> Result<()> {
    let fits = center.checked_offset(size).is_some()
        && center.x.checked_sub_unsigned(size.width).is_some()
        && center.y.checked_sub_unsigned(size.height).is_some();
    if fits {
        Ok(())
    } else {
        log::debug!("ellipse {} at {} leaves the coordinate range", size, center);
        Err(Error::CoordinateOverflow {
            origin: center,
            extent: size,
        })
    }
}

impl Rasterize for Ellipse {
    fn rasterize(&self) -> Result<Vec<Position>> {
        ellipse(self.size, self.center)
    }
}

impl Rasterize for Circle {
    fn rasterize(&self) -> Result<Vec<Position>> {
        circle(self.diameter, self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Position> {
        coords.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn test_circle_unit_extent() {
        let cells = circle(1, Position::new(0, 0)).expect("small circle should rasterize");
        assert_eq!(
            cells,
            pts(&[
                (0, 1),
                (0, 1),
                (0, -1),
                (0, -1),
                (1, 0),
                (-1, 0),
                (1, 0),
                (-1, 0),
            ])
        );
    }

    #[test]
    fn test_wide_ellipse_sequence() {
        let cells = ellipse(Size::new(3, 2), Position::ORIGIN).expect("ellipse should rasterize");
        assert_eq!(
            cells,
            pts(&[
                (0, 2),
                (0, 2),
                (0, -2),
                (0, -2),
                (1, 2),
                (-1, 2),
                (1, -2),
                (-1, -2),
                (2, 1),
                (-2, 1),
                (2, -1),
                (-2, -1),
                (3, 0),
                (-3, 0),
                (3, 0),
                (-3, 0),
                (3, 1),
                (-3, 1),
                (3, -1),
                (-3, -1),
            ])
        );
    }

    #[test]
    fn test_tall_ellipse_sequence() {
        let cells =
            ellipse(Size::new(2, 3), Position::new(10, -5)).expect("ellipse should rasterize");
        let expected: Vec<Position> = [
            (0, 3),
            (0, 3),
            (0, -3),
            (0, -3),
            (1, 3),
            (-1, 3),
            (1, -3),
            (-1, -3),
            (2, 0),
            (-2, 0),
            (2, 0),
            (-2, 0),
            (2, 1),
            (-2, 1),
            (2, -1),
            (-2, -1),
            (1, 2),
            (-1, 2),
            (1, -2),
            (-1, -2),
        ]
        .into_iter()
        .map(|(x, y)| Position::new(10 + x, -5 + y))
        .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_zero_size_is_center() {
        let c = Position::new(5, -3);
        let cells = ellipse(Size::new(0, 0), c).expect("zero ellipse should rasterize");
        assert_eq!(cells, vec![c; 4]);
    }

    #[test]
    fn test_zero_width_yields_axis_extremes() {
        let cells =
            ellipse(Size::new(0, 5), Position::ORIGIN).expect("flat ellipse should rasterize");
        assert_eq!(
            cells,
            pts(&[
                (0, 5),
                (0, 5),
                (0, -5),
                (0, -5),
                (0, 0),
                (0, 0),
                (0, 0),
                (0, 0),
            ])
        );
    }

    #[test]
    fn test_zero_height_yields_axis_extremes() {
        let cells =
            ellipse(Size::new(3, 0), Position::new(1, 1)).expect("flat ellipse should rasterize");
        assert_eq!(
            cells,
            pts(&[
                (1, 1),
                (1, 1),
                (1, 1),
                (1, 1),
                (4, 1),
                (-2, 1),
                (4, 1),
                (-2, 1),
            ])
        );
    }

    #[test]
    fn test_ellipse_extremes_present() {
        let c = Position::new(10, 20);
        let cells = ellipse(Size::new(8, 3), c).expect("ellipse should rasterize");
        for extreme in [(18, 20), (2, 20), (10, 23), (10, 17)] {
            assert!(
                cells.contains(&Position::from(extreme)),
                "missing extreme {:?}",
                extreme
            );
        }
        assert!(cells.iter().all(|p| (p.x - c.x).abs() <= 8 && (p.y - c.y).abs() <= 3));
    }

    #[test]
    fn test_region_one_comes_first() {
        let cells = ellipse(Size::new(6, 4), Position::ORIGIN).expect("ellipse should rasterize");
        assert_eq!(cells[0], Position::new(0, 4));
        let region_two_start = cells
            .iter()
            .position(|p| *p == Position::new(6, 0))
            .expect("right extreme should be emitted");
        assert!(cells[..region_two_start].iter().all(|p| p.y != 0));
    }

    #[test]
    fn test_circle_cells_near_radius() {
        let r = 10.0_f64;
        let cells = circle(10, Position::ORIGIN).expect("circle should rasterize");
        for p in &cells {
            let d = f64::from(p.x).hypot(f64::from(p.y));
            assert!((d - r).abs() < 1.0, "{} is {} from the center", p, d);
        }
    }

    #[test]
    fn test_circle_matches_ellipse() {
        let c = Position::new(-7, 3);
        assert_eq!(circle(9, c), ellipse(Size::new(9, 9), c));
    }

    #[test]
    fn test_overflow_rejected() {
        let err = ellipse(Size::new(2, 2), Position::new(i32::MAX - 1, 0));
        assert!(matches!(err, Err(Error::CoordinateOverflow { .. })));
        let err = circle(1, Position::new(0, i32::MIN));
        assert!(matches!(err, Err(Error::CoordinateOverflow { .. })));
    }

    #[test]
    fn test_shape_values_rasterize() {
        let c = Position::new(4, 4);
        assert_eq!(Circle::new(c, 3).rasterize(), circle(3, c));
        assert_eq!(
            Ellipse::new(c, Size::new(5, 2)).rasterize(),
            ellipse(Size::new(5, 2), c)
        );
    }
}
