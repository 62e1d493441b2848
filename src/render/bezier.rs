//! Cubic Bézier flattening.

use crate::error::{Error, Result};
use crate::geometry::{CubicBezier, Position};

use super::line::line;
use super::Rasterize;

/// Evaluate the cubic Bézier at parameter `t` and floor to the grid.
fn sample(t: f64, p: [Position; 4]) -> Position {
    let u = 1.0 - t;
    let weights = [u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t];

    let (x, y) = p.iter().zip(weights).fold((0.0, 0.0), |(x, y), (p, b)| {
        (x + b * f64::from(p.x), y + b * f64::from(p.y))
    });
    Position::new(x.floor() as i32, y.floor() as i32)
}

/// The `resolution + 1` curve samples at `t = i / resolution`.
fn samples(resolution: u32, points: [Position; 4]) -> Vec<Position> {
    let n = f64::from(resolution);
    (0..=resolution).map(|i| sample(f64::from(i) / n, points)).collect()
}

/// Flatten a cubic Bézier curve into grid cells.
///
/// The curve is sampled at `resolution + 1` evenly spaced parameter values
/// (so `resolution` is the number of straight segments), each sample is
/// floored to the grid, and consecutive samples are joined with [`line`].
/// The segments are concatenated in order; the cell shared by two adjacent
/// segments appears twice. With `resolution == 1` the result is exactly
/// `line(p0, p3)`.
///
/// # Errors
///
/// Returns [`Error::InvalidResolution`] if `resolution` is zero.
pub fn bezier(
    resolution: u32,
    p0: Position,
    p1: Position,
    p2: Position,
    p3: Position,
) -> Result<Vec<Position>> {
    if resolution == 0 {
        log::debug!("rejecting bezier with zero resolution");
        return Err(Error::InvalidResolution { resolution });
    }

    let knots = samples(resolution, [p0, p1, p2, p3]);
    let points: Vec<Position> = knots
        .windows(2)
        .flat_map(|pair| line(pair[0], pair[1]))
        .collect();

    log::trace!(
        "bezier {} {} {} {} x{}: {} cells",
        p0,
        p1,
        p2,
        p3,
        resolution,
        points.len()
    );
    Ok(points)
}

impl Rasterize for CubicBezier {
    fn rasterize(&self) -> Result<Vec<Position>> {
        let [p0, p1, p2, p3] = self.points;
        bezier(self.resolution, p0, p1, p2, p3)
    }
}
