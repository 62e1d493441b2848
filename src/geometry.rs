//! Grid coordinates and shape descriptions.
//!
//! Positions are integer cell coordinates on an unbounded grid (`x` grows to
//! the right, `y` grows downward). Sizes are unsigned, so a negative extent
//! cannot be expressed.

use std::fmt;
use std::ops::{Add, Sub};

/// A grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Position {
    /// Origin cell (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by `size` along both axes.
    ///
    /// Returns `None` if the result leaves the `i32` range.
    #[must_use]
    pub fn checked_offset(self, size: Size) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add_unsigned(size.width)?,
            self.y.checked_add_unsigned(size.height)?,
        ))
    }

    /// True if `other` is one of the eight neighbours of `self` or `self` itself.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        (i64::from(self.x) - i64::from(other.x)).abs() <= 1
            && (i64::from(self.y) - i64::from(other.y)).abs() <= 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A non-negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A size with equal width and height.
    #[must_use]
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// True if both extents are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A straight segment between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// First endpoint; rasterization starts here.
    pub start: Position,
    /// Last endpoint.
    pub end: Position,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A cubic Bézier curve together with the number of straight segments used
/// to flatten it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubicBezier {
    /// Start point, two control points, end point.
    pub points: [Position; 4],
    /// Number of line segments in the flattened curve.
    pub resolution: u32,
}

impl CubicBezier {
    /// Create a new curve.
    #[must_use]
    pub const fn new(
        resolution: u32,
        p0: Position,
        p1: Position,
        p2: Position,
        p3: Position,
    ) -> Self {
        Self {
            points: [p0, p1, p2, p3],
            resolution,
        }
    }
}

/// An axis-aligned rectangle outline with its top-left corner at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Position,
    /// Distance from the top-left to the bottom-right corner.
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }
}

/// An axis-aligned ellipse outline. `size` holds the semi-axis lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ellipse {
    /// Center cell.
    pub center: Position,
    /// Horizontal and vertical semi-axes.
    pub size: Size,
}

impl Ellipse {
    /// Create a new ellipse.
    #[must_use]
    pub const fn new(center: Position, size: Size) -> Self {
        Self { center, size }
    }
}

/// A circle outline; `diameter` is passed to the ellipse rasterizer as both
/// extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center cell.
    pub center: Position,
    /// Extent forwarded to both ellipse axes.
    pub diameter: u32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Position, diameter: u32) -> Self {
        Self { center, diameter }
    }
}
