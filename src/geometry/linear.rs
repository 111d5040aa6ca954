//! Line equations and half-plane tests.

use super::{PointD, PointI};

/// Snap threshold for direction components produced by trigonometry.
const DIRECTION_EPSILON: f64 = 1e-12;

/// Implicit line equation `A·x + B·y + C = 0` in pixel space.
///
/// The side test is signed by the direction used to construct the line:
/// positive values are on the counter-clockwise (left, with y pointing up)
/// side. Reciprocals are computed once so per-pixel queries only multiply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    /// Coefficient of `x`.
    pub a: i64,
    /// Coefficient of `y`.
    pub b: i64,
    /// Constant term.
    pub c: i64,
    inv_a: f64,
    inv_b: f64,
    inv_norm: f64,
}

impl Linear {
    /// Create a line from raw coefficients.
    #[must_use]
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        let norm = (a as f64).hypot(b as f64);
        Self {
            a,
            b,
            c,
            inv_a: 1.0 / a as f64,
            inv_b: 1.0 / b as f64,
            inv_norm: 1.0 / norm,
        }
    }

    /// Directed line through `start` and `end`.
    #[must_use]
    pub fn from_points(start: PointI, end: PointI) -> Self {
        let sense = end - start;
        let c_factor = end.x * start.y - start.x * end.y;
        Self::new(-sense.y, sense.x, -c_factor)
    }

    /// Line through `start` running along `sense`.
    #[must_use]
    pub fn from_parallel(start: PointI, sense: PointI) -> Self {
        Self::from_points(start, start + sense)
    }

    /// Line through `start` perpendicular to `ortho`.
    #[must_use]
    pub fn from_orthogonal(start: PointI, ortho: PointI) -> Self {
        Self::from_parallel(start, ortho.ortho())
    }

    /// `y` on the line for the given `x`. Infinite for vertical lines.
    #[must_use]
    pub fn value_y(&self, x: i64) -> f64 {
        (-self.c - self.a * x) as f64 * self.inv_b
    }

    /// `x` on the line for the given `y`. Infinite for horizontal lines.
    #[must_use]
    pub fn value_x(&self, y: i64) -> f64 {
        (-self.c - self.b * y) as f64 * self.inv_a
    }

    /// Signed side of `point`; zero on the line.
    #[must_use]
    pub fn side(&self, point: PointI) -> i64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Perpendicular distance to `point`. NaN for a degenerate line.
    #[must_use]
    pub fn distance(&self, point: PointI) -> f64 {
        self.side(point).abs() as f64 * self.inv_norm
    }
}

/// Directed line through the origin, used for angular half-plane tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    direction: PointD,
}

impl Ray {
    /// Ray along `direction`.
    #[must_use]
    pub const fn new(direction: PointD) -> Self {
        Self { direction }
    }

    /// Unit ray at `angle` radians from the +X axis.
    ///
    /// Components within rounding noise of zero are snapped to zero so rays on
    /// the axes classify on-axis pixels exactly.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let snap = |value: f64| if value.abs() < DIRECTION_EPSILON { 0.0 } else { value };
        Self::new(PointD::new(snap(angle.cos()), snap(angle.sin())))
    }

    /// Direction vector.
    #[must_use]
    pub const fn direction(&self) -> PointD {
        self.direction
    }

    /// Signed side of the vector `(x, y)`: positive counter-clockwise from
    /// the ray, negative clockwise, zero on the ray's line.
    #[must_use]
    pub fn side(&self, x: f64, y: f64) -> f64 {
        self.direction.x * y - self.direction.y * x
    }

    /// Integer variant of [`Ray::side`].
    #[must_use]
    pub fn side_i(&self, vector: PointI) -> f64 {
        self.side(vector.x as f64, vector.y as f64)
    }
}

/// Signed position of `point` relative to the line through the origin along
/// `base`: positive on the left, negative on the right, zero on the line.
///
/// The magnitude is the offset measured along the axis the line is least
/// parallel to.
#[must_use]
pub fn point_position(base: PointD, point: PointD) -> f64 {
    if base.x > 0.0 {
        point.y - point.x * base.y / base.x
    } else if base.x < 0.0 {
        -(point.y - point.x * base.y / base.x)
    } else if base.y > 0.0 {
        -(point.x - point.y * base.x / base.y)
    } else if base.y < 0.0 {
        point.x - point.y * base.x / base.y
    } else {
        0.0
    }
}
