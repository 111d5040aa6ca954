//! Geometric primitives for rasterization.
//!
//! Points and bounding boxes are generic over the coordinate type so the same
//! algebra serves integer pixel space ([`PointI`], [`RectI`]) and floating
//! world space ([`PointD`], [`RectD`]).

mod angle;
mod linear;

pub use angle::{
    angle_from_ox, is_in_range_angle, normalize_angle, normalize_angle_range, rotate_vector,
    Tangens,
};
pub use linear::{point_position, Linear, Ray};

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Numeric coordinate type usable in [`Point`] and [`Rect`].
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`, truncating toward zero for integer types.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_scalar!(i32, i64, f32, f64);

/// A 2D point (or vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

/// Point in integer pixel space.
pub type PointI = Point<i64>;
/// Point in floating world space.
pub type PointD = Point<f64>;

impl<T: Scalar> Point<T> {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector rotated by 90 degrees: `(y, -x)`.
    #[must_use]
    pub fn ortho(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the cross product.
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[must_use]
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Convert to world-space precision.
    #[must_use]
    pub fn to_f64(self) -> PointD {
        Point::new(self.x.to_f64(), self.y.to_f64())
    }
}

impl PointD {
    /// Euclidean length of the vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Truncate both coordinates to integer pixel space.
    #[must_use]
    pub fn truncate(self) -> PointI {
        Point::new(self.x as i64, self.y as i64)
    }
}

impl<T: Scalar> Neg for Point<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> AddAssign for Point<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> SubAssign for Point<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Scalar> Mul<T> for Point<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Axis-aligned bounding box with corners `a` (min) and `b` (max).
///
/// Constructors named `minmax*` order the corners; the `expand*` family keeps
/// `a <= b` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T> {
    /// Minimum corner.
    pub a: Point<T>,
    /// Maximum corner.
    pub b: Point<T>,
}

/// Rectangle in integer pixel space.
pub type RectI = Rect<i64>;
/// Rectangle in floating world space.
pub type RectD = Rect<f64>;

impl<T: Scalar> Rect<T> {
    /// Create a rectangle from corners taken as given.
    #[must_use]
    pub const fn new(a: Point<T>, b: Point<T>) -> Self {
        Self { a, b }
    }

    /// Degenerate rectangle covering a single point.
    #[must_use]
    pub const fn from_point(point: Point<T>) -> Self {
        Self { a: point, b: point }
    }

    /// Bounding box of two points.
    #[must_use]
    pub fn minmax(p1: Point<T>, p2: Point<T>) -> Self {
        Self::minmax_coords(p1.x, p1.y, p2.x, p2.y)
    }

    /// Bounding box of two coordinate pairs.
    #[must_use]
    pub fn minmax_coords(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Width of the box.
    #[must_use]
    pub fn width(&self) -> T {
        self.b.x - self.a.x
    }

    /// Height of the box.
    #[must_use]
    pub fn height(&self) -> T {
        self.b.y - self.a.y
    }

    /// Whether the corners are ordered.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.a.x <= self.b.x && self.a.y <= self.b.y
    }

    /// Whether the point lies inside or on the border.
    #[must_use]
    pub fn contains(&self, point: Point<T>) -> bool {
        point.x >= self.a.x && point.x <= self.b.x && point.y >= self.a.y && point.y <= self.b.y
    }

    /// Grow every side by `margin`.
    pub fn expand_by(&mut self, margin: T) {
        let offset = Point::new(margin, margin);
        self.a -= offset;
        self.b += offset;
    }

    /// Grow to include `point`. Returns whether the box changed.
    pub fn expand_point(&mut self, point: Point<T>) -> bool {
        self.expand_rect(&Self::from_point(point))
    }

    /// Grow to include `other`. Returns whether the box changed.
    pub fn expand_rect(&mut self, other: &Self) -> bool {
        let mut changed = false;
        if self.a.x > other.a.x {
            self.a.x = other.a.x;
            changed = true;
        }
        if self.a.y > other.a.y {
            self.a.y = other.a.y;
            changed = true;
        }
        if self.b.x < other.b.x {
            self.b.x = other.b.x;
            changed = true;
        }
        if self.b.y < other.b.y {
            self.b.y = other.b.y;
            changed = true;
        }
        changed
    }

    /// Clamp to `outer`. A box fully outside collapses onto the nearest edge.
    pub fn trim(&mut self, outer: &Self) {
        let clamp = |value: T, lo: T, hi: T| {
            if value < lo {
                lo
            } else if value > hi {
                hi
            } else {
                value
            }
        };
        self.a.x = clamp(self.a.x, outer.a.x, outer.b.x);
        self.a.y = clamp(self.a.y, outer.a.y, outer.b.y);
        self.b.x = clamp(self.b.x, outer.a.x, outer.b.x);
        self.b.y = clamp(self.b.y, outer.a.y, outer.b.y);
    }
}

impl RectD {
    /// Grow to include the point at `angle` on the circle of `radius` around
    /// `center`. Returns whether the box changed.
    pub fn expand_on_circle(&mut self, center: PointD, radius: f64, angle: f64) -> bool {
        let point = center + rotate_vector(PointD::new(radius, 0.0), angle);
        self.expand_point(point)
    }
}
