//! Angle normalization, rotation and quadrant-aware angle comparison.

use super::PointD;
use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Map any angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let value = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if value >= TAU {
        0.0
    } else {
        value
    }
}

/// Normalize a start angle and a signed sweep into an ordered `(min, max)`.
///
/// A negative `range` sweeps backward, so the wedge starts at
/// `start + range`. A sweep above two full turns is folded down by exactly one
/// turn, so it stays at least a full circle. `min` lands in `[0, 2π)` and
/// `max = min + sweep`, which is below `6π` for sweeps under three turns, so
/// wedges crossing the 0/2π seam need no wraparound. `min < max` for every
/// non-zero range. Rasterizers treat any sweep of `2π` or more as a full ring
/// before calling this.
#[must_use]
pub fn normalize_angle_range(start: f64, range: f64) -> (f64, f64) {
    let (start, mut sweep) = if range < 0.0 {
        (start + range, -range)
    } else {
        (start, range)
    };
    if sweep > 2.0 * TAU {
        sweep -= TAU;
    }
    let min = normalize_angle(start);
    (min, min + sweep)
}

/// Rotate `vector` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate_vector(vector: PointD, angle: f64) -> PointD {
    let (sin, cos) = angle.sin_cos();
    PointD::new(vector.x * cos - vector.y * sin, vector.x * sin + vector.y * cos)
}

/// Angle of the direction `(x, y)` from the +X axis in `[0, 2π)`.
///
/// The zero vector maps to `π/2`.
#[must_use]
pub fn angle_from_ox(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return FRAC_PI_2;
    }
    normalize_angle(y.atan2(x))
}

/// Whether a normalized `angle` lies in the wedge from `from` to `to`.
///
/// When `from > to` the wedge wraps through zero.
#[must_use]
pub fn is_in_range_angle(angle: f64, from: f64, to: f64) -> bool {
    if from < to {
        angle >= from && angle <= to
    } else {
        angle > from || angle < to
    }
}

/// Angle represented by a quadrant and the raw tangent within it.
///
/// Ordering compares the quadrant first, then the tangent, which gives a total
/// order over `[0, 2π)` without `atan` and without the tangent's discontinuity
/// at ±90°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangens {
    /// Raw tangent `y / x`.
    pub value: f64,
    /// Whether the direction has a non-negative X component.
    pub pos_x: bool,
}

impl Tangens {
    /// Create a tangens from its parts.
    #[must_use]
    pub const fn new(value: f64, pos_x: bool) -> Self {
        Self { value, pos_x }
    }

    /// Tangens of an angle normalized to `[0, 2π)`.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let value = angle.tan();
        let pos_x = !(FRAC_PI_2..3.0 * FRAC_PI_2).contains(&angle);
        Self::new(value, pos_x)
    }

    /// Tangens of the direction `(x, y)`. The zero vector maps to +90°.
    #[must_use]
    pub fn from_coords(x: f64, y: f64) -> Self {
        let value = y / x;
        if value.is_nan() {
            return Self::new(FRAC_PI_2.tan(), true);
        }
        Self::new(value, x >= 0.0)
    }

    /// Quadrant index in `1..=4`, counter-clockwise from +X.
    #[must_use]
    pub fn quarter(&self) -> u8 {
        match (self.pos_x, self.value < 0.0) {
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
            (true, true) => 4,
        }
    }

    /// Whether `self` lies in the wedge from `min` to `max`, wrapping through
    /// zero when `max < min`.
    #[must_use]
    pub fn is_in_range(&self, min: &Self, max: &Self) -> bool {
        if max >= min {
            self >= min && self <= max
        } else {
            self > min || self < max
        }
    }
}

impl PartialOrd for Tangens {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.quarter().cmp(&other.quarter()) {
            Ordering::Equal => self.value.partial_cmp(&other.value),
            ordering => Some(ordering),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_normalize_angle_in_range(angle in -1000.0f64..1000.0) {
            let value = normalize_angle(angle);
            prop_assert!((0.0..TAU).contains(&value));
        }

        /// min < max, with min in [0, 4π) and max in [0, 6π)
        #[test]
        fn prop_normalize_angle_range_bounds(
            start in -50.0f64..50.0,
            range in prop_oneof![-18.0f64..-1e-6, 1e-6f64..18.0],
        ) {
            let (min, max) = normalize_angle_range(start, range);
            prop_assert!(min < max);
            prop_assert!((0.0..2.0 * TAU).contains(&min));
            prop_assert!((0.0..3.0 * TAU).contains(&max));
        }

        /// Sweeping backward from θ by r is the wedge from θ - r forward by r.
        #[test]
        fn prop_backward_sweep_matches_forward(
            start in -10.0f64..10.0,
            magnitude in 1e-3f64..6.0,
        ) {
            let (min_back, max_back) = normalize_angle_range(start, -magnitude);
            let (min_fwd, max_fwd) = normalize_angle_range(start - magnitude, magnitude);
            prop_assert!((min_back - min_fwd).abs() < 1e-9);
            prop_assert!((max_back - max_fwd).abs() < 1e-9);
        }
    }
}
