//! Clothoid (Euler spiral) path integration.
//!
//! The curve is sampled in normalized arc length `s = l / A`, where `A` is
//! the flatness. The heading at `s` is `s²` (mirrored for negative flatness)
//! plus the start heading, and each step advances `A · ds` world units.

use crate::geometry::PointD;

/// Step in normalized arc length.
pub(crate) const STEP: f64 = 0.01;

/// Upper bound on integration steps for a single curve.
const MAX_STEPS: usize = 1_000_000;

/// Flatness `A = sqrt(2 |L R|)` of the clothoid reaching radius `radius`
/// after `length`. The sign follows `radius`, so negative radii turn
/// clockwise.
#[must_use]
pub fn flatness_from_length_radius(length: f64, radius: f64) -> f64 {
    (2.0 * (length * radius).abs()).sqrt().copysign(radius)
}

/// Radius `L / (2θ)` reached after `length` when the heading has turned by
/// `angle`.
#[must_use]
pub fn radius_from_length_angle(length: f64, angle: f64) -> f64 {
    length / (2.0 * angle)
}

/// Length `2θ |R|` after which the heading has turned by `angle` when the
/// curve reaches `radius`.
#[must_use]
pub fn length_from_radius_angle(radius: f64, angle: f64) -> f64 {
    2.0 * angle * radius.abs()
}

/// Sample a clothoid starting at `start` with `heading` radians.
///
/// Negative `length` travels backward. An infinite `flatness` is a straight
/// line; a zero flatness or length yields only the start point.
#[must_use]
pub fn clothoid_points(start: PointD, heading: f64, length: f64, flatness: f64) -> Vec<PointD> {
    if length == 0.0 || flatness == 0.0 || !length.is_finite() || flatness.is_nan() {
        return vec![start];
    }
    if flatness.is_infinite() {
        let direction = PointD::new(heading.cos(), heading.sin());
        return vec![start, start + direction * length];
    }

    let scale = flatness.abs();
    let turn = flatness.signum();
    let ds = STEP.copysign(length);
    let steps = (((length / scale).abs() / STEP) as usize).min(MAX_STEPS);

    let mut points = Vec::with_capacity(steps + 1);
    let mut point = start;
    points.push(point);
    for i in 0..steps {
        let s = i as f64 * ds;
        let angle = turn * s * s + heading;
        point += PointD::new(angle.cos(), angle.sin()) * (ds * scale);
        points.push(point);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn path_length(points: &[PointD]) -> f64 {
        points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
    }

    #[test]
    fn test_step_count_and_length() {
        let points = clothoid_points(PointD::default(), 0.0, 1.0, 1.0);
        assert_eq!(points.len(), 101);
        assert_abs_diff_eq!(path_length(&points), 1.0, epsilon = 1e-9);

        let points = clothoid_points(PointD::default(), 0.0, 3.0, 2.0);
        assert_eq!(points.len(), 151);
        assert_abs_diff_eq!(path_length(&points), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_first_step_follows_heading() {
        let points = clothoid_points(PointD::new(1.0, 1.0), FRAC_PI_2, 1.0, 1.0);
        let first = points[1] - points[0];
        assert_abs_diff_eq!(first.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(first.y, 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_curve_turns_left_for_positive_flatness() {
        let points = clothoid_points(PointD::default(), 0.0, 1.0, 1.0);
        let end = points[points.len() - 1];
        assert!(end.y > 0.0);
        assert!(end.x > 0.9);
    }

    #[test]
    fn test_negative_flatness_mirrors() {
        let left = clothoid_points(PointD::default(), 0.0, 2.0, 1.5);
        let right = clothoid_points(PointD::default(), 0.0, 2.0, -1.5);
        assert_eq!(left.len(), right.len());
        for (l, r) in left.iter().zip(&right) {
            assert_abs_diff_eq!(l.x, r.x, epsilon = 1e-12);
            assert_abs_diff_eq!(l.y, -r.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_length_travels_backward() {
        let points = clothoid_points(PointD::default(), 0.0, -1.0, 1.0);
        assert_eq!(points.len(), 101);
        assert!(points[1].x < 0.0);
        assert_abs_diff_eq!(path_length(&points), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_inputs() {
        let start = PointD::new(2.0, 3.0);
        assert_eq!(clothoid_points(start, 0.0, 0.0, 1.0), vec![start]);
        assert_eq!(clothoid_points(start, 0.0, 1.0, 0.0), vec![start]);
        assert_eq!(clothoid_points(start, 0.0, 1.0, f64::NAN), vec![start]);

        let straight = clothoid_points(start, 0.0, 4.0, f64::INFINITY);
        assert_eq!(straight, vec![start, PointD::new(6.0, 3.0)]);
    }

    #[test]
    fn test_flatness_relations() {
        assert_abs_diff_eq!(flatness_from_length_radius(2.0, 4.0), 4.0);
        assert_abs_diff_eq!(flatness_from_length_radius(2.0, -4.0), -4.0);
        assert_abs_diff_eq!(flatness_from_length_radius(-2.0, 4.0), 4.0);
        assert!(flatness_from_length_radius(2.0, f64::INFINITY).is_infinite());

        assert_abs_diff_eq!(radius_from_length_angle(3.0, 0.5), 3.0);
        assert!(radius_from_length_angle(3.0, 0.0).is_infinite());
        assert_abs_diff_eq!(length_from_radius_angle(-3.0, 0.5), 3.0);
    }
}
