//! Primitive rendering functions.
//!
//! Destination-mode rasterizers: every covered pixel is overwritten with the
//! draw color. All coordinates are pixel space with Y pointing down; shapes
//! may extend past the framebuffer and are clipped.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{normalize_angle_range, Linear, PointI, Ray, RectI};
use std::f64::consts::{PI, SQRT_2, TAU};

// ============================================================================
// Clipping helpers
// ============================================================================

/// Clip an inclusive pixel rectangle to the framebuffer.
///
/// Returns `None` when nothing of `rect` is visible.
pub(crate) fn clip_rect(fb: &Framebuffer, rect: RectI) -> Option<RectI> {
    if fb.is_empty() || !rect.is_valid() {
        return None;
    }
    let bounds = RectI::minmax_coords(0, 0, i64::from(fb.width()) - 1, i64::from(fb.height()) - 1);
    if rect.b.x < bounds.a.x || rect.a.x > bounds.b.x || rect.b.y < bounds.a.y || rect.a.y > bounds.b.y {
        return None;
    }
    let mut clipped = rect;
    clipped.trim(&bounds);
    Some(clipped)
}

/// Fill an inclusive pixel rectangle.
fn fill_span(fb: &mut Framebuffer, rect: RectI, color: Rgba) {
    if let Some(rect) = clip_rect(fb, rect) {
        fb.fill_rect(
            rect.a.x as u32,
            rect.a.y as u32,
            (rect.width() + 1) as u32,
            (rect.height() + 1) as u32,
            color,
        );
    }
}

/// Paint every pixel of `rect` for which `inside` holds.
fn fill_where<F>(fb: &mut Framebuffer, rect: RectI, color: Rgba, inside: F)
where
    F: Fn(i64, i64) -> bool,
{
    let Some(rect) = clip_rect(fb, rect) else {
        return;
    };
    for y in rect.a.y..=rect.b.y {
        for x in rect.a.x..=rect.b.x {
            if inside(x, y) {
                fb.set_pixel(x as u32, y as u32, color);
            }
        }
    }
}

// ============================================================================
// Shape tests
// ============================================================================

/// Square of a pixel distance; `u32` radii overflow `i64` once squared.
fn squared(value: i64) -> i128 {
    i128::from(value) * i128::from(value)
}

/// Half-side of the largest centered square strictly inside a circle.
fn inscribed_half_side(radius: i64) -> i64 {
    let r_sq = squared(radius);
    let mut half = (radius as f64 / SQRT_2) as i64;
    while half > 0 && 2 * squared(half) >= r_sq {
        half -= 1;
    }
    half
}

/// Annulus around a pixel center.
///
/// With a zero inner radius this is the open disc `d² < outer²`; otherwise
/// the closed ring `inner² <= d² <= outer²`.
#[derive(Debug, Clone, Copy)]
struct Annulus {
    center: PointI,
    inner: i64,
    outer: i64,
}

impl Annulus {
    fn disc(center: PointI, radius: u32) -> Self {
        Self {
            center,
            inner: 0,
            outer: i64::from(radius),
        }
    }

    fn ring(center: PointI, radius: u32, width: u32) -> Self {
        let radius = i64::from(radius);
        let half = i64::from(width / 2);
        Self {
            center,
            inner: (radius - half).max(0),
            outer: radius + half,
        }
    }

    const fn is_disc(&self) -> bool {
        self.inner == 0
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        let dist_sq = squared(x - self.center.x) + squared(y - self.center.y);
        if self.is_disc() {
            dist_sq < squared(self.outer)
        } else {
            dist_sq >= squared(self.inner) && dist_sq <= squared(self.outer)
        }
    }

    /// Centered square lying wholly inside the disc, or wholly inside the
    /// hole of a ring.
    fn core(&self) -> RectI {
        let radius = if self.is_disc() { self.outer } else { self.inner };
        let half = inscribed_half_side(radius);
        let mut core = RectI::from_point(self.center);
        core.expand_by(half);
        core
    }

    /// Bounding box split into the core square and the four caps around it.
    fn caps(&self) -> [RectI; 4] {
        let (c, r) = (self.center, self.outer);
        let core = self.core();
        [
            RectI::minmax_coords(c.x - r, c.y - r, c.x + r, core.a.y - 1),
            RectI::minmax_coords(c.x - r, core.b.y + 1, c.x + r, c.y + r),
            RectI::minmax_coords(c.x - r, core.a.y, core.a.x - 1, core.b.y),
            RectI::minmax_coords(core.b.x + 1, core.a.y, c.x + r, core.b.y),
        ]
    }

    fn paint(&self, fb: &mut Framebuffer, color: Rgba) {
        if self.outer <= 0 {
            return;
        }
        if self.is_disc() {
            fill_span(fb, self.core(), color);
        }
        for cap in self.caps() {
            if cap.is_valid() {
                fill_where(fb, cap, color, |x, y| self.contains(x, y));
            }
        }
    }
}

/// Angular wedge between two rays through the origin, boundaries inclusive.
#[derive(Debug, Clone, Copy)]
struct Wedge {
    from: Ray,
    to: Ray,
    wide: bool,
}

impl Wedge {
    /// Wedge sweeping counter-clockwise from `min` to `max` radians.
    fn new(min: f64, max: f64) -> Self {
        Self {
            from: Ray::from_angle(min),
            to: Ray::from_angle(max),
            wide: max - min > PI,
        }
    }

    fn contains(&self, dx: i64, dy: i64) -> bool {
        let (x, y) = (dx as f64, dy as f64);
        let from_side = self.from.side(x, y);
        let to_side = self.to.side(x, y);
        if self.wide {
            !(from_side < 0.0 && to_side > 0.0)
        } else {
            from_side >= 0.0 && to_side <= 0.0
        }
    }
}

// ============================================================================
// Primitives
// ============================================================================

/// Copy `source` with its top-left corner at `at`.
pub fn draw_image(fb: &mut Framebuffer, at: PointI, source: &Framebuffer) {
    fb.paste_image(at.x, at.y, source);
}

/// Draw a thick segment with flat ends.
///
/// Pixels are painted when they lie between the perpendiculars through both
/// endpoints and strictly closer than half of `width` to the center line.
/// Widths up to two pixels paint a one pixel wide line. A zero-length segment
/// paints nothing.
pub fn draw_line(fb: &mut Framebuffer, from: PointI, to: PointI, width: u32, color: Rgba) {
    let line = to - from;
    if line == PointI::default() {
        return;
    }
    let half = (f64::from(width) / 2.0).max(0.5);

    let mut bbox = RectI::minmax(from, to);
    bbox.expand_by(half.ceil() as i64);

    // perpendicular through the origin; side() is the dot product with `line`
    let ortho = Ray::new(line.ortho().to_f64());
    let parallel = Linear::from_parallel(PointI::default(), line);

    fill_where(fb, bbox, color, |x, y| {
        let offset = PointI::new(x, y) - from;
        ortho.side_i(offset) >= 0.0
            && ortho.side_i(offset - line) <= 0.0
            && parallel.distance(offset) < half
    });
}

/// Fill the open disc `d² < radius²`.
pub fn fill_circle(fb: &mut Framebuffer, center: PointI, radius: u32, color: Rgba) {
    Annulus::disc(center, radius).paint(fb, color);
}

/// Draw the ring `max(radius - width/2, 0) <= d <= radius + width/2`.
///
/// A ring whose hole collapses is a filled circle of the outer radius.
pub fn draw_ring(fb: &mut Framebuffer, center: PointI, radius: u32, width: u32, color: Rgba) {
    Annulus::ring(center, radius, width).paint(fb, color);
}

/// Draw the part of a ring inside an angular wedge.
///
/// The wedge starts at `start` radians and sweeps by `range`; a negative
/// range sweeps clockwise. Sweeps of a full turn or more draw the whole ring,
/// a zero sweep draws nothing.
pub fn draw_arc(
    fb: &mut Framebuffer,
    center: PointI,
    radius: u32,
    width: u32,
    start: f64,
    range: f64,
    color: Rgba,
) {
    if range.abs() >= TAU {
        draw_ring(fb, center, radius, width, color);
        return;
    }
    let (min, max) = normalize_angle_range(start, range);
    if max <= min {
        return;
    }

    let annulus = Annulus::ring(center, radius, width);
    if annulus.outer <= 0 {
        return;
    }
    let wedge = Wedge::new(min, max);
    let inside = |x: i64, y: i64| {
        annulus.contains(x, y) && wedge.contains(x - center.x, y - center.y)
    };

    if annulus.is_disc() {
        fill_where(fb, annulus.core(), color, &inside);
    }
    for cap in annulus.caps() {
        if cap.is_valid() {
            fill_where(fb, cap, color, &inside);
        }
    }
}

/// Fill an axis-aligned rectangle with its top-left pixel at `top_left`.
pub fn fill_rect(fb: &mut Framebuffer, top_left: PointI, width: u32, height: u32, color: Rgba) {
    if width == 0 || height == 0 {
        return;
    }
    let bottom_right = top_left + PointI::new(i64::from(width) - 1, i64::from(height) - 1);
    fill_span(fb, RectI::new(top_left, bottom_right), color);
}

/// Fill the convex quadrilateral with the given corners in winding order.
///
/// Either winding is accepted; pixels on an edge are inside.
pub fn fill_rotated_rect(fb: &mut Framebuffer, corners: [PointI; 4], color: Rgba) {
    let edges: [Linear; 4] =
        std::array::from_fn(|i| Linear::from_points(corners[i], corners[(i + 1) % 4]));

    let mut bbox = RectI::from_point(corners[0]);
    for corner in &corners[1..] {
        bbox.expand_point(*corner);
    }

    fill_where(fb, bbox, color, |x, y| {
        let point = PointI::new(x, y);
        let sides = edges.map(|edge| edge.side(point));
        sides.iter().all(|&side| side >= 0) || sides.iter().all(|&side| side <= 0)
    });
}
