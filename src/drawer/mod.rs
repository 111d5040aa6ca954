//! World-space drawing façade.
//!
//! A [`Drawer`] owns a [`Canvas`] and paints shapes given in world units.
//! Before each shape it grows the canvas to the shape's world bounding box
//! (unless auto-resize is off), maps the shape to pixels and hands it to a
//! [`Painter`] borrowed from the current surface.
//!
//! # Example
//!
//! ```
//! use trueno_draw2d::prelude::*;
//!
//! let mut drawer = Drawer::new(20.0).unwrap();
//! drawer.set_draw_color(Rgba::RED);
//! drawer.draw_line((0.0, 0.0), (10.0, 0.0), 1.0).unwrap();
//! drawer.fill_circle([5.0, 14.0], 2.0).unwrap();
//!
//! let image = drawer.image();
//! assert_eq!(image.width(), 240);
//! ```

mod clothoid;

pub use clothoid::{
    clothoid_points, flatness_from_length_radius, length_from_radius_angle,
    radius_from_length_angle,
};

use crate::canvas::{Canvas, CanvasConfig};
use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{normalize_angle, normalize_angle_range, rotate_vector, PointD, PointI, RectD};
use crate::render::{CompositionMode, Painter};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::Path;

/// Two-component world coordinate accepted by [`Drawer`].
pub trait Vec2 {
    /// X component.
    fn x(&self) -> f64;

    /// Y component.
    fn y(&self) -> f64;

    /// Convert to the crate's point type.
    fn to_point(&self) -> PointD {
        PointD::new(self.x(), self.y())
    }
}

impl Vec2 for PointD {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Vec2 for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Vec2 for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

/// World-space drawing surface with automatic canvas growth.
#[derive(Debug, Clone)]
pub struct Drawer {
    canvas: Canvas,
    color: Rgba,
    mode: CompositionMode,
    auto_resize: bool,
}

impl Drawer {
    /// Drawer with default margin and background and the given scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not finite and positive.
    pub fn new(scale: f64) -> Result<Self> {
        Self::with_config(CanvasConfig::default().with_scale(scale))
    }

    /// Drawer with an empty canvas using `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: CanvasConfig) -> Result<Self> {
        Ok(Self::from_canvas(Canvas::new(config)?))
    }

    /// Drawer whose canvas already covers `size_box`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the canvas would
    /// be too large.
    pub fn with_box(size_box: &RectD, config: CanvasConfig) -> Result<Self> {
        Ok(Self::from_canvas(Canvas::with_box(size_box, config)?))
    }

    fn from_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            color: Rgba::BLACK,
            mode: CompositionMode::default(),
            auto_resize: true,
        }
    }

    /// Underlying canvas.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Current image.
    #[must_use]
    pub const fn image(&self) -> &Framebuffer {
        self.canvas.image()
    }

    /// Move the image out, leaving an empty canvas.
    pub fn take_image(&mut self) -> Framebuffer {
        self.canvas.take()
    }

    /// Write the current image to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is empty or cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.canvas.image().save(path)
    }

    /// Background for newly exposed canvas area.
    pub fn set_background(&mut self, color: Rgba) {
        self.canvas.set_background(color);
    }

    /// Color used by subsequent drawing calls.
    pub fn set_draw_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Color used by drawing calls.
    #[must_use]
    pub const fn draw_color(&self) -> Rgba {
        self.color
    }

    /// Composition mode used by subsequent drawing calls.
    pub fn set_composition_mode(&mut self, mode: CompositionMode) {
        if mode != self.mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "drawer composition mode changed");
        }
        self.mode = mode;
    }

    /// Composition mode used by drawing calls.
    #[must_use]
    pub const fn composition_mode(&self) -> CompositionMode {
        self.mode
    }

    /// Enable or disable growing the canvas before each shape.
    pub fn set_auto_resize(&mut self, enabled: bool) {
        self.auto_resize = enabled;
    }

    /// Whether the canvas grows before each shape.
    #[must_use]
    pub const fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    /// Grow the canvas to cover `rect`, regardless of auto-resize.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas would be too large.
    pub fn expand(&mut self, rect: &RectD) -> Result<bool> {
        self.canvas.resize(rect)
    }

    /// Grow the canvas to cover the square `[-half_extent, half_extent]²`.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas would be too large.
    pub fn resize_image(&mut self, half_extent: f64) -> Result<bool> {
        let mut rect = RectD::from_point(PointD::default());
        rect.expand_by(half_extent);
        self.expand(&rect)
    }

    fn reserve(&mut self, rect: &RectD) -> Result<()> {
        if self.auto_resize {
            self.canvas.resize(rect)?;
        }
        Ok(())
    }

    fn painter(&mut self) -> Painter<'_> {
        Painter::with_mode(self.canvas.image_mut(), self.mode)
    }

    fn to_pixel(&self, point: PointD) -> PointI {
        self.canvas.transform(point)
    }

    fn pixel_length(&self, length: f64) -> u32 {
        self.canvas.to_pixels(length) as u32
    }

    /// Blit `source` with its top-left corner at the world point `top_left`.
    /// The canvas is not grown.
    ///
    /// # Errors
    ///
    /// Returns an error only when the composition mode rejects the blit.
    pub fn draw_image<P: Vec2>(&mut self, top_left: P, source: &Framebuffer) -> Result<()> {
        let at = self.to_pixel(top_left.to_point());
        self.painter().draw_image(at, source)
    }

    /// Draw a segment of world `width` with flat ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot grow or the composition mode
    /// does not draw lines.
    pub fn draw_line<P: Vec2>(&mut self, from: P, to: P, width: f64) -> Result<()> {
        let (from, to) = (from.to_point(), to.to_point());
        let mut rect = RectD::minmax(from, to);
        rect.expand_by(width / 2.0);
        self.reserve(&rect)?;

        let (from, to) = (self.to_pixel(from), self.to_pixel(to));
        let width = self.pixel_length(width);
        let color = self.color;
        self.painter().draw_line(from, to, width, color)
    }

    /// Draw the part of a ring between `start` and `start + range` radians,
    /// counter-clockwise in world space.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot grow or the composition mode
    /// does not draw arcs.
    pub fn draw_arc<P: Vec2>(
        &mut self,
        center: P,
        radius: f64,
        width: f64,
        start: f64,
        range: f64,
    ) -> Result<()> {
        let center = center.to_point();
        self.reserve(&arc_box(center, radius, width, start, range))?;

        let pixel_center = self.to_pixel(center);
        let radius = self.pixel_length(radius);
        let width = self.pixel_length(width);
        let color = self.color;
        // pixel space is mirrored vertically
        self.painter().draw_arc(
            pixel_center,
            radius,
            width,
            -normalize_angle(start),
            -range,
            color,
        )
    }

    /// Draw a full ring.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot grow or the composition mode
    /// does not draw rings.
    pub fn draw_ring<P: Vec2>(&mut self, center: P, radius: f64, width: f64) -> Result<()> {
        let center = center.to_point();
        let mut rect = RectD::from_point(center);
        rect.expand_by(radius + width / 2.0);
        self.reserve(&rect)?;

        let pixel_center = self.to_pixel(center);
        let radius = self.pixel_length(radius);
        let width = self.pixel_length(width);
        let color = self.color;
        self.painter().draw_ring(pixel_center, radius, width, color)
    }

    /// Fill an axis-aligned rectangle given by its bottom-left corner.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot grow.
    pub fn fill_rect<P: Vec2>(&mut self, bottom_left: P, width: f64, height: f64) -> Result<()> {
        let bottom_left = bottom_left.to_point();
        let top_right = bottom_left + PointD::new(width, height);
        self.reserve(&RectD::minmax(bottom_left, top_right))?;

        let top_left = self.to_pixel(bottom_left + PointD::new(0.0, height));
        let width = self.pixel_length(width);
        let height = self.pixel_length(height);
        let color = self.color;
        self.painter().fill_rect(top_left, width, height, color)
    }

    /// Fill a rectangle of `width` × `height` centered on `center` and
    /// rotated counter-clockwise by `angle` radians.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot grow or the composition mode
    /// does not fill rotated rectangles.
    pub fn fill_rotated_rect<P: Vec2>(
        &mut self,
        center: P,
        width: f64,
        height: f64,
        angle: f64,
    ) -> Result<()> {
        let center = center.to_point();
        let along = rotate_vector(PointD::new(width / 2.0, 0.0), angle);
        let across = rotate_vector(PointD::new(0.0, height / 2.0), angle);
        let corners = [
            center + along + across,
            center - along + across,
            center - along - across,
            center + along - across,
        ];

        let mut rect = RectD::from_point(corners[0]);
        for corner in &corners[1..] {
            rect.expand_point(*corner);
        }
        self.reserve(&rect)?;

        let pixels = corners.map(|corner| self.to_pixel(corner));
        let color = self.color;
        self.painter().fill_rotated_rect(pixels, color)
    }

    /// Fill a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot grow or the composition mode
    /// does not fill circles.
    pub fn fill_circle<P: Vec2>(&mut self, center: P, radius: f64) -> Result<()> {
        let center = center.to_point();
        let mut rect = RectD::from_point(center);
        rect.expand_by(radius);
        self.reserve(&rect)?;

        let pixel_center = self.to_pixel(center);
        let radius = self.pixel_length(radius);
        let color = self.color;
        self.painter().fill_circle(pixel_center, radius, color)
    }

    /// Draw a clothoid of `length` and `flatness` as a chain of segments.
    ///
    /// The canvas grows once for the whole curve before any segment is
    /// painted.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot grow or the composition mode
    /// does not draw lines.
    pub fn draw_clothoid<P: Vec2>(
        &mut self,
        start: P,
        heading: f64,
        width: f64,
        length: f64,
        flatness: f64,
    ) -> Result<()> {
        let points = clothoid_points(start.to_point(), heading, length, flatness);

        let mut rect = RectD::from_point(points[0]);
        for point in &points[1..] {
            rect.expand_point(*point);
        }
        rect.expand_by(width / 2.0);
        self.reserve(&rect)?;
        tracing::trace!(segments = points.len() - 1, "draw_clothoid");

        let pixels: Vec<PointI> = points.iter().map(|point| self.to_pixel(*point)).collect();
        let width = self.pixel_length(width);
        let color = self.color;
        let mut painter = self.painter();
        for segment in pixels.windows(2) {
            painter.draw_line(segment[0], segment[1], width, color)?;
        }
        Ok(())
    }

    /// Draw the clothoid that reaches `radius` after `length`.
    ///
    /// # Errors
    ///
    /// See [`Drawer::draw_clothoid`].
    pub fn draw_clothoid_length_radius<P: Vec2>(
        &mut self,
        start: P,
        heading: f64,
        width: f64,
        length: f64,
        radius: f64,
    ) -> Result<()> {
        let flatness = flatness_from_length_radius(length, radius);
        self.draw_clothoid(start, heading, width, length, flatness)
    }

    /// Draw the clothoid whose heading turns by `angle` over `length`.
    ///
    /// # Errors
    ///
    /// See [`Drawer::draw_clothoid`].
    pub fn draw_clothoid_length_angle<P: Vec2>(
        &mut self,
        start: P,
        heading: f64,
        width: f64,
        length: f64,
        angle: f64,
    ) -> Result<()> {
        let radius = radius_from_length_angle(length, angle);
        self.draw_clothoid_length_radius(start, heading, width, length, radius)
    }

    /// Draw the clothoid that reaches `radius` once its heading has turned
    /// by `angle`.
    ///
    /// # Errors
    ///
    /// See [`Drawer::draw_clothoid`].
    pub fn draw_clothoid_radius_angle<P: Vec2>(
        &mut self,
        start: P,
        heading: f64,
        width: f64,
        radius: f64,
        angle: f64,
    ) -> Result<()> {
        let length = length_from_radius_angle(radius, angle);
        self.draw_clothoid_length_radius(start, heading, width, length, radius)
    }
}

/// World bounding box of an arc: both boundary rays on the inner and outer
/// radius plus every axis direction the sweep crosses.
fn arc_box(center: PointD, radius: f64, width: f64, start: f64, range: f64) -> RectD {
    let outer = radius + width / 2.0;
    let inner = (radius - width / 2.0).max(0.0);
    if range.abs() >= TAU {
        let mut rect = RectD::from_point(center);
        rect.expand_by(outer);
        return rect;
    }

    let (min, max) = normalize_angle_range(start, range);
    let mut rect = RectD::from_point(center + rotate_vector(PointD::new(outer, 0.0), min));
    rect.expand_on_circle(center, outer, max);
    rect.expand_on_circle(center, inner, min);
    rect.expand_on_circle(center, inner, max);

    let mut quarter = (min / FRAC_PI_2).ceil();
    while quarter * FRAC_PI_2 <= max {
        rect.expand_on_circle(center, outer, quarter * FRAC_PI_2);
        quarter += 1.0;
    }
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn drawer(scale: f64, margin: f64) -> Drawer {
        Drawer::with_config(
            CanvasConfig::default()
                .with_scale(scale)
                .with_margin(margin)
                .with_background(Rgba::WHITE),
        )
        .unwrap()
    }

    fn pixel_at(drawer: &Drawer, x: f64, y: f64) -> Option<Rgba> {
        let pixel = drawer.canvas().transform_coords(x, y);
        drawer.image().get_pixel(pixel.x as u32, pixel.y as u32)
    }

    #[test]
    fn test_vec2_impls() {
        assert_eq!((1.0, 2.0).to_point(), PointD::new(1.0, 2.0));
        assert_eq!([3.0, 4.0].to_point(), PointD::new(3.0, 4.0));
        assert_eq!(PointD::new(5.0, 6.0).to_point(), PointD::new(5.0, 6.0));
    }

    #[test]
    fn test_defaults() {
        let drawer = Drawer::new(10.0).unwrap();
        assert!(drawer.auto_resize());
        assert_eq!(drawer.draw_color(), Rgba::BLACK);
        assert_eq!(drawer.composition_mode(), CompositionMode::Destination);
        assert!(drawer.image().is_empty());
        assert!(Drawer::new(0.0).is_err());
    }

    #[test]
    fn test_arc_box_upper_half() {
        let rect = arc_box(PointD::new(5.0, 5.0), 5.0, 1.0, 0.0, PI);
        assert_abs_diff_eq!(rect.a.x, -0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.b.x, 10.5, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.a.y, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.b.y, 10.5, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_box_quarter_across_seam() {
        let rect = arc_box(PointD::default(), 2.0, 0.0, -FRAC_PI_2 / 2.0, FRAC_PI_2);
        // crosses angle 0 only
        assert_abs_diff_eq!(rect.b.x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.a.x, 2.0_f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(rect.b.y, 2.0_f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(rect.a.y, -(2.0_f64.sqrt()), epsilon = 1e-9);
    }

    #[test]
    fn test_arc_box_full_turn() {
        let rect = arc_box(PointD::new(1.0, 1.0), 2.0, 2.0, 0.3, -7.0);
        assert_eq!(rect, RectD::minmax_coords(-2.0, -2.0, 4.0, 4.0));
    }

    #[test]
    fn test_line_grows_canvas() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.draw_line((0.0, 0.0), (4.0, 0.0), 1.0).unwrap();
        assert_eq!(drawer.image().width(), 50);
        assert_eq!(drawer.image().height(), 10);
        assert_eq!(pixel_at(&drawer, 2.0, 0.0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_fill_rect_bottom_left_anchor() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.resize_image(5.0).unwrap();
        drawer.set_draw_color(Rgba::RED);
        drawer.fill_rect([1.0, 1.0], 2.0, 1.0).unwrap();

        assert_eq!(pixel_at(&drawer, 1.5, 1.5), Some(Rgba::RED));
        assert_eq!(pixel_at(&drawer, 2.9, 1.9), Some(Rgba::RED));
        assert_eq!(pixel_at(&drawer, 1.5, 0.5), Some(Rgba::WHITE));
        assert_eq!(pixel_at(&drawer, 1.5, 2.5), Some(Rgba::WHITE));
        assert_eq!(pixel_at(&drawer, 3.5, 1.5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rotated_rect() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.resize_image(5.0).unwrap();
        drawer.fill_rotated_rect((0.0, 0.0), 6.0, 1.0, FRAC_PI_2).unwrap();

        // rotated by 90 degrees the long side is vertical
        assert_eq!(pixel_at(&drawer, 0.0, 2.5), Some(Rgba::BLACK));
        assert_eq!(pixel_at(&drawer, 0.0, -2.5), Some(Rgba::BLACK));
        assert_eq!(pixel_at(&drawer, 2.5, 0.0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_arc_is_drawn_in_world_orientation() {
        let mut drawer = drawer(10.0, 0.5);
        drawer.resize_image(6.0).unwrap();
        drawer.draw_arc((0.0, 0.0), 4.0, 1.0, 0.0, PI).unwrap();

        // upper half in world space
        assert_eq!(pixel_at(&drawer, 0.0, 4.0), Some(Rgba::BLACK));
        assert_eq!(pixel_at(&drawer, 0.0, -4.0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_ring_and_circle() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.draw_ring((0.0, 0.0), 3.0, 1.0).unwrap();
        assert_eq!(drawer.image().width(), 70);
        assert_eq!(pixel_at(&drawer, 0.0, 0.0), Some(Rgba::WHITE));
        assert_eq!(pixel_at(&drawer, 3.0, 0.0), Some(Rgba::BLACK));

        drawer.set_draw_color(Rgba::BLUE);
        drawer.fill_circle((0.0, 0.0), 1.0).unwrap();
        assert_eq!(pixel_at(&drawer, 0.0, 0.0), Some(Rgba::BLUE));
    }

    #[test]
    fn test_auto_resize_disabled() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.resize_image(1.0).unwrap();
        drawer.set_auto_resize(false);
        drawer.draw_line((0.0, 0.0), (10.0, 0.0), 1.0).unwrap();

        assert_eq!(drawer.image().width(), 20);
        assert_eq!(pixel_at(&drawer, 0.5, 0.0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_huge_circle_without_auto_resize() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.resize_image(1.0).unwrap();
        drawer.set_auto_resize(false);
        drawer.fill_circle((0.0, 0.0), 1e9).unwrap();

        let image = drawer.image();
        assert_eq!(image.width(), 20);
        for y in 0..image.height() {
            for x in 0..image.width() {
                assert_eq!(image.get_pixel(x, y), Some(Rgba::BLACK));
            }
        }
    }

    #[test]
    fn test_difference_mode_rejects_shapes() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.set_composition_mode(CompositionMode::Difference);
        assert!(drawer.fill_circle((0.0, 0.0), 1.0).is_err());
        assert!(drawer.fill_rect((0.0, 0.0), 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_draw_image_at_world_point() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.resize_image(1.0).unwrap();
        let mut stamp = Framebuffer::new(2, 2).unwrap();
        stamp.clear(Rgba::GREEN);
        drawer.draw_image((0.0, 0.0), &stamp).unwrap();

        assert_eq!(drawer.image().get_pixel(10, 10), Some(Rgba::GREEN));
        assert_eq!(drawer.image().get_pixel(11, 11), Some(Rgba::GREEN));
        assert_eq!(drawer.image().get_pixel(12, 12), Some(Rgba::WHITE));
    }

    #[test]
    fn test_clothoid_expands_once_and_paints() {
        let mut drawer = drawer(100.0, 0.0);
        drawer.draw_clothoid((0.0, 0.0), 0.0, 0.01, 1.0, 1.0).unwrap();
        let size_box = drawer.canvas().size_box().unwrap();
        assert!(size_box.b.x > 0.9);
        assert!(size_box.b.y > 0.1);
        // still on the start row, the curve has barely risen
        assert_eq!(pixel_at(&drawer, 0.1, 0.0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_clothoid_variants_agree() {
        let mut by_flatness = drawer(50.0, 0.5);
        by_flatness.resize_image(3.0).unwrap();
        by_flatness
            .draw_clothoid((0.0, 0.0), 0.0, 0.02, 2.0, 2.0)
            .unwrap();

        // A = sqrt(2 L R) = 2 for L = 2, R = 1
        let mut by_radius = drawer(50.0, 0.5);
        by_radius.resize_image(3.0).unwrap();
        by_radius
            .draw_clothoid_length_radius((0.0, 0.0), 0.0, 0.02, 2.0, 1.0)
            .unwrap();

        // R = L / (2θ) = 1 for θ = 1
        let mut by_angle = drawer(50.0, 0.5);
        by_angle.resize_image(3.0).unwrap();
        by_angle
            .draw_clothoid_length_angle((0.0, 0.0), 0.0, 0.02, 2.0, 1.0)
            .unwrap();

        // L = 2θR = 2
        let mut by_radius_angle = drawer(50.0, 0.5);
        by_radius_angle.resize_image(3.0).unwrap();
        by_radius_angle
            .draw_clothoid_radius_angle((0.0, 0.0), 0.0, 0.02, 1.0, 1.0)
            .unwrap();

        assert_eq!(by_flatness.image(), by_radius.image());
        assert_eq!(by_flatness.image(), by_angle.image());
        assert_eq!(by_flatness.image(), by_radius_angle.image());
    }

    #[test]
    fn test_take_image_resets() {
        let mut drawer = drawer(10.0, 0.0);
        drawer.fill_circle((0.0, 0.0), 1.0).unwrap();
        let image = drawer.take_image();
        assert_eq!(image.width(), 20);
        assert!(drawer.image().is_empty());
        assert!(drawer.canvas().is_empty());
    }

    #[test]
    fn test_with_box() {
        let drawer = Drawer::with_box(
            &RectD::minmax_coords(0.0, 0.0, 2.0, 1.0),
            CanvasConfig::default().with_background(Rgba::BLUE),
        )
        .unwrap();
        assert_eq!(drawer.image().width(), 30);
        assert_eq!(drawer.image().height(), 20);
        assert_eq!(drawer.image().get_pixel(0, 0), Some(Rgba::BLUE));
    }
}
