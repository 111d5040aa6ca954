//! Composition-mode aware painter.

use super::{difference, primitives, CompositionMode};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::PointI;

/// Rasterizer operations shared by every composition mode.
///
/// Modes implement the primitives they support; the rest report
/// [`Error::UnsupportedOperation`].
pub trait RasterOps {
    /// Mode these operations implement.
    fn mode(&self) -> CompositionMode;

    /// Blit `source` with its top-left corner at `at`.
    fn draw_image(&self, fb: &mut Framebuffer, at: PointI, source: &Framebuffer) -> Result<()>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(
        &self,
        fb: &mut Framebuffer,
        top_left: PointI,
        width: u32,
        height: u32,
        color: Rgba,
    ) -> Result<()>;

    /// Draw a thick segment.
    fn draw_line(
        &self,
        _fb: &mut Framebuffer,
        _from: PointI,
        _to: PointI,
        _width: u32,
        _color: Rgba,
    ) -> Result<()> {
        Err(unsupported("draw_line", self.mode()))
    }

    /// Draw an angular slice of a ring.
    #[allow(clippy::too_many_arguments)]
    fn draw_arc(
        &self,
        _fb: &mut Framebuffer,
        _center: PointI,
        _radius: u32,
        _width: u32,
        _start: f64,
        _range: f64,
        _color: Rgba,
    ) -> Result<()> {
        Err(unsupported("draw_arc", self.mode()))
    }

    /// Draw a ring.
    fn draw_ring(
        &self,
        _fb: &mut Framebuffer,
        _center: PointI,
        _radius: u32,
        _width: u32,
        _color: Rgba,
    ) -> Result<()> {
        Err(unsupported("draw_ring", self.mode()))
    }

    /// Fill a disc.
    fn fill_circle(
        &self,
        _fb: &mut Framebuffer,
        _center: PointI,
        _radius: u32,
        _color: Rgba,
    ) -> Result<()> {
        Err(unsupported("fill_circle", self.mode()))
    }

    /// Fill a convex quadrilateral.
    fn fill_rotated_rect(
        &self,
        _fb: &mut Framebuffer,
        _corners: [PointI; 4],
        _color: Rgba,
    ) -> Result<()> {
        Err(unsupported("fill_rotated_rect", self.mode()))
    }
}

fn unsupported(operation: &'static str, mode: CompositionMode) -> Error {
    Error::UnsupportedOperation { operation, mode }
}

/// Overwrites covered pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DestinationWorker;

impl RasterOps for DestinationWorker {
    fn mode(&self) -> CompositionMode {
        CompositionMode::Destination
    }

    fn draw_image(&self, fb: &mut Framebuffer, at: PointI, source: &Framebuffer) -> Result<()> {
        primitives::draw_image(fb, at, source);
        Ok(())
    }

    fn fill_rect(
        &self,
        fb: &mut Framebuffer,
        top_left: PointI,
        width: u32,
        height: u32,
        color: Rgba,
    ) -> Result<()> {
        primitives::fill_rect(fb, top_left, width, height, color);
        Ok(())
    }

    fn draw_line(
        &self,
        fb: &mut Framebuffer,
        from: PointI,
        to: PointI,
        width: u32,
        color: Rgba,
    ) -> Result<()> {
        primitives::draw_line(fb, from, to, width, color);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_arc(
        &self,
        fb: &mut Framebuffer,
        center: PointI,
        radius: u32,
        width: u32,
        start: f64,
        range: f64,
        color: Rgba,
    ) -> Result<()> {
        primitives::draw_arc(fb, center, radius, width, start, range, color);
        Ok(())
    }

    fn draw_ring(
        &self,
        fb: &mut Framebuffer,
        center: PointI,
        radius: u32,
        width: u32,
        color: Rgba,
    ) -> Result<()> {
        primitives::draw_ring(fb, center, radius, width, color);
        Ok(())
    }

    fn fill_circle(
        &self,
        fb: &mut Framebuffer,
        center: PointI,
        radius: u32,
        color: Rgba,
    ) -> Result<()> {
        primitives::fill_circle(fb, center, radius, color);
        Ok(())
    }

    fn fill_rotated_rect(
        &self,
        fb: &mut Framebuffer,
        corners: [PointI; 4],
        color: Rgba,
    ) -> Result<()> {
        primitives::fill_rotated_rect(fb, corners, color);
        Ok(())
    }
}

/// Blends covered pixels by absolute difference. Only blits and rectangle
/// fills are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifferenceWorker;

impl RasterOps for DifferenceWorker {
    fn mode(&self) -> CompositionMode {
        CompositionMode::Difference
    }

    fn draw_image(&self, fb: &mut Framebuffer, at: PointI, source: &Framebuffer) -> Result<()> {
        difference::draw_image(fb, at, source);
        Ok(())
    }

    fn fill_rect(
        &self,
        fb: &mut Framebuffer,
        top_left: PointI,
        width: u32,
        height: u32,
        color: Rgba,
    ) -> Result<()> {
        difference::fill_rect(fb, top_left, width, height, color);
        Ok(())
    }
}

/// Paints primitives onto a borrowed framebuffer using the selected
/// composition mode.
///
/// The painter borrows its surface for as long as it lives, so a surface
/// that gets reallocated is simply borrowed again by a new painter.
///
/// # Example
///
/// ```
/// use trueno_draw2d::prelude::*;
///
/// let mut fb = Framebuffer::new(20, 20).unwrap();
/// let mut painter = Painter::new(&mut fb);
/// painter.fill_circle(PointI::new(10, 10), 5, Rgba::RED).unwrap();
///
/// painter.set_mode(CompositionMode::Difference);
/// assert!(painter.fill_circle(PointI::new(10, 10), 5, Rgba::RED).is_err());
/// assert_eq!(fb.get_pixel(10, 10), Some(Rgba::RED));
/// ```
#[derive(Debug)]
pub struct Painter<'a> {
    surface: &'a mut Framebuffer,
    mode: CompositionMode,
}

impl<'a> Painter<'a> {
    /// Painter in [`CompositionMode::Destination`].
    pub fn new(surface: &'a mut Framebuffer) -> Self {
        Self::with_mode(surface, CompositionMode::default())
    }

    /// Painter in the given mode.
    pub fn with_mode(surface: &'a mut Framebuffer, mode: CompositionMode) -> Self {
        Self { surface, mode }
    }

    /// Active composition mode.
    #[must_use]
    pub const fn mode(&self) -> CompositionMode {
        self.mode
    }

    /// Switch composition mode.
    pub fn set_mode(&mut self, mode: CompositionMode) {
        if mode != self.mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "composition mode changed");
        }
        self.mode = mode;
    }

    /// Target surface.
    #[must_use]
    pub fn surface(&self) -> &Framebuffer {
        &*self.surface
    }

    fn ops(&self) -> &'static dyn RasterOps {
        match self.mode {
            CompositionMode::Destination => &DestinationWorker,
            CompositionMode::Difference => &DifferenceWorker,
        }
    }

    /// Blit `source` with its top-left corner at `at`.
    pub fn draw_image(&mut self, at: PointI, source: &Framebuffer) -> Result<()> {
        tracing::trace!(?at, width = source.width(), height = source.height(), "draw_image");
        self.ops().draw_image(self.surface, at, source)
    }

    /// Fill an axis-aligned rectangle with its top-left pixel at `top_left`.
    pub fn fill_rect(&mut self, top_left: PointI, width: u32, height: u32, color: Rgba) -> Result<()> {
        tracing::trace!(?top_left, width, height, "fill_rect");
        self.ops().fill_rect(self.surface, top_left, width, height, color)
    }

    /// Draw a thick segment from `from` to `to`.
    pub fn draw_line(&mut self, from: PointI, to: PointI, width: u32, color: Rgba) -> Result<()> {
        tracing::trace!(?from, ?to, width, "draw_line");
        self.ops().draw_line(self.surface, from, to, width, color)
    }

    /// Draw the slice of a ring between `start` and `start + range` radians.
    pub fn draw_arc(
        &mut self,
        center: PointI,
        radius: u32,
        width: u32,
        start: f64,
        range: f64,
        color: Rgba,
    ) -> Result<()> {
        tracing::trace!(?center, radius, width, start, range, "draw_arc");
        self.ops()
            .draw_arc(self.surface, center, radius, width, start, range, color)
    }

    /// Draw a ring of `radius` and `width` around `center`.
    pub fn draw_ring(&mut self, center: PointI, radius: u32, width: u32, color: Rgba) -> Result<()> {
        tracing::trace!(?center, radius, width, "draw_ring");
        self.ops().draw_ring(self.surface, center, radius, width, color)
    }

    /// Fill a disc of `radius` around `center`.
    pub fn fill_circle(&mut self, center: PointI, radius: u32, color: Rgba) -> Result<()> {
        tracing::trace!(?center, radius, "fill_circle");
        self.ops().fill_circle(self.surface, center, radius, color)
    }

    /// Fill the convex quadrilateral spanned by `corners`.
    pub fn fill_rotated_rect(&mut self, corners: [PointI; 4], color: Rgba) -> Result<()> {
        tracing::trace!(?corners, "fill_rotated_rect");
        self.ops().fill_rotated_rect(self.surface, corners, color)
    }
}
