//! Growable world-space canvas.
//!
//! A [`Canvas`] owns a [`Framebuffer`] and the world-space box it covers.
//! World coordinates have Y pointing up; pixel coordinates have Y pointing
//! down. Expanding the box reallocates the surface and copies existing
//! content so every drawn pixel keeps its world position.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{PointD, PointI, RectD};

/// Largest surface a canvas will allocate (1 GiB of RGBA).
const MAX_PIXEL_COUNT: f64 = (1u64 << 28) as f64;

/// Scale, margin and background of a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasConfig {
    /// Pixels per world unit.
    pub scale: f64,
    /// World-unit padding around the drawn box.
    pub margin: f64,
    /// Color of newly exposed canvas area.
    pub background: Rgba,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            margin: 0.5,
            background: Rgba::TRANSPARENT,
        }
    }
}

impl CanvasConfig {
    /// Set pixels per world unit.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the world-unit margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Check that scale and margin describe a usable canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a non-finite or non-positive
    /// scale, or a non-finite or negative margin.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "scale must be finite and positive, got {}",
                self.scale
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "margin must be finite and non-negative, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

/// Raster surface bound to a world-space bounding box.
///
/// The canvas starts empty. The first [`Canvas::resize`] adopts the given box;
/// later calls grow it to the union of the old and new boxes.
#[derive(Debug, Clone)]
pub struct Canvas {
    surface: Framebuffer,
    size_box: Option<RectD>,
    config: CanvasConfig,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            surface: Framebuffer::empty(),
            size_box: None,
            config: CanvasConfig::default(),
        }
    }
}

impl Canvas {
    /// Create an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            surface: Framebuffer::empty(),
            size_box: None,
            config,
        })
    }

    /// Create a canvas already covering `size_box`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the surface would
    /// be too large.
    pub fn with_box(size_box: &RectD, config: CanvasConfig) -> Result<Self> {
        let mut canvas = Self::new(config)?;
        canvas.resize(size_box)?;
        Ok(canvas)
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Pixels per world unit.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.config.scale
    }

    /// World-unit margin.
    #[must_use]
    pub const fn margin(&self) -> f64 {
        self.config.margin
    }

    /// Background color used for newly exposed area.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.config.background
    }

    /// Change the background color. Existing pixels are left untouched.
    pub fn set_background(&mut self, color: Rgba) {
        self.config.background = color;
    }

    /// World box covered by the canvas, `None` before the first resize.
    #[must_use]
    pub const fn size_box(&self) -> Option<RectD> {
        self.size_box
    }

    /// Whether no box has been established yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size_box.is_none()
    }

    /// The current surface.
    #[must_use]
    pub const fn image(&self) -> &Framebuffer {
        &self.surface
    }

    /// The current surface, mutably.
    pub fn image_mut(&mut self) -> &mut Framebuffer {
        &mut self.surface
    }

    /// Move the surface out and reset the canvas to empty.
    pub fn take(&mut self) -> Framebuffer {
        self.size_box = None;
        std::mem::take(&mut self.surface)
    }

    /// Convert a world length to pixels.
    #[must_use]
    pub fn to_pixels(&self, length: f64) -> f64 {
        length * self.config.scale
    }

    /// Map world coordinates to pixel coordinates, truncating toward zero.
    #[must_use]
    pub fn transform_coords(&self, x: f64, y: f64) -> PointI {
        let size_box = self.size_box.unwrap_or_default();
        let margin = self.config.margin;
        // flip y
        let relative = PointD::new(x - size_box.a.x + margin, size_box.b.y - y + margin);
        (relative * self.config.scale).truncate()
    }

    /// Map a world point to pixel coordinates.
    #[must_use]
    pub fn transform(&self, point: PointD) -> PointI {
        self.transform_coords(point.x, point.y)
    }

    /// Grow the canvas to cover `rect`.
    ///
    /// Returns `true` when the surface was reallocated. Previously drawn
    /// pixels are moved so they keep their world position; the newly exposed
    /// border is filled with the background color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CanvasTooLarge`] if the grown surface cannot be
    /// allocated. The canvas is left unchanged in that case.
    pub fn resize(&mut self, rect: &RectD) -> Result<bool> {
        let Some(old_box) = self.size_box else {
            let (width, height) = self.pixel_size(rect)?;
            self.surface.resize(width, height);
            self.surface.clear(self.config.background);
            self.size_box = Some(*rect);
            tracing::debug!(width, height, world_box = ?rect, "allocated canvas");
            return Ok(true);
        };

        let mut new_box = old_box;
        if !new_box.expand_rect(rect) {
            return Ok(false);
        }
        let (width, height) = self.pixel_size(&new_box)?;

        let old_surface = std::mem::take(&mut self.surface);
        self.surface.resize(width, height);
        self.size_box = Some(new_box);

        let scale = self.config.scale;
        let offset_x = ((old_box.a.x - new_box.a.x) * scale) as i64;
        let offset_y = ((new_box.b.y - old_box.b.y) * scale) as i64;
        self.surface.paste_image(offset_x, offset_y, &old_surface);
        self.fill_border(offset_x, offset_y, &old_surface);

        tracing::debug!(
            old_width = old_surface.width(),
            old_height = old_surface.height(),
            width,
            height,
            world_box = ?new_box,
            "reallocated canvas"
        );
        Ok(true)
    }

    /// Alias of [`Canvas::resize`].
    ///
    /// # Errors
    ///
    /// See [`Canvas::resize`].
    pub fn expand(&mut self, rect: &RectD) -> Result<bool> {
        self.resize(rect)
    }

    fn pixel_size(&self, rect: &RectD) -> Result<(u32, u32)> {
        let margin = 2.0 * self.config.margin;
        let width = self.config.scale * (rect.width() + margin);
        let height = self.config.scale * (rect.height() + margin);

        let fits = |value: f64| value.is_finite() && value <= f64::from(u32::MAX);
        if !fits(width) || !fits(height) || width.max(0.0) * height.max(0.0) > MAX_PIXEL_COUNT {
            return Err(Error::CanvasTooLarge { width, height });
        }
        // negative extents saturate to an empty surface
        Ok((width as u32, height as u32))
    }

    /// Fill everything outside the pasted old content with the background.
    fn fill_border(&mut self, offset_x: i64, offset_y: i64, old: &Framebuffer) {
        let width = i64::from(self.surface.width());
        let height = i64::from(self.surface.height());
        let clamp_x = |value: i64| value.clamp(0, width) as u32;
        let clamp_y = |value: i64| value.clamp(0, height) as u32;

        let left = clamp_x(offset_x);
        let right = clamp_x(offset_x + i64::from(old.width()));
        let top = clamp_y(offset_y);
        let bottom = clamp_y(offset_y + i64::from(old.height()));
        let (width, height) = (width as u32, height as u32);
        let color = self.config.background;

        self.surface.fill_rect(0, 0, width, top, color);
        self.surface.fill_rect(0, bottom, width, height - bottom, color);
        self.surface.fill_rect(0, top, left, bottom - top, color);
        self.surface.fill_rect(right, top, width - right, bottom - top, color);
    }
}
