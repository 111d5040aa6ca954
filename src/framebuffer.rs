//! RGBA raster surface.
//!
//! Every rasterizer writes into a [`Framebuffer`]. Besides pixel access it
//! supports the operations canvas growth needs: reallocation, rectangle fill
//! and clipped sub-image paste, plus PNG load and save.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::output::{PngDecoder, PngEncoder};
use std::ops::Range;
use std::path::Path;

/// Row alignment in bytes (64 bytes for AVX-512).
const ROW_ALIGNMENT: usize = 64;

/// Row-aligned RGBA framebuffer.
///
/// Rows are padded to 64 bytes so fills and pastes operate on aligned
/// slices. A framebuffer may be empty (0×0); that is the state of a canvas
/// before anything was drawn.
#[derive(Debug, Clone, Default)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// Row-major `[R, G, B, A]` bytes, `stride` bytes per row.
    pixels: Vec<u8>,
    stride: usize,
}

impl Framebuffer {
    /// Transparent surface of `width` × `height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero dimension; use
    /// [`Framebuffer::empty`] for a surface without pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_draw2d::color::Rgba;
    /// use trueno_draw2d::framebuffer::Framebuffer;
    ///
    /// let mut fb = Framebuffer::new(64, 32).unwrap();
    /// fb.fill_rect(4, 4, 8, 8, Rgba::RED);
    /// assert_eq!(fb.get_pixel(5, 5), Some(Rgba::RED));
    /// assert_eq!(fb.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match Self::allocate(width, height) {
            fb if fb.is_empty() => Err(Error::InvalidDimensions { width, height }),
            fb => Ok(fb),
        }
    }

    /// Create an empty (0×0) framebuffer.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            stride: 0,
        }
    }

    fn allocate(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }
        let stride = (width as usize * 4).next_multiple_of(ROW_ALIGNMENT);
        Self {
            width,
            height,
            pixels: vec![0; stride * height as usize],
            stride,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether the framebuffer holds no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes per row including alignment padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte range of pixels `x0..x1` in row `y`. Callers keep the bounds
    /// inside the surface.
    fn span(&self, y: u32, x0: u32, x1: u32) -> Range<usize> {
        let base = y as usize * self.stride;
        base + x0 as usize * 4..base + x1 as usize * 4
    }

    /// Pixel bytes of row `y`, without padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        (y < self.height).then(|| &self.pixels[self.span(y, 0, self.width)])
    }

    /// Mutable pixel bytes of row `y`, without padding.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let span = self.span(y, 0, self.width);
        Some(&mut self.pixels[span])
    }

    /// Reallocate to the given size. Previous content is discarded and the
    /// new surface is transparent; a zero dimension leaves it empty.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::allocate(width, height);
    }

    /// Paint every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.fill_rect(0, 0, self.width, self.height, color);
    }

    /// Paint the `w` × `h` block whose top-left pixel is `(x, y)`. The block
    /// is clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let (x0, x1) = (x.min(self.width), x.saturating_add(w).min(self.width));
        let (y0, y1) = (y.min(self.height), y.saturating_add(h).min(self.height));
        if x0 == x1 {
            return;
        }

        let pixel = color.to_array();
        for row_y in y0..y1 {
            let span = self.span(row_y, x0, x1);
            for chunk in self.pixels[span].chunks_exact_mut(4) {
                chunk.copy_from_slice(&pixel);
            }
        }
    }

    /// Copy `source` so its top-left corner lands at `(x, y)`.
    ///
    /// The offset may be negative; everything outside this framebuffer is
    /// clipped.
    pub fn paste_image(&mut self, x: i64, y: i64, source: &Framebuffer) {
        let src_start_x = (-x).max(0);
        let dst_start_x = x + src_start_x;
        let count = (i64::from(source.width) - src_start_x).min(i64::from(self.width) - dst_start_x);
        if count <= 0 {
            return;
        }
        let (src_off, dst_off, len) = (
            src_start_x as usize * 4,
            dst_start_x as usize * 4,
            count as usize * 4,
        );

        for src_y in 0..source.height {
            let dst_y = y + i64::from(src_y);
            if dst_y < 0 || dst_y >= i64::from(self.height) {
                continue;
            }
            let (Some(src_row), Some(dst_row)) = (source.row(src_y), self.row_mut(dst_y as u32))
            else {
                continue;
            };
            dst_row[dst_off..dst_off + len].copy_from_slice(&src_row[src_off..src_off + len]);
        }
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bytes = &self.pixels[self.span(y, x, x + 1)];
        Some(Rgba::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    /// Overwrite the pixel at `(x, y)`. Writes outside the surface are
    /// ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            let span = self.span(y, x, x + 1);
            self.pixels[span].copy_from_slice(&color.to_array());
        }
    }

    /// Pixel bytes with row padding removed, as PNG expects them.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flatten()
            .copied()
            .collect()
    }

    /// Build a framebuffer from tightly-packed RGBA rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte count does not match `width * height * 4`.
    pub fn from_compact_pixels(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let row_len = width as usize * 4;
        if data.len() != row_len * height as usize {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut fb = Self::allocate(width, height);
        if row_len > 0 {
            for (y, packed) in (0..height).zip(data.chunks_exact(row_len)) {
                if let Some(row) = fb.row_mut(y) {
                    row.copy_from_slice(packed);
                }
            }
        }
        Ok(fb)
    }

    /// Write the framebuffer to a PNG file, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        PngEncoder::write_to_file(self, path)
    }

    /// Read a framebuffer from a PNG file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        PngDecoder::read_from_file(path)
    }
}

impl PartialEq for Framebuffer {
    fn eq(&self, other: &Self) -> bool {
        (self.width, self.height) == (other.width, other.height)
            && (0..self.height).all(|y| self.row(y) == other.row(y))
    }
}

impl Eq for Framebuffer {}
