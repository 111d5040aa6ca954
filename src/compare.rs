//! Golden-image comparison.
//!
//! Two images are compared by blitting both onto a transparent surface in
//! [`CompositionMode::Difference`]. Pixels that agree cancel to black, so the
//! result highlights exactly where the images disagree.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::PointI;
use crate::render::{CompositionMode, Painter};
use std::path::Path;
use trueno::Vector;

/// Summary of a difference image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffStats {
    /// Pixels whose RGB difference is non-zero.
    pub differing_pixels: usize,
    /// Largest per-pixel brightness (`r + g + b`) of the difference.
    pub max_delta: f32,
    /// Mean per-pixel brightness of the difference.
    pub mean_delta: f32,
}

impl DiffStats {
    /// Whether no pixel differs.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.differing_pixels == 0
    }
}

/// Difference image of `a` and `b`.
///
/// The result covers the larger extent of both inputs on each axis. Areas
/// covered by only one image keep that image's colors. Two empty inputs give a
/// 2×1 black placeholder.
///
/// # Errors
///
/// Returns an error if the surface cannot be allocated.
pub fn difference(a: &Framebuffer, b: &Framebuffer) -> Result<Framebuffer> {
    let width = a.width().max(b.width());
    let height = a.height().max(b.height());
    if width == 0 || height == 0 {
        let mut placeholder = Framebuffer::new(2, 1)?;
        placeholder.clear(Rgba::BLACK);
        return Ok(placeholder);
    }

    let mut surface = Framebuffer::new(width, height)?;
    surface.clear(Rgba::TRANSPARENT);
    let mut painter = Painter::with_mode(&mut surface, CompositionMode::Difference);
    painter.draw_image(PointI::default(), a)?;
    painter.draw_image(PointI::default(), b)?;
    Ok(surface)
}

/// Brightness statistics of the difference of `a` and `b`.
///
/// # Errors
///
/// Returns an error if the difference image cannot be allocated.
pub fn diff_stats(a: &Framebuffer, b: &Framebuffer) -> Result<DiffStats> {
    let diff = difference(a, b)?;

    let mut deltas = Vec::with_capacity(diff.pixel_count());
    for y in 0..diff.height() {
        if let Some(row) = diff.row(y) {
            for chunk in row.chunks_exact(4) {
                let color = Rgba::new(chunk[0], chunk[1], chunk[2], chunk[3]);
                deltas.push(color.brightness() as f32);
            }
        }
    }
    let differing_pixels = deltas.iter().filter(|&&delta| delta > 0.0).count();

    let deltas = Vector::from_vec(deltas);
    Ok(DiffStats {
        differing_pixels,
        max_delta: deltas.max().unwrap_or(0.0),
        mean_delta: deltas.mean().unwrap_or(0.0),
    })
}

/// Compare `image` with the PNG at `reference_path`.
///
/// The difference image is always written to `diff_path`. Returns whether
/// both images are equal in size and content.
///
/// # Errors
///
/// Returns an error if the reference cannot be loaded or the difference image
/// cannot be written.
pub fn matches_file<P, Q>(image: &Framebuffer, reference_path: P, diff_path: Q) -> Result<bool>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let reference = Framebuffer::load(reference_path.as_ref())?;
    difference(image, &reference)?.save(diff_path.as_ref())?;

    let matches = *image == reference;
    if !matches {
        tracing::warn!(
            reference = %reference_path.as_ref().display(),
            diff = %diff_path.as_ref().display(),
            "image differs from reference"
        );
    }
    Ok(matches)
}
