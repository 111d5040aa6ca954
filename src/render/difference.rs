//! Difference-mode rasterizers.
//!
//! Each covered pixel becomes the per-channel absolute difference of its old
//! value and the incoming one, so equal content cancels to black and the
//! order of two blits onto a transparent surface does not matter.

use super::primitives::clip_rect;
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{PointI, RectI};

fn blend(fb: &mut Framebuffer, x: u32, y: u32, color: Rgba) {
    if let Some(existing) = fb.get_pixel(x, y) {
        fb.set_pixel(x, y, existing.abs_diff(color));
    }
}

/// Difference-blend `source` with its top-left corner at `at`.
pub fn draw_image(fb: &mut Framebuffer, at: PointI, source: &Framebuffer) {
    if source.is_empty() {
        return;
    }
    let footprint = RectI::new(
        at,
        at + PointI::new(i64::from(source.width()) - 1, i64::from(source.height()) - 1),
    );
    let Some(visible) = clip_rect(fb, footprint) else {
        return;
    };

    for y in visible.a.y..=visible.b.y {
        for x in visible.a.x..=visible.b.x {
            let src_x = (x - at.x) as u32;
            let src_y = (y - at.y) as u32;
            if let Some(color) = source.get_pixel(src_x, src_y) {
                blend(fb, x as u32, y as u32, color);
            }
        }
    }
}

/// Difference-blend a solid rectangle with its top-left pixel at `top_left`.
pub fn fill_rect(fb: &mut Framebuffer, top_left: PointI, width: u32, height: u32, color: Rgba) {
    if width == 0 || height == 0 {
        return;
    }
    let footprint = RectI::new(
        top_left,
        top_left + PointI::new(i64::from(width) - 1, i64::from(height) - 1),
    );
    let Some(visible) = clip_rect(fb, footprint) else {
        return;
    };

    for y in visible.a.y..=visible.b.y {
        for x in visible.a.x..=visible.b.x {
            blend(fb, x as u32, y as u32, color);
        }
    }
}
