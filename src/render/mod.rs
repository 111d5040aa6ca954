//! Rasterization of primitives in pixel space.
//!
//! Shapes are rasterized by testing pixels of their bounding box against
//! exact integer or half-plane predicates; no anti-aliasing is applied.
//!
//! # Algorithms
//!
//! - **Thick line**: slab between the perpendiculars through both endpoints,
//!   intersected with the band within half the width of the center line
//! - **Circle / ring**: squared-distance test, with the inscribed square
//!   filled (or skipped, for a ring's hole) without per-pixel checks
//! - **Arc**: ring test combined with two ray half-plane tests
//! - **Rotated rectangle**: four directed edge tests
//!
//! The [`Painter`] selects between the overwriting primitives and the
//! difference-blending ones through [`CompositionMode`].

mod difference;
mod painter;
mod primitives;

pub use painter::{DestinationWorker, DifferenceWorker, Painter, RasterOps};
pub use primitives::{
    draw_arc, draw_image, draw_line, draw_ring, fill_circle, fill_rect, fill_rotated_rect,
};

/// Pixel-combination rule used while rasterizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositionMode {
    /// Covered pixels take the draw color.
    #[default]
    Destination,
    /// Covered pixels take the absolute per-channel difference of old and
    /// new color.
    Difference,
}
