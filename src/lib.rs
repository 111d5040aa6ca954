//! # Trueno-Draw2D
//!
//! Headless CPU rasterizer for deterministic 2D reference images.
//!
//! Shapes are given in a floating-point world space. The canvas grows on
//! demand to fit every shape drawn so far, keeping earlier pixels at their
//! world position, so callers never size the image up front.
//!
//! ## Features
//!
//! - **Growable canvas**: world→pixel mapping with margin and y-flip
//! - **Exact rasterization**: thick lines, circles, rings, arcs, rotated
//!   rectangles and clothoid spirals without anti-aliasing
//! - **Difference composition**: symmetric image diffs for golden-image tests
//! - **PNG output**: pure Rust encoding and decoding
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_draw2d::prelude::*;
//!
//! let mut drawer = Drawer::with_config(
//!     CanvasConfig::default().with_scale(20.0).with_background(Rgba::WHITE),
//! )?;
//! drawer.draw_line((0.0, 0.0), (10.0, 0.0), 0.5)?;
//! drawer.draw_arc((5.0, 0.0), 3.0, 0.5, 0.0, std::f64::consts::PI)?;
//!
//! let stats = diff_stats(drawer.image(), drawer.image())?;
//! assert!(stats.is_identical());
//! # Ok::<(), trueno_draw2d::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize [`canvas::CanvasConfig`], [`color::Rgba`] and
//!   [`render::CompositionMode`]

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and color-string parsing.
pub mod color;

/// Stride-aligned RGBA pixel surface.
pub mod framebuffer;

/// Points, rectangles, line and angle predicates.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// World→pixel mapping and on-demand canvas growth.
pub mod canvas;

/// Pixel-space rasterizers and composition modes.
pub mod render;

/// World-space drawing façade.
pub mod drawer;

/// PNG encoding and decoding.
pub mod output;

/// Difference images and golden-image checks.
pub mod compare;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-draw2d operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_draw2d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasConfig};
    pub use crate::color::Rgba;
    pub use crate::compare::{diff_stats, difference, matches_file, DiffStats};
    pub use crate::drawer::{Drawer, Vec2};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, PointD, PointI, Rect, RectD, RectI};
    pub use crate::render::{CompositionMode, Painter};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
