//! Error types for trueno-draw2d operations.

use crate::render::CompositionMode;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-draw2d operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// PNG decoding error.
    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    /// PNG pixel layout that cannot be mapped to RGBA8.
    #[error("Unsupported PNG format: {color_type:?} at {bit_depth:?}")]
    UnsupportedPngFormat {
        /// Decoded color type.
        color_type: png::ColorType,
        /// Decoded bit depth.
        bit_depth: png::BitDepth,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Canvas growth would produce a surface that cannot be allocated.
    #[error("Canvas too large: {width}x{height} pixels")]
    CanvasTooLarge {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Canvas configuration error.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Primitive not implemented by the active composition mode.
    #[error("{operation} is not supported in {mode:?} composition mode")]
    UnsupportedOperation {
        /// Name of the rejected primitive.
        operation: &'static str,
        /// Composition mode that rejected it.
        mode: CompositionMode,
    },
}
