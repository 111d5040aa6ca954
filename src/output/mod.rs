//! PNG encoding and decoding for framebuffers.

mod png_decoder;
mod png_encoder;

pub use png_decoder::PngDecoder;
pub use png_encoder::PngEncoder;
