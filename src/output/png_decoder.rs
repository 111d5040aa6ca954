//! PNG input decoder.
//!
//! Every PNG layout the `png` crate can expand to 8-bit channels is
//! normalized to RGBA8 so loaded references compare directly against
//! rendered framebuffers.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PNG decoder producing framebuffers.
pub struct PngDecoder;

impl PngDecoder {
    /// Read a framebuffer from a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a PNG this
    /// decoder can map to RGBA.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Framebuffer> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let fb = Self::decode(BufReader::new(file))?;

        tracing::debug!(
            path = %path.display(),
            width = fb.width(),
            height = fb.height(),
            "loaded png"
        );
        Ok(fb)
    }

    /// Decode a framebuffer from PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a supported PNG.
    pub fn from_bytes(bytes: &[u8]) -> Result<Framebuffer> {
        Self::decode(bytes)
    }

    fn decode<R: Read>(source: R) -> Result<Framebuffer> {
        let mut decoder = png::Decoder::new(source);
        // palette and low bit depths become 8-bit channels, tRNS becomes alpha
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder.read_info()?;
        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer)?;
        let data = &buffer[..info.buffer_size()];

        if info.bit_depth != png::BitDepth::Eight {
            return Err(Error::UnsupportedPngFormat {
                color_type: info.color_type,
                bit_depth: info.bit_depth,
            });
        }

        let rgba: Vec<u8> = match info.color_type {
            png::ColorType::Rgba => data.to_vec(),
            png::ColorType::Rgb => data
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect(),
            png::ColorType::GrayscaleAlpha => data
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0], px[1]])
                .collect(),
            png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
            color_type @ png::ColorType::Indexed => {
                return Err(Error::UnsupportedPngFormat {
                    color_type,
                    bit_depth: info.bit_depth,
                })
            }
        };

        Framebuffer::from_compact_pixels(info.width, info.height, &rgba)
    }
}
