//! Color type and color-string parsing.
//!
//! Colors are 4-channel RGBA with 8 bits per channel. Strings are parsed from a
//! small fixed set of names or from `#RRGGBB` / `#RRGGBBAA` hex codes.

use crate::error::{Error, Result};
use std::str::FromStr;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    /// Opaque orange.
    pub const ORANGE: Self = Self::new(255, 165, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Sum of the color channels, alpha excluded.
    #[must_use]
    pub fn brightness(self) -> u32 {
        u32::from(self.r) + u32::from(self.g) + u32::from(self.b)
    }

    /// Per-channel absolute difference.
    ///
    /// The result is independent of argument order; alpha is the larger of
    /// the two alphas.
    #[must_use]
    pub fn abs_diff(self, other: Self) -> Self {
        Self::new(
            self.r.abs_diff(other.r),
            self.g.abs_diff(other.g),
            self.b.abs_diff(other.b),
            self.a.max(other.a),
        )
    }

    /// Look up one of the named colors.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "orange" => Some(Self::ORANGE),
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "transparent" => Some(Self::TRANSPARENT),
            _ => None,
        }
    }

    fn from_hex(code: &str) -> Option<Self> {
        // from_str_radix alone would accept a sign such as "+f"
        let is_hex = code.bytes().all(|b| b.is_ascii_hexdigit());
        if !is_hex || !(code.len() == 6 || code.len() == 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&code[i..i + 2], 16).ok();
        let alpha = if code.len() == 8 { channel(6)? } else { 255 };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = match s.strip_prefix('#') {
            Some(code) => Self::from_hex(code),
            None => Self::from_name(s),
        };
        parsed.ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}
