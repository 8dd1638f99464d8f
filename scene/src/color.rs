use crate::error::*;

use std::convert::{TryFrom};

///
/// A colour from the colour table, as straight (non-premultiplied) RGBA components in the range 0-1
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

///
/// The ways that colours can be stored in the colour table of a TinyVG file
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorEncoding {
    /// 8 bits for each of red, green, blue and alpha
    Rgba8888,

    /// A packed 16-bit value: 5 bits of red, 6 bits of green and 5 bits of blue (always opaque)
    Rgb565,

    /// 32-bit IEEE floats for each of red, green, blue and alpha
    RgbaF32,

    /// Application-defined encoding (not something that can be decoded without outside knowledge)
    Custom,
}

impl Color {
    ///
    /// Creates a colour from its components
    ///
    #[inline]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    ///
    /// Creates a colour from 8-bit components
    ///
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: (r as f32) / 255.0,
            g: (g as f32) / 255.0,
            b: (b as f32) / 255.0,
            a: (a as f32) / 255.0,
        }
    }

    ///
    /// Decodes a packed RGB565 value
    ///
    #[inline]
    pub fn from_rgb565(packed: u16) -> Color {
        let r = packed & 0x1f;
        let g = (packed >> 5) & 0x3f;
        let b = (packed >> 11) & 0x1f;

        Color {
            r: (r as f32) / 31.0,
            g: (g as f32) / 63.0,
            b: (b as f32) / 31.0,
            a: 1.0,
        }
    }

    ///
    /// Returns the components of this colour as a tuple
    ///
    #[inline]
    pub fn to_rgba_components(&self) -> (f32, f32, f32, f32) {
        (self.r, self.g, self.b, self.a)
    }

    ///
    /// Converts this colour to 8-bit components (rounding to the nearest value)
    ///
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [component_to_byte(self.r), component_to_byte(self.g), component_to_byte(self.b), component_to_byte(self.a)]
    }

    ///
    /// Packs this colour into a RGB565 value (alpha is discarded)
    ///
    #[inline]
    pub fn to_rgb565(&self) -> u16 {
        let r = (self.r.max(0.0).min(1.0) * 31.0).round() as u16;
        let g = (self.g.max(0.0).min(1.0) * 63.0).round() as u16;
        let b = (self.b.max(0.0).min(1.0) * 31.0).round() as u16;

        r | (g << 5) | (b << 11)
    }

    ///
    /// True if all of the components are finite numbers in the range 0-1
    ///
    #[inline]
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a].iter().all(|component| component.is_finite() && *component >= 0.0 && *component <= 1.0)
    }

    ///
    /// Linearly interpolates between two colours (in straight colour space)
    ///
    #[inline]
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

///
/// Converts a component in the range 0-1 to a byte
///
#[inline]
fn component_to_byte(component: f32) -> u8 {
    if component.is_nan() || component <= 0.0 {
        0
    } else if component >= 1.0 {
        255
    } else {
        (component * 255.0).round() as u8
    }
}

impl ColorEncoding {
    ///
    /// The number of bytes used to store a single colour in this encoding (None for custom encodings)
    ///
    #[inline]
    pub fn bytes_per_color(&self) -> Option<usize> {
        match self {
            ColorEncoding::Rgba8888 => Some(4),
            ColorEncoding::Rgb565   => Some(2),
            ColorEncoding::RgbaF32  => Some(16),
            ColorEncoding::Custom   => None,
        }
    }

    ///
    /// The 2-bit tag used for this encoding in the file header
    ///
    #[inline]
    pub fn tag(&self) -> u8 {
        match self {
            ColorEncoding::Rgba8888 => 0,
            ColorEncoding::Rgb565   => 1,
            ColorEncoding::RgbaF32  => 2,
            ColorEncoding::Custom   => 3,
        }
    }
}

impl TryFrom<u8> for ColorEncoding {
    type Error = TvgError;

    fn try_from(tag: u8) -> Result<ColorEncoding, TvgError> {
        match tag {
            0 => Ok(ColorEncoding::Rgba8888),
            1 => Ok(ColorEncoding::Rgb565),
            2 => Ok(ColorEncoding::RgbaF32),
            3 => Ok(ColorEncoding::Custom),
            _ => Err(invalid_data("colour encoding tag out of range")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rgb565_extremes() {
        assert!(Color::from_rgb565(0xffff) == Color::rgba(1.0, 1.0, 1.0, 1.0));
        assert!(Color::from_rgb565(0x0000) == Color::rgba(0.0, 0.0, 0.0, 1.0));
        assert!(Color::from_rgb565(0x001f) == Color::rgba(1.0, 0.0, 0.0, 1.0));
        assert!(Color::from_rgb565(0x07e0) == Color::rgba(0.0, 1.0, 0.0, 1.0));
        assert!(Color::from_rgb565(0xf800) == Color::rgba(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn rgb565_packs_back() {
        for packed in [0x1234u16, 0xf800, 0x07e0, 0xabcd].iter() {
            assert!(Color::from_rgb565(*packed).to_rgb565() == *packed, "{:x} did not survive packing", packed);
        }
    }

    #[test]
    fn bytes_round_to_nearest() {
        assert!(Color::from_rgba8(1, 127, 128, 254).to_rgba8() == [1, 127, 128, 254]);
        assert!(Color::rgba(-1.0, 2.0, f32::NAN, 0.5).to_rgba8() == [0, 255, 0, 128]);
    }

    #[test]
    fn validity() {
        assert!(Color::rgba(0.0, 0.5, 1.0, 1.0).is_valid());
        assert!(!Color::rgba(0.0, 0.5, 1.1, 1.0).is_valid());
        assert!(!Color::rgba(f32::INFINITY, 0.5, 1.0, 1.0).is_valid());
    }
}
