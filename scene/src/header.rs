use crate::color::*;
use crate::error::*;

use std::convert::{TryFrom};

/// The two bytes that start every TinyVG file
pub const TVG_MAGIC: [u8; 2] = [0x72, 0x56];

/// The version of the format that this crate reads and writes
pub const TVG_VERSION: u8 = 1;

///
/// Selects how many bits are used to store coordinates (and the canvas size) in a TinyVG file
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateRange {
    /// 16-bit coordinates, 16-bit width and height
    Default,

    /// 8-bit coordinates, 8-bit width and height
    Reduced,

    /// 32-bit coordinates, 32-bit width and height
    Enhanced,
}

///
/// The header of a TinyVG document
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// File format version
    pub version: u8,

    /// Number of fractional bits in every coordinate (0-15)
    pub scale: u8,

    /// How the colour table is stored
    pub color_encoding: ColorEncoding,

    /// How many bits are used for each coordinate
    pub coordinate_range: CoordinateRange,

    /// Width of the canvas in units
    pub width: u32,

    /// Height of the canvas in units
    pub height: u32,
}

impl CoordinateRange {
    ///
    /// The number of bytes used to store a coordinate or a canvas dimension
    ///
    #[inline]
    pub fn bytes_per_unit(&self) -> usize {
        match self {
            CoordinateRange::Default    => 2,
            CoordinateRange::Reduced    => 1,
            CoordinateRange::Enhanced   => 4,
        }
    }

    ///
    /// The 2-bit tag used for this range in the file header
    ///
    #[inline]
    pub fn tag(&self) -> u8 {
        match self {
            CoordinateRange::Default    => 0,
            CoordinateRange::Reduced    => 1,
            CoordinateRange::Enhanced   => 2,
        }
    }

    ///
    /// The range of raw (unscaled) values that can be stored for a coordinate
    ///
    #[inline]
    pub fn raw_unit_range(&self) -> (i64, i64) {
        match self {
            CoordinateRange::Default    => (i16::MIN as i64, i16::MAX as i64),
            CoordinateRange::Reduced    => (i8::MIN as i64, i8::MAX as i64),
            CoordinateRange::Enhanced   => (i32::MIN as i64, i32::MAX as i64),
        }
    }

    ///
    /// The largest canvas dimension that can be stored
    ///
    #[inline]
    pub fn max_dimension(&self) -> u32 {
        match self {
            CoordinateRange::Default    => u16::MAX as u32,
            CoordinateRange::Reduced    => u8::MAX as u32,
            CoordinateRange::Enhanced   => u32::MAX,
        }
    }
}

impl TryFrom<u8> for CoordinateRange {
    type Error = TvgError;

    fn try_from(tag: u8) -> Result<CoordinateRange, TvgError> {
        match tag {
            0 => Ok(CoordinateRange::Default),
            1 => Ok(CoordinateRange::Reduced),
            2 => Ok(CoordinateRange::Enhanced),
            _ => Err(invalid_data("coordinate range tag out of range")),
        }
    }
}

impl Header {
    ///
    /// Creates a header for a canvas of the specified size, using the default coordinate range and RGBA8888 colours
    ///
    pub fn new(width: u32, height: u32) -> Header {
        Header {
            version:            TVG_VERSION,
            scale:              4,
            color_encoding:     ColorEncoding::Rgba8888,
            coordinate_range:   CoordinateRange::Default,
            width:              width,
            height:             height,
        }
    }

    ///
    /// Returns the factor that raw coordinates are divided by to get the coordinate value
    ///
    #[inline]
    pub fn unit_divisor(&self) -> f64 {
        (1u32 << self.scale) as f64
    }

    ///
    /// Converts a raw stored value into a coordinate
    ///
    #[inline]
    pub fn unit_from_raw(&self, raw: i32) -> f32 {
        ((raw as f64) / self.unit_divisor()) as f32
    }

    ///
    /// Converts a coordinate into the raw value that's stored in the file (None if it can't be represented)
    ///
    pub fn unit_to_raw(&self, value: f32) -> Option<i32> {
        if !value.is_finite() {
            return None;
        }

        let raw         = ((value as f64) * self.unit_divisor()).round();
        let (min, max)  = self.coordinate_range.raw_unit_range();

        if raw < (min as f64) || raw > (max as f64) {
            None
        } else {
            Some(raw as i32)
        }
    }

    ///
    /// Packs the scale, colour encoding and coordinate range into the header byte
    ///
    #[inline]
    pub fn packed_format(&self) -> u8 {
        (self.scale & 0x0f) | (self.color_encoding.tag() << 4) | (self.coordinate_range.tag() << 6)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn units_round_trip_at_scale() {
        let mut header = Header::new(100, 100);
        header.scale = 2;

        assert!(header.unit_to_raw(1.25) == Some(5));
        assert!(header.unit_from_raw(5) == 1.25);
        assert!(header.unit_to_raw(1.3) == Some(5));
    }

    #[test]
    fn units_outside_range() {
        let mut header = Header::new(100, 100);
        header.scale            = 0;
        header.coordinate_range = CoordinateRange::Reduced;

        assert!(header.unit_to_raw(127.0) == Some(127));
        assert!(header.unit_to_raw(128.0) == None);
        assert!(header.unit_to_raw(-128.0) == Some(-128));
        assert!(header.unit_to_raw(f32::NAN) == None);
    }

    #[test]
    fn packed_format_layout() {
        let mut header = Header::new(1, 1);
        header.scale            = 0x0a;
        header.color_encoding   = ColorEncoding::RgbaF32;
        header.coordinate_range = CoordinateRange::Enhanced;

        assert!(header.packed_format() == 0b10_10_1010);
    }
}
