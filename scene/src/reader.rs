use crate::color::*;
use crate::error::*;

use byteorder::{ByteOrder, LittleEndian};

///
/// Reads the primitive values that make up a TinyVG file from a byte buffer
///
/// Every read checks that enough bytes remain and fails with `InvalidData` if they don't. The cursor only ever
/// moves forward.
///
#[derive(Clone, Debug)]
pub struct TvgReader<'a> {
    data:       &'a [u8],
    position:   usize,
}

impl<'a> TvgReader<'a> {
    ///
    /// Creates a reader positioned at the start of a buffer
    ///
    #[inline]
    pub fn new(data: &'a [u8]) -> TvgReader<'a> {
        TvgReader { data: data, position: 0 }
    }

    ///
    /// The current position of the cursor
    ///
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    ///
    /// The number of bytes that have not been read yet
    ///
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    ///
    /// True if every byte has been read
    ///
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    ///
    /// Reads a slice of bytes, advancing the cursor past them
    ///
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], TvgError> {
        if self.remaining() < count {
            return Err(invalid_data("unexpected end of data"));
        }

        let bytes       = &self.data[self.position..(self.position + count)];
        self.position   += count;

        Ok(bytes)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, TvgError> {
        Ok(self.read_bytes(1)?[0])
    }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8, TvgError> {
        Ok(self.read_u8()? as i8)
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, TvgError> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    #[inline]
    pub fn read_i16(&mut self) -> Result<i16, TvgError> {
        Ok(LittleEndian::read_i16(self.read_bytes(2)?))
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, TvgError> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    #[inline]
    pub fn read_i32(&mut self) -> Result<i32, TvgError> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, TvgError> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }

    ///
    /// Reads a variable-length unsigned integer
    ///
    /// Each byte carries 7 bits of the value, lowest bits first, with the top bit set if more bytes follow. Values are
    /// limited to 32 bits, so at most 5 bytes are read and the 5th byte can only contribute 4 bits.
    ///
    pub fn read_var_u32(&mut self) -> Result<u32, TvgError> {
        let mut value = 0u32;

        for byte_num in 0..5 {
            let byte = self.read_u8()?;
            let bits = (byte & 0x7f) as u32;

            if byte_num == 4 && (byte & 0xf0) != 0 {
                // Continuation bit or bits above bit 31 in the final byte
                return Err(invalid_data("variable-length integer does not fit in 32 bits"));
            }

            value |= bits << (7 * byte_num);

            if (byte & 0x80) == 0 {
                return Ok(value);
            }
        }

        Err(invalid_data("variable-length integer does not fit in 32 bits"))
    }

    ///
    /// Reads a single colour using the specified encoding
    ///
    pub fn read_color(&mut self, encoding: ColorEncoding) -> Result<Color, TvgError> {
        match encoding {
            ColorEncoding::Rgba8888 => {
                let bytes = self.read_bytes(4)?;
                Ok(Color::from_rgba8(bytes[0], bytes[1], bytes[2], bytes[3]))
            }

            ColorEncoding::Rgb565 => {
                Ok(Color::from_rgb565(self.read_u16()?))
            }

            ColorEncoding::RgbaF32 => {
                let color = Color::rgba(self.read_f32()?, self.read_f32()?, self.read_f32()?, self.read_f32()?);

                if color.is_valid() {
                    Ok(color)
                } else {
                    Err(invalid_data("floating point colour component outside the range 0-1"))
                }
            }

            ColorEncoding::Custom => Err(unsupported("custom colour encoding")),
        }
    }
}
