///
/// A rendered image: tightly packed rows of straight (non-premultiplied) RGBA pixels, 4 bytes per pixel, top row first
///
/// The caller owns the bitmap: the pixel buffer is freed when it is released (or dropped).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width:  u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    ///
    /// Creates a bitmap from its pixel data (which must contain `width*height*4` bytes)
    ///
    pub (crate) fn new(width: u32, height: u32, pixels: Vec<u8>) -> Bitmap {
        debug_assert!(pixels.len() == (width as usize) * (height as usize) * 4);

        Bitmap { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    ///
    /// The RGBA pixel data for this bitmap
    ///
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    ///
    /// Returns the RGBA value of a single pixel
    ///
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([self.pixels[offset], self.pixels[offset+1], self.pixels[offset+2], self.pixels[offset+3]])
    }

    ///
    /// Takes ownership of the pixel data
    ///
    #[inline]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    ///
    /// Releases this bitmap, freeing its pixel buffer
    ///
    #[inline]
    pub fn release(self) {
        log::trace!("Releasing {}x{} bitmap", self.width, self.height);
    }
}
