use tvg_scene::{TvgError};

use std::convert::{TryFrom};

///
/// The anti-aliasing levels supported by the renderer
///
/// Each level renders using a grid of samples for every output pixel. The numeric tag for each level is an opaque key
/// (there's no level with tag 5): use `grid_size()` to find out how many samples are used.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AntiAlias {
    /// One sample per pixel
    None,

    /// 2x2 samples per pixel
    X4,

    /// 3x3 samples per pixel
    X9,

    /// 4x4 samples per pixel
    X16,

    /// 5x5 samples per pixel
    X25,

    /// 7x7 samples per pixel
    X49,

    /// 8x8 samples per pixel
    X64,
}

impl Default for AntiAlias {
    fn default() -> AntiAlias {
        AntiAlias::X16
    }
}

impl AntiAlias {
    ///
    /// Every anti-aliasing level, from fewest to most samples
    ///
    pub const ALL: [AntiAlias; 7] = [AntiAlias::None, AntiAlias::X4, AntiAlias::X9, AntiAlias::X16, AntiAlias::X25, AntiAlias::X49, AntiAlias::X64];

    ///
    /// The width and height of the grid of samples used for each pixel
    ///
    #[inline]
    pub fn grid_size(&self) -> usize {
        match self {
            AntiAlias::None => 1,
            AntiAlias::X4   => 2,
            AntiAlias::X9   => 3,
            AntiAlias::X16  => 4,
            AntiAlias::X25  => 5,
            AntiAlias::X49  => 7,
            AntiAlias::X64  => 8,
        }
    }

    ///
    /// The number of samples taken for each output pixel
    ///
    #[inline]
    pub fn samples_per_pixel(&self) -> usize {
        self.grid_size() * self.grid_size()
    }

    ///
    /// The tag used to identify this level at the API boundary
    ///
    #[inline]
    pub fn tag(&self) -> u32 {
        match self {
            AntiAlias::None => 1,
            AntiAlias::X4   => 2,
            AntiAlias::X9   => 3,
            AntiAlias::X16  => 4,
            AntiAlias::X25  => 6,
            AntiAlias::X49  => 7,
            AntiAlias::X64  => 8,
        }
    }
}

impl TryFrom<u32> for AntiAlias {
    type Error = TvgError;

    fn try_from(tag: u32) -> Result<AntiAlias, TvgError> {
        match tag {
            1 => Ok(AntiAlias::None),
            2 => Ok(AntiAlias::X4),
            3 => Ok(AntiAlias::X9),
            4 => Ok(AntiAlias::X16),
            6 => Ok(AntiAlias::X25),
            7 => Ok(AntiAlias::X49),
            8 => Ok(AntiAlias::X64),

            _ => {
                log::debug!("Unknown anti-alias level {}", tag);
                Err(TvgError::InvalidData)
            }
        }
    }
}
