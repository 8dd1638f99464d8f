use super::anti_alias::*;

use tvg_scene::{TvgError};

///
/// Options describing how a scene should be rasterized
///
/// The output size is independent of the size of the scene: the scene is stretched to fit, scaling the x and y axes separately
/// if the aspect ratios differ.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Width of the output bitmap in pixels
    pub width: u32,

    /// Height of the output bitmap in pixels
    pub height: u32,

    /// The anti-aliasing level to use
    pub anti_alias: AntiAlias,
}

impl RenderOptions {
    ///
    /// Creates options for rendering at a particular size (with the default anti-aliasing level)
    ///
    pub fn new(width: u32, height: u32) -> RenderOptions {
        RenderOptions {
            width:      width,
            height:     height,
            anti_alias: AntiAlias::default(),
        }
    }

    ///
    /// Changes the anti-aliasing level
    ///
    pub fn with_anti_alias(mut self, anti_alias: AntiAlias) -> RenderOptions {
        self.anti_alias = anti_alias;
        self
    }

    ///
    /// Checks that these options describe a bitmap with some pixels in it
    ///
    pub fn validate(&self) -> Result<(), TvgError> {
        if self.width == 0 || self.height == 0 {
            log::debug!("Cannot render a {}x{} bitmap", self.width, self.height);
            Err(TvgError::InvalidData)
        } else {
            Ok(())
        }
    }
}
