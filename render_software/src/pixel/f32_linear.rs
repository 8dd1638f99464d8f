use super::alpha_blend_trait::*;

use tvg_scene::{Color};

use wide::*;

use std::ops::*;

///
/// A pixel using floating-point components, with the alpha value pre-multiplied
///
/// No gamma correction is applied: colours from the scene are blended exactly as they are stored.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32LinearPixel(f32x4);

impl Default for F32LinearPixel {
    #[inline]
    fn default() -> Self {
        F32LinearPixel(f32x4::splat(0.0))
    }
}

impl F32LinearPixel {
    ///
    /// A fully transparent pixel
    ///
    #[inline]
    pub fn transparent() -> F32LinearPixel {
        F32LinearPixel::default()
    }

    ///
    /// Returns the premultiplied components of this pixel
    ///
    #[inline]
    pub fn to_components(&self) -> [f32; 4] {
        self.0.to_array()
    }

    ///
    /// Creates a premultiplied pixel from a (straight alpha) colour
    ///
    #[inline]
    pub fn from_color(color: &Color) -> F32LinearPixel {
        let (r, g, b, a) = color.to_rgba_components();

        let pixel = f32x4::new([r, g, b, a]);
        let pixel = pixel.min(f32x4::ONE).max(f32x4::ZERO);
        let a     = a.min(1.0).max(0.0);

        F32LinearPixel(pixel * f32x4::new([a, a, a, 1.0]))
    }

    ///
    /// Converts to a (straight alpha) colour
    ///
    #[inline]
    pub fn to_color(&self) -> Color {
        let [r, g, b, a] = self.0.to_array();

        if a <= 0.0 {
            Color::rgba(0.0, 0.0, 0.0, 0.0)
        } else {
            Color::rgba(r/a, g/a, b/a, a)
        }
    }

    ///
    /// Converts to straight (non-premultiplied) RGBA bytes
    ///
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.to_color().to_rgba8()
    }
}

impl AlphaBlend for F32LinearPixel {
    type Component = f32;

    #[inline]
    fn alpha_component(&self) -> f32 {
        self.0.as_array_ref()[3]
    }

    #[inline]
    fn source_over(self, dest: Self) -> Self {
        let src_alpha = self.0.as_array_ref()[3];
        F32LinearPixel(self.0 + dest.0*(1.0-src_alpha))
    }

    #[inline]
    fn is_opaque(&self) -> bool {
        self.alpha_component() >= 1.0
    }
}

impl AddAssign<F32LinearPixel> for F32LinearPixel {
    #[inline]
    fn add_assign(&mut self, val: F32LinearPixel) {
        self.0 = self.0 + val.0;
    }
}

impl Div<f32> for F32LinearPixel {
    type Output=F32LinearPixel;

    #[inline]
    fn div(self, val: f32) -> F32LinearPixel {
        F32LinearPixel(self.0 / val)
    }
}
