use crate::pixel::*;

use tvg_scene::{Color, Coord2, Scene, Style, TvgError};

///
/// The colour source for a shape, ready to be evaluated at any point in the scene
///
#[derive(Clone, Debug)]
pub enum Paint {
    /// Every point has the same colour
    Flat(F32LinearPixel),

    /// Colour varies along the line from `start` in the direction `direction` (whose length is the length of the gradient)
    Linear { start: Coord2, direction: Coord2, color_0: Color, color_1: Color },

    /// Colour varies with the distance from `center`
    Radial { center: Coord2, radius: f64, color_0: Color, color_1: Color },
}

impl Paint {
    ///
    /// Creates the paint for a style, looking up its colours in the scene's colour table
    ///
    /// A style that refers to a colour that isn't in the table produces `InvalidData`
    ///
    pub fn from_style(style: &Style, scene: &Scene) -> Result<Paint, TvgError> {
        match style {
            Style::Flat(color) => {
                Ok(Paint::Flat(F32LinearPixel::from_color(scene.color(*color)?)))
            }

            Style::LinearGradient { point_0, point_1, color_0, color_1 } => {
                let start = Coord2::from(*point_0);
                let end   = Coord2::from(*point_1);

                Ok(Paint::Linear {
                    start:      start,
                    direction:  end - start,
                    color_0:    *scene.color(*color_0)?,
                    color_1:    *scene.color(*color_1)?,
                })
            }

            Style::RadialGradient { point_0, color_0, color_1, .. } => {
                Ok(Paint::Radial {
                    center:     Coord2::from(*point_0),
                    radius:     style.radius().unwrap_or(0.0),
                    color_0:    *scene.color(*color_0)?,
                    color_1:    *scene.color(*color_1)?,
                })
            }
        }
    }

    ///
    /// Returns the position of a point along a gradient, clamped to the range 0..1
    ///
    /// Degenerate gradients (zero length or zero radius) always return 0
    ///
    #[inline]
    pub fn gradient_position(&self, point: Coord2) -> f64 {
        let t = match self {
            Paint::Flat(_) => 0.0,

            Paint::Linear { start, direction, .. } => {
                let length_squared = direction.dot(direction);

                if length_squared > 0.0 {
                    (point - *start).dot(direction) / length_squared
                } else {
                    0.0
                }
            }

            Paint::Radial { center, radius, .. } => {
                if *radius > 0.0 {
                    point.distance_to(center) / *radius
                } else {
                    0.0
                }
            }
        };

        if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) }
    }

    ///
    /// Evaluates the (premultiplied) colour at a point in the scene
    ///
    /// Gradient colours are interpolated with straight alpha and premultiplied afterwards
    ///
    #[inline]
    pub fn pixel_at(&self, point: Coord2) -> F32LinearPixel {
        match self {
            Paint::Flat(pixel)                              => *pixel,

            Paint::Linear { color_0, color_1, .. }          |
            Paint::Radial { color_0, color_1, .. }          => {
                let t = self.gradient_position(point) as f32;
                F32LinearPixel::from_color(&color_0.lerp(color_1, t))
            }
        }
    }

    ///
    /// True if this paint always produces opaque pixels
    ///
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Flat(pixel)                      => pixel.is_opaque(),
            Paint::Linear { color_0, color_1, .. }  |
            Paint::Radial { color_0, color_1, .. }  => color_0.a >= 1.0 && color_1.a >= 1.0,
        }
    }
}
