use crate::geometry::*;
use crate::error::*;

use std::convert::{TryFrom};

///
/// Index into the colour table of a scene
///
pub type ColorIndex = u32;

///
/// The kind of a style, as stored in the 2-bit fields of command bytes
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Flat,
    LinearGradient,
    RadialGradient,
}

///
/// Describes how a shape is coloured in
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Style {
    /// Every pixel has the same colour
    Flat(ColorIndex),

    /// The colour changes from `color_0` at `point_0` to `color_1` at `point_1` along the line between the two points
    LinearGradient { point_0: Point, point_1: Point, color_0: ColorIndex, color_1: ColorIndex },

    /// The colour changes from `color_0` at the center (`point_0`) to `color_1` at the radius (the distance to `point_1`)
    RadialGradient { point_0: Point, point_1: Point, color_0: ColorIndex, color_1: ColorIndex },
}

impl StyleKind {
    ///
    /// The 2-bit tag used for this style kind
    ///
    #[inline]
    pub fn tag(&self) -> u8 {
        match self {
            StyleKind::Flat             => 0,
            StyleKind::LinearGradient   => 1,
            StyleKind::RadialGradient   => 2,
        }
    }
}

impl TryFrom<u8> for StyleKind {
    type Error = TvgError;

    fn try_from(tag: u8) -> Result<StyleKind, TvgError> {
        match tag {
            0 => Ok(StyleKind::Flat),
            1 => Ok(StyleKind::LinearGradient),
            2 => Ok(StyleKind::RadialGradient),
            _ => Err(invalid_data("style kind out of range")),
        }
    }
}

impl Style {
    ///
    /// A flat style using a colour from the colour table
    ///
    #[inline]
    pub fn flat(color: ColorIndex) -> Style {
        Style::Flat(color)
    }

    ///
    /// The kind of this style
    ///
    #[inline]
    pub fn kind(&self) -> StyleKind {
        match self {
            Style::Flat(_)                  => StyleKind::Flat,
            Style::LinearGradient { .. }    => StyleKind::LinearGradient,
            Style::RadialGradient { .. }    => StyleKind::RadialGradient,
        }
    }

    ///
    /// The colour table entries that this style refers to
    ///
    #[inline]
    pub fn color_indexes(&self) -> impl Iterator<Item=ColorIndex> {
        let (first, second) = match self {
            Style::Flat(color)                                  => (*color, None),
            Style::LinearGradient { color_0, color_1, .. }      => (*color_0, Some(*color_1)),
            Style::RadialGradient { color_0, color_1, .. }      => (*color_0, Some(*color_1)),
        };

        std::iter::once(first).chain(second)
    }

    ///
    /// For a radial gradient, the radius of the gradient
    ///
    #[inline]
    pub fn radius(&self) -> Option<f64> {
        match self {
            Style::RadialGradient { point_0, point_1, .. }  => Some(Coord2::from(*point_0).distance_to(&Coord2::from(*point_1))),
            _                                               => None,
        }
    }
}
