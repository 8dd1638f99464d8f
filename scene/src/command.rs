use crate::geometry::*;
use crate::path::*;
use crate::style::*;
use crate::error::*;

use smallvec::*;

use std::convert::{TryFrom};

///
/// The command indexes stored in the low 6 bits of a command byte
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandIndex {
    EndOfDocument,
    FillPolygon,
    FillRectangles,
    FillPath,
    DrawLines,
    DrawLineLoop,
    DrawLineStrip,
    DrawLinePath,
    OutlineFillPolygon,
    OutlineFillRectangles,
    OutlineFillPath,
}

///
/// A single drawing command from a TinyVG document
///
/// Every geometry list in a command is non-empty and every style refers to an entry in the scene's colour table.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Fills a polygon
    FillPolygon { style: Style, points: Vec<Point> },

    /// Fills a set of rectangles
    FillRectangles { style: Style, rectangles: Vec<Rect> },

    /// Fills a path made up of one or more sub-paths
    FillPath { style: Style, paths: Vec<Path> },

    /// Draws a set of unconnected lines
    DrawLines { style: Style, line_width: f32, lines: Vec<Line> },

    /// Draws a closed loop through a set of points
    DrawLineLoop { style: Style, line_width: f32, points: Vec<Point> },

    /// Draws an open line through a set of points
    DrawLineStrip { style: Style, line_width: f32, points: Vec<Point> },

    /// Strokes a path made up of one or more sub-paths
    DrawLinePath { style: Style, line_width: f32, paths: Vec<Path> },

    /// Fills a polygon then strokes its outline
    OutlineFillPolygon { fill_style: Style, line_style: Style, line_width: f32, points: Vec<Point> },

    /// Fills a set of rectangles then strokes their outlines
    OutlineFillRectangles { fill_style: Style, line_style: Style, line_width: f32, rectangles: Vec<Rect> },

    /// Fills a path then strokes its outline
    OutlineFillPath { fill_style: Style, line_style: Style, line_width: f32, paths: Vec<Path> },
}

impl CommandIndex {
    ///
    /// The 6-bit value used for this command in a file
    ///
    #[inline]
    pub fn tag(&self) -> u8 {
        use CommandIndex::*;

        match self {
            EndOfDocument           => 0,
            FillPolygon             => 1,
            FillRectangles          => 2,
            FillPath                => 3,
            DrawLines               => 4,
            DrawLineLoop            => 5,
            DrawLineStrip           => 6,
            DrawLinePath            => 7,
            OutlineFillPolygon      => 8,
            OutlineFillRectangles   => 9,
            OutlineFillPath         => 10,
        }
    }
}

impl TryFrom<u8> for CommandIndex {
    type Error = TvgError;

    fn try_from(tag: u8) -> Result<CommandIndex, TvgError> {
        use CommandIndex::*;

        match tag {
            0   => Ok(EndOfDocument),
            1   => Ok(FillPolygon),
            2   => Ok(FillRectangles),
            3   => Ok(FillPath),
            4   => Ok(DrawLines),
            5   => Ok(DrawLineLoop),
            6   => Ok(DrawLineStrip),
            7   => Ok(DrawLinePath),
            8   => Ok(OutlineFillPolygon),
            9   => Ok(OutlineFillRectangles),
            10  => Ok(OutlineFillPath),
            _   => Err(invalid_data("unknown command index")),
        }
    }
}

impl Command {
    ///
    /// The command index used to store this command
    ///
    pub fn index(&self) -> CommandIndex {
        match self {
            Command::FillPolygon { .. }             => CommandIndex::FillPolygon,
            Command::FillRectangles { .. }          => CommandIndex::FillRectangles,
            Command::FillPath { .. }                => CommandIndex::FillPath,
            Command::DrawLines { .. }               => CommandIndex::DrawLines,
            Command::DrawLineLoop { .. }            => CommandIndex::DrawLineLoop,
            Command::DrawLineStrip { .. }           => CommandIndex::DrawLineStrip,
            Command::DrawLinePath { .. }            => CommandIndex::DrawLinePath,
            Command::OutlineFillPolygon { .. }      => CommandIndex::OutlineFillPolygon,
            Command::OutlineFillRectangles { .. }   => CommandIndex::OutlineFillRectangles,
            Command::OutlineFillPath { .. }         => CommandIndex::OutlineFillPath,
        }
    }

    ///
    /// The style used to fill the interior of this command's shape, if it has one
    ///
    pub fn fill_style(&self) -> Option<&Style> {
        match self {
            Command::FillPolygon { style, .. }              |
            Command::FillRectangles { style, .. }           |
            Command::FillPath { style, .. }                 => Some(style),

            Command::OutlineFillPolygon { fill_style, .. }      |
            Command::OutlineFillRectangles { fill_style, .. }   |
            Command::OutlineFillPath { fill_style, .. }         => Some(fill_style),

            _                                               => None,
        }
    }

    ///
    /// The style and width used to stroke this command's outline, if it has one
    ///
    pub fn line_style(&self) -> Option<(&Style, f32)> {
        match self {
            Command::DrawLines { style, line_width, .. }        |
            Command::DrawLineLoop { style, line_width, .. }     |
            Command::DrawLineStrip { style, line_width, .. }    |
            Command::DrawLinePath { style, line_width, .. }     => Some((style, *line_width)),

            Command::OutlineFillPolygon { line_style, line_width, .. }      |
            Command::OutlineFillRectangles { line_style, line_width, .. }   |
            Command::OutlineFillPath { line_style, line_width, .. }         => Some((line_style, *line_width)),

            _                                                   => None,
        }
    }

    ///
    /// All of the styles used by this command
    ///
    pub fn styles(&self) -> SmallVec<[&Style; 2]> {
        self.fill_style().into_iter()
            .chain(self.line_style().map(|(style, _)| style))
            .collect()
    }
}
