use crate::color::*;
use crate::command::*;
use crate::error::*;
use crate::geometry::*;
use crate::header::*;
use crate::path::*;
use crate::style::*;

///
/// A fully decoded TinyVG document
///
/// Scenes are immutable once built: both the SVG encoder and the rasterizer take them by reference. Commands are
/// drawn in order, with later commands composited over earlier ones.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub header:         Header,
    pub color_table:    Vec<Color>,
    pub commands:       Vec<Command>,
}

///
/// Builds up a scene programmatically
///
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    header:         Header,
    color_table:    Vec<Color>,
    commands:       Vec<Command>,
}

impl Scene {
    ///
    /// Looks up a colour from the colour table
    ///
    #[inline]
    pub fn color(&self, index: ColorIndex) -> Result<&Color, TvgError> {
        self.color_table.get(index as usize).ok_or(TvgError::InvalidData)
    }

    ///
    /// Checks that every command references valid colours and non-empty geometry, and that every line width is positive
    ///
    /// Scenes returned by the decoder always pass this check; it's useful for scenes that have been built by hand
    ///
    pub fn validate(&self) -> Result<(), TvgError> {
        if self.header.width == 0 || self.header.height == 0 {
            return Err(invalid_data("canvas has no area"));
        }

        for command in self.commands.iter() {
            for style in command.styles() {
                if style.color_indexes().any(|index| (index as usize) >= self.color_table.len()) {
                    return Err(invalid_data("style refers to a colour outside of the colour table"));
                }
            }

            if let Some((_, line_width)) = command.line_style() {
                if !(line_width > 0.0) {
                    return Err(invalid_data("line width must be positive"));
                }
            }

            let is_empty = match command {
                Command::FillPolygon { points, .. }             |
                Command::DrawLineLoop { points, .. }            |
                Command::DrawLineStrip { points, .. }           |
                Command::OutlineFillPolygon { points, .. }      => points.is_empty(),

                Command::FillRectangles { rectangles, .. }      |
                Command::OutlineFillRectangles { rectangles, .. } => rectangles.is_empty(),

                Command::FillPath { paths, .. }                 |
                Command::DrawLinePath { paths, .. }             |
                Command::OutlineFillPath { paths, .. }          => paths.is_empty(),

                Command::DrawLines { lines, .. }                => lines.is_empty(),
            };

            if is_empty {
                return Err(invalid_data("command has no geometry"));
            }
        }

        Ok(())
    }
}

impl SceneBuilder {
    ///
    /// Starts building a scene with a canvas of the specified size
    ///
    pub fn new(width: u32, height: u32) -> SceneBuilder {
        SceneBuilder {
            header:         Header::new(width, height),
            color_table:    vec![],
            commands:       vec![],
        }
    }

    ///
    /// Sets the number of fractional bits used when encoding coordinates
    ///
    pub fn with_scale(mut self, scale: u8) -> SceneBuilder {
        self.header.scale = scale;
        self
    }

    ///
    /// Sets the encoding used for the colour table
    ///
    pub fn with_color_encoding(mut self, encoding: ColorEncoding) -> SceneBuilder {
        self.header.color_encoding = encoding;
        self
    }

    ///
    /// Sets the range used when encoding coordinates
    ///
    pub fn with_coordinate_range(mut self, range: CoordinateRange) -> SceneBuilder {
        self.header.coordinate_range = range;
        self
    }

    ///
    /// Adds a colour to the colour table (the first colour has index 0, the next 1, etc)
    ///
    pub fn with_color(mut self, color: Color) -> SceneBuilder {
        self.color_table.push(color);
        self
    }

    ///
    /// Adds an arbitrary command
    ///
    pub fn command(mut self, command: Command) -> SceneBuilder {
        self.commands.push(command);
        self
    }

    pub fn fill_polygon(self, style: Style, points: Vec<Point>) -> SceneBuilder {
        self.command(Command::FillPolygon { style, points })
    }

    pub fn fill_rectangles(self, style: Style, rectangles: Vec<Rect>) -> SceneBuilder {
        self.command(Command::FillRectangles { style, rectangles })
    }

    pub fn fill_path(self, style: Style, paths: Vec<Path>) -> SceneBuilder {
        self.command(Command::FillPath { style, paths })
    }

    pub fn draw_lines(self, style: Style, line_width: f32, lines: Vec<Line>) -> SceneBuilder {
        self.command(Command::DrawLines { style, line_width, lines })
    }

    pub fn draw_line_loop(self, style: Style, line_width: f32, points: Vec<Point>) -> SceneBuilder {
        self.command(Command::DrawLineLoop { style, line_width, points })
    }

    pub fn draw_line_strip(self, style: Style, line_width: f32, points: Vec<Point>) -> SceneBuilder {
        self.command(Command::DrawLineStrip { style, line_width, points })
    }

    pub fn draw_line_path(self, style: Style, line_width: f32, paths: Vec<Path>) -> SceneBuilder {
        self.command(Command::DrawLinePath { style, line_width, paths })
    }

    pub fn outline_fill_polygon(self, fill_style: Style, line_style: Style, line_width: f32, points: Vec<Point>) -> SceneBuilder {
        self.command(Command::OutlineFillPolygon { fill_style, line_style, line_width, points })
    }

    pub fn outline_fill_rectangles(self, fill_style: Style, line_style: Style, line_width: f32, rectangles: Vec<Rect>) -> SceneBuilder {
        self.command(Command::OutlineFillRectangles { fill_style, line_style, line_width, rectangles })
    }

    pub fn outline_fill_path(self, fill_style: Style, line_style: Style, line_width: f32, paths: Vec<Path>) -> SceneBuilder {
        self.command(Command::OutlineFillPath { fill_style, line_style, line_width, paths })
    }

    ///
    /// Finishes the scene
    ///
    pub fn build(self) -> Scene {
        Scene {
            header:         self.header,
            color_table:    self.color_table,
            commands:       self.commands,
        }
    }
}
