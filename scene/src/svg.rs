use crate::color::*;
use crate::command::*;
use crate::error::*;
use crate::geometry::*;
use crate::out_stream::*;
use crate::path::*;
use crate::scene::*;
use crate::style::*;

use itertools::*;

///
/// Writes a scene to an output stream as SVG markup
///
/// The SVG document has the same size as the scene's canvas. Gradients are written to a `<defs>` section and each
/// command becomes a single element. Paths keep their curves and arcs; per-segment line widths can't be expressed in
/// SVG, so paths are stroked using the command's line width throughout.
///
/// A failure reported by the stream aborts the encoding with `TvgError::Io`.
///
pub fn encode_svg<S: OutStream + ?Sized>(scene: &Scene, stream: &mut S) -> Result<(), TvgError> {
    let result = SvgEncoder { scene, stream, next_gradient: 0 }.encode();

    if result == Err(TvgError::Io) {
        log::warn!("SVG output was abandoned because the output stream failed");
    }

    result
}

///
/// State used while writing a SVG document
///
struct SvgEncoder<'a, S: OutStream + ?Sized> {
    scene:          &'a Scene,
    stream:         &'a mut S,

    /// Index of the next gradient definition to be referenced by a command
    next_gradient:  usize,
}

///
/// Formats a colour as a SVG colour plus an opacity
///
fn svg_color(color: &Color) -> (String, f32) {
    let [r, g, b, _] = color.to_rgba8();
    let alpha        = color.a.max(0.0).min(1.0);

    (format!("#{:02x}{:02x}{:02x}", r, g, b), alpha)
}

#[inline]
fn arc_flag(flag: bool) -> u8 {
    if flag { 1 } else { 0 }
}

///
/// Every gradient style in a scene, in the order that the commands will refer to them
///
fn gradient_styles(scene: &Scene) -> impl Iterator<Item=&Style> {
    scene.commands.iter()
        .flat_map(|command| command.styles())
        .filter(|style| style.kind() != StyleKind::Flat)
}

///
/// Generates the SVG path data for a set of paths
///
fn path_data(paths: &[Path]) -> String {
    let mut data = String::new();

    for path in paths.iter() {
        if !data.is_empty() { data.push(' '); }
        data.push_str(&format!("M{} {}", path.start.x, path.start.y));

        for segment in path.segments.iter() {
            // SVG's sweep flag selects clockwise arcs, TinyVG's selects counter-clockwise ones
            let instruction = match segment.kind {
                SegmentKind::Line(point)                                => format!(" L{} {}", point.x, point.y),
                SegmentKind::HorizontalLine(x)                          => format!(" H{}", x),
                SegmentKind::VerticalLine(y)                            => format!(" V{}", y),
                SegmentKind::CubicBezier { control_1, control_2, end }  => format!(" C{} {} {} {} {} {}", control_1.x, control_1.y, control_2.x, control_2.y, end.x, end.y),
                SegmentKind::QuadraticBezier { control, end }           => format!(" Q{} {} {} {}", control.x, control.y, end.x, end.y),
                SegmentKind::ClosePath                                  => " Z".to_string(),

                SegmentKind::ArcCircle { radius, large_arc, sweep, end } => 
                    format!(" A{} {} 0 {} {} {} {}", radius, radius, arc_flag(large_arc), arc_flag(!sweep), end.x, end.y),

                SegmentKind::ArcEllipse { radius_x, radius_y, rotation, large_arc, sweep, end } => 
                    format!(" A{} {} {} {} {} {} {}", radius_x, radius_y, rotation, arc_flag(large_arc), arc_flag(!sweep), end.x, end.y),
            };

            data.push_str(&instruction);
        }
    }

    data
}

///
/// Generates the SVG path data for a set of rectangles
///
/// Rectangles with a negative width or height are written using the same corners the rasterizer fills.
///
fn rectangle_data(rectangles: &[Rect]) -> String {
    rectangles.iter()
        .map(|rect| {
            let [top_left, _, bottom_right, _] = rect.to_polygon();
            let (x1, y1) = (top_left.0 as f32, top_left.1 as f32);
            let (x2, y2) = (bottom_right.0 as f32, bottom_right.1 as f32);

            format!("M{} {} H{} V{} H{} Z", x1, y1, x2, y2, x1)
        })
        .join(" ")
}

///
/// Generates the SVG path data for a set of unconnected lines
///
fn line_data(lines: &[Line]) -> String {
    lines.iter()
        .map(|line| format!("M{} {} L{} {}", line.start.x, line.start.y, line.end.x, line.end.y))
        .join(" ")
}

///
/// Generates the value of a `points` attribute
///
fn points_data(points: &[Point]) -> String {
    points.iter()
        .map(|point| format!("{},{}", point.x, point.y))
        .join(" ")
}

impl<'a, S: OutStream + ?Sized> SvgEncoder<'a, S> {
    ///
    /// Writes the whole document
    ///
    fn encode(&mut self) -> Result<(), TvgError> {
        let header = &self.scene.header;

        self.stream.write_str(&format!("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n", header.width, header.height, header.width, header.height))?;

        self.write_gradient_definitions()?;

        for command in self.scene.commands.iter() {
            self.write_command(command)?;
        }

        self.stream.write_str("</svg>\n")
    }

    ///
    /// Writes a `<defs>` section containing a definition for every gradient in the scene
    ///
    fn write_gradient_definitions(&mut self) -> Result<(), TvgError> {
        let styles = gradient_styles(self.scene).collect::<Vec<_>>();
        if styles.is_empty() {
            return Ok(());
        }

        self.stream.write_str("<defs>\n")?;

        for (index, style) in styles.into_iter().enumerate() {
            let (element, color_0, color_1) = match style {
                Style::Flat(_) => { continue; }

                Style::LinearGradient { point_0, point_1, color_0, color_1 } => {
                    (format!("<linearGradient id=\"gradient{}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">", index, point_0.x, point_0.y, point_1.x, point_1.y), *color_0, *color_1)
                }

                Style::RadialGradient { point_0, color_0, color_1, .. } => {
                    let radius = style.radius().unwrap_or(0.0);
                    (format!("<radialGradient id=\"gradient{}\" gradientUnits=\"userSpaceOnUse\" cx=\"{}\" cy=\"{}\" r=\"{}\">", index, point_0.x, point_0.y, radius), *color_0, *color_1)
                }
            };

            let (start_color, start_opacity)    = svg_color(self.scene.color(color_0)?);
            let (end_color, end_opacity)        = svg_color(self.scene.color(color_1)?);
            let closing                         = if style.kind() == StyleKind::LinearGradient { "</linearGradient>" } else { "</radialGradient>" };

            self.stream.write_str(&element)?;
            self.stream.write_str(&format!("<stop offset=\"0\" stop-color=\"{}\" stop-opacity=\"{}\"/>", start_color, start_opacity))?;
            self.stream.write_str(&format!("<stop offset=\"1\" stop-color=\"{}\" stop-opacity=\"{}\"/>", end_color, end_opacity))?;
            self.stream.write_str(closing)?;
            self.stream.write_str("\n")?;
        }

        self.stream.write_str("</defs>\n")
    }

    ///
    /// Returns the attributes that apply a style as a fill or a stroke (`attribute` is `fill` or `stroke`)
    ///
    fn paint_attributes(&mut self, attribute: &str, style: &Style) -> Result<String, TvgError> {
        match style {
            Style::Flat(color) => {
                let (color, opacity) = svg_color(self.scene.color(*color)?);
                Ok(format!("{}=\"{}\" {}-opacity=\"{}\"", attribute, color, attribute, opacity))
            }

            Style::LinearGradient { color_0, color_1, .. } |
            Style::RadialGradient { color_0, color_1, .. } => {
                self.scene.color(*color_0)?;
                self.scene.color(*color_1)?;

                let gradient = self.next_gradient;
                self.next_gradient += 1;

                Ok(format!("{}=\"url(#gradient{})\"", attribute, gradient))
            }
        }
    }

    ///
    /// The attributes for a command that has a fill but no stroke
    ///
    fn fill_only(&mut self, style: &Style) -> Result<String, TvgError> {
        Ok(format!("{} stroke=\"none\"", self.paint_attributes("fill", style)?))
    }

    ///
    /// The attributes for a command that has a stroke but no fill
    ///
    fn stroke_only(&mut self, style: &Style, line_width: f32) -> Result<String, TvgError> {
        Ok(format!("fill=\"none\" {} stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"", self.paint_attributes("stroke", style)?, line_width))
    }

    ///
    /// The attributes for a command that is filled then stroked
    ///
    fn fill_and_stroke(&mut self, fill_style: &Style, line_style: &Style, line_width: f32) -> Result<String, TvgError> {
        let fill    = self.paint_attributes("fill", fill_style)?;
        let stroke  = self.paint_attributes("stroke", line_style)?;

        Ok(format!("{} {} stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"", fill, stroke, line_width))
    }

    ///
    /// Writes the element for a single command
    ///
    fn write_command(&mut self, command: &Command) -> Result<(), TvgError> {
        let element = match command {
            Command::FillPolygon { style, points }                  => format!("<polygon points=\"{}\" {}/>", points_data(points), self.fill_only(style)?),
            Command::FillRectangles { style, rectangles }           => format!("<path d=\"{}\" {}/>", rectangle_data(rectangles), self.fill_only(style)?),
            Command::FillPath { style, paths }                      => format!("<path d=\"{}\" {}/>", path_data(paths), self.fill_only(style)?),

            Command::DrawLines { style, line_width, lines }         => format!("<path d=\"{}\" {}/>", line_data(lines), self.stroke_only(style, *line_width)?),
            Command::DrawLineLoop { style, line_width, points }     => format!("<polygon points=\"{}\" {}/>", points_data(points), self.stroke_only(style, *line_width)?),
            Command::DrawLineStrip { style, line_width, points }    => format!("<polyline points=\"{}\" {}/>", points_data(points), self.stroke_only(style, *line_width)?),
            Command::DrawLinePath { style, line_width, paths }      => format!("<path d=\"{}\" {}/>", path_data(paths), self.stroke_only(style, *line_width)?),

            Command::OutlineFillPolygon { fill_style, line_style, line_width, points }      => format!("<polygon points=\"{}\" {}/>", points_data(points), self.fill_and_stroke(fill_style, line_style, *line_width)?),
            Command::OutlineFillRectangles { fill_style, line_style, line_width, rectangles } => format!("<path d=\"{}\" {}/>", rectangle_data(rectangles), self.fill_and_stroke(fill_style, line_style, *line_width)?),
            Command::OutlineFillPath { fill_style, line_style, line_width, paths }          => format!("<path d=\"{}\" {}/>", path_data(paths), self.fill_and_stroke(fill_style, line_style, *line_width)?),
        };

        self.stream.write_str(&element)?;
        self.stream.write_str("\n")
    }
}
