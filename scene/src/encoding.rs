use crate::color::*;
use crate::command::*;
use crate::error::*;
use crate::geometry::*;
use crate::header::*;
use crate::path::*;
use crate::scene::*;
use crate::style::*;

///
/// Writes the binary representation of a scene
///
pub struct TvgWriter {
    header: Header,
    bytes:  Vec<u8>,
}

///
/// Trait implemented by objects that can be written to a TinyVG file
///
pub trait TvgEncoding {
    ///
    /// Encodes this item by appending it to the writer
    ///
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError>;
}

///
/// Encodes a scene in the TinyVG binary format
///
/// Coordinates are quantized using the scale in the scene header; values that don't fit in the header's coordinate
/// range are rejected with `InvalidData`, as are scenes that would fail `Scene::validate()`.
///
pub fn encode(scene: &Scene) -> Result<Vec<u8>, TvgError> {
    scene.validate()?;

    let mut writer = TvgWriter::new(scene.header);
    scene.encode_tvg(&mut writer)?;

    Ok(writer.into_bytes())
}

impl TvgWriter {
    ///
    /// Creates a writer that will encode coordinates using the settings in a header
    ///
    pub fn new(header: Header) -> TvgWriter {
        TvgWriter {
            header: header,
            bytes:  vec![],
        }
    }

    ///
    /// Returns the bytes written so far
    ///
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    ///
    /// Writes a variable-length unsigned integer (7 bits per byte, low bits first)
    ///
    pub fn write_var_u32(&mut self, value: u32) {
        let mut remaining = value;

        loop {
            let seven_bits  = (remaining & 0x7f) as u8;
            remaining       >>= 7;

            if remaining != 0 {
                self.bytes.push(seven_bits | 0x80);
            } else {
                self.bytes.push(seven_bits);
                break;
            }
        }
    }

    ///
    /// Writes a count, which is stored as one less than its value
    ///
    pub fn write_count(&mut self, count: usize) -> Result<(), TvgError> {
        if count == 0 || (count - 1) > (u32::MAX as usize) {
            return Err(invalid_data("item count cannot be encoded"));
        }

        self.write_var_u32((count - 1) as u32);
        Ok(())
    }

    ///
    /// Writes a value with the width selected by the coordinate range
    ///
    fn write_raw(&mut self, raw: i64) {
        match self.header.coordinate_range {
            CoordinateRange::Reduced    => self.bytes.push(raw as i8 as u8),
            CoordinateRange::Default    => self.bytes.extend_from_slice(&(raw as i16).to_le_bytes()),
            CoordinateRange::Enhanced   => self.bytes.extend_from_slice(&(raw as i32).to_le_bytes()),
        }
    }

    ///
    /// Writes a coordinate as a fixed-point unit
    ///
    pub fn write_unit(&mut self, value: f32) -> Result<(), TvgError> {
        let raw = self.header.unit_to_raw(value).ok_or_else(|| invalid_data("coordinate outside of the coordinate range"))?;
        self.write_raw(raw as i64);

        Ok(())
    }

    ///
    /// Writes a line width (which must be positive)
    ///
    pub fn write_line_width(&mut self, width: f32) -> Result<(), TvgError> {
        if !(width > 0.0) {
            return Err(invalid_data("line width must be positive"));
        }

        self.write_unit(width)
    }

    ///
    /// Writes the count byte of an outline command, which packs up to 64 items with the line style kind
    ///
    fn write_outline_count(&mut self, count: usize, line_kind: StyleKind) -> Result<(), TvgError> {
        if count == 0 || count > 64 {
            return Err(invalid_data("outline commands can have between 1 and 64 items"));
        }

        self.write_u8(((count - 1) as u8) | (line_kind.tag() << 6));
        Ok(())
    }

    ///
    /// Writes a colour using the header's colour encoding
    ///
    pub fn write_color(&mut self, color: &Color) -> Result<(), TvgError> {
        match self.header.color_encoding {
            ColorEncoding::Rgba8888 => self.bytes.extend_from_slice(&color.to_rgba8()),
            ColorEncoding::Rgb565   => self.bytes.extend_from_slice(&color.to_rgb565().to_le_bytes()),

            ColorEncoding::RgbaF32  => {
                for component in [color.r, color.g, color.b, color.a].iter() {
                    self.bytes.extend_from_slice(&component.to_le_bytes());
                }
            }

            ColorEncoding::Custom   => { return Err(unsupported("custom colour encoding")); }
        }

        Ok(())
    }

    ///
    /// Writes a list of paths: the segment counts for every path followed by the paths themselves
    ///
    pub fn write_paths(&mut self, paths: &[Path]) -> Result<(), TvgError> {
        for path in paths.iter() {
            self.write_count(path.segments.len())?;
        }

        for path in paths.iter() {
            path.start.encode_tvg(self)?;
            path.segments.encode_tvg(self)?;
        }

        Ok(())
    }
}

impl TvgEncoding for Point {
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError> {
        writer.write_unit(self.x)?;
        writer.write_unit(self.y)
    }
}

impl TvgEncoding for Rect {
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError> {
        writer.write_unit(self.x)?;
        writer.write_unit(self.y)?;
        writer.write_unit(self.width)?;
        writer.write_unit(self.height)
    }
}

impl TvgEncoding for Line {
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError> {
        self.start.encode_tvg(writer)?;
        self.end.encode_tvg(writer)
    }
}

impl<T: TvgEncoding> TvgEncoding for [T] {
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError> {
        for item in self.iter() {
            item.encode_tvg(writer)?;
        }

        Ok(())
    }
}

impl TvgEncoding for Style {
    ///
    /// Writes the style payload (the kind is stored separately in the command byte)
    ///
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError> {
        match self {
            Style::Flat(color)  => {
                writer.write_var_u32(*color);
            }

            Style::LinearGradient { point_0, point_1, color_0, color_1 } |
            Style::RadialGradient { point_0, point_1, color_0, color_1 } => {
                point_0.encode_tvg(writer)?;
                point_1.encode_tvg(writer)?;
                writer.write_var_u32(*color_0);
                writer.write_var_u32(*color_1);
            }
        }

        Ok(())
    }
}

impl TvgEncoding for Segment {
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError> {
        let has_line_width = if self.line_width.is_some() { 0x10 } else { 0x00 };
        writer.write_u8(self.kind.tag() | has_line_width);

        if let Some(line_width) = self.line_width {
            writer.write_line_width(line_width)?;
        }

        let arc_flags = |large_arc: bool, sweep: bool| (if large_arc { 0x01 } else { 0x00 }) | (if sweep { 0x02 } else { 0x00 });

        match &self.kind {
            SegmentKind::Line(point)                => point.encode_tvg(writer),
            SegmentKind::HorizontalLine(x)          => writer.write_unit(*x),
            SegmentKind::VerticalLine(y)            => writer.write_unit(*y),

            SegmentKind::CubicBezier { control_1, control_2, end } => {
                control_1.encode_tvg(writer)?;
                control_2.encode_tvg(writer)?;
                end.encode_tvg(writer)
            }

            SegmentKind::ArcCircle { radius, large_arc, sweep, end } => {
                writer.write_u8(arc_flags(*large_arc, *sweep));
                writer.write_unit(*radius)?;
                end.encode_tvg(writer)
            }

            SegmentKind::ArcEllipse { radius_x, radius_y, rotation, large_arc, sweep, end } => {
                writer.write_u8(arc_flags(*large_arc, *sweep));
                writer.write_unit(*radius_x)?;
                writer.write_unit(*radius_y)?;
                writer.write_unit(*rotation)?;
                end.encode_tvg(writer)
            }

            SegmentKind::QuadraticBezier { control, end } => {
                control.encode_tvg(writer)?;
                end.encode_tvg(writer)
            }

            SegmentKind::ClosePath                  => Ok(()),
        }
    }
}

impl TvgEncoding for Command {
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError> {
        let primary_kind = self.fill_style().or(self.line_style().map(|(style, _)| style))
            .map(|style| style.kind())
            .unwrap_or(StyleKind::Flat);

        writer.write_u8(self.index().tag() | (primary_kind.tag() << 6));

        match self {
            Command::FillPolygon { style, points } => {
                writer.write_count(points.len())?;
                style.encode_tvg(writer)?;
                points.encode_tvg(writer)
            }

            Command::FillRectangles { style, rectangles } => {
                writer.write_count(rectangles.len())?;
                style.encode_tvg(writer)?;
                rectangles.encode_tvg(writer)
            }

            Command::FillPath { style, paths } => {
                writer.write_count(paths.len())?;
                style.encode_tvg(writer)?;
                writer.write_paths(paths)
            }

            Command::DrawLines { style, line_width, lines } => {
                writer.write_count(lines.len())?;
                style.encode_tvg(writer)?;
                writer.write_line_width(*line_width)?;
                lines.encode_tvg(writer)
            }

            Command::DrawLineLoop { style, line_width, points } |
            Command::DrawLineStrip { style, line_width, points } => {
                writer.write_count(points.len())?;
                style.encode_tvg(writer)?;
                writer.write_line_width(*line_width)?;
                points.encode_tvg(writer)
            }

            Command::DrawLinePath { style, line_width, paths } => {
                writer.write_count(paths.len())?;
                style.encode_tvg(writer)?;
                writer.write_line_width(*line_width)?;
                writer.write_paths(paths)
            }

            Command::OutlineFillPolygon { fill_style, line_style, line_width, points } => {
                writer.write_outline_count(points.len(), line_style.kind())?;
                fill_style.encode_tvg(writer)?;
                line_style.encode_tvg(writer)?;
                writer.write_line_width(*line_width)?;
                points.encode_tvg(writer)
            }

            Command::OutlineFillRectangles { fill_style, line_style, line_width, rectangles } => {
                writer.write_outline_count(rectangles.len(), line_style.kind())?;
                fill_style.encode_tvg(writer)?;
                line_style.encode_tvg(writer)?;
                writer.write_line_width(*line_width)?;
                rectangles.encode_tvg(writer)
            }

            Command::OutlineFillPath { fill_style, line_style, line_width, paths } => {
                writer.write_outline_count(paths.len(), line_style.kind())?;
                fill_style.encode_tvg(writer)?;
                line_style.encode_tvg(writer)?;
                writer.write_line_width(*line_width)?;
                writer.write_paths(paths)
            }
        }
    }
}

impl TvgEncoding for Scene {
    fn encode_tvg(&self, writer: &mut TvgWriter) -> Result<(), TvgError> {
        let header = &self.header;

        if header.scale > 15 {
            return Err(invalid_data("scale must fit in 4 bits"));
        }

        if header.width > header.coordinate_range.max_dimension() || header.height > header.coordinate_range.max_dimension() {
            return Err(invalid_data("canvas size does not fit in the coordinate range"));
        }

        writer.bytes.extend_from_slice(&TVG_MAGIC);
        writer.write_u8(header.version);
        writer.write_u8(header.packed_format());

        match header.coordinate_range {
            CoordinateRange::Reduced    => { writer.write_u8(header.width as u8); writer.write_u8(header.height as u8); }
            CoordinateRange::Default    => { writer.bytes.extend_from_slice(&(header.width as u16).to_le_bytes()); writer.bytes.extend_from_slice(&(header.height as u16).to_le_bytes()); }
            CoordinateRange::Enhanced   => { writer.bytes.extend_from_slice(&header.width.to_le_bytes()); writer.bytes.extend_from_slice(&header.height.to_le_bytes()); }
        }

        if self.color_table.len() > (u32::MAX as usize) {
            return Err(invalid_data("colour table is too large"));
        }

        writer.write_var_u32(self.color_table.len() as u32);
        for color in self.color_table.iter() {
            writer.write_color(color)?;
        }

        for command in self.commands.iter() {
            command.encode_tvg(writer)?;
        }

        writer.write_u8(CommandIndex::EndOfDocument.tag());

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn var_u32_lengths() {
        let encode = |value: u32| {
            let mut writer = TvgWriter::new(Header::new(1, 1));
            writer.write_var_u32(value);
            writer.into_bytes()
        };

        assert!(encode(0) == vec![0x00]);
        assert!(encode(127) == vec![0x7f]);
        assert!(encode(128) == vec![0x80, 0x01]);
        assert!(encode(624485) == vec![0xe5, 0x8e, 0x26]);
        assert!(encode(u32::MAX) == vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn outline_count_limit() {
        let mut writer = TvgWriter::new(Header::new(1, 1));

        assert!(writer.write_outline_count(64, StyleKind::RadialGradient) == Ok(()));
        assert!(writer.write_outline_count(65, StyleKind::Flat) == Err(TvgError::InvalidData));
        assert!(writer.into_bytes() == vec![0xbf]);
    }
}
