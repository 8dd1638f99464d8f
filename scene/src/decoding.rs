use crate::color::*;
use crate::command::*;
use crate::error::*;
use crate::geometry::*;
use crate::header::*;
use crate::path::*;
use crate::reader::*;
use crate::scene::*;
use crate::style::*;

use std::convert::{TryFrom};

///
/// Decodes a TinyVG document into a scene
///
/// Decoding stops at the first problem: no partial scene is ever returned. Malformed input produces `InvalidData`,
/// and well-formed input using a version or colour encoding this crate doesn't know produces `Unsupported`.
///
pub fn decode(bytes: &[u8]) -> Result<Scene, TvgError> {
    let mut reader  = TvgReader::new(bytes);
    let header      = SceneDecoder::read_header(&mut reader)?;

    let mut decoder = SceneDecoder {
        reader:         reader,
        header:         header,
        color_count:    0,
    };

    let color_table = decoder.read_color_table()?;
    decoder.color_count = color_table.len();

    let commands    = decoder.read_commands()?;

    log::debug!("Decoded TinyVG scene: {}x{}, {} colours, {} commands", header.width, header.height, color_table.len(), commands.len());

    Ok(Scene {
        header:         header,
        color_table:    color_table,
        commands:       commands,
    })
}

///
/// Tracks the state needed while decoding the body of a TinyVG document
///
struct SceneDecoder<'a> {
    reader:         TvgReader<'a>,
    header:         Header,
    color_count:    usize,
}

///
/// Creates an empty vec with space for `count` items, each of which needs at least `min_bytes` bytes of input
///
/// Counts come from untrusted input, so a count that can't possibly be satisfied by the remaining data is rejected
/// before anything is allocated.
///
fn vec_for_items<T>(reader: &TvgReader, count: usize, min_bytes: usize) -> Result<Vec<T>, TvgError> {
    if count.saturating_mul(min_bytes) > reader.remaining() {
        return Err(invalid_data("item count is larger than the remaining data"));
    }

    let mut result = Vec::new();
    result.try_reserve_exact(count)?;

    Ok(result)
}

impl<'a> SceneDecoder<'a> {
    ///
    /// Reads and validates the header
    ///
    fn read_header(reader: &mut TvgReader) -> Result<Header, TvgError> {
        let magic = reader.read_bytes(2)?;
        if magic != &TVG_MAGIC[..] {
            return Err(invalid_data("bad magic number"));
        }

        let version = reader.read_u8()?;
        if version != TVG_VERSION {
            return Err(unsupported("unknown file version"));
        }

        let format              = reader.read_u8()?;
        let scale               = format & 0x0f;
        let color_encoding      = ColorEncoding::try_from((format >> 4) & 0x03)?;
        let coordinate_range    = CoordinateRange::try_from((format >> 6) & 0x03)?;

        let (width, height) = match coordinate_range {
            CoordinateRange::Reduced    => (reader.read_u8()? as u32, reader.read_u8()? as u32),
            CoordinateRange::Default    => (reader.read_u16()? as u32, reader.read_u16()? as u32),
            CoordinateRange::Enhanced   => (reader.read_u32()?, reader.read_u32()?),
        };

        if width == 0 || height == 0 {
            return Err(invalid_data("canvas has no area"));
        }

        Ok(Header {
            version:            version,
            scale:              scale,
            color_encoding:     color_encoding,
            coordinate_range:   coordinate_range,
            width:              width,
            height:             height,
        })
    }

    ///
    /// Reads the colour table that follows the header
    ///
    fn read_color_table(&mut self) -> Result<Vec<Color>, TvgError> {
        let count       = self.reader.read_var_u32()? as usize;
        let encoding    = self.header.color_encoding;

        let bytes_per_color = match encoding.bytes_per_color() {
            Some(bytes) => bytes,
            None        => { return Err(unsupported("custom colour encoding")); }
        };

        let mut colors = vec_for_items(&self.reader, count, bytes_per_color)?;
        for _ in 0..count {
            colors.push(self.reader.read_color(encoding)?);
        }

        Ok(colors)
    }

    ///
    /// Reads commands until the end of document marker
    ///
    fn read_commands(&mut self) -> Result<Vec<Command>, TvgError> {
        let mut commands = vec![];

        loop {
            if self.reader.is_at_end() {
                return Err(invalid_data("document ended without an end of document command"));
            }

            let command_byte    = self.reader.read_u8()?;
            let index           = CommandIndex::try_from(command_byte & 0x3f)?;

            if index == CommandIndex::EndOfDocument {
                break;
            }

            let style_kind      = StyleKind::try_from(command_byte >> 6)?;
            let command         = self.read_command(index, style_kind)?;

            commands.try_reserve(1)?;
            commands.push(command);
        }

        Ok(commands)
    }

    ///
    /// Reads the body of a command (after the command byte)
    ///
    fn read_command(&mut self, index: CommandIndex, style_kind: StyleKind) -> Result<Command, TvgError> {
        use CommandIndex::*;

        match index {
            EndOfDocument           => Err(invalid_data("unexpected end of document")),

            FillPolygon             => {
                let count   = self.read_count()?;
                let style   = self.read_style(style_kind)?;
                let points  = self.read_points(count)?;

                Ok(Command::FillPolygon { style, points })
            }

            FillRectangles          => {
                let count       = self.read_count()?;
                let style       = self.read_style(style_kind)?;
                let rectangles  = self.read_rects(count)?;

                Ok(Command::FillRectangles { style, rectangles })
            }

            FillPath                => {
                let count   = self.read_count()?;
                let style   = self.read_style(style_kind)?;
                let paths   = self.read_paths(count)?;

                Ok(Command::FillPath { style, paths })
            }

            DrawLines               => {
                let count       = self.read_count()?;
                let style       = self.read_style(style_kind)?;
                let line_width  = self.read_line_width()?;
                let lines       = self.read_lines(count)?;

                Ok(Command::DrawLines { style, line_width, lines })
            }

            DrawLineLoop            => {
                let count       = self.read_count()?;
                let style       = self.read_style(style_kind)?;
                let line_width  = self.read_line_width()?;
                let points      = self.read_points(count)?;

                Ok(Command::DrawLineLoop { style, line_width, points })
            }

            DrawLineStrip           => {
                let count       = self.read_count()?;
                let style       = self.read_style(style_kind)?;
                let line_width  = self.read_line_width()?;
                let points      = self.read_points(count)?;

                Ok(Command::DrawLineStrip { style, line_width, points })
            }

            DrawLinePath            => {
                let count       = self.read_count()?;
                let style       = self.read_style(style_kind)?;
                let line_width  = self.read_line_width()?;
                let paths       = self.read_paths(count)?;

                Ok(Command::DrawLinePath { style, line_width, paths })
            }

            OutlineFillPolygon      => {
                let (count, line_kind)  = self.read_outline_count()?;
                let fill_style          = self.read_style(style_kind)?;
                let line_style          = self.read_style(line_kind)?;
                let line_width          = self.read_line_width()?;
                let points              = self.read_points(count)?;

                Ok(Command::OutlineFillPolygon { fill_style, line_style, line_width, points })
            }

            OutlineFillRectangles   => {
                let (count, line_kind)  = self.read_outline_count()?;
                let fill_style          = self.read_style(style_kind)?;
                let line_style          = self.read_style(line_kind)?;
                let line_width          = self.read_line_width()?;
                let rectangles          = self.read_rects(count)?;

                Ok(Command::OutlineFillRectangles { fill_style, line_style, line_width, rectangles })
            }

            OutlineFillPath         => {
                let (count, line_kind)  = self.read_outline_count()?;
                let fill_style          = self.read_style(style_kind)?;
                let line_style          = self.read_style(line_kind)?;
                let line_width          = self.read_line_width()?;
                let paths               = self.read_paths(count)?;

                Ok(Command::OutlineFillPath { fill_style, line_style, line_width, paths })
            }
        }
    }

    ///
    /// Reads an item count (stored as a varint holding one less than the count)
    ///
    #[inline]
    fn read_count(&mut self) -> Result<usize, TvgError> {
        Ok((self.reader.read_var_u32()? as usize) + 1)
    }

    ///
    /// Reads the count byte used by the outline commands, which also carries the kind of the line style
    ///
    #[inline]
    fn read_outline_count(&mut self) -> Result<(usize, StyleKind), TvgError> {
        let packed      = self.reader.read_u8()?;
        let count       = ((packed & 0x3f) as usize) + 1;
        let line_kind   = StyleKind::try_from(packed >> 6)?;

        Ok((count, line_kind))
    }

    ///
    /// Reads a single coordinate value
    ///
    #[inline]
    fn read_unit(&mut self) -> Result<f32, TvgError> {
        let raw = match self.header.coordinate_range {
            CoordinateRange::Reduced    => self.reader.read_i8()? as i32,
            CoordinateRange::Default    => self.reader.read_i16()? as i32,
            CoordinateRange::Enhanced   => self.reader.read_i32()?,
        };

        Ok(self.header.unit_from_raw(raw))
    }

    ///
    /// Reads a line width, which has to be a positive value
    ///
    #[inline]
    fn read_line_width(&mut self) -> Result<f32, TvgError> {
        let width = self.read_unit()?;

        if width > 0.0 {
            Ok(width)
        } else {
            Err(invalid_data("line width must be positive"))
        }
    }

    #[inline]
    fn read_point(&mut self) -> Result<Point, TvgError> {
        let x = self.read_unit()?;
        let y = self.read_unit()?;

        Ok(Point { x, y })
    }

    ///
    /// Reads a colour index, checking it against the colour table
    ///
    #[inline]
    fn read_color_index(&mut self) -> Result<ColorIndex, TvgError> {
        let index = self.reader.read_var_u32()?;

        if (index as usize) < self.color_count {
            Ok(index)
        } else {
            Err(invalid_data("colour index is outside of the colour table"))
        }
    }

    fn read_style(&mut self, kind: StyleKind) -> Result<Style, TvgError> {
        match kind {
            StyleKind::Flat             => Ok(Style::Flat(self.read_color_index()?)),

            StyleKind::LinearGradient   => {
                let point_0 = self.read_point()?;
                let point_1 = self.read_point()?;
                let color_0 = self.read_color_index()?;
                let color_1 = self.read_color_index()?;

                Ok(Style::LinearGradient { point_0, point_1, color_0, color_1 })
            }

            StyleKind::RadialGradient   => {
                let point_0 = self.read_point()?;
                let point_1 = self.read_point()?;
                let color_0 = self.read_color_index()?;
                let color_1 = self.read_color_index()?;

                Ok(Style::RadialGradient { point_0, point_1, color_0, color_1 })
            }
        }
    }

    fn read_points(&mut self, count: usize) -> Result<Vec<Point>, TvgError> {
        let mut points = vec_for_items(&self.reader, count, 2 * self.header.coordinate_range.bytes_per_unit())?;

        for _ in 0..count {
            points.push(self.read_point()?);
        }

        Ok(points)
    }

    fn read_rects(&mut self, count: usize) -> Result<Vec<Rect>, TvgError> {
        let mut rects = vec_for_items(&self.reader, count, 4 * self.header.coordinate_range.bytes_per_unit())?;

        for _ in 0..count {
            let x       = self.read_unit()?;
            let y       = self.read_unit()?;
            let width   = self.read_unit()?;
            let height  = self.read_unit()?;

            rects.push(Rect { x, y, width, height });
        }

        Ok(rects)
    }

    fn read_lines(&mut self, count: usize) -> Result<Vec<Line>, TvgError> {
        let mut lines = vec_for_items(&self.reader, count, 4 * self.header.coordinate_range.bytes_per_unit())?;

        for _ in 0..count {
            let start   = self.read_point()?;
            let end     = self.read_point()?;

            lines.push(Line { start, end });
        }

        Ok(lines)
    }

    ///
    /// Reads a path made up of `count` sub-paths
    ///
    /// The segment counts for every sub-path are stored first, followed by the start point and segments of each sub-path
    ///
    fn read_paths(&mut self, count: usize) -> Result<Vec<Path>, TvgError> {
        let mut segment_counts: Vec<usize> = vec_for_items(&self.reader, count, 1)?;
        for _ in 0..count {
            segment_counts.push(self.read_count()?);
        }

        let point_bytes = 2 * self.header.coordinate_range.bytes_per_unit();
        let mut paths   = vec_for_items(&self.reader, count, point_bytes + 1)?;

        for segment_count in segment_counts {
            let start           = self.read_point()?;
            let mut segments    = vec_for_items(&self.reader, segment_count, 1)?;

            for _ in 0..segment_count {
                segments.push(self.read_segment()?);
            }

            paths.push(Path { start, segments });
        }

        Ok(paths)
    }

    ///
    /// Reads a single path segment
    ///
    fn read_segment(&mut self) -> Result<Segment, TvgError> {
        let tag             = self.reader.read_u8()?;
        let instruction     = tag & 0x07;
        let has_line_width  = (tag & 0x10) != 0;

        let line_width      = if has_line_width { Some(self.read_line_width()?) } else { None };

        let kind = match instruction {
            0 => SegmentKind::Line(self.read_point()?),
            1 => SegmentKind::HorizontalLine(self.read_unit()?),
            2 => SegmentKind::VerticalLine(self.read_unit()?),

            3 => {
                let control_1   = self.read_point()?;
                let control_2   = self.read_point()?;
                let end         = self.read_point()?;

                SegmentKind::CubicBezier { control_1, control_2, end }
            }

            4 => {
                let (large_arc, sweep)  = self.read_arc_flags()?;
                let radius              = self.read_unit()?;
                let end                 = self.read_point()?;

                SegmentKind::ArcCircle { radius, large_arc, sweep, end }
            }

            5 => {
                let (large_arc, sweep)  = self.read_arc_flags()?;
                let radius_x            = self.read_unit()?;
                let radius_y            = self.read_unit()?;
                let rotation            = self.read_unit()?;
                let end                 = self.read_point()?;

                SegmentKind::ArcEllipse { radius_x, radius_y, rotation, large_arc, sweep, end }
            }

            6 => SegmentKind::ClosePath,

            7 => {
                let control = self.read_point()?;
                let end     = self.read_point()?;

                SegmentKind::QuadraticBezier { control, end }
            }

            _ => { return Err(invalid_data("unknown path instruction")); }
        };

        Ok(Segment { kind, line_width })
    }

    ///
    /// Reads the (large arc, sweep) flags for an arc segment
    ///
    #[inline]
    fn read_arc_flags(&mut self) -> Result<(bool, bool), TvgError> {
        let flags = self.reader.read_u8()?;

        Ok(((flags & 0x01) != 0, (flags & 0x02) != 0))
    }
}
