use crate::geometry::*;

///
/// The instruction carried by a single path segment
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Straight line to a point
    Line(Point),

    /// Straight line to a new x coordinate (y is unchanged)
    HorizontalLine(f32),

    /// Straight line to a new y coordinate (x is unchanged)
    VerticalLine(f32),

    /// Cubic bezier curve with two control points
    CubicBezier { control_1: Point, control_2: Point, end: Point },

    /// Circular arc to a point. `sweep` is set when the arc runs counter-clockwise
    ArcCircle { radius: f32, large_arc: bool, sweep: bool, end: Point },

    /// Elliptical arc to a point. `rotation` is in degrees, `sweep` is set when the arc runs counter-clockwise
    ArcEllipse { radius_x: f32, radius_y: f32, rotation: f32, large_arc: bool, sweep: bool, end: Point },

    /// Quadratic bezier curve with a single control point
    QuadraticBezier { control: Point, end: Point },

    /// Returns to the start of the path
    ClosePath,
}

///
/// A segment of a path: an instruction plus an optional override for the stroke width
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind:       SegmentKind,
    pub line_width: Option<f32>,
}

///
/// A path: a start point and an ordered list of segments
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub start:      Point,
    pub segments:   Vec<Segment>,
}

impl SegmentKind {
    ///
    /// The 3-bit instruction tag used for this segment in a file
    ///
    #[inline]
    pub fn tag(&self) -> u8 {
        use SegmentKind::*;

        match self {
            Line(_)                 => 0,
            HorizontalLine(_)       => 1,
            VerticalLine(_)         => 2,
            CubicBezier { .. }      => 3,
            ArcCircle { .. }        => 4,
            ArcEllipse { .. }       => 5,
            ClosePath               => 6,
            QuadraticBezier { .. }  => 7,
        }
    }
}

impl From<SegmentKind> for Segment {
    #[inline]
    fn from(kind: SegmentKind) -> Segment {
        Segment { kind: kind, line_width: None }
    }
}

impl Segment {
    ///
    /// Changes the stroke width used from this segment onwards
    ///
    #[inline]
    pub fn with_line_width(self, line_width: f32) -> Segment {
        Segment { kind: self.kind, line_width: Some(line_width) }
    }
}

impl Path {
    ///
    /// Creates a path at a start point with no segments
    ///
    #[inline]
    pub fn new(start: Point) -> Path {
        Path { start: start, segments: vec![] }
    }

    ///
    /// Adds a segment to the end of this path
    ///
    #[inline]
    pub fn with(mut self, segment: impl Into<Segment>) -> Path {
        self.segments.push(segment.into());
        self
    }

    #[inline]
    pub fn line_to(self, x: f32, y: f32) -> Path {
        self.with(SegmentKind::Line(Point::new(x, y)))
    }

    #[inline]
    pub fn horizontal_to(self, x: f32) -> Path {
        self.with(SegmentKind::HorizontalLine(x))
    }

    #[inline]
    pub fn vertical_to(self, y: f32) -> Path {
        self.with(SegmentKind::VerticalLine(y))
    }

    #[inline]
    pub fn cubic_to(self, control_1: Point, control_2: Point, end: Point) -> Path {
        self.with(SegmentKind::CubicBezier { control_1, control_2, end })
    }

    #[inline]
    pub fn quadratic_to(self, control: Point, end: Point) -> Path {
        self.with(SegmentKind::QuadraticBezier { control, end })
    }

    #[inline]
    pub fn arc_circle_to(self, radius: f32, large_arc: bool, sweep: bool, end: Point) -> Path {
        self.with(SegmentKind::ArcCircle { radius, large_arc, sweep, end })
    }

    #[inline]
    pub fn arc_ellipse_to(self, radius_x: f32, radius_y: f32, rotation: f32, large_arc: bool, sweep: bool, end: Point) -> Path {
        self.with(SegmentKind::ArcEllipse { radius_x, radius_y, rotation, large_arc, sweep, end })
    }

    #[inline]
    pub fn close(self) -> Path {
        self.with(SegmentKind::ClosePath)
    }

    ///
    /// True if this path ends with a close instruction
    ///
    #[inline]
    pub fn is_closed(&self) -> bool {
        match self.segments.last() {
            Some(Segment { kind: SegmentKind::ClosePath, .. })  => true,
            _                                                   => false,
        }
    }
}
