use super::edge_intercept_direction::*;

use tvg_scene::{Coord2, TvgError};

use itertools::*;
use smallvec::*;

use std::ops::{Range};

///
/// A single line within a polyline
///
#[derive(Clone, Debug)]
struct PolylineLine {
    /// The y-range covered by this line (the range is exclusive, so the end point is not included)
    y_range: Range<f64>,

    /// The x position at the start of the y-range
    start_x: f64,

    /// How far x changes for each unit of y
    x_per_y: f64,

    /// The direction of this line (up or down)
    direction: EdgeInterceptDirection,
}

///
/// A polyline is a shape defined by one or more closed loops of lines joining points together
///
/// Loops are added with `add_loop()`; `prepare_to_render()` must be called before finding intercepts.
/// Horizontal lines never produce intercepts. Every method that stores points fails with `OutOfMemory` rather than
/// aborting if the points can't be allocated.
///
#[derive(Clone, Debug)]
pub struct Polyline {
    /// The loops that have been added but not yet prepared
    loops:          Vec<Vec<Coord2>>,

    /// The prepared lines, ordered by the start of their y-range
    lines:          Vec<PolylineLine>,

    /// The bounding box of the prepared lines
    bounding_box:   ((f64, f64), (f64, f64)),
}

impl PolylineLine {
    /// Returns the x position for a y position
    #[inline]
    pub fn x_pos(&self, y: f64) -> f64 {
        self.start_x + (y - self.y_range.start) * self.x_per_y
    }
}

impl Polyline {
    ///
    /// Creates an empty polyline
    ///
    #[inline]
    pub fn empty() -> Self {
        Polyline {
            loops:          vec![],
            lines:          vec![],
            bounding_box:   ((0.0, 0.0), (0.0, 0.0)),
        }
    }

    ///
    /// Creates a new polyline shape from a single loop of points
    ///
    #[inline]
    pub fn new(points: impl IntoIterator<Item=Coord2>) -> Result<Self, TvgError> {
        let mut polyline = Self::empty();
        polyline.add_loop(points)?;

        Ok(polyline)
    }

    ///
    /// Adds a loop to this polyline (the loop is closed if its last point is not the same as its first point)
    ///
    pub fn add_loop(&mut self, points: impl IntoIterator<Item=Coord2>) -> Result<(), TvgError> {
        let points      = points.into_iter();
        let mut result  = vec![];

        result.try_reserve(points.size_hint().0 + 1)?;
        for point in points {
            result.try_reserve(1)?;
            result.push(point);
        }

        if result.len() < 2 {
            return Ok(());
        }

        if result.last() != result.first() {
            let first = result[0];
            result.try_reserve(1)?;
            result.push(first);
        }

        self.loops.try_reserve(1)?;
        self.loops.push(result);

        Ok(())
    }

    ///
    /// True if no loops have been added to this polyline
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty() && self.lines.is_empty()
    }

    ///
    /// Transforms every point that has been added so far
    ///
    pub fn transform(&mut self, transform: impl Fn(Coord2) -> Coord2) {
        for polyline_loop in self.loops.iter_mut() {
            for point in polyline_loop.iter_mut() {
                *point = transform(*point);
            }
        }
    }

    ///
    /// Performs the calculations required to find intercepts
    ///
    pub fn prepare_to_render(&mut self) -> Result<(), TvgError> {
        let num_lines = self.loops.iter().map(|polyline_loop| polyline_loop.len()).sum::<usize>();
        self.lines.try_reserve(num_lines)?;

        let mut bounds_min = (f64::MAX, f64::MAX);
        let mut bounds_max = (f64::MIN, f64::MIN);

        for polyline_loop in self.loops.drain(..) {
            for (start, end) in polyline_loop.into_iter().tuple_windows::<(Coord2, Coord2)>() {
                // Non-finite points can't be rendered
                if !start.0.is_finite() || !start.1.is_finite() || !end.0.is_finite() || !end.1.is_finite() {
                    continue;
                }

                // Update bounding box
                bounds_min.0 = bounds_min.0.min(start.x()).min(end.x());
                bounds_min.1 = bounds_min.1.min(start.y()).min(end.y());
                bounds_max.0 = bounds_max.0.max(start.x()).max(end.x());
                bounds_max.1 = bounds_max.1.max(start.y()).max(end.y());

                // Horizontal lines never cross a scanline
                if start.y() == end.y() {
                    continue;
                }

                let (top, bottom, direction) = if start.y() < end.y() {
                    (start, end, EdgeInterceptDirection::DirectionOut)
                } else {
                    (end, start, EdgeInterceptDirection::DirectionIn)
                };

                self.lines.push(PolylineLine {
                    y_range:    top.y()..bottom.y(),
                    start_x:    top.x(),
                    x_per_y:    (bottom.x() - top.x()) / (bottom.y() - top.y()),
                    direction:  direction,
                });
            }
        }

        self.lines.sort_by(|a, b| a.y_range.start.total_cmp(&b.y_range.start));

        if bounds_min.0 <= bounds_max.0 {
            self.bounding_box = (bounds_min, bounds_max);
        }

        Ok(())
    }

    ///
    /// Once `prepare_to_render()` has been called, returns the bounding box of this polyline
    ///
    #[inline]
    pub fn bounding_box(&self) -> ((f64, f64), (f64, f64)) {
        self.bounding_box
    }

    ///
    /// Finds all of the intercepts along a horizontal line, ordered by x position
    ///
    /// Use `active_edges()` to find the intercepts for a series of lines moving down the shape.
    ///
    pub fn intercepts_on_line(&self, y_pos: f64, intercepts: &mut SmallVec<[(EdgeInterceptDirection, f64); 4]>) -> Result<(), TvgError> {
        self.active_edges().intercepts_on_line(y_pos, intercepts)
    }

    ///
    /// Starts a scan down this polyline
    ///
    #[inline]
    pub fn active_edges(&self) -> ActiveEdges<'_> {
        ActiveEdges {
            lines:      &self.lines,
            next_line:  0,
            active:     vec![],
            y_pos:      f64::MIN,
        }
    }
}

///
/// Tracks which lines of a polyline cross the current scanline, as the scanline moves down the shape
///
/// Each line is added to the active list once, when the scan reaches its start, and removed when the scan passes its end.
///
pub struct ActiveEdges<'a> {
    /// The lines of the polyline, sorted by where they start
    lines:      &'a [PolylineLine],

    /// The first line that hasn't been reached yet
    next_line:  usize,

    /// Indexes of the lines that cross the current scanline
    active:     Vec<usize>,

    /// The most recent scanline
    y_pos:      f64,
}

impl<'a> ActiveEdges<'a> {
    ///
    /// Finds the intercepts along a horizontal line, ordered by x position
    ///
    /// This is fastest when `y_pos` increases with every call. Moving back up the shape restarts the scan from the top.
    ///
    pub fn intercepts_on_line(&mut self, y_pos: f64, intercepts: &mut SmallVec<[(EdgeInterceptDirection, f64); 4]>) -> Result<(), TvgError> {
        let lines = self.lines;

        if y_pos < self.y_pos {
            self.next_line = 0;
            self.active.clear();
        }
        self.y_pos = y_pos;

        while self.next_line < lines.len() && lines[self.next_line].y_range.start <= y_pos {
            if lines[self.next_line].y_range.end > y_pos {
                self.active.try_reserve(1)?;
                self.active.push(self.next_line);
            }

            self.next_line += 1;
        }

        self.active.retain(|idx| lines[*idx].y_range.end > y_pos);

        intercepts.clear();
        intercepts.extend(self.active.iter().map(|idx| (lines[*idx].direction, lines[*idx].x_pos(y_pos))));
        intercepts.sort_by(|(_, a), (_, b)| a.total_cmp(b));

        Ok(())
    }
}
