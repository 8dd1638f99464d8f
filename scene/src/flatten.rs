use crate::arc::*;
use crate::error::*;
use crate::geometry::*;
use crate::path::*;

use smallvec::*;

///
/// Maximum number of times a single curve will be subdivided while flattening it
///
const MAX_SUBDIVISION_DEPTH: usize = 16;

///
/// A point produced by flattening a path along with the stroke width of the piece that ends there
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlattenedPoint {
    pub point:      Coord2,
    pub line_width: f64,
}

///
/// Distance from a point to the line through two other points (or to the first point if the line is degenerate)
///
#[inline]
fn distance_from_chord(point: Coord2, chord_start: Coord2, chord_end: Coord2) -> f64 {
    let chord   = chord_end - chord_start;
    let length  = chord.magnitude();
    let offset  = point - chord_start;

    if length <= 0.0 {
        offset.magnitude()
    } else {
        (offset.0*chord.1 - offset.1*chord.0).abs() / length
    }
}

///
/// Settings used when flattening curves
///
/// Pieces of a curve whose control points all lie outside of the clip region can't cross into it, so they're replaced with
/// a single straight line instead of being subdivided further.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlattenOptions {
    /// Maximum distance between the curve and the lines that replace it
    pub tolerance: f64,

    /// The region where the curve needs to be accurate, as a (min, max) pair of corners
    pub clip: Option<(Coord2, Coord2)>,
}

impl FlattenOptions {
    ///
    /// Flattens curves to a tolerance everywhere
    ///
    #[inline]
    pub fn new(tolerance: f64) -> FlattenOptions {
        FlattenOptions { tolerance: tolerance, clip: None }
    }

    ///
    /// Only subdivides curves within a clip region
    ///
    #[inline]
    pub fn with_clip(mut self, min: Coord2, max: Coord2) -> FlattenOptions {
        self.clip = Some((min, max));
        self
    }

    ///
    /// True if none of a set of control points are inside the clip region (so the curve they describe is also outside)
    ///
    #[inline]
    fn is_clipped(&self, points: &[Coord2]) -> bool {
        if let Some((min, max)) = self.clip {
            points.iter().all(|p| p.0 < min.0)
                || points.iter().all(|p| p.0 > max.0)
                || points.iter().all(|p| p.1 < min.1)
                || points.iter().all(|p| p.1 > max.1)
        } else {
            false
        }
    }
}

///
/// Flattens a cubic bezier curve into a set of line segments, calling `add_point` for each point after the start
///
/// The curve is split at its midpoint until its control points are within the tolerance of the chord. Subdivision uses
/// an explicit stack so long or badly-behaved curves can't exhaust the call stack, and is limited in depth so
/// that a non-finite or zero tolerance still terminates. Any error from `add_point` stops the flattening.
///
pub fn flatten_cubic(start: Coord2, control_1: Coord2, control_2: Coord2, end: Coord2, options: &FlattenOptions, mut add_point: impl FnMut(Coord2) -> Result<(), TvgError>) -> Result<(), TvgError> {
    // Depth-first, so the stack never holds more than one pending piece per level
    let mut stack: SmallVec<[_; MAX_SUBDIVISION_DEPTH+1]> = smallvec![(start, control_1, control_2, end, 0)];

    while let Some((p0, p1, p2, p3, depth)) = stack.pop() {
        let flatness = distance_from_chord(p1, p0, p3).max(distance_from_chord(p2, p0, p3));

        if depth >= MAX_SUBDIVISION_DEPTH || !(flatness > options.tolerance) || options.is_clipped(&[p0, p1, p2, p3]) {
            add_point(p3)?;
            continue;
        }

        // de Casteljau split at t=0.5
        let p01     = p0.lerp(&p1, 0.5);
        let p12     = p1.lerp(&p2, 0.5);
        let p23     = p2.lerp(&p3, 0.5);
        let p012    = p01.lerp(&p12, 0.5);
        let p123    = p12.lerp(&p23, 0.5);
        let mid     = p012.lerp(&p123, 0.5);

        // Second half goes on the stack first so the first half is processed first
        stack.push((mid, p123, p23, p3, depth+1));
        stack.push((p0, p01, p012, mid, depth+1));
    }

    Ok(())
}

///
/// Flattens a quadratic bezier curve by raising it to a cubic
///
pub fn flatten_quadratic(start: Coord2, control: Coord2, end: Coord2, options: &FlattenOptions, add_point: impl FnMut(Coord2) -> Result<(), TvgError>) -> Result<(), TvgError> {
    let control_1 = start + (control - start) * (2.0/3.0);
    let control_2 = end + (control - end) * (2.0/3.0);

    flatten_cubic(start, control_1, control_2, end, options, add_point)
}

///
/// Flattens a path into a polyline, tagging every point with the stroke width in effect for the piece that ends there
///
/// The first point is always the start of the path and is tagged with `line_width`. A segment carrying its own line
/// width changes the width for itself and every segment after it. Closing a path adds its start point if the
/// polyline doesn't already end there. Fails with `OutOfMemory` if the points can't be stored.
///
pub fn flatten_path(path: &Path, options: &FlattenOptions, line_width: f64) -> Result<Vec<FlattenedPoint>, TvgError> {
    let start           = Coord2::from(path.start);
    let mut current     = start;
    let mut width       = line_width;
    let mut points      = vec![];

    points.try_reserve(path.segments.len() + 1)?;
    points.push(FlattenedPoint { point: start, line_width: width });

    for segment in path.segments.iter() {
        if let Some(segment_width) = segment.line_width {
            width = segment_width as f64;
        }

        let mut add_point = |point: Coord2| -> Result<(), TvgError> {
            points.try_reserve(1)?;
            points.push(FlattenedPoint { point, line_width: width });

            Ok(())
        };

        match segment.kind {
            SegmentKind::Line(end) => {
                current = Coord2::from(end);
                add_point(current)?;
            }

            SegmentKind::HorizontalLine(x) => {
                current = Coord2(x as f64, current.1);
                add_point(current)?;
            }

            SegmentKind::VerticalLine(y) => {
                current = Coord2(current.0, y as f64);
                add_point(current)?;
            }

            SegmentKind::CubicBezier { control_1, control_2, end } => {
                let end = Coord2::from(end);
                flatten_cubic(current, Coord2::from(control_1), Coord2::from(control_2), end, options, add_point)?;
                current = end;
            }

            SegmentKind::QuadraticBezier { control, end } => {
                let end = Coord2::from(end);
                flatten_quadratic(current, Coord2::from(control), end, options, add_point)?;
                current = end;
            }

            SegmentKind::ArcCircle { radius, large_arc, sweep, end } => {
                let end = Coord2::from(end);
                let mut section_start = current;

                for (control_1, control_2, section_end) in arc_to_cubics(current, end, radius as f64, radius as f64, 0.0, large_arc, sweep) {
                    flatten_cubic(section_start, control_1, control_2, section_end, options, &mut add_point)?;
                    section_start = section_end;
                }

                current = end;
            }

            SegmentKind::ArcEllipse { radius_x, radius_y, rotation, large_arc, sweep, end } => {
                let end = Coord2::from(end);
                let mut section_start = current;

                for (control_1, control_2, section_end) in arc_to_cubics(current, end, radius_x as f64, radius_y as f64, rotation as f64, large_arc, sweep) {
                    flatten_cubic(section_start, control_1, control_2, section_end, options, &mut add_point)?;
                    section_start = section_end;
                }

                current = end;
            }

            SegmentKind::ClosePath => {
                if current != start {
                    add_point(start)?;
                }

                current = start;
            }
        }
    }

    Ok(points)
}

///
/// Flattens a path to a tolerance, tagging every point with its stroke width (see `flatten_path()`)
///
pub fn flatten_with_widths(path: &Path, tolerance: f64, line_width: f64) -> Result<Vec<FlattenedPoint>, TvgError> {
    flatten_path(path, &FlattenOptions::new(tolerance), line_width)
}

///
/// Flattens a path into a polyline made of straight line segments no further than `tolerance` from the true curve
///
pub fn flatten(path: &Path, tolerance: f64) -> Result<Vec<Coord2>, TvgError> {
    let flattened   = flatten_with_widths(path, tolerance, 1.0)?;
    let mut points  = vec![];

    points.try_reserve_exact(flattened.len())?;
    points.extend(flattened.into_iter().map(|flattened| flattened.point));

    Ok(points)
}

///
/// Flattens a list of points, closing it if requested
///
pub fn polygon_points(points: &[Point], close: bool) -> Vec<Coord2> {
    let mut result = points.iter().map(|point| Coord2::from(*point)).collect::<Vec<_>>();

    if close {
        if let (Some(first), Some(last)) = (result.first().copied(), result.last().copied()) {
            if first != last {
                result.push(first);
            }
        }
    }

    result
}
