use super::polyline_edge::*;

use tvg_scene::{Coord2, FlattenedPoint, TvgError};

use smallvec::*;

use std::f64::consts::{PI};

/// Fewest points used to approximate the round cap at the end of a line
const MIN_CAP_POINTS: usize = 8;

/// Most points used to approximate the round cap at the end of a line
const MAX_CAP_POINTS: usize = 1024;

///
/// Returns the signed area of a closed loop of points (positive for clockwise loops in y-down coordinates)
///
#[inline]
fn signed_area(points: &[Coord2]) -> f64 {
    let mut area = 0.0;

    for idx in 0..points.len() {
        let p1 = points[idx];
        let p2 = points[(idx+1) % points.len()];

        area += p1.0*p2.1 - p2.0*p1.1;
    }

    area * 0.5
}

///
/// Adds a loop to a polyline after making sure that it winds in the same direction as every other stroke loop
///
fn add_oriented_loop(mut points: SmallVec<[Coord2; 16]>, polyline: &mut Polyline) -> Result<(), TvgError> {
    if signed_area(&points) < 0.0 {
        points.reverse();
    }

    polyline.add_loop(points)
}

///
/// The number of points to use to approximate a circle of a particular radius
///
fn circle_points(radius: f64, tolerance: f64) -> usize {
    if !(radius > tolerance) || !(tolerance > 0.0) {
        return MIN_CAP_POINTS;
    }

    // Each chord of the circle can be at most 'tolerance' from the arc it replaces
    let angle_per_point = 2.0 * (1.0 - tolerance/radius).acos();
    let num_points      = ((2.0*PI) / angle_per_point).ceil();

    if num_points.is_finite() {
        (num_points as usize).max(MIN_CAP_POINTS).min(MAX_CAP_POINTS)
    } else {
        MAX_CAP_POINTS
    }
}

///
/// Adds a circle to a polyline
///
fn add_circle(center: Coord2, radius: f64, tolerance: f64, polyline: &mut Polyline) -> Result<(), TvgError> {
    let num_points  = circle_points(radius, tolerance);
    let points      = (0..num_points)
        .map(|idx| {
            let angle = (idx as f64) / (num_points as f64) * 2.0 * PI;
            Coord2(center.0 + angle.cos()*radius, center.1 + angle.sin()*radius)
        });

    // Increasing angles already wind the same way as the other stroke loops
    polyline.add_loop(points)
}

///
/// Adds the round join between two lines that meet at `center`: a wedge of a circle filling the gap on the outside of the turn
///
fn add_join(center: Coord2, incoming: Coord2, outgoing: Coord2, width: f64, tolerance: f64, polyline: &mut Polyline) -> Result<(), TvgError> {
    let radius  = width * 0.5;
    let cross   = incoming.0*outgoing.1 - incoming.1*outgoing.0;
    let dot     = incoming.dot(&outgoing);
    let turn    = cross.abs().atan2(dot);

    if turn == 0.0 {
        // Lines continue straight on
        return Ok(());
    }

    if !(turn < PI * 0.99) {
        // Line doubles back on itself
        return add_circle(center, radius, tolerance, polyline);
    }

    let normal_in = if let Some(normal) = incoming.unit_normal() { normal } else { return Ok(()); };

    // The gap is on the opposite side to the direction of the turn
    let side        = if cross > 0.0 { -1.0 } else { 1.0 };
    let start_angle = (normal_in.1 * side).atan2(normal_in.0 * side);
    let turn_angle  = if cross > 0.0 { turn } else { -turn };
    let num_points  = (((circle_points(radius, tolerance) as f64) * turn / (2.0*PI)).ceil() as usize).max(1);

    let mut wedge: SmallVec<[Coord2; 16]> = smallvec![center];
    for idx in 0..=num_points {
        let angle = start_angle + turn_angle * (idx as f64) / (num_points as f64);
        wedge.push(Coord2(center.0 + angle.cos()*radius, center.1 + angle.sin()*radius));
    }

    add_oriented_loop(wedge, polyline)
}

///
/// Adds the rectangle covering a single line segment to a polyline
///
fn add_line_body(start: Coord2, end: Coord2, width: f64, polyline: &mut Polyline) -> Result<(), TvgError> {
    if let Some(normal) = (end - start).unit_normal() {
        let offset = normal * (width * 0.5);

        add_oriented_loop(smallvec![start + offset, end + offset, end - offset, start - offset], polyline)
    } else {
        Ok(())
    }
}

///
/// Adds the outline of a stroke along a flattened path to a polyline
///
/// Each line segment is covered by a rectangle as wide as its line width. Round caps are added at the ends of an open
/// stroke, and each corner is filled in with a round join. Where the line width changes, the join is a full circle as wide
/// as the wider segment. Every loop winds the same way, so filling the polyline with the non-zero rule produces the union
/// of the pieces. Each segment uses the line width of the point it ends at. Repeated points are skipped, so a path whose
/// points are all the same adds nothing.
///
pub fn stroke_path(points: &[FlattenedPoint], closed: bool, tolerance: f64, polyline: &mut Polyline) -> Result<(), TvgError> {
    let mut stroke_points = vec![];
    stroke_points.try_reserve(points.len() + 1)?;

    for point in points.iter() {
        if stroke_points.last().map(|last: &FlattenedPoint| last.point) != Some(point.point) {
            stroke_points.push(*point);
        }
    }

    if stroke_points.len() < 2 {
        return Ok(());
    }

    let closed = closed || stroke_points[0].point == stroke_points[stroke_points.len()-1].point;
    if closed && stroke_points[0].point != stroke_points[stroke_points.len()-1].point {
        let close_width = stroke_points[stroke_points.len()-1].line_width;
        let close_point = stroke_points[0].point;
        stroke_points.push(FlattenedPoint { point: close_point, line_width: close_width });
    }

    let points      = stroke_points;
    let last_idx    = points.len()-1;

    for idx in 0..last_idx {
        let width = points[idx+1].line_width;

        if width > 0.0 {
            add_line_body(points[idx].point, points[idx+1].point, width, polyline)?;
        }
    }

    // Corners (on a closed path the start is also a corner, joining the last line to the first one)
    let corners = if closed { 0..last_idx } else { 1..last_idx };

    for idx in corners {
        let before          = if idx == 0 { last_idx-1 } else { idx-1 };
        let width_in        = points[if idx == 0 { last_idx } else { idx }].line_width;
        let width_out       = points[idx+1].line_width;
        let center          = points[idx].point;

        if width_in != width_out {
            add_circle(center, width_in.max(width_out) * 0.5, tolerance, polyline)?;
        } else if width_in > 0.0 {
            add_join(center, center - points[before].point, points[idx+1].point - center, width_in, tolerance, polyline)?;
        }
    }

    // Round caps
    if !closed {
        let start_width = points[1].line_width;
        let end_width   = points[last_idx].line_width;

        if start_width > 0.0 { add_circle(points[0].point, start_width * 0.5, tolerance, polyline)?; }
        if end_width > 0.0 { add_circle(points[last_idx].point, end_width * 0.5, tolerance, polyline)?; }
    }

    Ok(())
}

///
/// Strokes a list of points with a single line width
///
pub fn stroke_points(points: &[Coord2], line_width: f64, closed: bool, tolerance: f64, polyline: &mut Polyline) -> Result<(), TvgError> {
    let mut flattened = vec![];
    flattened.try_reserve(points.len())?;
    flattened.extend(points.iter().map(|point| FlattenedPoint { point: *point, line_width: line_width }));

    stroke_path(&flattened, closed, tolerance, polyline)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn circle_point_count_grows_with_radius() {
        assert!(circle_points(1.0, 0.25) == MIN_CAP_POINTS);
        assert!(circle_points(100.0, 0.25) > circle_points(10.0, 0.25));
        assert!(circle_points(1e12, 0.25) == MAX_CAP_POINTS);
        assert!(circle_points(10.0, 0.0) == MIN_CAP_POINTS);
    }

    #[test]
    fn loops_are_normalized() {
        let clockwise   = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0)];
        let mut anti    = clockwise.clone();
        anti.reverse();

        assert!(signed_area(&clockwise) > 0.0);
        assert!(signed_area(&anti) < 0.0);
    }
}
