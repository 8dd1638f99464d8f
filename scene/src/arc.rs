use crate::geometry::*;

use smallvec::*;

use std::f64::consts::{PI};

///
/// A cubic bezier section produced when converting an arc: (control point 1, control point 2, end point)
///
pub type CubicSection = (Coord2, Coord2, Coord2);

///
/// Which side of the chord the center of an arc lies on, indexed by the large-arc and clockwise flags
///
/// For any two points and radii there are two candidate ellipses and two directions to travel around each of them,
/// giving four possible arcs. Picking the large or small arc and the direction of travel fixes which of the two
/// centers is used.
///
#[inline]
fn center_side(large_arc: bool, clockwise: bool) -> f64 {
    match (large_arc, clockwise) {
        (false, false)  => -1.0,
        (false, true)   => 1.0,
        (true,  false)  => 1.0,
        (true,  true)   => -1.0,
    }
}

///
/// The signed angle between two vectors
///
#[inline]
fn angle_between(u: Coord2, v: Coord2) -> f64 {
    let cross = u.0*v.1 - u.1*v.0;
    let dot   = u.dot(&v);

    cross.atan2(dot)
}

///
/// Converts an elliptical arc between two points into a series of cubic bezier sections
///
/// `rotation` is the rotation of the ellipse's x-axis in degrees. When `sweep` is set, the arc runs counter-clockwise
/// (decreasing angles in a y-down coordinate system). Radii that are too small to span the two points are scaled up
/// until they do. An arc with a zero radius becomes a straight line, and an arc that starts and ends at the same point
/// produces nothing.
///
pub fn arc_to_cubics(start: Coord2, end: Coord2, radius_x: f64, radius_y: f64, rotation: f64, large_arc: bool, sweep: bool) -> SmallVec<[CubicSection; 4]> {
    if start == end {
        return smallvec![];
    }

    let mut radius_x    = radius_x.abs();
    let mut radius_y    = radius_y.abs();

    if !(radius_x > 0.0) || !(radius_y > 0.0) || !radius_x.is_finite() || !radius_y.is_finite() {
        // Degenerate arcs are straight lines
        return smallvec![(start, end, end)];
    }

    let clockwise       = !sweep;
    let phi             = rotation.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Move the start point into a coordinate system where the ellipse is axis-aligned and the chord's midpoint is the origin
    let half_chord      = (start - end) * 0.5;
    let x1              = cos_phi*half_chord.0 + sin_phi*half_chord.1;
    let y1              = -sin_phi*half_chord.0 + cos_phi*half_chord.1;

    // Scale the radii up if they can't span the chord
    let lambda          = (x1*x1)/(radius_x*radius_x) + (y1*y1)/(radius_y*radius_y);
    if lambda > 1.0 {
        let scale   = lambda.sqrt();
        radius_x    *= scale;
        radius_y    *= scale;
    }

    // Find the center in the transformed coordinates
    let rx2             = radius_x*radius_x;
    let ry2             = radius_y*radius_y;
    let numerator       = rx2*ry2 - rx2*y1*y1 - ry2*x1*x1;
    let denominator     = rx2*y1*y1 + ry2*x1*x1;
    let coefficient     = if denominator > 0.0 { (numerator / denominator).max(0.0).sqrt() } else { 0.0 };
    let coefficient     = coefficient * center_side(large_arc, clockwise);

    let cx1             = coefficient * radius_x * y1 / radius_y;
    let cy1             = coefficient * -radius_y * x1 / radius_x;

    // ... and back in the original coordinates
    let midpoint        = (start + end) * 0.5;
    let center          = Coord2(cos_phi*cx1 - sin_phi*cy1 + midpoint.0, sin_phi*cx1 + cos_phi*cy1 + midpoint.1);

    // Angles are measured on the unit circle that the ellipse was made from
    let start_vector    = Coord2((x1 - cx1) / radius_x, (y1 - cy1) / radius_y);
    let end_vector      = Coord2((-x1 - cx1) / radius_x, (-y1 - cy1) / radius_y);
    let start_angle     = angle_between(Coord2(1.0, 0.0), start_vector);
    let mut sweep_angle = angle_between(start_vector, end_vector);

    if clockwise && sweep_angle < 0.0 {
        sweep_angle += 2.0*PI;
    } else if !clockwise && sweep_angle > 0.0 {
        sweep_angle -= 2.0*PI;
    }

    // Each section covers at most a quarter turn
    let num_sections    = ((sweep_angle.abs() / (PI*0.5)) - 1e-9).ceil().max(1.0) as usize;
    let section_angle   = sweep_angle / (num_sections as f64);
    let k               = (4.0/3.0) * (section_angle / 4.0).tan();

    let to_ellipse      = |unit: Coord2| {
        let x = unit.0 * radius_x;
        let y = unit.1 * radius_y;

        Coord2(cos_phi*x - sin_phi*y + center.0, sin_phi*x + cos_phi*y + center.1)
    };

    let mut sections    = smallvec![];
    let mut angle       = start_angle;

    for section_num in 0..num_sections {
        let next_angle  = angle + section_angle;
        let (sin_a, cos_a) = angle.sin_cos();
        let (sin_b, cos_b) = next_angle.sin_cos();

        let control_1   = to_ellipse(Coord2(cos_a - k*sin_a, sin_a + k*cos_a));
        let control_2   = to_ellipse(Coord2(cos_b + k*sin_b, sin_b - k*cos_b));
        let section_end = if section_num == num_sections-1 { end } else { to_ellipse(Coord2(cos_b, sin_b)) };

        sections.push((control_1, control_2, section_end));
        angle = next_angle;
    }

    sections
}

#[cfg(test)]
mod test {
    use super::*;

    ///
    /// Evaluates a cubic at t
    ///
    fn cubic_point(start: Coord2, (cp1, cp2, end): CubicSection, t: f64) -> Coord2 {
        let mt = 1.0 - t;
        start*(mt*mt*mt) + cp1*(3.0*mt*mt*t) + cp2*(3.0*mt*t*t) + end*(t*t*t)
    }

    ///
    /// The midpoint of the whole arc made from a set of sections
    ///
    fn arc_points(start: Coord2, sections: &[CubicSection]) -> Vec<Coord2> {
        let mut result  = vec![];
        let mut pos     = start;

        for section in sections.iter() {
            for step in 0..=8 {
                result.push(cubic_point(pos, *section, (step as f64)/8.0));
            }
            pos = section.2;
        }

        result
    }

    #[test]
    fn center_side_table_covers_four_arcs() {
        assert!(center_side(false, false) == -center_side(true, false));
        assert!(center_side(false, true) == -center_side(true, true));
        assert!(center_side(false, false) == -center_side(false, true));
    }

    #[test]
    fn half_circle_stays_on_radius() {
        let sections = arc_to_cubics(Coord2(0.0, 0.0), Coord2(20.0, 0.0), 10.0, 10.0, 0.0, false, false);

        assert!(sections.len() == 2, "{:?}", sections);
        for point in arc_points(Coord2(0.0, 0.0), &sections) {
            let radius = point.distance_to(&Coord2(10.0, 0.0));
            assert!((radius - 10.0).abs() < 0.01, "{:?} is {} from the center", point, radius);
        }
    }

    #[test]
    fn sweep_picks_the_side() {
        // Clockwise (in y-down coordinates) from left to right passes above the chord, counter-clockwise passes below
        let clockwise           = arc_to_cubics(Coord2(0.0, 0.0), Coord2(20.0, 0.0), 10.0, 10.0, 0.0, false, false);
        let counter_clockwise   = arc_to_cubics(Coord2(0.0, 0.0), Coord2(20.0, 0.0), 10.0, 10.0, 0.0, false, true);

        let clockwise_mid           = arc_points(Coord2(0.0, 0.0), &clockwise)[8];
        let counter_clockwise_mid   = arc_points(Coord2(0.0, 0.0), &counter_clockwise)[8];

        assert!((clockwise_mid.1 - -10.0).abs() < 0.01, "{:?}", clockwise_mid);
        assert!((counter_clockwise_mid.1 - 10.0).abs() < 0.01, "{:?}", counter_clockwise_mid);
    }

    #[test]
    fn large_arc_goes_the_long_way() {
        // Radius 10 arc between two points 10 apart: the small arc covers 60 degrees, the large one 300
        let small = arc_to_cubics(Coord2(0.0, 0.0), Coord2(10.0, 0.0), 10.0, 10.0, 0.0, false, false);
        let large = arc_to_cubics(Coord2(0.0, 0.0), Coord2(10.0, 0.0), 10.0, 10.0, 0.0, true, false);

        assert!(small.len() == 1);
        assert!(large.len() == 4);

        let small_extent = arc_points(Coord2(0.0, 0.0), &small).iter().map(|p| p.1.abs()).fold(0.0, f64::max);
        let large_extent = arc_points(Coord2(0.0, 0.0), &large).iter().map(|p| p.1.abs()).fold(0.0, f64::max);

        assert!(small_extent < 2.0, "{}", small_extent);
        assert!(large_extent > 15.0, "{}", large_extent);
    }

    #[test]
    fn radii_scale_up_to_fit() {
        let sections = arc_to_cubics(Coord2(0.0, 0.0), Coord2(20.0, 0.0), 1.0, 1.0, 0.0, false, false);

        for point in arc_points(Coord2(0.0, 0.0), &sections) {
            let radius = point.distance_to(&Coord2(10.0, 0.0));
            assert!((radius - 10.0).abs() < 0.01, "{:?} is {} from the center", point, radius);
        }
    }

    #[test]
    fn degenerate_arcs() {
        assert!(arc_to_cubics(Coord2(5.0, 5.0), Coord2(5.0, 5.0), 10.0, 10.0, 0.0, false, false).is_empty());

        let line = arc_to_cubics(Coord2(0.0, 0.0), Coord2(5.0, 5.0), 0.0, 10.0, 0.0, false, false);
        assert!(line.len() == 1);
        assert!(line[0].2 == Coord2(5.0, 5.0));
    }

    #[test]
    fn rotated_ellipse_ends_at_target() {
        let sections = arc_to_cubics(Coord2(0.0, 0.0), Coord2(30.0, 10.0), 20.0, 10.0, 30.0, true, true);

        assert!(!sections.is_empty());
        assert!(sections.last().unwrap().2 == Coord2(30.0, 10.0));
    }
}
