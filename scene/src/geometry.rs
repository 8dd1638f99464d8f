use std::ops::*;

///
/// A point as stored in a scene (coordinates have already been converted from fixed-point units)
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

///
/// An axis-aligned rectangle
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

///
/// A single straight line, drawn by the 'draw lines' command
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start:  Point,
    pub end:    Point,
}

///
/// A 2D coordinate widened to double precision, used for all the geometry downstream of the scene
///
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coord2(pub f64, pub f64);

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect { x, y, width, height }
    }

    ///
    /// Returns the corners of this rectangle as a closed polygon, normalised so it always winds the same way
    /// even if the width or height is negative
    ///
    pub fn to_polygon(&self) -> [Coord2; 4] {
        let x1 = (self.x as f64).min((self.x + self.width) as f64);
        let x2 = (self.x as f64).max((self.x + self.width) as f64);
        let y1 = (self.y as f64).min((self.y + self.height) as f64);
        let y2 = (self.y as f64).max((self.y + self.height) as f64);

        [Coord2(x1, y1), Coord2(x2, y1), Coord2(x2, y2), Coord2(x1, y2)]
    }
}

impl Line {
    #[inline]
    pub fn new(start: Point, end: Point) -> Line {
        Line { start, end }
    }
}

impl From<Point> for Coord2 {
    #[inline]
    fn from(point: Point) -> Coord2 {
        Coord2(point.x as f64, point.y as f64)
    }
}

impl Coord2 {
    #[inline] pub fn x(&self) -> f64 { self.0 }
    #[inline] pub fn y(&self) -> f64 { self.1 }

    ///
    /// The dot product of two coordinates
    ///
    #[inline]
    pub fn dot(&self, other: &Coord2) -> f64 {
        self.0*other.0 + self.1*other.1
    }

    ///
    /// The length of this coordinate considered as a vector
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    ///
    /// The distance between two points
    ///
    #[inline]
    pub fn distance_to(&self, other: &Coord2) -> f64 {
        (*self - *other).magnitude()
    }

    ///
    /// Linear interpolation between this point and another
    ///
    #[inline]
    pub fn lerp(&self, other: &Coord2, t: f64) -> Coord2 {
        *self + (*other - *self) * t
    }

    ///
    /// Returns the unit vector perpendicular to this one (rotated a quarter turn), or None for a zero-length vector
    ///
    #[inline]
    pub fn unit_normal(&self) -> Option<Coord2> {
        let len = self.magnitude();

        if len > 0.0 && len.is_finite() {
            Some(Coord2(-self.1 / len, self.0 / len))
        } else {
            None
        }
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, other: Coord2) -> Coord2 { Coord2(self.0 + other.0, self.1 + other.1) }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, other: Coord2) -> Coord2 { Coord2(self.0 - other.0, self.1 - other.1) }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, factor: f64) -> Coord2 { Coord2(self.0 * factor, self.1 * factor) }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 { Coord2(-self.0, -self.1) }
}
