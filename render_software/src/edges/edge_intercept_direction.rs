///
/// Describes the direction of an edge intercept
///
/// * `DirectionOut` indicates an edge with the normal facing outwards (increasing the intercept counter).
/// * `DirectionIn` indicates an edge with the normal facing inwards (decreasing the intercept counter).
///
/// Shapes are filled using the non-zero winding rule: a point is inside the shape if the intercept counter is non-zero.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeInterceptDirection {
    ///
    /// Adds 1 to the intercept count for the shape when passing the edge left-to-right. If the 
    /// intercept count is non-zero after this, then the RHS is inside the shape, otherwise it is
    /// outside.
    ///
    DirectionOut,

    ///
    /// Subtracts 1 from the intercept count for the shape when passing the edge left-to-right. If the 
    /// intercept count is non-zero after this, then the RHS is inside the shape, otherwise it is
    /// outside.
    ///
    DirectionIn,
}

impl EdgeInterceptDirection {
    ///
    /// The amount this intercept adds to the winding count
    ///
    #[inline]
    pub fn winding(&self) -> i32 {
        match self {
            EdgeInterceptDirection::DirectionOut    => 1,
            EdgeInterceptDirection::DirectionIn     => -1,
        }
    }
}
