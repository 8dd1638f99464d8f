///
/// Trait implemented by pixel types that support alpha blending (with premultiplied alpha values)
///
pub trait AlphaBlend : Sized {
    type Component;

    /// The alpha value of this pixel
    fn alpha_component(&self) -> Self::Component;

    /// Composites this pixel over a destination pixel (`self + dest*(1-self.alpha)`)
    fn source_over(self, dest: Self) -> Self;

    /// True if this pixel completely hides anything underneath it
    fn is_opaque(&self) -> bool;
}
