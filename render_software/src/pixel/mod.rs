mod alpha_blend_trait;
mod f32_linear;

pub use alpha_blend_trait::*;
pub use f32_linear::*;
