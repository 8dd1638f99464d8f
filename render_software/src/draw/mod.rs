mod paint;
mod prepared_shape;

pub use paint::*;
pub use prepared_shape::*;
