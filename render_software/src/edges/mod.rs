mod edge_intercept_direction;
mod polyline_edge;
mod stroke;

pub use edge_intercept_direction::*;
pub use polyline_edge::*;
pub use stroke::*;
