mod frame_size;
mod band_renderer;
mod frame_renderer;
mod image_render;

pub use frame_size::*;
pub use band_renderer::*;
pub use frame_renderer::*;
