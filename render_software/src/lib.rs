//!
//! # tvg_render_software
//!
//! A software rasterizer for TinyVG scenes. Scenes are drawn into a supersampled buffer of premultiplied floating-point
//! pixels, command by command, then averaged down to a bitmap of straight RGBA bytes.
//!
//! ```
//! # use tvg_scene::*;
//! # use tvg_render_software::*;
//! let scene = SceneBuilder::new(16, 16)
//!     .with_color(Color::from_rgba8(255, 0, 0, 255))
//!     .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 0.0, 16.0, 16.0)])
//!     .build();
//!
//! let bitmap = render_scene(&scene, &RenderOptions::new(32, 32).with_anti_alias(AntiAlias::X4)).unwrap();
//!
//! assert!(bitmap.pixel(10, 10) == Some([255, 0, 0, 255]));
//! bitmap.release();
//! ```
//!
//! Bands of output rows are rendered in parallel when the `multithreading` feature is enabled, and bitmaps can be written as
//! PNG files with the `render_png` feature.
//!
#![warn(bare_trait_objects)]

mod anti_alias;
mod render_options;
mod bitmap;

/// Polygon edges and stroke outlines, used to find where each scanline enters and leaves a shape
pub mod edges;

/// The premultiplied pixel type used while rendering
pub mod pixel;

/// Converting scene commands into shapes and paints
pub mod draw;

/// The supersampling band renderer
pub mod render;

pub use self::anti_alias::*;
pub use self::render_options::*;
pub use self::bitmap::*;
pub use self::render::{render_scene};
