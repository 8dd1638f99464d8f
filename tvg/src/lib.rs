//!
//! # tvg
//!
//! `tvg` is the entry point for rendering TinyVG documents. It decodes the binary document and hands the resulting scene to one
//! of two back-ends:
//!
//! * `render_svg()` writes the document as SVG markup to an `OutStream`
//! * `render_bitmap()` rasterizes the document into a `Bitmap` of RGBA pixels, which is released with `free_bitmap()`
//!
//! The scene model and decoder are in [tvg_scene](scene) and the rasterizer is in [tvg_render_software](render_software), for
//! callers that want to work with decoded scenes directly.
//!
//! ```
//! # use tvg::*;
//! let scene = SceneBuilder::new(8, 8)
//!     .with_color(Color::from_rgba8(0, 0, 255, 255))
//!     .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 0.0, 8.0, 8.0)])
//!     .build();
//! let bytes = encode(&scene).unwrap();
//!
//! let mut svg = Vec::<u8>::new();
//! render_svg(&bytes, &mut svg).unwrap();
//! assert!(String::from_utf8(svg).unwrap().starts_with("<svg"));
//!
//! let bitmap = render_bitmap(&bytes, AntiAlias::X4, 4, 4).unwrap();
//! assert!(bitmap.pixel(2, 2) == Some([0, 0, 255, 255]));
//! free_bitmap(bitmap);
//! ```
//!
#![warn(bare_trait_objects)]

pub use tvg_scene as scene;
pub use tvg_render_software as render_software;

mod svg_output;
mod bitmap_output;

pub use self::svg_output::*;
pub use self::bitmap_output::*;

pub use tvg_scene::{TvgError, Scene, SceneBuilder, Color, Style, Rect, Point, Line, Path, Command, OutStream, WriteStream, decode, encode};
pub use tvg_render_software::{AntiAlias, Bitmap, RenderOptions};
