//!
//! # tvg_scene
//!
//! `tvg_scene` describes a TinyVG document as an immutable `Scene`: a header, a colour table and an
//! ordered list of drawing commands. It provides the decoder that turns an untrusted byte stream into
//! a validated scene, an encoder that writes a scene back out in the binary format, the path flattener
//! shared by the rendering back-ends and an encoder that writes a scene as SVG markup.
//!
//! Rasterizing a scene is the job of `tvg_render_software`.
//!
//! ```
//! # use tvg_scene::*;
//! let scene = SceneBuilder::new(64, 64)
//!     .with_color(Color::rgba(1.0, 0.0, 0.0, 1.0))
//!     .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 0.0, 64.0, 64.0)])
//!     .build();
//!
//! let bytes   = encode(&scene).unwrap();
//! let decoded = decode(&bytes).unwrap();
//!
//! assert!(decoded == scene);
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod error;
mod color;
mod header;
mod style;
mod path;
mod command;
mod scene;
mod geometry;
mod reader;
mod decoding;
mod encoding;
mod arc;
mod flatten;
mod out_stream;
mod svg;

pub use self::error::*;
pub use self::color::*;
pub use self::header::*;
pub use self::style::*;
pub use self::path::*;
pub use self::command::*;
pub use self::scene::*;
pub use self::geometry::*;
pub use self::reader::*;
pub use self::decoding::*;
pub use self::encoding::*;
pub use self::arc::*;
pub use self::flatten::*;
pub use self::out_stream::*;
pub use self::svg::*;
