use crate::render_options::*;

use tvg_scene::{Coord2, Header};

///
/// Describes the supersampled frame that a scene is rendered into before being reduced to the output size
///
/// Every output pixel is covered by a `grid` x `grid` block of supersample cells. Edges are stored in supersample
/// coordinates and paints are evaluated in scene coordinates.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SupersampleFrame {
    /// Width of the output bitmap
    pub output_width:   usize,

    /// Height of the output bitmap
    pub output_height:  usize,

    /// Width and height of the block of cells used for each output pixel
    pub grid:           usize,

    /// Supersample cells per scene unit along the x-axis
    pub scale_x:        f64,

    /// Supersample cells per scene unit along the y-axis
    pub scale_y:        f64,
}

impl SupersampleFrame {
    ///
    /// Creates the supersample frame for rendering a scene with the specified header
    ///
    pub fn new(header: &Header, options: &RenderOptions) -> SupersampleFrame {
        let output_width    = options.width as usize;
        let output_height   = options.height as usize;
        let grid            = options.anti_alias.grid_size();

        SupersampleFrame {
            output_width:   output_width,
            output_height:  output_height,
            grid:           grid,
            scale_x:        ((output_width * grid) as f64) / (header.width.max(1) as f64),
            scale_y:        ((output_height * grid) as f64) / (header.height.max(1) as f64),
        }
    }

    ///
    /// Width of the frame in supersample cells
    ///
    #[inline]
    pub fn width(&self) -> usize {
        self.output_width * self.grid
    }

    ///
    /// Height of the frame in supersample cells
    ///
    #[inline]
    pub fn height(&self) -> usize {
        self.output_height * self.grid
    }

    ///
    /// The flattening tolerance to use in scene units (a quarter of a supersample cell)
    ///
    #[inline]
    pub fn tolerance(&self) -> f64 {
        0.25 / self.scale_x.max(self.scale_y)
    }

    ///
    /// Converts a point in scene coordinates to supersample coordinates
    ///
    #[inline]
    pub fn scene_to_supersample(&self, point: Coord2) -> Coord2 {
        Coord2(point.0 * self.scale_x, point.1 * self.scale_y)
    }

    ///
    /// Converts a point in supersample coordinates to scene coordinates
    ///
    #[inline]
    pub fn supersample_to_scene(&self, x: f64, y: f64) -> Coord2 {
        Coord2(x / self.scale_x, y / self.scale_y)
    }

    ///
    /// The region of the scene covered by this frame, grown by a margin on every side, as a (min, max) pair of corners
    ///
    #[inline]
    pub fn scene_bounds(&self, margin: f64) -> (Coord2, Coord2) {
        let max = self.supersample_to_scene(self.width() as f64, self.height() as f64);

        (Coord2(-margin, -margin), Coord2(max.0 + margin, max.1 + margin))
    }
}
