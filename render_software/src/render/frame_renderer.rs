use super::band_renderer::*;
use super::frame_size::*;

use crate::bitmap::*;
use crate::draw::*;
use crate::pixel::*;
use crate::render_options::*;

use tvg_scene::{Scene, TvgError};

///
/// Number of output rows rendered together in a band
///
const LINES_AT_ONCE: usize = 8;

///
/// Renders a single band of output rows, using `buffer` to store the supersample cells
///
fn render_output_band(shapes: &[PreparedShape], frame: &SupersampleFrame, band_idx: usize, band_pixels: &mut [u8], buffer: &mut Vec<F32LinearPixel>) -> Result<(), TvgError> {
    let output_rows     = band_pixels.len() / (frame.output_width * 4);
    let first_row       = band_idx * LINES_AT_ONCE * frame.grid;
    let num_rows        = output_rows * frame.grid;
    let buffer_len      = frame.width().checked_mul(num_rows).ok_or(TvgError::OutOfMemory)?;

    // Start with a clear buffer
    buffer.clear();
    buffer.try_reserve_exact(buffer_len)?;
    buffer.resize(buffer_len, F32LinearPixel::transparent());

    log::trace!("Rendering supersample rows {}..{}", first_row, first_row + num_rows);

    render_band(shapes, frame, first_row..(first_row + num_rows), buffer)?;
    downsample_band(frame, buffer, band_pixels);

    Ok(())
}

///
/// Renders every band of a frame into a RGBA buffer
///
#[cfg(not(feature="multithreading"))]
fn render_bands(shapes: &[PreparedShape], frame: &SupersampleFrame, pixels: &mut [u8]) -> Result<(), TvgError> {
    let mut buffer = vec![];

    pixels.chunks_mut(frame.output_width * 4 * LINES_AT_ONCE)
        .enumerate()
        .try_for_each(|(band_idx, band_pixels)| render_output_band(shapes, frame, band_idx, band_pixels, &mut buffer))
}

///
/// Renders every band of a frame into a RGBA buffer
///
/// Each band owns its own rows of the output and its own supersample buffer, so bands are rendered in parallel
///
#[cfg(feature="multithreading")]
fn render_bands(shapes: &[PreparedShape], frame: &SupersampleFrame, pixels: &mut [u8]) -> Result<(), TvgError> {
    use rayon::prelude::*;

    pixels.par_chunks_mut(frame.output_width * 4 * LINES_AT_ONCE)
        .enumerate()
        .try_for_each_init(|| vec![], 
            |buffer, (band_idx, band_pixels)| render_output_band(shapes, frame, band_idx, band_pixels, buffer))
}

///
/// Rasterizes a scene to a bitmap
///
/// Commands are drawn in order, each composited over the result of the commands before it, into a supersampled buffer that is
/// then averaged down to the output size. Fails with `InvalidData` if the output size is zero or a style refers to a colour that
/// isn't in the colour table, and with `OutOfMemory` if a buffer can't be allocated.
///
pub fn render_scene(scene: &Scene, options: &RenderOptions) -> Result<Bitmap, TvgError> {
    options.validate()?;

    let frame       = SupersampleFrame::new(&scene.header, options);
    let byte_len    = frame.output_width.checked_mul(frame.output_height)
        .and_then(|len| len.checked_mul(4))
        .ok_or(TvgError::OutOfMemory)?;

    log::debug!("Rendering {}x{} scene to a {}x{} bitmap ({} samples per pixel)", 
        scene.header.width, scene.header.height, frame.output_width, frame.output_height, options.anti_alias.samples_per_pixel());

    let shapes      = prepare_scene(scene, &frame)?;

    let mut pixels  = vec![];
    pixels.try_reserve_exact(byte_len)?;
    pixels.resize(byte_len, 0u8);

    render_bands(&shapes, &frame, &mut pixels)?;

    Ok(Bitmap::new(options.width, options.height, pixels))
}
