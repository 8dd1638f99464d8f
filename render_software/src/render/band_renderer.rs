use super::frame_size::*;

use crate::draw::*;
use crate::edges::*;
use crate::pixel::*;

use tvg_scene::{TvgError};

use smallvec::*;

use std::ops::{Range};

///
/// Fills the cells of a row that are between two intercepts
///
/// A cell is filled if its center is inside the span: that is, for a span from `start_x` to `end_x`, cells whose centers lie
/// in `start_x..end_x`.
///
#[inline]
fn fill_span(paint: &Paint, frame: &SupersampleFrame, y_pos: f64, start_x: f64, end_x: f64, row: &mut [F32LinearPixel]) {
    let width       = row.len() as f64;
    let first_cell  = (start_x - 0.5).ceil().max(0.0).min(width) as usize;
    let end_cell    = (end_x - 0.5).ceil().max(0.0).min(width) as usize;

    if first_cell >= end_cell {
        return;
    }

    let is_opaque = paint.is_opaque();

    match paint {
        Paint::Flat(pixel) => {
            if is_opaque {
                row[first_cell..end_cell].iter_mut().for_each(|cell| *cell = *pixel);
            } else {
                row[first_cell..end_cell].iter_mut().for_each(|cell| *cell = pixel.source_over(*cell));
            }
        }

        _ => {
            for x in first_cell..end_cell {
                let pixel   = paint.pixel_at(frame.supersample_to_scene((x as f64) + 0.5, y_pos));
                row[x]      = if is_opaque { pixel } else { pixel.source_over(row[x]) };
            }
        }
    }
}

///
/// Renders a set of shapes (in order) to a band of supersample rows
///
/// `buffer` holds the rows in `y_range`, each `frame.width()` cells wide. Each row is sampled through the centers of its cells,
/// and shapes are filled using the non-zero winding rule. Each shape is scanned from the top of the band to the bottom, so
/// only the edges crossing the current row are visited.
///
pub fn render_band(shapes: &[PreparedShape], frame: &SupersampleFrame, y_range: Range<usize>, buffer: &mut [F32LinearPixel]) -> Result<(), TvgError> {
    let width               = frame.width();
    let mut intercepts      = smallvec![];

    for shape in shapes.iter() {
        let ((_, min_y), (_, max_y)) = shape.edges.bounding_box();
        let mut edges                = shape.edges.active_edges();

        for (row_idx, y) in y_range.clone().enumerate() {
            let y_pos = (y as f64) + 0.5;
            if y_pos < min_y || y_pos > max_y {
                continue;
            }

            edges.intercepts_on_line(y_pos, &mut intercepts)?;
            if intercepts.is_empty() {
                continue;
            }

            let row                 = &mut buffer[(row_idx*width)..((row_idx+1)*width)];
            let mut winding         = 0;
            let mut span_start      = 0.0;

            for (direction, x_pos) in intercepts.iter() {
                let was_inside  = winding != 0;
                winding         += direction.winding();
                let is_inside   = winding != 0;

                if !was_inside && is_inside {
                    span_start = *x_pos;
                } else if was_inside && !is_inside {
                    fill_span(&shape.paint, frame, y_pos, span_start, *x_pos, row);
                }
            }
        }
    }

    Ok(())
}

///
/// Reduces a band of supersample rows to output pixels by averaging each block of cells
///
/// `output` receives straight RGBA bytes for every output row covered by the band.
///
pub fn downsample_band(frame: &SupersampleFrame, buffer: &[F32LinearPixel], output: &mut [u8]) {
    let grid            = frame.grid;
    let width           = frame.width();
    let output_width    = frame.output_width;
    let num_samples     = (grid * grid) as f32;

    for (output_row, output_pixels) in output.chunks_exact_mut(output_width * 4).enumerate() {
        let first_row = output_row * grid;

        for (x, output_pixel) in output_pixels.chunks_exact_mut(4).enumerate() {
            let mut total = F32LinearPixel::transparent();

            for y in first_row..(first_row + grid) {
                let row_start = y*width + x*grid;

                for cell in buffer[row_start..(row_start + grid)].iter() {
                    total += *cell;
                }
            }

            output_pixel.copy_from_slice(&(total / num_samples).to_rgba8());
        }
    }
}
