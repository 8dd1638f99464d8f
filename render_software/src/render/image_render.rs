#[cfg(feature="render_png")]
mod render_png {
    use crate::bitmap::*;

    use tvg_scene::{TvgError};

    use std::io::{Write, BufWriter};

    ///
    /// Converts an error from the PNG encoder into an IO error
    ///
    fn png_error(err: png::EncodingError) -> TvgError {
        log::warn!("Could not write PNG file: {}", err);
        TvgError::Io
    }

    impl Bitmap {
        ///
        /// Writes this bitmap as a PNG file to a stream
        ///
        pub fn write_png<TStream: Write>(&self, target: TStream) -> Result<(), TvgError> {
            let mut encoder = png::Encoder::new(BufWriter::new(target), self.width(), self.height());

            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header().map_err(png_error)?;
            writer.write_image_data(self.pixels()).map_err(png_error)?;
            writer.finish().map_err(png_error)?;

            Ok(())
        }
    }
}
