use tvg_scene::*;

///
/// Decodes a TinyVG document and writes it to a stream as SVG markup
///
/// Nothing is written if the document can't be decoded. If the stream fails part way through then the markup written so far
/// is left in the stream and this returns `TvgError::Io`.
///
pub fn render_svg<TStream: OutStream + ?Sized>(tvg_bytes: &[u8], stream: &mut TStream) -> Result<(), TvgError> {
    let scene = decode(tvg_bytes)?;

    encode_svg(&scene, stream)
}
