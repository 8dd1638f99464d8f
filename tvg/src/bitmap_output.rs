use tvg_scene::*;
use tvg_render_software::*;

///
/// Decodes a TinyVG document and rasterizes it into a bitmap of the specified size
///
/// The document is stretched to fill the bitmap, so the x and y axes are scaled separately if the aspect ratio of the bitmap
/// is different to the aspect ratio of the document. The bitmap belongs to the caller, who should pass it to `free_bitmap()`
/// (or just drop it) once it's no longer needed.
///
pub fn render_bitmap(tvg_bytes: &[u8], anti_alias: AntiAlias, width: u32, height: u32) -> Result<Bitmap, TvgError> {
    let options = RenderOptions::new(width, height).with_anti_alias(anti_alias);
    options.validate()?;

    let scene = decode(tvg_bytes)?;
    log::debug!("Decoded TinyVG document with {} colours and {} commands", scene.color_table.len(), scene.commands.len());

    render_scene(&scene, &options)
}

///
/// Frees a bitmap returned by `render_bitmap()`
///
#[inline]
pub fn free_bitmap(bitmap: Bitmap) {
    bitmap.release()
}
