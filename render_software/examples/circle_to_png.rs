use tvg_render_software::*;

use tvg_scene::*;

use std::fs;

///
/// Renders a circle to circle.png
///
pub fn main() {
    // A circle made of two half-circle arcs, filled in blue with a darker outline
    let radius  = 300.0;
    let circle  = Path::new(Point::new(960.0-radius, 540.0))
        .arc_circle_to(radius, false, false, Point::new(960.0+radius, 540.0))
        .arc_circle_to(radius, false, false, Point::new(960.0-radius, 540.0))
        .close();

    let scene = SceneBuilder::new(1920, 1080)
        .with_color(Color::rgba(0.0, 0.0, 1.0, 1.0))
        .with_color(Color::rgba(0.0, 0.0, 0.3, 1.0))
        .outline_fill_path(Style::flat(0), Style::flat(1), 8.0, vec![circle])
        .build();

    // Render at a quarter of the size of the scene
    let options = RenderOptions::new(480, 270).with_anti_alias(AntiAlias::X16);
    let bitmap  = render_scene(&scene, &options).unwrap();

    bitmap.write_png(fs::File::create("circle.png").unwrap()).unwrap();
}
