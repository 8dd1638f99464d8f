use tvg_render_software::*;

use tvg_scene::*;

use std::fs;
use std::time::{Instant};

///
/// Renders a set of gradient-filled shapes to gradient.png, at every anti-aliasing level
///
pub fn main() {
    let linear  = Style::LinearGradient { point_0: Point::new(0.0, 0.0), point_1: Point::new(200.0, 0.0), color_0: 0, color_1: 1 };
    let radial  = Style::RadialGradient { point_0: Point::new(100.0, 100.0), point_1: Point::new(100.0, 180.0), color_0: 2, color_1: 1 };

    let scene = SceneBuilder::new(200, 200)
        .with_color(Color::rgba(1.0, 0.4, 0.0, 1.0))
        .with_color(Color::rgba(0.2, 0.0, 0.6, 1.0))
        .with_color(Color::rgba(1.0, 1.0, 1.0, 0.8))
        .fill_rectangles(linear, vec![Rect::new(0.0, 0.0, 200.0, 200.0)])
        .fill_polygon(radial, vec![Point::new(100.0, 20.0), Point::new(180.0, 170.0), Point::new(20.0, 170.0)])
        .draw_line_strip(Style::flat(2), 3.0, vec![Point::new(10.0, 190.0), Point::new(100.0, 60.0), Point::new(190.0, 190.0)])
        .build();

    for anti_alias in AntiAlias::ALL.iter() {
        let start   = Instant::now();
        let bitmap  = render_scene(&scene, &RenderOptions::new(800, 800).with_anti_alias(*anti_alias)).unwrap();

        println!("{:?}: {}ms", anti_alias, start.elapsed().as_millis());

        if *anti_alias == AntiAlias::default() {
            bitmap.write_png(fs::File::create("gradient.png").unwrap()).unwrap();
        }
    }
}
