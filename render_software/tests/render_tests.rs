use tvg_render_software::*;

use tvg_scene::*;

const RED:   [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn render(scene: &Scene, width: u32, height: u32, anti_alias: AntiAlias) -> Bitmap {
    render_scene(scene, &RenderOptions::new(width, height).with_anti_alias(anti_alias)).unwrap()
}

fn assert_close(actual: [u8; 4], expected: [u8; 4], tolerance: i32) {
    for idx in 0..4 {
        assert!(((actual[idx] as i32) - (expected[idx] as i32)).abs() <= tolerance, "Expected {:?}, found {:?}", expected, actual);
    }
}

#[test]
fn full_canvas_rectangle_is_exact() {
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::from_rgba8(12, 34, 56, 255))
        .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 0.0, 10.0, 10.0)])
        .build();

    let bitmap = render(&scene, 10, 10, AntiAlias::None);

    assert!(bitmap.width() == 10 && bitmap.height() == 10);
    assert!(bitmap.pixels().len() == 400);
    assert!(bitmap.pixels().chunks_exact(4).all(|pixel| pixel == [12, 34, 56, 255]));
}

#[test]
fn empty_scene_is_transparent() {
    let scene   = SceneBuilder::new(10, 10).build();
    let bitmap  = render(&scene, 7, 3, AntiAlias::X16);

    assert!(bitmap.pixels().len() == 7*3*4);
    assert!(bitmap.pixels().iter().all(|component| *component == 0));
}

#[test]
fn later_commands_win() {
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .with_color(Color::from_rgba8(0, 255, 0, 255))
        .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 0.0, 6.0, 6.0)])
        .fill_rectangles(Style::flat(1), vec![Rect::new(4.0, 4.0, 6.0, 6.0)])
        .build();

    let bitmap = render(&scene, 10, 10, AntiAlias::X4);

    assert!(bitmap.pixel(1, 1) == Some(RED));
    assert!(bitmap.pixel(4, 4) == Some(GREEN));
    assert!(bitmap.pixel(5, 5) == Some(GREEN));
    assert!(bitmap.pixel(8, 8) == Some(GREEN));
    assert!(bitmap.pixel(8, 1) == Some(CLEAR));
}

#[test]
fn linear_gradient_midpoint_is_average() {
    let gradient = Style::LinearGradient { point_0: Point::new(0.0, 0.0), point_1: Point::new(3.0, 0.0), color_0: 0, color_1: 1 };
    let scene = SceneBuilder::new(3, 1)
        .with_color(Color::from_rgba8(200, 0, 50, 255))
        .with_color(Color::from_rgba8(0, 100, 250, 255))
        .fill_rectangles(gradient, vec![Rect::new(0.0, 0.0, 3.0, 1.0)])
        .build();

    let bitmap = render(&scene, 3, 1, AntiAlias::None);

    assert_close(bitmap.pixel(1, 0).unwrap(), [100, 50, 150, 255], 1);
}

#[test]
fn gradient_is_clamped_outside_its_range() {
    let gradient = Style::LinearGradient { point_0: Point::new(4.0, 0.0), point_1: Point::new(6.0, 0.0), color_0: 0, color_1: 1 };
    let scene = SceneBuilder::new(10, 1)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .with_color(Color::from_rgba8(0, 255, 0, 255))
        .fill_rectangles(gradient, vec![Rect::new(0.0, 0.0, 10.0, 1.0)])
        .build();

    let bitmap = render(&scene, 10, 1, AntiAlias::None);

    assert!(bitmap.pixel(0, 0) == Some(RED));
    assert!(bitmap.pixel(9, 0) == Some(GREEN));
}

#[test]
fn degenerate_gradient_uses_first_color() {
    let gradient = Style::LinearGradient { point_0: Point::new(4.0, 4.0), point_1: Point::new(4.0, 4.0), color_0: 0, color_1: 1 };
    let radial   = Style::RadialGradient { point_0: Point::new(4.0, 4.0), point_1: Point::new(4.0, 4.0), color_0: 1, color_1: 0 };
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .with_color(Color::from_rgba8(0, 255, 0, 255))
        .fill_rectangles(gradient, vec![Rect::new(0.0, 0.0, 5.0, 10.0)])
        .fill_rectangles(radial, vec![Rect::new(5.0, 0.0, 5.0, 10.0)])
        .build();

    let bitmap = render(&scene, 10, 10, AntiAlias::None);

    assert!(bitmap.pixel(1, 1) == Some(RED));
    assert!(bitmap.pixel(8, 8) == Some(GREEN));
}

#[test]
fn radial_gradient() {
    let radial = Style::RadialGradient { point_0: Point::new(10.5, 10.5), point_1: Point::new(20.5, 10.5), color_0: 0, color_1: 1 };
    let scene = SceneBuilder::new(21, 21)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .with_color(Color::from_rgba8(0, 0, 255, 255))
        .fill_rectangles(radial, vec![Rect::new(0.0, 0.0, 21.0, 21.0)])
        .build();

    let bitmap = render(&scene, 21, 21, AntiAlias::None);

    assert!(bitmap.pixel(10, 10) == Some(RED));
    assert!(bitmap.pixel(0, 0) == Some([0, 0, 255, 255]));
    assert_close(bitmap.pixel(15, 10).unwrap(), [128, 0, 128, 255], 1);
}

#[test]
fn interior_pixels_do_not_depend_on_anti_aliasing() {
    let scene = SceneBuilder::new(16, 16)
        .with_color(Color::from_rgba8(10, 200, 30, 180))
        .fill_polygon(Style::flat(0), vec![Point::new(2.0, 2.0), Point::new(14.0, 2.0), Point::new(14.0, 14.0), Point::new(2.0, 14.0)])
        .build();

    let expected = render(&scene, 16, 16, AntiAlias::None).pixel(8, 8);

    for anti_alias in AntiAlias::ALL.iter() {
        let bitmap = render(&scene, 16, 16, *anti_alias);
        assert!(bitmap.pixel(8, 8) == expected, "{:?}: {:?} != {:?}", anti_alias, bitmap.pixel(8, 8), expected);
    }
}

#[test]
fn half_covered_pixel_is_half_transparent() {
    let scene = SceneBuilder::new(4, 4)
        .with_color(Color::from_rgba8(0, 0, 0, 255))
        .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 0.0, 1.5, 4.0)])
        .build();

    let bitmap = render(&scene, 4, 4, AntiAlias::X4);

    assert!(bitmap.pixel(0, 2) == Some([0, 0, 0, 255]));
    assert_close(bitmap.pixel(1, 2).unwrap(), [0, 0, 0, 128], 64);
    assert!(bitmap.pixel(2, 2) == Some(CLEAR));
}

#[test]
fn edge_coverage_refines_with_anti_aliasing() {
    // A diagonal edge through the middle of each pixel along it covers about half of each pixel
    let scene = SceneBuilder::new(8, 8)
        .with_color(Color::from_rgba8(255, 255, 255, 255))
        .fill_polygon(Style::flat(0), vec![Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(0.0, 8.0)])
        .build();

    for anti_alias in [AntiAlias::X16, AntiAlias::X64].iter() {
        let bitmap  = render(&scene, 8, 8, *anti_alias);
        let alpha   = bitmap.pixel(3, 4).unwrap()[3] as i32;

        assert!((alpha - 128).abs() <= 40, "{:?}: alpha {}", anti_alias, alpha);
    }
}

#[test]
fn output_size_scales_each_axis() {
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 0.0, 5.0, 10.0)])
        .build();

    let bitmap = render(&scene, 40, 5, AntiAlias::None);

    assert!(bitmap.width() == 40 && bitmap.height() == 5);
    assert!(bitmap.pixel(19, 4) == Some(RED));
    assert!(bitmap.pixel(20, 0) == Some(CLEAR));
}

#[test]
fn tall_images_render_every_band() {
    let scene = SceneBuilder::new(4, 40)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 20.0, 4.0, 20.0)])
        .build();

    let bitmap = render(&scene, 4, 40, AntiAlias::X9);

    for y in 0..40 {
        let expected = if y >= 20 { RED } else { CLEAR };
        assert!(bitmap.pixel(2, y) == Some(expected), "Row {}", y);
    }
}

#[test]
fn stroke_covers_the_line() {
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .draw_lines(Style::flat(0), 2.0, vec![Line::new(Point::new(2.0, 5.0), Point::new(8.0, 5.0))])
        .build();

    let bitmap = render(&scene, 10, 10, AntiAlias::X4);

    assert!(bitmap.pixel(5, 4) == Some(RED));
    assert!(bitmap.pixel(5, 5) == Some(RED));
    assert!(bitmap.pixel(5, 2) == Some(CLEAR));
    assert!(bitmap.pixel(5, 7) == Some(CLEAR));

    // Round caps extend past the end of the line
    assert!(bitmap.pixel(1, 4).unwrap()[3] > 0);
}

#[test]
fn translucent_stroke_is_composited_once() {
    // The strip doubles back on itself, so its segments overlap
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::rgba(0.0, 0.0, 1.0, 0.5))
        .draw_line_strip(Style::flat(0), 4.0, vec![Point::new(1.0, 5.0), Point::new(9.0, 5.0), Point::new(2.0, 5.0)])
        .build();

    let bitmap = render(&scene, 10, 10, AntiAlias::None);

    assert_close(bitmap.pixel(5, 5).unwrap(), [0, 0, 255, 128], 1);
}

#[test]
fn outline_strokes_over_fill() {
    let scene = SceneBuilder::new(20, 20)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .with_color(Color::from_rgba8(0, 255, 0, 255))
        .outline_fill_rectangles(Style::flat(0), Style::flat(1), 2.0, vec![Rect::new(4.0, 4.0, 12.0, 12.0)])
        .build();

    let bitmap = render(&scene, 20, 20, AntiAlias::X4);

    assert!(bitmap.pixel(10, 10) == Some(RED));
    assert!(bitmap.pixel(4, 10) == Some(GREEN));
    assert!(bitmap.pixel(10, 15) == Some(GREEN));
    assert!(bitmap.pixel(1, 1) == Some(CLEAR));
}

#[test]
fn overlapping_rectangles_in_one_command_union() {
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::rgba(1.0, 0.0, 0.0, 0.5))
        .fill_rectangles(Style::flat(0), vec![Rect::new(0.0, 0.0, 6.0, 6.0), Rect::new(10.0, 10.0, -6.0, -6.0)])
        .build();

    let bitmap = render(&scene, 10, 10, AntiAlias::None);

    assert_close(bitmap.pixel(5, 5).unwrap(), [255, 0, 0, 128], 1);
    assert_close(bitmap.pixel(1, 1).unwrap(), [255, 0, 0, 128], 1);
}

#[test]
fn circle_path_fill() {
    let circle = Path::new(Point::new(2.0, 10.0))
        .arc_circle_to(8.0, false, false, Point::new(18.0, 10.0))
        .arc_circle_to(8.0, false, false, Point::new(2.0, 10.0))
        .close();

    let scene = SceneBuilder::new(20, 20)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .fill_path(Style::flat(0), vec![circle])
        .build();

    let bitmap = render(&scene, 20, 20, AntiAlias::X4);

    assert!(bitmap.pixel(10, 10) == Some(RED));
    assert!(bitmap.pixel(10, 3) == Some(RED));
    assert!(bitmap.pixel(10, 16) == Some(RED));
    assert!(bitmap.pixel(1, 1) == Some(CLEAR));
    assert!(bitmap.pixel(18, 18) == Some(CLEAR));
}

#[test]
fn single_point_paths_render_nothing() {
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .fill_path(Style::flat(0), vec![Path::new(Point::new(5.0, 5.0))])
        .draw_line_path(Style::flat(0), 4.0, vec![Path::new(Point::new(5.0, 5.0))])
        .draw_line_strip(Style::flat(0), 4.0, vec![Point::new(5.0, 5.0)])
        .fill_polygon(Style::flat(0), vec![Point::new(1.0, 1.0), Point::new(8.0, 8.0)])
        .build();

    let bitmap = render(&scene, 10, 10, AntiAlias::X16);

    assert!(bitmap.pixels().iter().all(|component| *component == 0));
}

#[test]
fn per_segment_line_widths() {
    let path = Path::new(Point::new(1.0, 5.0))
        .line_to(10.0, 5.0)
        .with(Segment::from(SegmentKind::Line(Point::new(19.0, 5.0))).with_line_width(6.0));

    let scene = SceneBuilder::new(20, 10)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .draw_line_path(Style::flat(0), 1.0, vec![path])
        .build();

    let bitmap = render(&scene, 20, 10, AntiAlias::X4);

    assert!(bitmap.pixel(5, 7) == Some(CLEAR));
    assert!(bitmap.pixel(15, 7) == Some(RED));
}

#[test]
fn missing_color_is_invalid_data() {
    let scene = SceneBuilder::new(10, 10)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .fill_rectangles(Style::flat(3), vec![Rect::new(0.0, 0.0, 10.0, 10.0)])
        .build();

    assert!(render_scene(&scene, &RenderOptions::new(10, 10)) == Err(TvgError::InvalidData));
}

#[test]
fn zero_size_is_invalid_data() {
    let scene = SceneBuilder::new(10, 10).build();

    assert!(render_scene(&scene, &RenderOptions::new(0, 10)) == Err(TvgError::InvalidData));
    assert!(render_scene(&scene, &RenderOptions::new(10, 0)) == Err(TvgError::InvalidData));
}

#[test]
fn impossible_size_is_out_of_memory() {
    let scene = SceneBuilder::new(10, 10).build();

    assert!(render_scene(&scene, &RenderOptions::new(u32::MAX, u32::MAX)) == Err(TvgError::OutOfMemory));
}

#[test]
fn decoded_scene_renders() {
    let bytes = vec![
        0x72, 0x56, 0x01, 0x00, 0x04, 0x00, 0x04, 0x00,
        0x01, 0x00, 0x00, 0xff, 0xff,
        0x02, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x04, 0x00,
        0x00,
    ];

    let scene   = decode(&bytes).unwrap();
    let bitmap  = render(&scene, 4, 4, AntiAlias::X25);

    assert!(bitmap.pixels().chunks_exact(4).all(|pixel| pixel == [0, 0, 255, 255]));
}

#[test]
fn decoded_single_point_line_path_renders_nothing() {
    let bytes = vec![
        0x72, 0x56, 0x01, 0x00, 0x10, 0x00, 0x10, 0x00,
        0x01, 0x00, 0x00, 0x00, 0xff,
        0x07, 0x00, 0x00,               // Draw line path, 1 path, flat colour 0
        0x04, 0x00,                     // Line width 4
        0x00,                           // 1 segment
        0x04, 0x00, 0x04, 0x00,         // Start (4, 4)
        0x00, 0x04, 0x00, 0x04, 0x00,   // Line to (4, 4)
        0x00,
    ];

    let scene   = decode(&bytes).unwrap();
    let bitmap  = render(&scene, 16, 16, AntiAlias::None);

    assert!(bitmap.pixels().chunks_exact(4).filter(|pixel| pixel[3] != 0).count() == 0);
}

#[test]
fn huge_curves_render_quickly() {
    // Curves whose control points are far outside the canvas but whose ends are inside it
    let mut path = Path::new(Point::new(0.0, 4.0));
    for idx in 0..200 {
        let end_x = if idx % 2 == 0 { 8.0 } else { 0.0 };
        path = path.cubic_to(Point::new(2e9, -2e9), Point::new(-2e9, 2e9), Point::new(end_x, 4.0));
    }

    let scene = SceneBuilder::new(8, 8)
        .with_coordinate_range(CoordinateRange::Enhanced)
        .with_color(Color::from_rgba8(255, 0, 0, 255))
        .draw_line_path(Style::flat(0), 1.0, vec![path])
        .build();
    let scene = decode(&encode(&scene).unwrap()).unwrap();

    let start   = std::time::Instant::now();
    let result  = render_scene(&scene, &RenderOptions::new(8, 8).with_anti_alias(AntiAlias::None));

    assert!(result.is_ok() || result == Err(TvgError::OutOfMemory));
    assert!(start.elapsed() < std::time::Duration::from_secs(10), "Took {:?}", start.elapsed());
}
