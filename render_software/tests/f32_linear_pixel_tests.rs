use tvg_render_software::pixel::*;

use tvg_scene::{Color};

#[test]
fn from_color_premultiplies() {
    let pixel = F32LinearPixel::from_color(&Color::rgba(1.0, 0.5, 0.25, 0.5));

    assert!(pixel.to_components() == [0.5, 0.25, 0.125, 0.5], "{:?}", pixel);
}

#[test]
fn to_color_removes_premultiplication() {
    let pixel               = F32LinearPixel::from_color(&Color::rgba(0.1, 0.2, 0.3, 0.5));
    let (r, g, b, a)        = pixel.to_color().to_rgba_components();

    assert!((r-0.1).abs() < 0.001, "red={:?}", r);
    assert!((g-0.2).abs() < 0.001, "green={:?}", g);
    assert!((b-0.3).abs() < 0.001, "blue={:?}", b);
    assert!((a-0.5).abs() < 0.001, "alpha={:?}", a);
}

#[test]
fn transparent_to_rgba8() {
    assert!(F32LinearPixel::transparent().to_rgba8() == [0, 0, 0, 0]);
}

#[test]
fn opaque_source_over_replaces() {
    let red     = F32LinearPixel::from_color(&Color::rgba(1.0, 0.0, 0.0, 1.0));
    let green   = F32LinearPixel::from_color(&Color::rgba(0.0, 1.0, 0.0, 1.0));

    assert!(green.source_over(red) == green);
    assert!(green.is_opaque());
}

#[test]
fn translucent_source_over() {
    let red     = F32LinearPixel::from_color(&Color::rgba(1.0, 0.0, 0.0, 1.0));
    let blue    = F32LinearPixel::from_color(&Color::rgba(0.0, 0.0, 1.0, 0.5));

    let blended = blue.source_over(red);
    assert!(blended.to_components() == [0.5, 0.0, 0.5, 1.0], "{:?}", blended);
}

#[test]
fn translucent_over_transparent() {
    let blue    = F32LinearPixel::from_color(&Color::rgba(0.0, 0.0, 1.0, 0.5));
    let blended = blue.source_over(F32LinearPixel::transparent());

    assert!(blended.to_rgba8() == [0, 0, 255, 128], "{:?}", blended.to_rgba8());
}
