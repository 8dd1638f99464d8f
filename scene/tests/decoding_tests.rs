use tvg_scene::*;

///
/// A 16x16 document with two colours (red, green) containing a single rectangle filled with green
///
fn green_square() -> Vec<u8> {
    vec![
        0x72, 0x56, 0x01,               // Magic, version
        0x00,                           // Scale 0, RGBA8888, default range
        0x10, 0x00, 0x10, 0x00,         // 16x16
        0x02,                           // 2 colours
        0xff, 0x00, 0x00, 0xff,
        0x00, 0xff, 0x00, 0xff,
        0x02,                           // Fill rectangles, flat
        0x00,                           // 1 rectangle
        0x01,                           // Colour 1
        0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x10, 0x00,
        0x00,                           // End of document
    ]
}

#[test]
fn decode_simple_document() {
    let scene = decode(&green_square()).unwrap();

    assert!(scene.header.width == 16);
    assert!(scene.header.height == 16);
    assert!(scene.header.scale == 0);
    assert!(scene.color_table == vec![Color::rgba(1.0, 0.0, 0.0, 1.0), Color::rgba(0.0, 1.0, 0.0, 1.0)]);
    assert!(scene.commands == vec![Command::FillRectangles { style: Style::Flat(1), rectangles: vec![Rect::new(0.0, 0.0, 16.0, 16.0)] }]);
}

#[test]
fn decoding_is_deterministic() {
    let bytes = green_square();

    assert!(decode(&bytes) == decode(&bytes));
}

#[test]
fn wrong_magic_is_invalid() {
    assert!(decode(&[0x00, 0x00]) == Err(TvgError::InvalidData));
}

#[test]
fn empty_input_is_invalid() {
    assert!(decode(&[]) == Err(TvgError::InvalidData));
}

#[test]
fn truncated_before_color_table_is_invalid() {
    assert!(decode(&[0x72, 0x56, 0x01, 0x00, 0x10, 0x00, 0x10, 0x00]) == Err(TvgError::InvalidData));
}

#[test]
fn every_truncation_is_invalid() {
    let bytes = green_square();

    for len in 0..bytes.len() {
        assert!(decode(&bytes[0..len]) == Err(TvgError::InvalidData), "Truncated to {} bytes", len);
    }
}

#[test]
fn unknown_version_is_unsupported() {
    let mut bytes = green_square();
    bytes[2] = 2;

    assert!(decode(&bytes) == Err(TvgError::Unsupported));
}

#[test]
fn custom_color_encoding_is_unsupported() {
    let mut bytes = green_square();
    bytes[3] = 0x30;

    assert!(decode(&bytes) == Err(TvgError::Unsupported));
}

#[test]
fn bad_coordinate_range_is_invalid() {
    let mut bytes = green_square();
    bytes[3] = 0xc0;

    assert!(decode(&bytes) == Err(TvgError::InvalidData));
}

#[test]
fn zero_width_is_invalid() {
    let mut bytes = green_square();
    bytes[4] = 0;

    assert!(decode(&bytes) == Err(TvgError::InvalidData));
}

#[test]
fn color_index_outside_table_is_invalid() {
    let mut bytes = green_square();
    bytes[19] = 0x05;

    assert!(decode(&bytes) == Err(TvgError::InvalidData));
}

#[test]
fn missing_end_of_document_is_invalid() {
    let bytes = green_square();

    assert!(decode(&bytes[0..bytes.len()-1]) == Err(TvgError::InvalidData));
}

#[test]
fn unknown_command_is_invalid() {
    let mut bytes = green_square();
    bytes[17] = 0x0b;

    assert!(decode(&bytes) == Err(TvgError::InvalidData));
}

#[test]
fn style_kind_3_is_invalid() {
    let mut bytes = green_square();
    bytes[17] = 0xc2;

    assert!(decode(&bytes) == Err(TvgError::InvalidData));
}

#[test]
fn empty_color_table_is_legal_without_references() {
    let bytes = vec![0x72, 0x56, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00];
    let scene = decode(&bytes).unwrap();

    assert!(scene.color_table.is_empty());
    assert!(scene.commands.is_empty());
}

#[test]
fn reduced_range_rgb565() {
    let bytes = vec![
        0x72, 0x56, 0x01,
        0x52,                   // Scale 2, RGB565, reduced range
        0x08, 0x04,             // 8x4
        0x01,
        0x1f, 0x00,             // Red
        0x01,                   // Fill polygon, flat
        0x02,                   // 3 points
        0x00,
        0x00, 0x00,
        0x04, 0x00,             // (1, 0)
        0x04, 0xfc,             // (1, -1)
        0x00,
    ];
    let scene = decode(&bytes).unwrap();

    assert!(scene.header.coordinate_range == CoordinateRange::Reduced);
    assert!(scene.header.color_encoding == ColorEncoding::Rgb565);
    assert!(scene.header.width == 8 && scene.header.height == 4);
    assert!(scene.color_table == vec![Color::rgba(1.0, 0.0, 0.0, 1.0)]);
    assert!(scene.commands == vec![Command::FillPolygon {
        style:  Style::Flat(0),
        points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, -1.0)]
    }]);
}

#[test]
fn zero_line_width_is_invalid() {
    let bytes = vec![
        0x72, 0x56, 0x01, 0x00, 0x10, 0x00, 0x10, 0x00,
        0x01, 0x00, 0x00, 0x00, 0xff,
        0x04,                   // Draw lines, flat
        0x00,                   // 1 line
        0x00,                   // Colour 0
        0x00, 0x00,             // Line width 0
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
        0x00,
    ];

    assert!(decode(&bytes) == Err(TvgError::InvalidData));
}

#[test]
fn path_segments_and_line_widths() {
    let bytes = vec![
        0x72, 0x56, 0x01, 0x00, 0x10, 0x00, 0x10, 0x00,
        0x01, 0x00, 0x00, 0x00, 0xff,
        0x07,                   // Draw line path, flat
        0x00,                   // 1 path
        0x00,                   // Colour 0
        0x02, 0x00,             // Line width 2
        0x02,                   // 3 segments
        0x01, 0x00, 0x01, 0x00, // Start (1, 1)
        0x01, 0x08, 0x00,       // Horizontal line to 8
        0x12, 0x03, 0x00, 0x0a, 0x00, // Vertical line to 10 with width 3
        0x06,                   // Close
        0x00,
    ];
    let scene = decode(&bytes).unwrap();

    let expected_path = Path::new(Point::new(1.0, 1.0))
        .horizontal_to(8.0)
        .with(Segment::from(SegmentKind::VerticalLine(10.0)).with_line_width(3.0))
        .close();

    assert!(scene.commands == vec![Command::DrawLinePath { style: Style::Flat(0), line_width: 2.0, paths: vec![expected_path] }]);
}

#[test]
fn huge_counts_do_not_allocate() {
    let bytes = vec![
        0x72, 0x56, 0x01, 0x00, 0x10, 0x00, 0x10, 0x00,
        0xff, 0xff, 0xff, 0xff, 0x0f,   // 4 billion colours
    ];

    assert!(decode(&bytes) == Err(TvgError::InvalidData));
}

#[test]
fn overlong_varuint_is_invalid() {
    let bytes = vec![
        0x72, 0x56, 0x01, 0x00, 0x10, 0x00, 0x10, 0x00,
        0xff, 0xff, 0xff, 0xff, 0xff, 0x01,
    ];

    assert!(decode(&bytes) == Err(TvgError::InvalidData));
}

#[test]
fn single_point_path_is_legal() {
    let bytes = vec![
        0x72, 0x56, 0x01, 0x00, 0x10, 0x00, 0x10, 0x00,
        0x01, 0x00, 0x00, 0x00, 0xff,
        0x03, 0x00, 0x00,
        0x00,                           // 1 segment
        0x04, 0x00, 0x04, 0x00,         // Start (4, 4)
        0x00, 0x04, 0x00, 0x04, 0x00,   // Line to (4, 4)
        0x00,
    ];

    let scene = decode(&bytes).unwrap();
    assert!(scene.commands == vec![Command::FillPath { style: Style::Flat(0), paths: vec![Path::new(Point::new(4.0, 4.0)).line_to(4.0, 4.0)] }]);
}
