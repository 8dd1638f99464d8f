use super::paint::*;

use crate::edges::*;
use crate::render::*;

use tvg_scene::*;

///
/// A shape from a scene that's ready to be rendered: its edges in supersample coordinates, and the paint used to fill it
///
#[derive(Clone, Debug)]
pub struct PreparedShape {
    pub edges: Polyline,
    pub paint: Paint,
}

///
/// Fills a polygon (polygons with fewer than 3 points have no area)
///
fn polygon_fill(points: &[Point]) -> Result<Polyline, TvgError> {
    if points.len() < 3 {
        return Ok(Polyline::empty());
    }

    Polyline::new(polygon_points(points, true))
}

fn rectangles_fill(rectangles: &[Rect]) -> Result<Polyline, TvgError> {
    let mut polyline = Polyline::empty();

    for rect in rectangles.iter() {
        polyline.add_loop(rect.to_polygon().iter().copied())?;
    }

    Ok(polyline)
}

fn paths_fill(paths: &[Path], options: &FlattenOptions) -> Result<Polyline, TvgError> {
    let mut polyline = Polyline::empty();

    for path in paths.iter() {
        let points = flatten_path(path, options, 0.0)?;

        if points.len() >= 3 {
            polyline.add_loop(points.into_iter().map(|point| point.point))?;
        }
    }

    Ok(polyline)
}

fn points_stroke(points: &[Point], line_width: f32, closed: bool, tolerance: f64) -> Result<Polyline, TvgError> {
    let mut polyline    = Polyline::empty();
    let points          = polygon_points(points, false);

    stroke_points(&points, line_width as f64, closed, tolerance, &mut polyline)?;

    Ok(polyline)
}

fn lines_stroke(lines: &[Line], line_width: f32, tolerance: f64) -> Result<Polyline, TvgError> {
    let mut polyline = Polyline::empty();

    for line in lines.iter() {
        stroke_points(&[Coord2::from(line.start), Coord2::from(line.end)], line_width as f64, false, tolerance, &mut polyline)?;
    }

    Ok(polyline)
}

fn rectangles_stroke(rectangles: &[Rect], line_width: f32, tolerance: f64) -> Result<Polyline, TvgError> {
    let mut polyline = Polyline::empty();

    for rect in rectangles.iter() {
        stroke_points(&rect.to_polygon(), line_width as f64, true, tolerance, &mut polyline)?;
    }

    Ok(polyline)
}

fn paths_stroke(paths: &[Path], line_width: f32, frame: &SupersampleFrame) -> Result<Polyline, TvgError> {
    let tolerance       = frame.tolerance();
    let mut polyline    = Polyline::empty();

    for path in paths.iter() {
        // Curves only need to be accurate where the stroke can reach the frame
        let widest      = path.segments.iter().filter_map(|segment| segment.line_width).fold(line_width, f32::max);
        let (min, max)  = frame.scene_bounds((widest as f64) * 0.5 + tolerance);
        let options     = FlattenOptions::new(tolerance).with_clip(min, max);

        let points = flatten_path(path, &options, line_width as f64)?;
        stroke_path(&points, false, tolerance, &mut polyline)?;
    }

    Ok(polyline)
}

impl PreparedShape {
    ///
    /// Moves a polyline from scene coordinates into supersample coordinates and prepares it for rendering
    ///
    /// Shapes without any edges are discarded
    ///
    fn prepare(mut edges: Polyline, paint: Paint, frame: &SupersampleFrame) -> Result<Option<PreparedShape>, TvgError> {
        if edges.is_empty() {
            return Ok(None);
        }

        edges.transform(|point| frame.scene_to_supersample(point));
        edges.prepare_to_render()?;

        Ok(Some(PreparedShape { edges, paint }))
    }
}

///
/// Converts the commands in a scene into the shapes that need to be drawn for a frame, in drawing order
///
/// Outline commands produce two shapes: the fill followed by the stroke. Curves are flattened to a quarter of a supersample cell
/// wherever they can affect the frame. Fails with `OutOfMemory` if the edges of a shape can't be stored.
///
pub fn prepare_scene(scene: &Scene, frame: &SupersampleFrame) -> Result<Vec<PreparedShape>, TvgError> {
    let tolerance   = frame.tolerance();
    let (min, max)  = frame.scene_bounds(tolerance);
    let fill_clip   = FlattenOptions::new(tolerance).with_clip(min, max);
    let mut shapes  = vec![];

    for command in scene.commands.iter() {
        let (fill, stroke) = match command {
            Command::FillPolygon { points, .. }                             => (Some(polygon_fill(points)?), None),
            Command::FillRectangles { rectangles, .. }                      => (Some(rectangles_fill(rectangles)?), None),
            Command::FillPath { paths, .. }                                 => (Some(paths_fill(paths, &fill_clip)?), None),

            Command::DrawLines { line_width, lines, .. }                    => (None, Some(lines_stroke(lines, *line_width, tolerance)?)),
            Command::DrawLineLoop { line_width, points, .. }                => (None, Some(points_stroke(points, *line_width, true, tolerance)?)),
            Command::DrawLineStrip { line_width, points, .. }               => (None, Some(points_stroke(points, *line_width, false, tolerance)?)),
            Command::DrawLinePath { line_width, paths, .. }                 => (None, Some(paths_stroke(paths, *line_width, frame)?)),

            Command::OutlineFillPolygon { line_width, points, .. }          => (Some(polygon_fill(points)?), Some(points_stroke(points, *line_width, true, tolerance)?)),
            Command::OutlineFillRectangles { line_width, rectangles, .. }   => (Some(rectangles_fill(rectangles)?), Some(rectangles_stroke(rectangles, *line_width, tolerance)?)),
            Command::OutlineFillPath { line_width, paths, .. }              => (Some(paths_fill(paths, &fill_clip)?), Some(paths_stroke(paths, *line_width, frame)?)),
        };

        if let (Some(fill), Some(style)) = (fill, command.fill_style()) {
            let paint = Paint::from_style(style, scene)?;

            shapes.try_reserve(1)?;
            shapes.extend(PreparedShape::prepare(fill, paint, frame)?);
        }

        if let (Some(stroke), Some((style, _))) = (stroke, command.line_style()) {
            let paint = Paint::from_style(style, scene)?;

            shapes.try_reserve(1)?;
            shapes.extend(PreparedShape::prepare(stroke, paint, frame)?);
        }
    }

    log::trace!("Prepared {} shapes from {} commands", shapes.len(), scene.commands.len());

    Ok(shapes)
}
