//! Freehand strokes and the geometry built from them.

use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, PixmapMut, Transform};

use crate::color::Rgba;
use crate::geom::Point;

/// Style fixed at the moment a stroke starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub diameter: u32,
    pub color: Rgba,
    pub mirrored: bool,
}

/// Append-only polyline in canvas space plus its style.
///
/// Only the owning [`Drawing`](crate::Drawing) can append points; everything
/// else sees a stroke as immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    style: StrokeStyle,
}

impl Stroke {
    pub fn new(start: Point, style: StrokeStyle) -> Self {
        Self { points: vec![start], style }
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    #[inline] pub fn points(&self) -> &[Point] { &self.points }
    #[inline] pub fn start(&self) -> Point { self.points[0] }
    #[inline] pub fn len(&self) -> usize { self.points.len() }
    #[inline] pub fn style(&self) -> StrokeStyle { self.style }
    #[inline] pub fn diameter(&self) -> u32 { self.style.diameter }
    #[inline] pub fn color(&self) -> Rgba { self.style.color }
    #[inline] pub fn is_mirrored(&self) -> bool { self.style.mirrored }

    /// A stroke never has zero points; kept for clippy's `len_without_is_empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` when every point coincides with the first, so the stroke
    /// renders as a single dot.
    pub fn is_dot(&self) -> bool {
        let first = self.start();
        self.points.iter().all(|p| *p == first)
    }

    /// Geometry of the whole stroke.
    pub fn shape(&self) -> Option<StrokeShape> {
        StrokeShape::build(&self.points, self.style.diameter)
    }
}

/// Rasterisable geometry for a run of stroke points, in canvas space.
#[derive(Debug, Clone)]
pub enum StrokeShape {
    /// Filled disc of the pen diameter.
    Dot(Path),
    /// Polyline stroked with round caps and joins.
    Line { path: Path, width: f32 },
}

impl StrokeShape {
    /// `None` for an empty run or a degenerate path.
    pub fn build(points: &[Point], diameter: u32) -> Option<Self> {
        let first = *points.first()?;
        let width = diameter as f32;

        if points.iter().all(|p| *p == first) {
            return PathBuilder::from_circle(first.x, first.y, width * 0.5).map(StrokeShape::Dot);
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in &points[1..] {
            pb.line_to(p.x, p.y);
        }
        pb.finish().map(|path| StrokeShape::Line { path, width })
    }

    pub fn paint(&self, target: &mut PixmapMut<'_>, paint: &Paint<'_>, transform: Transform) {
        match self {
            StrokeShape::Dot(path) => {
                target.fill_path(path, paint, FillRule::Winding, transform, None);
            }
            StrokeShape::Line { path, width } => {
                let stroke = tiny_skia::Stroke {
                    width: *width,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..tiny_skia::Stroke::default()
                };
                target.stroke_path(path, paint, &stroke, transform, None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> StrokeStyle {
        StrokeStyle { diameter: 5, color: Rgba::RED, mirrored: false }
    }

    #[test]
    fn new_stroke_has_start_point() {
        let s = Stroke::new(Point::new(1.0, 2.0), style());
        assert_eq!(s.len(), 1);
        assert_eq!(s.start(), Point::new(1.0, 2.0));
        assert!(s.is_dot());
    }

    #[test]
    fn coincident_points_stay_a_dot() {
        let mut s = Stroke::new(Point::new(1.0, 2.0), style());
        s.push(Point::new(1.0, 2.0));
        s.push(Point::new(1.0, 2.0));
        assert!(s.is_dot());
        assert!(matches!(s.shape(), Some(StrokeShape::Dot(_))));
    }

    #[test]
    fn distinct_points_make_a_line() {
        let mut s = Stroke::new(Point::new(0.0, 0.0), style());
        s.push(Point::new(10.0, 0.0));
        assert!(!s.is_dot());
        match s.shape() {
            Some(StrokeShape::Line { width, .. }) => assert_eq!(width, 5.0),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn empty_run_has_no_shape() {
        assert!(StrokeShape::build(&[], 5).is_none());
    }

    #[test]
    fn dot_covers_its_centre() {
        let mut pixmap = tiny_skia::Pixmap::new(20, 20).unwrap();
        let shape = StrokeShape::build(&[Point::new(0.0, 0.0)], 6).unwrap();
        shape.paint(&mut pixmap.as_mut(), &Rgba::RED.paint(), Transform::from_translate(10.0, 10.0));
        let px = pixmap.pixel(10, 10).unwrap();
        assert_eq!((px.red(), px.alpha()), (255, 255));
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
    }
}
