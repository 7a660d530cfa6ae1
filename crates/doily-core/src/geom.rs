use core::ops::{Add, Sub};

/// Point in canvas space.
///
/// Canvas space is centre-relative: the origin is the middle of the drawing
/// panel, +X right, +Y down. Strokes are stored in this space so a drawing
/// survives viewport resizes unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Reflection across the vertical axis through the origin.
    #[inline]
    pub fn mirrored(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Centre of a `width × height` panel in panel-local pixels.
///
/// Every conversion between panel-local and canvas space goes through here so
/// input mapping and rendering agree on where the origin sits.
#[inline]
pub fn panel_center(width: f32, height: f32) -> Point {
    Point::new(width * 0.5, height * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_flips_x_only() {
        assert_eq!(Point::new(3.0, -4.0).mirrored(), Point::new(-3.0, -4.0));
    }

    #[test]
    fn panel_center_halves_dimensions() {
        assert_eq!(panel_center(800.0, 600.0), Point::new(400.0, 300.0));
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(Point::origin().is_finite());
    }
}
