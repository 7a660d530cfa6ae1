use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline] pub fn x(self) -> f32 { self.origin.x }
    #[inline] pub fn y(self) -> f32 { self.origin.y }
    #[inline] pub fn width(self) -> f32 { self.size.x }
    #[inline] pub fn height(self) -> f32 { self.size.y }
    #[inline] pub fn right(self) -> f32 { self.origin.x + self.size.x }
    #[inline] pub fn bottom(self) -> f32 { self.origin.y + self.size.y }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < self.right() && p.y < self.bottom()
    }

    /// Shrinks every edge by `d` (grows for negative `d`). Never yields a
    /// negative size.
    #[inline]
    pub fn inset(self, d: f32) -> Rect {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            (self.size.x - 2.0 * d).max(0.0),
            (self.size.y - 2.0 * d).max(0.0),
        )
    }

    /// Splits off a strip of height `h` from the bottom: `(rest, strip)`.
    pub fn split_bottom(self, h: f32) -> (Rect, Rect) {
        let h = h.clamp(0.0, self.size.y);
        let rest = Rect::new(self.origin.x, self.origin.y, self.size.x, self.size.y - h);
        let strip = Rect::new(self.origin.x, self.bottom() - h, self.size.x, h);
        (rest, strip)
    }

    /// Splits off a strip of width `w` from the right: `(rest, strip)`.
    pub fn split_right(self, w: f32) -> (Rect, Rect) {
        let w = w.clamp(0.0, self.size.x);
        let rest = Rect::new(self.origin.x, self.origin.y, self.size.x - w, self.size.y);
        let strip = Rect::new(self.right() - w, self.origin.y, w, self.size.y);
        (rest, strip)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        let (w, h) = (x1 - x0, y1 - y0);
        if w <= 0.0 || h <= 0.0 { None } else { Some(Rect::new(x0, y0, w, h)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(9.9, 9.9)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
    }

    #[test]
    fn split_bottom_partitions() {
        let (rest, strip) = r(0.0, 0.0, 100.0, 80.0).split_bottom(30.0);
        assert_eq!(rest, r(0.0, 0.0, 100.0, 50.0));
        assert_eq!(strip, r(0.0, 50.0, 100.0, 30.0));
    }

    #[test]
    fn split_right_clamps_to_width() {
        let (rest, strip) = r(10.0, 0.0, 50.0, 20.0).split_right(80.0);
        assert_eq!(rest.width(), 0.0);
        assert_eq!(strip, r(10.0, 0.0, 50.0, 20.0));
    }

    #[test]
    fn inset_never_negative() {
        assert_eq!(r(0.0, 0.0, 4.0, 4.0).inset(3.0).size, Vec2::zero());
    }

    #[test]
    fn intersect_overlap_and_disjoint() {
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0)), Some(r(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 5.0, 5.0)), None);
    }
}
