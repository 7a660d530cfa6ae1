use tiny_skia::Transform;

use crate::geom::Point;

/// Placement of canvas-space geometry into each sector of a panel.
///
/// The transform for sector `i` is derived from `i` alone, so there is no
/// accumulated rotation to drift or to restore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorTransforms {
    center: Point,
    count: u32,
}

impl SectorTransforms {
    pub fn new(center: Point, count: u32) -> Self {
        Self { center, count: count.max(1) }
    }

    #[inline] pub fn count(&self) -> u32 { self.count }
    #[inline] pub fn center(&self) -> Point { self.center }

    #[inline]
    pub fn step_degrees(&self) -> f32 {
        360.0 / self.count as f32
    }

    /// Canvas space to panel pixels, rotated into sector `i`.
    pub fn rotation(&self, i: u32) -> Transform {
        Transform::from_translate(self.center.x, self.center.y)
            .pre_concat(Transform::from_rotate(self.step_degrees() * i as f32))
    }

    /// Like [`rotation`](Self::rotation) but reflected across the sector's
    /// vertical axis first.
    pub fn reflection(&self, i: u32) -> Transform {
        self.rotation(i).pre_scale(-1.0, 1.0)
    }

    pub fn rotations(&self) -> impl Iterator<Item = Transform> + '_ {
        (0..self.count).map(|i| self.rotation(i))
    }

    /// Every transform a stroke is painted with: one rotation per sector,
    /// plus one reflection per sector when `mirrored`.
    pub fn placements(&self, mirrored: bool) -> impl Iterator<Item = Transform> + '_ {
        let reflections = (0..self.count)
            .filter(move |_| mirrored)
            .map(|i| self.reflection(i));
        self.rotations().chain(reflections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(t: Transform, p: Point) -> (f32, f32) {
        let mut pts = [tiny_skia::Point::from_xy(p.x, p.y)];
        t.map_points(&mut pts);
        (pts[0].x, pts[0].y)
    }

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    #[test]
    fn zero_sectors_behave_as_one() {
        let s = SectorTransforms::new(Point::origin(), 0);
        assert_eq!(s.count(), 1);
        assert_eq!(s.placements(false).count(), 1);
    }

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        let s = SectorTransforms::new(Point::new(100.0, 100.0), 4);
        // straight up, rotated 90°, points right
        assert!(close(apply(s.rotation(1), Point::new(0.0, -50.0)), (150.0, 100.0)));
        assert!(close(apply(s.rotation(2), Point::new(0.0, -50.0)), (100.0, 150.0)));
    }

    #[test]
    fn reflection_flips_x_before_rotating() {
        let s = SectorTransforms::new(Point::new(100.0, 100.0), 2);
        assert!(close(apply(s.reflection(0), Point::new(30.0, -60.0)), (70.0, 40.0)));
        assert!(close(apply(s.reflection(1), Point::new(30.0, -60.0)), (130.0, 160.0)));
    }

    #[test]
    fn mirrored_doubles_placements() {
        let s = SectorTransforms::new(Point::origin(), 6);
        assert_eq!(s.placements(false).count(), 6);
        assert_eq!(s.placements(true).count(), 12);
    }
}
