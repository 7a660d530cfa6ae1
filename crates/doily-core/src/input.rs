use crate::drawing::Drawing;
use crate::geom::{panel_center, Point};

/// Pointer adapter between a canvas panel and a [`Drawing`].
///
/// Takes positions in panel-local pixels (origin at the panel's top-left),
/// converts them to canvas space, and drives the model. Strokes only start on
/// presses inside the panel; drags continue outside it until release.
#[derive(Debug, Clone, Copy)]
pub struct CanvasInput {
    width: f32,
    height: f32,
    pressed: bool,
}

impl CanvasInput {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, pressed: false }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    #[inline] pub fn size(&self) -> (f32, f32) { (self.width, self.height) }
    #[inline] pub fn is_pressed(&self) -> bool { self.pressed }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width && y < self.height
    }

    /// Panel-local pixels to canvas space.
    pub fn to_canvas(&self, x: f32, y: f32) -> Point {
        Point::new(x, y) - panel_center(self.width, self.height)
    }

    /// Returns `true` if a stroke was started.
    pub fn press(&mut self, drawing: &mut Drawing, x: f32, y: f32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let at = self.to_canvas(x, y);
        if !at.is_finite() {
            return false;
        }
        drawing.clear_cursor_preview();
        drawing.start_stroke(at);
        self.pressed = true;
        true
    }

    pub fn drag(&mut self, drawing: &mut Drawing, x: f32, y: f32) {
        if !self.pressed {
            return;
        }
        let at = self.to_canvas(x, y);
        if at.is_finite() {
            drawing.extend_stroke(at);
        }
    }

    /// Pointer moved with no button held.
    pub fn hover(&mut self, drawing: &mut Drawing, x: f32, y: f32) {
        if self.pressed {
            return;
        }
        if self.contains(x, y) {
            drawing.set_cursor_preview(self.to_canvas(x, y));
        } else {
            drawing.clear_cursor_preview();
        }
    }

    pub fn release(&mut self, drawing: &mut Drawing, x: f32, y: f32) {
        if !self.pressed {
            return;
        }
        self.pressed = false;
        drawing.finish_stroke();
        self.hover(drawing, x, y);
    }

    /// Pointer left the panel.
    pub fn exit(&mut self, drawing: &mut Drawing) {
        drawing.clear_cursor_preview();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_centre_relative() {
        let input = CanvasInput::new(200.0, 100.0);
        assert_eq!(input.to_canvas(100.0, 50.0), Point::origin());
        assert_eq!(input.to_canvas(0.0, 0.0), Point::new(-100.0, -50.0));
    }

    #[test]
    fn press_outside_does_not_start() {
        let mut d = Drawing::default();
        let mut input = CanvasInput::new(200.0, 100.0);
        assert!(!input.press(&mut d, 250.0, 50.0));
        assert!(d.strokes().is_empty());
        input.drag(&mut d, 10.0, 10.0);
        assert!(d.strokes().is_empty());
    }

    #[test]
    fn press_drag_release_builds_one_stroke() {
        let mut d = Drawing::default();
        let mut input = CanvasInput::new(200.0, 200.0);
        assert!(input.press(&mut d, 100.0, 50.0));
        input.drag(&mut d, 110.0, 60.0);
        // drags outside the panel still extend the stroke
        input.drag(&mut d, 300.0, 60.0);
        input.release(&mut d, 300.0, 60.0);

        assert_eq!(d.strokes().len(), 1);
        assert_eq!(d.strokes()[0].points(), &[
            Point::new(0.0, -50.0),
            Point::new(10.0, -40.0),
            Point::new(200.0, -40.0),
        ]);
        assert!(d.live_stroke().is_none());
        assert!(!input.is_pressed());
    }

    #[test]
    fn hover_shows_and_exit_hides_preview() {
        let mut d = Drawing::default();
        let mut input = CanvasInput::new(200.0, 200.0);
        input.hover(&mut d, 120.0, 100.0);
        assert_eq!(d.cursor_preview().unwrap().start(), Point::new(20.0, 0.0));
        input.exit(&mut d);
        assert!(d.cursor_preview().is_none());
    }

    #[test]
    fn press_hides_preview_until_release() {
        let mut d = Drawing::default();
        let mut input = CanvasInput::new(200.0, 200.0);
        input.hover(&mut d, 120.0, 100.0);
        input.press(&mut d, 120.0, 100.0);
        assert!(d.cursor_preview().is_none());
        input.hover(&mut d, 130.0, 100.0);
        assert!(d.cursor_preview().is_none());
        input.release(&mut d, 130.0, 100.0);
        assert!(d.cursor_preview().is_some());
    }
}
