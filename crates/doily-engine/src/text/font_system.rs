use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Coverage mask of one laid-out glyph.
///
/// `x`/`y` are the bitmap's top-left corner relative to the text origin
/// (top-left of the first line), in whole pixels.
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

/// Owns the loaded fonts. Fonts are immutable after loading.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn layout(&self, font: &fontdue::Font, text: &str, size: f32) -> Layout<()> {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));
        layout
    }

    /// Width and height of `text` on one line, in logical pixels.
    ///
    /// Unknown fonts measure as zero-width so layout still works headless.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let Some(font) = self.fonts.get(id.0) else {
            return Vec2::new(0.0, size * 1.2);
        };
        let layout = self.layout(font, text, size);
        // pen position after each glyph, not the bitmap edge
        let w = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        Vec2::new(w, layout.height().max(size))
    }

    /// Rasterises `text` into positioned coverage masks.
    pub fn rasterize(&self, text: &str, id: FontId, size: f32) -> Vec<GlyphBitmap> {
        let Some(font) = self.fonts.get(id.0) else { return Vec::new() };
        let layout = self.layout(font, text, size);
        layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| {
                let (metrics, coverage) = font.rasterize_config(g.key);
                GlyphBitmap {
                    x: g.x.round() as i32,
                    y: g.y.round() as i32,
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fs = FontSystem::new();
        assert!(fs.load_font(b"not a font").is_err());
        assert!(fs.is_empty());
    }

    #[test]
    fn unknown_font_measures_zero_width() {
        let fs = FontSystem::new();
        let size = fs.measure_text("Undo", FontId(3), 14.0);
        assert_eq!(size.x, 0.0);
        assert!(size.y > 0.0);
        assert!(fs.rasterize("Undo", FontId(3), 14.0).is_empty());
    }

    #[test]
    fn load_error_display() {
        assert_eq!(FontLoadError("bad".into()).to_string(), "font load error: bad");
    }
}
