use tiny_skia::{Pixmap, PixmapMut, PixmapRef};

use crate::error::RenderError;

/// How much of the history is already baked into the cache.
///
/// Every stroke below `strokes` is fully painted. `points` counts the leading
/// points of stroke `strokes` (the live one, if any) that are painted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheCursor {
    pub strokes: usize,
    pub points: usize,
}

/// Off-screen raster of committed stroke geometry.
///
/// Transparent everywhere except where strokes were painted, so guides and
/// background can be drawn underneath it every frame.
#[derive(Debug, Default)]
pub struct RasterCache {
    pixmap: Option<Pixmap>,
    cursor: CacheCursor,
}

impl RasterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.pixmap.as_ref().map(|p| (p.width(), p.height()))
    }

    #[inline] pub fn cursor(&self) -> CacheCursor { self.cursor }

    pub(crate) fn set_cursor(&mut self, cursor: CacheCursor) {
        self.cursor = cursor;
    }

    /// Makes the cache `width × height`.
    ///
    /// Returns `Ok(true)` when a new (empty) raster was allocated, in which
    /// case the caller has to repaint everything into it.
    pub fn ensure_size(&mut self, width: u32, height: u32) -> Result<bool, RenderError> {
        if self.size() == Some((width, height)) {
            return Ok(false);
        }
        self.pixmap = None;
        self.cursor = CacheCursor::default();
        let pixmap = Pixmap::new(width, height).ok_or(RenderError { width, height })?;
        log::debug!("raster cache reallocated at {width}x{height}");
        self.pixmap = Some(pixmap);
        Ok(true)
    }

    /// Erases all painted geometry and rewinds the cursor.
    pub fn reset(&mut self) {
        if let Some(p) = self.pixmap.as_mut() {
            p.fill(tiny_skia::Color::TRANSPARENT);
        }
        self.cursor = CacheCursor::default();
    }

    pub fn pixmap(&self) -> Option<PixmapRef<'_>> {
        self.pixmap.as_ref().map(|p| p.as_ref())
    }

    pub(crate) fn pixmap_mut(&mut self) -> Option<PixmapMut<'_>> {
        self.pixmap.as_mut().map(|p| p.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ensure_allocates() {
        let mut c = RasterCache::new();
        assert_eq!(c.ensure_size(10, 20), Ok(true));
        assert_eq!(c.size(), Some((10, 20)));
        assert_eq!(c.ensure_size(10, 20), Ok(false));
    }

    #[test]
    fn resize_rewinds_cursor() {
        let mut c = RasterCache::new();
        c.ensure_size(10, 10).unwrap();
        c.set_cursor(CacheCursor { strokes: 3, points: 7 });
        assert_eq!(c.ensure_size(20, 10), Ok(true));
        assert_eq!(c.cursor(), CacheCursor::default());
    }

    #[test]
    fn zero_size_is_an_error() {
        let mut c = RasterCache::new();
        assert_eq!(c.ensure_size(0, 10), Err(RenderError { width: 0, height: 10 }));
        assert!(c.pixmap().is_none());
    }
}
