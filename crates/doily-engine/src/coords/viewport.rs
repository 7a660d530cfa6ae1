/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A frame can only be rasterised into a valid viewport.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width >= 1.0 && self.height >= 1.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Whole-pixel size for raster targets, `None` when not [`valid`](Self::is_valid).
    pub fn pixel_size(self) -> Option<(u32, u32)> {
        self.is_valid().then(|| (self.width.round() as u32, self.height.round() as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn zero_is_invalid()  { assert!(!Viewport::new(0.0, 10.0).is_valid()); }
    #[test] fn nan_is_invalid()   { assert!(!Viewport::new(f32::NAN, 10.0).is_valid()); }
    #[test] fn pixel_size_rounds() { assert_eq!(Viewport::new(99.6, 10.2).pixel_size(), Some((100, 10))); }
    #[test] fn pixel_size_none_when_empty() { assert_eq!(Viewport::new(0.4, 10.0).pixel_size(), None); }
}
