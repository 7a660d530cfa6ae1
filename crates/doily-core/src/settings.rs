//! Drawing configuration: bounds, startup defaults and the live settings the
//! model applies to new strokes.

use crate::color::Rgba;

/// Hard bounds applied to every configuration input.
pub struct Limits;

impl Limits {
    pub const MIN_SECTORS: u32 = 2;
    pub const MAX_SECTORS: u32 = 36;
    pub const MIN_DIAMETER: u32 = 2;
    pub const MAX_DIAMETER: u32 = 200;
    /// Thumbnails the gallery holds before Save is disabled.
    pub const GALLERY_CAPACITY: usize = 12;
    /// Unflushed live-stroke points tolerated before the head is baked into
    /// the raster cache.
    pub const FLUSH_THRESHOLD: usize = 256;

    #[inline]
    pub fn clamp_sectors(n: u32) -> u32 {
        n.clamp(Self::MIN_SECTORS, Self::MAX_SECTORS)
    }

    #[inline]
    pub fn clamp_diameter(d: u32) -> u32 {
        d.clamp(Self::MIN_DIAMETER, Self::MAX_DIAMETER)
    }
}

/// Startup values for a fresh drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingDefaults {
    pub sector_count: u32,
    pub pen_diameter: u32,
    pub pen_color: Rgba,
    pub mirror: bool,
    pub guides_visible: bool,
    pub background: Rgba,
    pub guide_color: Rgba,
}

impl Default for DrawingDefaults {
    fn default() -> Self {
        Self {
            sector_count: 12,
            pen_diameter: 5,
            pen_color: Rgba::WHITE,
            mirror: false,
            guides_visible: true,
            background: Rgba::BLACK,
            guide_color: Rgba::WHITE,
        }
    }
}

impl DrawingDefaults {
    pub fn sector_count(mut self, n: u32) -> Self {
        self.sector_count = n;
        self
    }

    pub fn pen_diameter(mut self, d: u32) -> Self {
        self.pen_diameter = d;
        self
    }

    pub fn pen_color(mut self, c: Rgba) -> Self {
        self.pen_color = c;
        self
    }

    pub fn mirror(mut self, on: bool) -> Self {
        self.mirror = on;
        self
    }

    pub fn guides_visible(mut self, on: bool) -> Self {
        self.guides_visible = on;
        self
    }

    pub fn background(mut self, c: Rgba) -> Self {
        self.background = c;
        self
    }

    pub fn guide_color(mut self, c: Rgba) -> Self {
        self.guide_color = c;
        self
    }
}

/// Settings currently in force. Every setter clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    sector_count: u32,
    pen_diameter: u32,
    pen_color: Rgba,
    mirror: bool,
    guides_visible: bool,
}

impl Settings {
    pub fn from_defaults(d: &DrawingDefaults) -> Self {
        Self {
            sector_count: Limits::clamp_sectors(d.sector_count),
            pen_diameter: Limits::clamp_diameter(d.pen_diameter),
            pen_color: d.pen_color,
            mirror: d.mirror,
            guides_visible: d.guides_visible,
        }
    }

    #[inline] pub fn sector_count(&self) -> u32 { self.sector_count }
    #[inline] pub fn pen_diameter(&self) -> u32 { self.pen_diameter }
    #[inline] pub fn pen_color(&self) -> Rgba { self.pen_color }
    #[inline] pub fn mirror(&self) -> bool { self.mirror }
    #[inline] pub fn guides_visible(&self) -> bool { self.guides_visible }

    /// Returns `true` if the stored value changed.
    pub fn set_sector_count(&mut self, n: u32) -> bool {
        let n = Limits::clamp_sectors(n);
        let changed = n != self.sector_count;
        self.sector_count = n;
        changed
    }

    pub fn set_pen_diameter(&mut self, d: u32) {
        self.pen_diameter = Limits::clamp_diameter(d);
    }

    pub fn set_pen_color(&mut self, c: Rgba) {
        self.pen_color = c;
    }

    pub fn set_mirror(&mut self, on: bool) {
        self.mirror = on;
    }

    /// Returns `true` if the stored value changed.
    pub fn set_guides_visible(&mut self, on: bool) -> bool {
        let changed = on != self.guides_visible;
        self.guides_visible = on;
        changed
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_defaults(&DrawingDefaults::default())
    }
}
