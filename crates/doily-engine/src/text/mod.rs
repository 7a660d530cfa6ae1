//! Font loading, measurement and glyph rasterisation (fontdue).

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, GlyphBitmap};
