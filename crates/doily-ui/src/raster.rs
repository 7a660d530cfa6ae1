//! Conversions between tiny-skia pixmaps and `image` buffers.

use doily_core::tiny_skia::{ColorU8, Pixmap, PixmapRef};
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Straight-alpha RGBA8 bytes, top-left first.
pub fn straight_rgba(pixmap: PixmapRef<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

pub fn to_image(pixmap: PixmapRef<'_>) -> Option<RgbaImage> {
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), straight_rgba(pixmap))
}

pub fn from_image(img: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(img.width(), img.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Size of a `width`-wide copy of a `src_w`×`src_h` image, aspect kept.
pub fn scaled_size(src_w: u32, src_h: u32, width: u32) -> (u32, u32) {
    if src_w == 0 {
        return (width.max(1), 1);
    }
    let h = (u64::from(width) * u64::from(src_h) / u64::from(src_w)) as u32;
    (width.max(1), h.max(1))
}

/// Smoothly downscales `pixmap` to `width`, keeping the aspect ratio.
pub fn scale_to_width(pixmap: PixmapRef<'_>, width: u32) -> Option<Pixmap> {
    let src = to_image(pixmap)?;
    let (w, h) = scaled_size(src.width(), src.height(), width);
    let scaled = imageops::resize(&src, w, h, FilterType::CatmullRom);
    from_image(&scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doily_core::tiny_skia::Color;

    #[test]
    fn scaled_size_keeps_aspect() {
        assert_eq!(scaled_size(800, 600, 200), (200, 150));
        assert_eq!(scaled_size(1000, 1, 200), (200, 1));
        assert_eq!(scaled_size(0, 10, 200), (200, 1));
    }

    #[test]
    fn scale_preserves_flat_colour() {
        let mut pm = Pixmap::new(400, 300).unwrap();
        pm.fill(Color::from_rgba8(10, 200, 30, 255));
        let small = scale_to_width(pm.as_ref(), 200).unwrap();
        assert_eq!((small.width(), small.height()), (200, 150));
        let c = small.pixel(100, 75).unwrap().demultiply();
        assert!(c.red().abs_diff(10) <= 1 && c.green().abs_diff(200) <= 1 && c.blue().abs_diff(30) <= 1);
        assert!(c.alpha() >= 254);
    }

    #[test]
    fn straight_rgba_demultiplies() {
        let mut pm = Pixmap::new(1, 1).unwrap();
        pm.fill(Color::from_rgba8(255, 0, 0, 128));
        let bytes = straight_rgba(pm.as_ref());
        assert_eq!(bytes[3], 128);
        assert!(bytes[0] >= 254);
    }
}
