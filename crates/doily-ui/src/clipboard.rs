use std::borrow::Cow;

use doily_core::tiny_skia::PixmapRef;

use crate::raster;

/// Places `pixmap` on the system clipboard as an image.
pub fn copy_image(pixmap: PixmapRef<'_>) -> Result<(), arboard::Error> {
    let image = arboard::ImageData {
        width: pixmap.width() as usize,
        height: pixmap.height() as usize,
        bytes: Cow::Owned(raster::straight_rgba(pixmap)),
    };
    arboard::Clipboard::new()?.set_image(image)?;
    log::debug!("copied {}x{} image to clipboard", pixmap.width(), pixmap.height());
    Ok(())
}
