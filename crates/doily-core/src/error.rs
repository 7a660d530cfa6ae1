use std::fmt;

/// A raster of the requested size could not be allocated.
///
/// Returned for zero-sized targets and for sizes the rasteriser rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderError {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot allocate a {}x{} raster", self.width, self.height)
    }
}

impl std::error::Error for RenderError {}
