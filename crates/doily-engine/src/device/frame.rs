/// A single acquired surface frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// one. Dropping it after [`Gpu::submit`](super::Gpu::submit) presents.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the caller should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; try again next frame.
    Reconfigured,
    /// Transient; skip this frame.
    SkipFrame,
    /// Unrecoverable (usually out of memory).
    Fatal,
}
