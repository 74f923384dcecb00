/// A surface texture acquired for one frame, plus the encoder recording into it.
///
/// Must be handed to `Gpu::submit` promptly; holding the surface texture blocks
/// acquisition of the next one.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Size of the texture being drawn into, in physical pixels.
    pub fn target_size(&self) -> (u32, u32) {
        let texture = &self.surface_texture.texture;
        (texture.width(), texture.height())
    }
}
