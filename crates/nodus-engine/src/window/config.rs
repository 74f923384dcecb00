use crate::device::GpuInit;
use crate::paint::Color;
use crate::shader::ShaderPaths;

/// Everything the window needs to open and draw.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,

    /// Requested drawable size in physical pixels. Not validated here; the GPU
    /// layer rejects a zero-sized drawable.
    pub width: u32,
    pub height: u32,

    pub shaders: ShaderPaths,
    pub clear_color: Color,
    pub gpu: GpuInit,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Node Editor".to_string(),
            width: 800,
            height: 600,
            shaders: ShaderPaths::default(),
            clear_color: Color::SLATE,
            gpu: GpuInit::default(),
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_shaders(mut self, shaders: ShaderPaths) -> Self {
        self.shaders = shaders;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_window() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Node Editor");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.clear_color, Color::rgba(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn builders_override_fields() {
        let config = WindowConfig::default()
            .with_title("tri")
            .with_size(320, 240)
            .with_shaders(ShaderPaths::new("a.wgsl", "b.wgsl"))
            .with_clear_color(Color::rgba(0.0, 0.0, 0.0, 1.0))
            .with_gpu(GpuInit::default().with_vsync(false));

        assert_eq!(config.title, "tri");
        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.shaders.vertex, std::path::PathBuf::from("a.wgsl"));
        assert_eq!(config.clear_color, Color::rgba(0.0, 0.0, 0.0, 1.0));
        assert_eq!(config.gpu.present_mode, wgpu::PresentMode::AutoNoVsync);
    }
}
