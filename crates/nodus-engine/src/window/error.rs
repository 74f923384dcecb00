use crate::shader::ShaderError;

/// Why the window could not start or keep running.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("failed to create the platform event loop")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window")]
    CreateWindow(#[from] winit::error::OsError),

    /// The platform never delivered the resume that creates the window.
    #[error("platform did not create a window")]
    NoWindow,

    #[error("GPU initialization failed: {0:#}")]
    Gpu(anyhow::Error),

    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// An operation that needs a successful `init` ran before it.
    #[error("window is not initialized")]
    NotReady,

    #[error("unrecoverable surface error")]
    Surface(#[source] wgpu::SurfaceError),
}
