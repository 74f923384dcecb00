//! Window lifecycle and frame loop.
//!
//! `Window` owns the state machine (size, viewport, input, close flag) and
//! drives a `Backend`; `WinitBackend` is the winit + wgpu implementation.

mod backend;
mod config;
mod error;
mod runtime;
mod winit_backend;

pub use backend::{Backend, FrameStatus, SurfaceEvent};
pub use config::WindowConfig;
pub use error::WindowError;
pub use runtime::Window;
pub use winit_backend::WinitBackend;
