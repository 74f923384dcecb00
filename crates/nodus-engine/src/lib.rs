//! nodus engine crate.
//!
//! Opens a window with a wgpu surface, builds one shader program from two WGSL
//! files, and draws a fixed triangle every frame until Escape is pressed.

pub mod coords;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shader;
pub mod window;

#[cfg(test)]
mod test_support;

pub use window::{Window, WindowConfig, WindowError};
