//! Pixel-space geometry shared by the window and the renderer.
//!
//! All values are physical pixels, origin top-left.

mod viewport;

pub use viewport::Viewport;
