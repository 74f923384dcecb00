use crate::coords::Viewport;
use crate::input::InputEvent;
use crate::paint::Color;
use crate::render::Vertex;
use crate::shader::ShaderProgram;

use super::{WindowConfig, WindowError};

/// Platform event delivered to the window, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The drawable was resized (physical pixels).
    Resized { width: u32, height: u32 },
    Input(InputEvent),
    /// The user or the platform asked the window to close.
    CloseRequested,
}

/// Outcome of one `Backend::draw`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    Presented,
    /// Nothing was presented (minimized, transient surface error).
    Skipped,
}

/// The surface/context the window drives.
///
/// All calls happen on the thread that called `open`.
pub trait Backend {
    /// Creates the native window and its GPU context.
    fn open(&mut self, config: &WindowConfig) -> Result<(), WindowError>;

    /// One-time GPU setup: pipeline from `program`, vertex buffer from `vertices`.
    fn prepare(&mut self, program: &ShaderProgram, vertices: &[Vertex]) -> Result<(), WindowError>;

    /// Pumps the platform queue without blocking and appends what arrived.
    fn poll_events(&mut self, events: &mut Vec<SurfaceEvent>);

    /// Reconfigures the surface for a new drawable size.
    fn resize(&mut self, width: u32, height: u32);

    /// Clears, draws the prepared vertices inside `viewport`, presents.
    fn draw(&mut self, clear: Color, viewport: Viewport) -> Result<FrameStatus, WindowError>;
}
