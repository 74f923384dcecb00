use crate::coords::Viewport;
use crate::input::{InputState, Key};
use crate::render::TRIANGLE;
use crate::shader;

use super::backend::{Backend, FrameStatus, SurfaceEvent};
use super::winit_backend::WinitBackend;
use super::{WindowConfig, WindowError};

/// The demo window: owns the surface, the shader program and the frame loop.
///
/// Lifecycle is strictly linear:
/// `new` → `init` → loop { `update`, `process_input`, `render` } → drop.
/// `run` performs all of it.
pub struct Window<B: Backend = WinitBackend> {
    config: WindowConfig,
    backend: B,

    /// Drawable size in physical pixels; follows resizes.
    size: (u32, u32),
    viewport: Viewport,

    input: InputState,
    events: Vec<SurfaceEvent>,

    ready: bool,
    should_close: bool,
    frame_index: u64,
}

impl Window<WinitBackend> {
    /// A window backed by winit + wgpu. Nothing is opened until `init`.
    pub fn new(config: WindowConfig) -> Self {
        Self::with_backend(config, WinitBackend::new())
    }
}

impl<B: Backend> Window<B> {
    pub fn with_backend(config: WindowConfig, backend: B) -> Self {
        let size = (config.width, config.height);
        Self {
            config,
            backend,
            size,
            viewport: Viewport::default(),
            input: InputState::default(),
            events: Vec::new(),
            ready: false,
            should_close: false,
            frame_index: 0,
        }
    }

    /// Builds the shader program, opens the surface and performs all one-time
    /// GPU setup.
    ///
    /// On failure the error is logged and returned, and the window stays
    /// not-ready: `render` refuses to draw and `run` never enters its loop.
    /// Shaders are checked before the platform is touched, so a shader failure
    /// opens nothing and `init` can be retried. Calling `init` again after
    /// success is a no-op.
    pub fn init(&mut self) -> Result<(), WindowError> {
        if self.ready {
            return Ok(());
        }

        self.try_init().inspect_err(|e| log::error!("window init failed: {e}"))
    }

    fn try_init(&mut self) -> Result<(), WindowError> {
        let (width, height) = (self.config.width, self.config.height);
        log::info!("opening \"{}\" at {width}x{height}", self.config.title);

        let program = shader::load_program(&self.config.shaders)?;

        self.backend.open(&self.config)?;
        self.size = (width, height);
        self.viewport = Viewport::from_size(width, height);

        self.backend.prepare(&program, &TRIANGLE)?;

        self.ready = true;
        log::debug!("window ready");
        Ok(())
    }

    /// Pumps pending platform events and applies them to the window state.
    pub fn update(&mut self) {
        let mut events = std::mem::take(&mut self.events);
        self.backend.poll_events(&mut events);

        for event in events.drain(..) {
            self.handle_event(event);
        }

        self.events = events;
    }

    fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Resized { width, height } => {
                log::debug!("resized to {width}x{height}");
                self.size = (width, height);
                self.viewport = Viewport::from_size(width, height);
                self.backend.resize(width, height);
            }
            SurfaceEvent::Input(ev) => self.input.apply_event(&ev),
            SurfaceEvent::CloseRequested => {
                log::info!("close requested");
                self.should_close = true;
            }
        }
    }

    /// Sets the close flag while Escape is held. No other key affects it.
    pub fn process_input(&mut self) {
        if self.input.key_down(Key::Escape) && !self.should_close {
            log::info!("escape pressed, closing");
            self.should_close = true;
        }
    }

    /// Draws and presents one frame.
    pub fn render(&mut self) -> Result<(), WindowError> {
        if !self.ready {
            return Err(WindowError::NotReady);
        }

        match self.backend.draw(self.config.clear_color, self.viewport)? {
            FrameStatus::Presented => self.frame_index += 1,
            FrameStatus::Skipped => log::trace!("frame {} skipped", self.frame_index),
        }

        Ok(())
    }

    /// Initializes, then loops until the close flag is set.
    ///
    /// The flag is checked at the top of each iteration, so the loop ends in the
    /// iteration that raised it. Init failures and fatal frame errors are
    /// returned; a clean close returns `Ok`.
    pub fn run(&mut self) -> Result<(), WindowError> {
        self.init()?;

        while !self.should_close {
            self.update();
            self.process_input();
            if let Err(e) = self.render() {
                log::error!("frame {} failed: {e}", self.frame_index);
                return Err(e);
            }
        }

        log::info!("window closed after {} frames", self.frame_index);
        Ok(())
    }

    pub fn request_close(&mut self) {
        self.should_close = true;
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current drawable size `(width, height)` in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Number of frames presented so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
