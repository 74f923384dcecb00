use std::time::Duration;

use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as NativeWindow, WindowId};

use crate::coords::Viewport;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::platform::winit::translate_window_event;
use crate::paint::Color;
use crate::render::{TriangleRenderer, Vertex};
use crate::shader::ShaderProgram;

use super::backend::{Backend, FrameStatus, SurfaceEvent};
use super::{WindowConfig, WindowError};

/// Backend on a winit window with a wgpu surface.
///
/// The event loop is pumped rather than run, so the caller keeps control of
/// the frame loop. Desktop platforms only.
#[derive(Default)]
pub struct WinitBackend {
    // Dropped before the event loop that created the window.
    state: PlatformState,
    event_loop: Option<EventLoop<()>>,
}

impl WinitBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else { return };

        if let PumpStatus::Exit(code) =
            event_loop.pump_app_events(Some(Duration::ZERO), &mut self.state)
        {
            log::debug!("event loop exited with code {code}");
            self.state.events.push(SurfaceEvent::CloseRequested);

            // Nothing more will be delivered; release the window before its loop.
            self.state.renderer = None;
            self.state.surface = None;
            self.event_loop = None;
        }
    }
}

impl Backend for WinitBackend {
    fn open(&mut self, config: &WindowConfig) -> Result<(), WindowError> {
        if self.state.surface.is_some() {
            return Ok(());
        }

        // winit allows a single event loop per process; a retry reuses it.
        if self.event_loop.is_none() {
            let event_loop = EventLoop::new()?;
            event_loop.set_control_flow(ControlFlow::Poll);
            self.event_loop = Some(event_loop);
        }

        self.state.pending = Some(WindowRequest {
            title: config.title.clone(),
            size: PhysicalSize::new(config.width, config.height),
            gpu: config.gpu.clone(),
        });

        // The window is created from `resumed` on the first pump, or from
        // `about_to_wait` when the loop has already resumed.
        self.pump();

        if let Some(err) = self.state.error.take() {
            return Err(err);
        }
        if self.state.surface.is_none() {
            return Err(WindowError::NoWindow);
        }

        Ok(())
    }

    fn prepare(&mut self, program: &ShaderProgram, vertices: &[Vertex]) -> Result<(), WindowError> {
        let surface = self.state.surface.as_ref().ok_or(WindowError::NotReady)?;
        let gpu = surface.borrow_gpu();

        self.state.renderer = Some(TriangleRenderer::new(
            gpu.device(),
            gpu.surface_format(),
            program,
            vertices,
        ));
        Ok(())
    }

    fn poll_events(&mut self, events: &mut Vec<SurfaceEvent>) {
        self.pump();
        events.append(&mut self.state.events);
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.state.surface.as_mut() {
            surface.with_gpu_mut(|gpu| gpu.resize(PhysicalSize::new(width, height)));
        }
    }

    fn draw(&mut self, clear: Color, viewport: Viewport) -> Result<FrameStatus, WindowError> {
        let (Some(surface), Some(renderer)) =
            (self.state.surface.as_mut(), self.state.renderer.as_ref())
        else {
            return Err(WindowError::NotReady);
        };

        surface.with_mut(|fields| draw_frame(fields.window, fields.gpu, renderer, clear, viewport))
    }
}

fn draw_frame(
    window: &NativeWindow,
    gpu: &mut Gpu<'_>,
    renderer: &TriangleRenderer,
    clear: Color,
    viewport: Viewport,
) -> Result<FrameStatus, WindowError> {
    let size = gpu.size();
    if size.width == 0 || size.height == 0 {
        return Ok(FrameStatus::Skipped);
    }

    let mut frame = match gpu.begin_frame() {
        Ok(frame) => frame,
        Err(err) => {
            if SurfaceErrorAction::for_error(&err).is_fatal() {
                return Err(WindowError::Surface(err));
            }
            log::warn!("surface error, skipping frame: {err}");
            gpu.handle_surface_error(err);
            return Ok(FrameStatus::Skipped);
        }
    };

    let target = frame.target_size();
    renderer.draw(&mut frame.encoder, &frame.view, clear, viewport, target);

    window.pre_present_notify();
    gpu.submit(frame);

    Ok(FrameStatus::Presented)
}

/// The native window and the GPU context borrowing it.
#[self_referencing]
struct NativeSurface {
    window: NativeWindow,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct WindowRequest {
    title: String,
    size: PhysicalSize<u32>,
    gpu: GpuInit,
}

#[derive(Default)]
struct PlatformState {
    pending: Option<WindowRequest>,
    error: Option<WindowError>,

    // Field order is drop order: GPU resources go before the surface.
    renderer: Option<TriangleRenderer>,
    surface: Option<NativeSurface>,

    events: Vec<SurfaceEvent>,
}

impl PlatformState {
    fn create_surface(
        event_loop: &ActiveEventLoop,
        request: WindowRequest,
    ) -> Result<NativeSurface, WindowError> {
        let attrs = NativeWindow::default_attributes()
            .with_title(request.title)
            .with_inner_size(request.size);

        let window = event_loop.create_window(attrs)?;
        log::debug!("created native window {:?}", window.id());

        let gpu_init = request.gpu;
        NativeSurfaceTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .map_err(WindowError::Gpu)
    }

    /// Creates the requested window, if any is pending.
    fn open_pending(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        let Some(request) = self.pending.take() else { return };

        match Self::create_surface(event_loop, request) {
            Ok(surface) => self.surface = Some(surface),
            Err(e) => self.error = Some(e),
        }
    }
}

impl ApplicationHandler for PlatformState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.open_pending(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.open_pending(event_loop);
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => self.events.push(SurfaceEvent::CloseRequested),

            WindowEvent::Resized(size) => self.events.push(SurfaceEvent::Resized {
                width: size.width,
                height: size.height,
            }),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(surface) = self.surface.as_ref() {
                    let size = surface.borrow_window().inner_size();
                    self.events.push(SurfaceEvent::Resized {
                        width: size.width,
                        height: size.height,
                    });
                }
            }

            _ => {
                if let Some(ev) = translate_window_event(&event) {
                    self.events.push(SurfaceEvent::Input(ev));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pump_without_event_loop_delivers_nothing() {
        // State after the loop has exited: no loop, no surface.
        let mut backend = WinitBackend::new();
        let mut events = Vec::new();

        backend.poll_events(&mut events);
        backend.poll_events(&mut events);

        assert!(events.is_empty());
        assert!(backend.event_loop.is_none());
    }

    #[test]
    fn draw_without_surface_is_not_ready() {
        let mut backend = WinitBackend::new();
        let result = backend.draw(Color::SLATE, Viewport::from_size(8, 8));
        assert!(matches!(result, Err(WindowError::NotReady)));
    }
}
