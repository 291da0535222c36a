//! Standalone lattice window backed by winit.
//!
//! ```no_run
//! # use lattice::Viewer;
//! Viewer::builder()
//!     .with_title("Lattice")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Fullscreen, Window, WindowId},
};

use crate::{
    error::LatticeError, options::Options, InputEvent, LatticeEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Lattice", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Lattice".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that flies through the cube lattice.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the quit key is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Viewer`] if the event loop or window cannot
    /// be created, and the engine's error if initialization fails.
    pub fn run(self) -> Result<(), LatticeError> {
        let event_loop = EventLoop::new()
            .map_err(|e| LatticeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            raw_mouse_motion: self.options.display.raw_mouse_motion,
            fullscreen: self.options.display.fullscreen,
            options: Some(self.options),
            title: self.title,
            init_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| LatticeError::Viewer(e.to_string()))?;

        app.init_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<LatticeEngine>,
    options: Option<Options>,
    raw_mouse_motion: bool,
    fullscreen: bool,
    title: String,
    /// Error that aborted startup, reported once the loop returns.
    init_error: Option<LatticeError>,
}

/// Compute the wgpu surface size: always the full window dimensions.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn window_attributes(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> winit::window::WindowAttributes {
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = Window::default_attributes().with_title(&self.title);
        let Some(mon) = monitor else {
            return attrs;
        };

        if self.fullscreen {
            return attrs
                .with_fullscreen(Some(Fullscreen::Borderless(Some(mon))));
        }

        let mon_size = mon.size();
        let scale = mon.scale_factor();
        let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
        let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
        attrs.with_inner_size(winit::dpi::LogicalSize::new(
            logical_w, logical_h,
        ))
    }

    /// Lock (or confine) and hide the cursor for mouse look.
    fn grab_cursor(window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("cursor grab unavailable: {e}");
        }
        window.set_cursor_visible(false);
    }

    /// Stop the loop; `run` hands the error back to the caller to report.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: LatticeError) {
        self.init_error = Some(error);
        event_loop.exit();
    }

    fn forward(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        let _ = engine.handle_input(event);
        if engine.shutdown_requested() {
            event_loop.exit();
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };
        engine.update();
        match engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let (vp_w, vp_h) = viewport_size(window.inner_size());
                engine.resize(vp_w, vp_h);
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(options) = self.options.take() else {
            return;
        };

        let attrs = self.window_attributes(event_loop);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(
                    event_loop,
                    LatticeError::Viewer(format!(
                        "failed to create window: {e}"
                    )),
                );
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let engine = match pollster::block_on(LatticeEngine::new(
            window.clone(),
            size,
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        Self::grab_cursor(&window);
        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);

        // winit does not report a cursor position on entry; the first sample
        // after this only re-bases.
        self.forward(event_loop, InputEvent::CursorEntered { entered: true });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::Focused(true) => {
                if let Some(window) = &self.window {
                    Self::grab_cursor(window);
                }
            }

            WindowEvent::CursorEntered { .. } => {
                self.forward(
                    event_loop,
                    InputEvent::CursorEntered { entered: true },
                );
            }

            WindowEvent::CursorLeft { .. } => {
                self.forward(
                    event_loop,
                    InputEvent::CursorEntered { entered: false },
                );
            }

            WindowEvent::CursorMoved { position, .. } => {
                if !self.raw_mouse_motion {
                    self.forward(
                        event_loop,
                        InputEvent::CursorMoved {
                            x: position.x,
                            y: position.y,
                        },
                    );
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.forward(event_loop, InputEvent::from_modifiers(&modifiers));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = InputEvent::from_key_event(&event) {
                    self.forward(event_loop, input);
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if !self.raw_mouse_motion {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.forward(event_loop, InputEvent::MouseMotion { dx, dy });
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Drop the engine (and join the diagnostics thread) before the
        // window goes away.
        self.engine = None;
        self.window = None;
    }
}
