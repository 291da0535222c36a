//! The lattice engine: GPU bootstrap, per-frame update and render, and
//! command dispatch.

/// Engine command vocabulary.
pub mod command;
mod construction;
mod input;

use self::construction::{init_gpu_pipeline, spawn_diagnostics};
use crate::camera::controller::CameraController;
use crate::diagnostics::{DiagnosticsReporter, DiagnosticsSnapshot};
use crate::error::LatticeError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::FrameTargets;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::renderer::LatticePass;
use crate::util::frame_timing::Clock;

/// The core rendering engine for the cube lattice.
///
/// Owns the GPU context, the lattice pass, the fly camera and the
/// diagnostics reporter.
///
/// # Frame loop
///
/// Each frame, call [`update`](Self::update) to integrate the camera, then
/// [`render`](Self::render) to draw and present. Call
/// [`resize`](Self::resize) when the window size changes. Input is forwarded
/// via [`handle_input`](Self::handle_input); check
/// [`shutdown_requested`](Self::shutdown_requested) after input to honor the
/// quit key.
pub struct LatticeEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Fly camera plus its uniform buffer and bind group.
    pub camera_controller: CameraController,
    lattice_pass: LatticePass,
    targets: FrameTargets,
    /// Key bindings and modifier state.
    input: InputProcessor,
    diagnostics: Option<DiagnosticsReporter>,
    clock: Clock,
    clear_color: wgpu::Color,
    shutdown_requested: bool,
}

impl LatticeEngine {
    /// Build the engine for a window surface of `size` physical pixels.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError`] if GPU initialization, shader composition
    /// or the lattice upload fails, or if the diagnostics thread cannot be
    /// spawned.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, LatticeError> {
        let context = RenderContext::new(
            window,
            size,
            options.display.effective_sample_count(),
        )
        .await?;

        let bootstrap = init_gpu_pipeline(&context, &options)?;
        let diagnostics = spawn_diagnostics(&options.diagnostics)?;

        let [r, g, b] = options.display.clear_color;
        let clear_color = wgpu::Color { r, g, b, a: 1.0 };

        Ok(Self {
            context,
            camera_controller: bootstrap.camera_controller,
            lattice_pass: bootstrap.lattice_pass,
            targets: bootstrap.targets,
            input: InputProcessor::new(&options.camera, options.keybindings),
            diagnostics,
            clock: Clock::new(),
            clear_color,
            shutdown_requested: false,
        })
    }

    /// Integrate the camera up to the current wall-clock time and publish
    /// a diagnostics snapshot.
    pub fn update(&mut self) {
        let now = self.clock.now();
        self.camera_controller.update(now);

        let triangles = self.triangle_count();
        if let Some(diagnostics) = &mut self.diagnostics {
            diagnostics.publish(DiagnosticsSnapshot::capture(
                &self.camera_controller.fly,
                triangles,
            ));
        }
    }

    /// Upload the camera uniform, draw the lattice and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired. `Lost` and `Outdated` are recovered by calling
    /// [`resize`](Self::resize) with the current window size.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera_controller.update_gpu(&self.context.queue);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut rp =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("lattice render pass"),
                    color_attachments: &[Some(
                        self.targets.color_attachment(&view, self.clear_color),
                    )],
                    depth_stencil_attachment: Some(
                        self.targets.depth_attachment(),
                    ),
                    ..Default::default()
                });
            self.lattice_pass
                .draw(&mut rp, &self.camera_controller.bind_group);
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// Reconfigure the surface, the attachments and the projection.
    /// Zero-sized dimensions (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.targets.resize(
            &self.context.device,
            (width, height),
            self.context.format(),
        );
        self.camera_controller.resize(width, height);
    }

    /// Whether a quit command has been executed.
    #[must_use]
    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }

    /// Triangles drawn per frame.
    #[must_use]
    pub fn triangle_count(&self) -> u64 {
        u64::from(self.lattice_pass.vertex_count()) / 3
    }

    /// Stop the diagnostics reporter. Also runs on drop.
    pub fn shutdown(&mut self) {
        if let Some(mut diagnostics) = self.diagnostics.take() {
            diagnostics.shutdown();
        }
    }
}

impl Drop for LatticeEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
