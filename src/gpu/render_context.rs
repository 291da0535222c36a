use std::fmt;

/// Errors that can occur during GPU context initialization.
#[derive(Debug)]
pub enum RenderContextError {
    /// Failed to create a wgpu surface from the window handle.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// GPU device request failed (limits or features not met).
    DeviceRequest(wgpu::RequestDeviceError),
    /// Surface configuration not supported by the selected adapter.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => {
                write!(f, "surface creation failed: {e}")
            }
            Self::AdapterRequest(e) => {
                write!(f, "no compatible GPU adapter found: {e}")
            }
            Self::DeviceRequest(e) => write!(f, "device request failed: {e}"),
            Self::UnsupportedSurface => {
                write!(f, "surface configuration not supported by adapter")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

/// Owns the core wgpu resources: device, queue, surface, and configuration.
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    /// The window surface for presentation.
    pub surface: wgpu::Surface<'static>,
    /// Current surface configuration (format, size, present mode).
    pub config: wgpu::SurfaceConfiguration,
    /// MSAA sample count supported by both the surface format and the depth
    /// format (1 or 4).
    pub sample_count: u32,
}

impl RenderContext {
    /// Create a new render context from the given window surface target and
    /// initial size.
    ///
    /// The device is requested with the adapter's full buffer size limit so
    /// large lattices fit in a single vertex buffer. `sample_count` falls
    /// back to 1 when the adapter cannot multisample the surface format.
    ///
    /// # Errors
    ///
    /// Returns `RenderContextError` if surface creation, adapter request,
    /// device request, or surface configuration fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
        sample_count: u32,
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::HighPerformance,
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;

        let info = adapter.get_info();
        log::info!(
            "GPU adapter: {} ({:?}, {})",
            info.name,
            info.backend,
            info.driver_info
        );

        let adapter_limits = adapter.limits();
        let mut required_limits = wgpu::Limits::downlevel_defaults()
            .using_resolution(adapter_limits.clone());
        required_limits.max_buffer_size = adapter_limits.max_buffer_size;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Primary Device"),
                required_features: wgpu::Features::empty(),
                required_limits,
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        let mut config = surface
            .get_default_config(&adapter, initial_size.0, initial_size.1)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        config.width = initial_size.0.max(1);
        config.height = initial_size.1.max(1);
        config.present_mode = wgpu::PresentMode::Fifo;
        config.format = linear_surface_format(
            &surface.get_capabilities(&adapter).formats,
            config.format,
        );

        surface.configure(&device, &config);

        let sample_count =
            supported_sample_count(&adapter, config.format, sample_count);

        Ok(Self {
            device,
            queue,
            surface,
            config,
            sample_count,
        })
    }

    /// The surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Largest buffer the device accepts, in bytes.
    pub fn max_buffer_size(&self) -> u64 {
        self.device.limits().max_buffer_size
    }

    /// Reconfigure the surface for the new window size. Ignores zero-sized
    /// dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Acquire the next swapchain texture for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the surface is lost, outdated,
    /// or timed out.
    pub fn get_next_frame(
        &self,
    ) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Create a new command encoder for recording GPU commands.
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            })
    }

    /// Finish the encoder and submit its command buffer to the GPU queue.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}

/// The non-sRGB variant of `preferred` when the surface supports it.
/// Vertex colors are written as-is, without sRGB encoding.
fn linear_surface_format(
    supported: &[wgpu::TextureFormat],
    preferred: wgpu::TextureFormat,
) -> wgpu::TextureFormat {
    let linear = preferred.remove_srgb_suffix();
    if supported.contains(&linear) {
        linear
    } else {
        preferred
    }
}

/// Clamp the requested MSAA count to what the adapter supports for both
/// the color and the depth format.
fn supported_sample_count(
    adapter: &wgpu::Adapter,
    color_format: wgpu::TextureFormat,
    requested: u32,
) -> u32 {
    if requested <= 1 {
        return 1;
    }
    let supported = |format| {
        adapter
            .get_texture_format_features(format)
            .flags
            .sample_count_supported(requested)
    };
    if supported(color_format) && supported(super::texture::DEPTH_FORMAT) {
        requested
    } else {
        log::warn!(
            "{requested}x MSAA unsupported for {color_format:?}, rendering \
             without multisampling"
        );
        1
    }
}
