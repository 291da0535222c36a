//! Size-dependent render attachments: depth buffer and MSAA color target.

/// Depth attachment format used by every lattice pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A render-attachment texture and its default view.
pub struct RenderTarget {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl RenderTarget {
    /// Create a render attachment with the given dimensions, format and
    /// sample count. Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        (width, height): (u32, u32),
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Depth buffer plus the optional multisampled color target that resolves
/// into the swapchain image.
pub struct FrameTargets {
    /// Depth attachment, cleared to 1.0 each frame.
    pub depth: RenderTarget,
    /// Multisampled color attachment; `None` when rendering at 1x.
    pub msaa: Option<RenderTarget>,
    sample_count: u32,
}

impl FrameTargets {
    /// Create targets for a surface of `size` and `color_format`.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        size: (u32, u32),
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let depth = RenderTarget::new(
            device,
            "Depth Target",
            size,
            DEPTH_FORMAT,
            sample_count,
        );
        let msaa = (sample_count > 1).then(|| {
            RenderTarget::new(
                device,
                "MSAA Color Target",
                size,
                color_format,
                sample_count,
            )
        });
        Self {
            depth,
            msaa,
            sample_count,
        }
    }

    /// Recreate the targets at the new surface size.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        size: (u32, u32),
        color_format: wgpu::TextureFormat,
    ) {
        *self = Self::new(device, size, color_format, self.sample_count);
    }

    /// Color attachment that renders into `surface_view`, through the MSAA
    /// target when multisampling.
    pub fn color_attachment<'a>(
        &'a self,
        surface_view: &'a wgpu::TextureView,
        clear: wgpu::Color,
    ) -> wgpu::RenderPassColorAttachment<'a> {
        let (view, resolve_target) = match &self.msaa {
            Some(msaa) => (&msaa.view, Some(surface_view)),
            None => (surface_view, None),
        };
        wgpu::RenderPassColorAttachment {
            view,
            depth_slice: None,
            resolve_target,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: if self.msaa.is_some() {
                    wgpu::StoreOp::Discard
                } else {
                    wgpu::StoreOp::Store
                },
            },
        }
    }

    /// Depth attachment cleared to the far plane.
    pub fn depth_attachment(
        &self,
    ) -> wgpu::RenderPassDepthStencilAttachment<'_> {
        wgpu::RenderPassDepthStencilAttachment {
            view: &self.depth.view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }
    }
}
