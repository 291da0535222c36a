//! Raster pass drawing every lattice cube from one static vertex buffer.

use wgpu::util::DeviceExt;

use crate::error::LatticeError;
use crate::geometry::{lattice_vertex_count, LatticeVertex};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, LATTICE_SHADER};
use crate::renderer::pipeline_util;

/// Size in bytes of a vertex buffer holding `vertex_count` lattice vertices.
#[must_use]
pub fn vertex_buffer_size(vertex_count: usize) -> u64 {
    vertex_count as u64 * size_of::<LatticeVertex>() as u64
}

/// Reject buffers the device cannot allocate.
///
/// # Errors
///
/// Returns [`LatticeError::BufferTooLarge`] when `size` exceeds `limit`.
pub fn check_buffer_size(size: u64, limit: u64) -> Result<(), LatticeError> {
    if size > limit {
        return Err(LatticeError::BufferTooLarge { size, limit });
    }
    Ok(())
}

/// Vertex buffer size for a lattice of `half_extent`, checked against
/// `limit` before any vertex is generated.
///
/// # Errors
///
/// Returns [`LatticeError::BufferTooLarge`] when the buffer exceeds `limit`
/// or its size overflows, in which case `size` saturates at `u64::MAX`.
pub fn check_lattice_size(
    half_extent: u32,
    limit: u64,
) -> Result<u64, LatticeError> {
    let stride = size_of::<LatticeVertex>() as u64;
    let size = lattice_vertex_count(half_extent)
        .and_then(|count| u64::try_from(count).ok())
        .and_then(|count| count.checked_mul(stride))
        .unwrap_or(u64::MAX);
    check_buffer_size(size, limit)?;
    Ok(size)
}

/// Pipeline plus the static lattice vertex buffer.
pub struct LatticePass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl LatticePass {
    /// Build the pipeline and upload `vertices`.
    ///
    /// # Errors
    ///
    /// Fails if the shader does not compose, or if the vertex data exceeds
    /// the device's buffer size limit.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        shader_composer: &mut ShaderComposer,
        vertices: &[LatticeVertex],
    ) -> Result<Self, LatticeError> {
        let size = vertex_buffer_size(vertices.len());
        check_buffer_size(size, context.max_buffer_size())?;
        let vertex_count = u32::try_from(vertices.len()).map_err(|_| {
            LatticeError::BufferTooLarge {
                size,
                limit: context.max_buffer_size(),
            }
        })?;

        let shader = shader_composer.compose(
            &context.device,
            "Lattice Shader",
            LATTICE_SHADER,
            "raster/lattice.wgsl",
        )?;

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Lattice Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Lattice Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[LatticeVertex::buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &pipeline_util::surface_fragment_targets(
                        context.format(),
                    ),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
                multisample: pipeline_util::multisample_state(
                    context.sample_count,
                ),
                multiview: None,
                cache: None,
            },
        );

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lattice Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        log::info!(
            "lattice uploaded: {vertex_count} vertices, {:.1} MB",
            size as f64 / (1024.0 * 1024.0)
        );

        Ok(Self {
            pipeline,
            vertex_buffer,
            vertex_count,
        })
    }

    /// Number of vertices drawn per frame.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Record the lattice draw into `render_pass`.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
