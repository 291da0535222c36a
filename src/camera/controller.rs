use wgpu::util::DeviceExt;

use crate::camera::core::{CameraUniform, Projection};
use crate::camera::fly::{CameraPose, FlyCamera};
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Owns the fly camera, the projection, and the camera uniform's GPU
/// resources.
pub struct CameraController {
    /// Free-fly camera state (position, orientation, input accumulation).
    pub fly: FlyCamera,
    /// Perspective projection parameters.
    pub projection: Projection,
    /// CPU copy of the uniform last written to `buffer`.
    pub uniform: CameraUniform,
    /// Uniform buffer bound at group 0, binding 0.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the camera uniform.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the camera uniform.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create the controller with the camera at its initial pose.
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let fly = FlyCamera::new(CameraPose::INITIAL, options.sensitivity);
        let projection = Projection {
            aspect: context.config.width as f32
                / context.config.height.max(1) as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update(&projection, fly.view_matrix(), fly.shift());

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            fly,
            projection,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Integrate the fly camera up to `now` seconds.
    pub fn update(&mut self, now: f64) {
        let _ = self.fly.update(now);
    }

    /// Write projection, view and shift to the uniform buffer.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update(
            &self.projection,
            self.fly.view_matrix(),
            self.fly.shift(),
        );
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }

    /// Track the new viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }
}
