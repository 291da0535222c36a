use glam::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Build the projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Update the aspect ratio for a new viewport size. Ignores zero-sized
    /// dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer consumed by the lattice shader.
pub struct CameraUniform {
    /// Perspective projection matrix.
    pub projection: [[f32; 4]; 4],
    /// World-to-camera view matrix.
    pub view: [[f32; 4]; 4],
    /// Model matrix applied to the whole lattice.
    pub model: [[f32; 4]; 4],
    /// Vertex displacement along each vertex's shift direction.
    pub shift: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices and zero shift.
    pub fn new() -> Self {
        Self {
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            shift: 0.0,
            _pad: [0.0; 3],
        }
    }

    /// Update the per-frame fields.
    pub fn update(&mut self, projection: &Projection, view: Mat4, shift: f32) {
        self.projection = projection.build_matrix().to_cols_array_2d();
        self.view = view.to_cols_array_2d();
        self.shift = shift;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn uniform_matches_wgsl_layout() {
        // Three mat4x4<f32> plus shift and three f32 of padding.
        assert_eq!(size_of::<CameraUniform>(), 208);
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }

    #[test]
    fn projection_keeps_aspect_on_zero_resize() {
        let mut proj = Projection {
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.01,
            zfar: 500.0,
        };
        proj.resize(1920, 0);
        assert_eq!(proj.aspect, 1.0);
        proj.resize(1600, 800);
        assert_eq!(proj.aspect, 2.0);
    }

    #[test]
    fn points_in_front_land_in_depth_range() {
        let proj = Projection {
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.01,
            zfar: 500.0,
        };
        let clip = proj.build_matrix().project_point3(Vec3::new(0.0, 0.0, -10.0));
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }
}
