use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Mouse-look sensitivity in radians per pixel.
    pub sensitivity: f32,
    /// Movement speed while the slow modifier (Shift) is held.
    pub slow_speed: f32,
    /// Movement speed with no modifier held.
    pub normal_speed: f32,
    /// Movement speed while the fast modifier (Control) is held.
    pub fast_speed: f32,
    /// Radians of pitch/yaw applied per arrow-key press.
    pub nudge_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.01,
            zfar: 500.0,
            sensitivity: crate::camera::fly::DEFAULT_SENSITIVITY,
            slow_speed: 0.1,
            normal_speed: 5.0,
            fast_speed: 20.0,
            nudge_step: std::f32::consts::PI / 16.0,
        }
    }
}
