//! Free-fly camera state: position, yaw/pitch orientation, key-driven
//! velocity and deferred mouse look.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{DVec2, Mat4, Quat, Vec3};

use crate::util::frame_timing::FrameTimer;

/// Default radians of rotation per pixel of mouse movement.
pub const DEFAULT_SENSITIVITY: f32 = 0.001;

/// Lower bound of the shift scalar.
pub const SHIFT_MIN: f32 = 0.002;
/// Upper bound of the shift scalar.
pub const SHIFT_MAX: f32 = 0.252;

/// A movement axis in camera space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Camera right (+) / left (-).
    X,
    /// Camera up (+) / down (-).
    Y,
    /// Camera backward (+) / forward (-).
    Z,
}

/// Position plus yaw/pitch. Roll is always zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space camera position.
    pub position: Vec3,
    /// Rotation about the camera's X axis, in radians.
    pub pitch: f32,
    /// Rotation about the world Y axis, in radians.
    pub yaw: f32,
}

impl CameraPose {
    /// Pose the camera starts in, looking into the lattice from one corner.
    pub const INITIAL: Self = Self {
        position: Vec3::new(-41.5, -43.5, -37.5),
        pitch: 21.5 * PI / 180.0,
        yaw: -135.0 * PI / 180.0,
    };

    /// Pose restored by the reset-view action.
    pub const RESET: Self = Self {
        position: Vec3::new(30.0, 30.0, 30.0),
        pitch: -34.5 * PI / 180.0,
        yaw: 45.0 * PI / 180.0,
    };
}

/// Wrap an angle into `(-pi, pi]`. Non-finite input maps to zero.
#[must_use]
pub fn wrap_angle(rad: f32) -> f32 {
    if !rad.is_finite() {
        return 0.0;
    }
    if rad > -PI && rad <= PI {
        return rad;
    }
    let wrapped = PI - (PI - rad).rem_euclid(TAU);
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Shift scalar at wall-clock time `t` seconds:
/// `(1 + sin(t / 2)) / 2 / 4 + 0.002`, always within
/// [`SHIFT_MIN`]..=[`SHIFT_MAX`].
#[must_use]
pub fn shift_scalar(t: f64) -> f32 {
    let s = ((1.0 + (t / 2.0).sin()) / 2.0 / 4.0) as f32 + SHIFT_MIN;
    s.clamp(SHIFT_MIN, SHIFT_MAX)
}

/// Free-fly camera driven by key state and accumulated mouse deltas.
///
/// Input events only record intent (velocity, mouse delta); all
/// integration happens in [`update`](Self::update), once per frame.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    velocity: Vec3,
    roll: f32,
    pitch: f32,
    yaw: f32,
    /// Mouse movement not yet applied to the orientation.
    mouse_delta: DVec2,
    cursor_enabled: bool,
    /// Next cursor sample only re-bases `cursor` instead of accumulating.
    rebase_cursor: bool,
    cursor: DVec2,
    sensitivity: f32,
    timer: FrameTimer,
    view: Mat4,
    shift: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(CameraPose::INITIAL, DEFAULT_SENSITIVITY)
    }
}

impl FlyCamera {
    /// Create a camera at `pose` with the given mouse sensitivity
    /// (radians per pixel).
    #[must_use]
    pub fn new(pose: CameraPose, sensitivity: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            mouse_delta: DVec2::ZERO,
            cursor_enabled: false,
            rebase_cursor: true,
            cursor: DVec2::ZERO,
            sensitivity,
            timer: FrameTimer::new(),
            view: Mat4::IDENTITY,
            shift: shift_scalar(0.0),
        };
        camera.set_pose(pose);
        camera
    }

    /// Snap position and orientation to `pose`, zeroing roll.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.roll = 0.0;
        self.pitch = wrap_angle(pose.pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
        self.yaw = wrap_angle(pose.yaw);
        self.view = self.placement().inverse();
    }

    /// Snap to the fixed alternate pose ([`CameraPose::RESET`]).
    pub fn reset_view(&mut self) {
        self.set_pose(CameraPose::RESET);
    }

    /// Set one component of the camera-space velocity.
    pub fn set_velocity(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.velocity.x = value,
            Axis::Y => self.velocity.y = value,
            Axis::Z => self.velocity.z = value,
        }
    }

    /// Rotate immediately by the given pitch/yaw increments (radians).
    pub fn nudge(&mut self, pitch: f32, yaw: f32) {
        self.pitch =
            wrap_angle(self.pitch + pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
        self.yaw = wrap_angle(self.yaw + yaw);
    }

    /// Cursor entered (`true`) or left (`false`) the window.
    ///
    /// Entering re-bases the cursor so the first sample afterwards does not
    /// produce a jump.
    pub fn cursor_entered(&mut self, entered: bool) {
        self.cursor_enabled = entered;
        if entered {
            self.rebase_cursor = true;
        }
    }

    /// Absolute cursor position in window pixels.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if !self.cursor_enabled {
            return;
        }
        let pos = DVec2::new(x, y);
        if self.rebase_cursor {
            self.rebase_cursor = false;
        } else {
            self.mouse_delta += pos - self.cursor;
        }
        self.cursor = pos;
    }

    /// Relative device motion, used while the cursor is grabbed.
    pub fn mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.cursor_enabled {
            self.mouse_delta += DVec2::new(dx, dy);
        }
    }

    /// Integrate the time since the previous call.
    ///
    /// The first call only records `now`. A call with zero elapsed time
    /// changes nothing. Returns whether integration happened.
    pub fn update(&mut self, now: f64) -> bool {
        let first = !self.timer.started();
        self.timer.on_frame(now);
        let dt = self.timer.elapsed();
        if first || dt == 0.0 {
            return false;
        }

        self.roll = 0.0;
        let pitch = self.pitch + (-self.mouse_delta.y) as f32 * self.sensitivity;
        self.pitch = wrap_angle(pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
        let yaw = self.yaw + (-self.mouse_delta.x) as f32 * self.sensitivity;
        self.yaw = wrap_angle(yaw);
        self.mouse_delta = DVec2::ZERO;

        let orientation = self.orientation();
        self.position += orientation * self.velocity * dt as f32;
        self.view = self.placement().inverse();
        self.shift = shift_scalar(self.timer.time());
        true
    }

    /// Orientation quaternion: roll about Z, then yaw about Y, then pitch
    /// about X, with yaw outermost after roll.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_z(self.roll)
            * Quat::from_rotation_y(self.yaw)
            * Quat::from_rotation_x(self.pitch)
    }

    /// World-space camera placement `translate(position) * rotate(q)`.
    fn placement(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }

    /// View matrix computed by the last integrating update.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Shift scalar computed by the last integrating update.
    #[must_use]
    pub fn shift(&self) -> f32 {
        self.shift
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Camera-space velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Roll angle (always zero after an update).
    #[must_use]
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Pitch angle in `[-pi/2, pi/2]`.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw angle in `(-pi, pi]`.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Mouse movement accumulated since the last update.
    #[must_use]
    pub fn mouse_delta(&self) -> DVec2 {
        self.mouse_delta
    }

    /// Last sampled cursor position.
    #[must_use]
    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    /// Frame timer driving the integration.
    #[must_use]
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }
}
