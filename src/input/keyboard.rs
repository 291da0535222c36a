use serde::{Deserialize, Serialize};

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// reset_view = "KeyR"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Strafe along −X while held.
    MoveLeft,
    /// Strafe along +X while held.
    MoveRight,
    /// Fly along −Z (the view direction) while held.
    MoveForward,
    /// Fly along +Z while held.
    MoveBackward,
    /// Rise along +Y while held.
    MoveUp,
    /// Sink along −Y while held.
    MoveDown,
    /// Tilt the view up by one nudge step.
    PitchUp,
    /// Tilt the view down by one nudge step.
    PitchDown,
    /// Turn left by one nudge step.
    YawLeft,
    /// Turn right by one nudge step.
    YawRight,
    /// Snap the camera to the reset pose.
    ResetView,
    /// Request application shutdown.
    Quit,
}

impl KeyAction {
    /// Camera axis and direction sign for movement actions.
    #[must_use]
    pub fn movement(self) -> Option<(crate::camera::Axis, f32)> {
        use crate::camera::Axis;
        match self {
            Self::MoveLeft => Some((Axis::X, -1.0)),
            Self::MoveRight => Some((Axis::X, 1.0)),
            Self::MoveForward => Some((Axis::Z, -1.0)),
            Self::MoveBackward => Some((Axis::Z, 1.0)),
            Self::MoveUp => Some((Axis::Y, 1.0)),
            Self::MoveDown => Some((Axis::Y, -1.0)),
            _ => None,
        }
    }
}
