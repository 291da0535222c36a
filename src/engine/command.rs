//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, pointer
//! motion or a programmatic call, is represented as a `LatticeCommand`.
//! Consumers construct commands and pass them to
//! [`LatticeEngine::execute`](super::LatticeEngine::execute).

use crate::camera::Axis;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(LatticeCommand::ResetView);
/// engine.execute(LatticeCommand::SetVelocity { axis: Axis::Z, velocity: -5.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatticeCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Set one camera-space velocity component (units per second).
    SetVelocity {
        /// Which component.
        axis: Axis,
        /// New value; zero stops motion along the axis.
        velocity: f32,
    },

    /// Add to pitch and yaw immediately (radians).
    Nudge {
        /// Pitch delta.
        pitch: f32,
        /// Yaw delta.
        yaw: f32,
    },

    /// Snap the camera to the reset pose.
    ResetView,

    // ── Pointer ─────────────────────────────────────────────────────
    /// Enable or disable mouse look as the cursor enters or leaves.
    CursorEntered {
        /// `true` on entry.
        entered: bool,
    },

    /// Absolute cursor sample; the delta since the last one is accumulated.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels.
        y: f64,
    },

    /// Relative pointer motion, accumulated directly.
    MouseMotion {
        /// Horizontal motion.
        dx: f64,
        /// Vertical motion.
        dy: f64,
    },

    // ── Application ─────────────────────────────────────────────────
    /// Request an orderly shutdown.
    Quit,
}
