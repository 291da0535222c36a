//! Camera system for the lattice flythrough.
//!
//! Provides a free-fly camera with quaternion orientation, deferred mouse
//! look, key-driven velocity, and the GPU uniform it feeds.

/// Camera controller owning the uniform buffer and bind group.
pub mod controller;
/// Projection parameters and the GPU uniform type.
pub mod core;
/// Free-fly camera state machine.
pub mod fly;

pub use fly::{Axis, CameraPose, FlyCamera};
