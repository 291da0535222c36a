//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the lattice crate.
#[derive(Debug)]
pub enum LatticeError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// WGSL shader composition or validation failure.
    Shader(String),
    /// The lattice vertex buffer exceeds the device's buffer size limit.
    BufferTooLarge {
        /// Requested buffer size in bytes, `u64::MAX` if it overflows.
        size: u64,
        /// Largest buffer the device allows, in bytes.
        limit: u64,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Shader(msg) => write!(f, "shader error: {msg}"),
            Self::BufferTooLarge { size, limit } => write!(
                f,
                "vertex buffer of {size} bytes exceeds device limit of \
                 {limit} bytes; lower lattice.half_extent"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for LatticeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for LatticeError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for LatticeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_too_large_names_the_knob() {
        let err = LatticeError::BufferTooLarge {
            size: 300,
            limit: 256,
        };
        let msg = err.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("256"));
        assert!(msg.contains("half_extent"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = LatticeError::from(std::io::Error::other("disk"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&LatticeError::Shader(
            "bad".into()
        ))
        .is_none());
    }
}
