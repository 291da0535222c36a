//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, shader composition and the
//! size-dependent render attachments.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Depth and MSAA render attachments.
pub mod texture;
