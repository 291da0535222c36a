//! Procedural geometry for the lattice scene.
//!
//! The lattice is generated once on the CPU and uploaded as a static,
//! unindexed vertex buffer. Animation happens in the vertex shader, which
//! offsets each vertex along its shift direction by the per-frame shift
//! scalar.

/// Cube-grid vertex generation and the GPU vertex layout.
pub mod lattice;

pub use lattice::{generate_lattice, lattice_vertex_count, LatticeVertex};
