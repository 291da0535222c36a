//! Render passes.
//!
//! The lattice is drawn by a single depth-tested pass over a static vertex
//! buffer generated once at startup.

pub mod lattice_pass;
pub(crate) mod pipeline_util;

pub use lattice_pass::LatticePass;
