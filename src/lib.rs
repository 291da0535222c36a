// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Real-time fly-through of a lattice of colored cubes, built on wgpu.
//!
//! Every integer point in `[-N, N]^3` holds a unit cube colored by its
//! grid position. A free-fly camera moves through the lattice with keyboard
//! velocity and mouse look, and a periodic shift pulls every cube's
//! corners toward its center so the lattice appears to breathe.
//!
//! # Key entry points
//!
//! - [`LatticeEngine`] - owns the GPU context, the lattice pass and the
//!   camera
//! - [`camera::FlyCamera`] - the camera state machine, usable without a GPU
//! - [`geometry::generate_lattice`] - the vertex generator
//! - [`options::Options`] - runtime configuration (camera, lattice size,
//!   display, diagnostics, keybindings)
//! - [`Viewer`] - a ready-made winit window (`viewer` feature)
//!
//! # Architecture
//!
//! The main thread runs the event loop: input events become
//! [`LatticeCommand`]s, `update` integrates the camera, `render` draws the
//! static vertex buffer with one uniform upload. A background
//! [`diagnostics::DiagnosticsReporter`] thread reads camera snapshots from a
//! lock-free triple buffer and logs them once per period.

pub mod camera;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::command::LatticeCommand;
pub use engine::LatticeEngine;
pub use error::LatticeError;
pub use input::{InputEvent, InputProcessor, KeyAction, KeyState};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
