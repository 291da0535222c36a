use serde::{Deserialize, Serialize};

/// Lattice geometry parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LatticeOptions {
    /// Cubes span `-half_extent..=half_extent` on every axis.
    pub half_extent: u32,
}

impl Default for LatticeOptions {
    fn default() -> Self {
        Self { half_extent: 30 }
    }
}
