use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window and presentation settings.
pub struct DisplayOptions {
    /// Open borderless fullscreen on the primary monitor.
    pub fullscreen: bool,
    /// MSAA sample count. Anything above 1 is treated as 4, the count wgpu
    /// guarantees for color and depth targets.
    pub sample_count: u32,
    /// Background clear color (linear RGB).
    pub clear_color: [f64; 3],
    /// Drive mouse look from raw device motion while the cursor is grabbed,
    /// instead of absolute cursor positions.
    pub raw_mouse_motion: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            fullscreen: true,
            sample_count: 4,
            clear_color: [0.0, 0.0, 0.0],
            raw_mouse_motion: true,
        }
    }
}

impl DisplayOptions {
    /// Sample count actually requested from wgpu (1 or 4).
    #[must_use]
    pub fn effective_sample_count(&self) -> u32 {
        if self.sample_count > 1 {
            4
        } else {
            1
        }
    }
}
