//! Centralized runtime options with TOML file support.
//!
//! All tweakable settings (camera, lattice size, display, diagnostics,
//! keybindings) are consolidated here. Every section uses
//! `#[serde(default)]`, so a TOML file only needs the values it overrides.

mod camera;
mod diagnostics;
mod display;
mod keybindings;
mod lattice;

use std::path::Path;

pub use camera::CameraOptions;
pub use diagnostics::DiagnosticsOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use lattice::LatticeOptions;
use serde::{Deserialize, Serialize};

use crate::error::LatticeError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Lattice geometry parameters.
    pub lattice: LatticeOptions,
    /// Window and presentation settings.
    pub display: DisplayOptions,
    /// Console diagnostics settings.
    pub diagnostics: DiagnosticsOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::OptionsParse`] if the TOML is malformed.
    pub fn from_toml(content: &str) -> Result<Self, LatticeError> {
        toml::from_str(content)
            .map_err(|e| LatticeError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Io`] if the file cannot be read and
    /// [`LatticeError::OptionsParse`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, LatticeError> {
        let content = std::fs::read_to_string(path).map_err(LatticeError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::OptionsParse`] if serialization fails and
    /// [`LatticeError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LatticeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LatticeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LatticeError::Io)?;
        }
        std::fs::write(path, content).map_err(LatticeError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[lattice]
half_extent = 4

[camera]
fast_speed = 40.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.lattice.half_extent, 4);
        assert_eq!(opts.camera.fast_speed, 40.0);
        // Everything else should be default
        assert_eq!(opts.camera.normal_speed, 5.0);
        assert_eq!(opts.camera.fovy, 45.0);
        assert!(opts.display.fullscreen);
        assert_eq!(opts.diagnostics.period_secs, 1.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyC"), Some(KeyAction::ResetView));
        assert_eq!(opts.keybindings.lookup("KeyQ"), None);
    }

    #[test]
    fn partial_keybindings_keep_other_defaults() {
        let toml_str = r#"
[keybindings.bindings]
quit = "KeyQ"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("Escape"), None);
        assert_eq!(opts.keybindings.lookup("KeyA"), Some(KeyAction::MoveLeft));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = Options::from_toml("[lattice]\nhalf_extent = \"big\"");
        assert!(matches!(err, Err(LatticeError::OptionsParse(_))));
    }

    #[test]
    fn sample_count_is_one_or_four() {
        let mut display = DisplayOptions::default();
        assert_eq!(display.effective_sample_count(), 4);
        display.sample_count = 8;
        assert_eq!(display.effective_sample_count(), 4);
        display.sample_count = 0;
        assert_eq!(display.effective_sample_count(), 1);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("lattice-options-{}", std::process::id()));
        let path = dir.join("options.toml");
        let mut opts = Options::default();
        opts.lattice.half_extent = 7;
        opts.keybindings.bind(KeyAction::ResetView, "KeyR");
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            loaded.keybindings.lookup("KeyR"),
            Some(KeyAction::ResetView)
        );
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/lattice.toml"));
        assert!(matches!(err, Err(LatticeError::Io(_))));
    }
}
