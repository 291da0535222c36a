use serde::{Deserialize, Serialize};

/// Console diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiagnosticsOptions {
    /// Run the background diagnostics reporter.
    pub enabled: bool,
    /// Seconds between diagnostic reports.
    pub period_secs: f64,
}

impl Default for DiagnosticsOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            period_secs: 1.0,
        }
    }
}
