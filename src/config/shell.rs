use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Directory that relative image names are resolved against.
    pub image_dir: Option<PathBuf>,
    /// Pause after printing a load/save error before prompting again.
    pub error_pause_ms: u64,
}

impl ShellConfig {
    pub fn error_pause(&self) -> Duration {
        Duration::from_millis(self.error_pause_ms)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            image_dir: None,
            error_pause_ms: 100,
        }
    }
}
