//! JSON configuration for the interactive shell and the batch pipeline.
pub mod pipeline;
pub mod shell;

pub use pipeline::PipelineConfig;
pub use shell::ShellConfig;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON config file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let config_error = |message: String| Error::Config {
        path: path.to_path_buf(),
        message,
    };
    let contents = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| config_error(e.to_string()))
}
