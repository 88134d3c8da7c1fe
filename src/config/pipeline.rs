use crate::filter::Filter;
use serde::Deserialize;
use std::path::PathBuf;

/// Non-interactive run: load `input`, apply `filters` in order, save `output`.
#[derive(Clone, Debug, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    /// Relative merge inputs resolve against this directory.
    #[serde(default)]
    pub image_dir: Option<PathBuf>,
    pub filters: Vec<Filter>,
    pub output: PathBuf,
    /// Optional JSON summary of the run.
    #[serde(default)]
    pub report: Option<PathBuf>,
}
