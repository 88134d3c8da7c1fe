//! Non-interactive runs described by a [`PipelineConfig`].
//!
//! Image paths in the config (`input`, `output` and every merge input)
//! resolve against `image_dir` when they are relative. The `report` path is
//! used as given.
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::filter::Filter;
use crate::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use crate::image::FileStore;
use log::{info, warn};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// What a pipeline run did; also the shape of the JSON report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_width: usize,
    pub input_height: usize,
    pub output_width: usize,
    pub output_height: usize,
    pub filters: Vec<Filter>,
    pub elapsed_ms: f64,
}

/// Load the input, apply the filters in order and save the result. When
/// `config.report` is set the summary is written there as JSON.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineSummary> {
    let started = Instant::now();
    let mut store = FileStore::new(config.image_dir.clone());
    let input = store.resolve(&config.input);
    let output = store.resolve(&config.output);

    let mut image = load_rgb_image(&input)?;
    let (input_width, input_height) = image.dimensions();

    for (step, filter) in config.filters.iter().enumerate() {
        filter
            .apply(&mut image, &mut store)
            .inspect_err(|err| warn!("step {step} ({filter}) failed: {err}"))?;
        info!("step {step}: {filter} -> {}x{}", image.width(), image.height());
    }

    save_rgb_image(&image, &output)?;

    let summary = PipelineSummary {
        input,
        output,
        input_width,
        input_height,
        output_width: image.width(),
        output_height: image.height(),
        filters: config.filters.clone(),
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
    };
    if let Some(report) = &config.report {
        write_json_file(report, &summary)?;
        info!("wrote run summary to {}", report.display());
    }
    Ok(summary)
}
