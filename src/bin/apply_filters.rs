use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mini_photoshop::config::{load_config, PipelineConfig};
use mini_photoshop::run_pipeline;
use std::path::PathBuf;

/// Apply a list of filters to one image without prompting.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pipeline config (JSON)
    config: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let config: PipelineConfig = load_config(&cli.config)?;
    run(&config)
}

fn run(config: &PipelineConfig) -> Result<()> {
    let summary = run_pipeline(config).context("pipeline run failed")?;
    println!(
        "Saved {} ({}x{}) after {} filter(s) in {:.1} ms",
        summary.output.display(),
        summary.output_width,
        summary.output_height,
        summary.filters.len(),
        summary.elapsed_ms
    );
    if let Some(report) = &config.report {
        println!("Saved run summary to {}", report.display());
    }
    Ok(())
}
