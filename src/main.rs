use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mini_photoshop::config::{load_config, ShellConfig};
use mini_photoshop::image::FileStore;
use mini_photoshop::shell::Shell;
use std::io;
use std::path::PathBuf;

/// Interactive image filters: grayscale, brightness, edges, merge, purple.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with shell settings (image directory, error pause)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory that image names are resolved against; overrides the config
    #[arg(long, value_name = "DIR")]
    image_dir: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config::<ShellConfig>(path)?,
        None => ShellConfig::default(),
    };
    if cli.image_dir.is_some() {
        config.image_dir = cli.image_dir;
    }

    let store = FileStore::new(config.image_dir.clone());
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), store, config);
    shell.run().context("interactive session failed")
}
