use clap::Parser;
use eyre::Report;
use std::io;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracker::config::Config;
use tracker::{Shell, Tracker};

const DEFAULT_CONFIG: &str = "tracker.toml";

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Use FILE instead of tracker.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let config = match &args.config {
        Some(file_name) => Config::load(file_name)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG))?,
        None => Config::default(),
    };
    let tracker = Tracker::from_config(&config)?;
    Shell::new(tracker, io::stdin().lock(), io::stdout().lock()).run()
}
