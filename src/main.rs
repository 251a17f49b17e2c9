//! Desktop entry point for the sliding picture puzzle

use clap::Parser;
use env_logger::Env;
use swaptile::io::cli::{Cli, PuzzleLauncher};
use swaptile::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> swaptile::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let cli = Cli::parse();
    let launcher = PuzzleLauncher::new(cli);
    launcher.launch()
}
