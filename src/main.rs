use clap::Parser;
use std::path::Path;

mod charset;
mod cli;
mod config;
mod generators;
mod models;
mod strength;

use crate::cli::Args;
use crate::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::debug!("command line args: {:?}", args);
    log::debug!("loaded config: {:?}", config);

    cli::handlers::run(args, config)
}
