use std::{path::PathBuf, process::ExitCode, time::SystemTime};

use clap::Parser;
use wunder_core::{Cache, Config, WeatherError, WunderClient, cache, config, obtain_report};

use crate::{
    display,
    logger::{Level, Logger},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wunder", version, about = "Single-city weather reporter")]
pub struct Cli {
    /// Path to the config file (default: ~/.weatherrc).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Colorize output for easier reading.
    #[arg(short, long)]
    pub colorize: bool,

    /// Print extra debugging output.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let log = Logger::new(self.colorize, self.quiet, self.debug);

        let config_path = match self.config {
            Some(path) => path,
            None => Config::default_path()?,
        };

        let config = match Config::load(&config_path) {
            Ok(config) => config,
            Err(err @ WeatherError::MissingConfig { .. }) => {
                log.message(Level::Error, &err.to_string());
                log.message(Level::Error, "create one like this and try again:");
                eprintln!("{}", config::EXAMPLE);
                return Ok(ExitCode::FAILURE);
            }
            Err(err) => return Err(err.into()),
        };

        log.message(Level::Debug, &format!("config loaded from {}", config.source.display()));

        let cache = Cache::new(cache::default_path(), cache::DEFAULT_TTL);
        let client = WunderClient::new(&config);

        log.message(Level::Debug, &format!("cache slot at {}", cache.path().display()));

        let report = match obtain_report(&client, &cache, SystemTime::now()).await {
            Ok(report) => report,
            Err(err) => {
                log.message(Level::Error, &err.to_string());
                return Ok(ExitCode::FAILURE);
            }
        };

        if !self.quiet {
            println!("{}", display::summary(&report));
        }
        log.message(Level::Success, "run finished");

        Ok(ExitCode::SUCCESS)
    }
}
