//! Command-line options

use crate::numbers::NumberGenerator;
use crate::session::{parse_count, RegenPolicy, SessionOptions};
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "sortgrid", version, about)]
pub struct Cli {
    /// Number of values to generate, skipping the prompt
    #[arg(short, long, value_parser = parse_count)]
    pub count: Option<NonZeroUsize>,

    /// Seed for reproducible number sets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each swap, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Clicking a small value regenerates a set of the same length instead of
    /// one of the clicked size
    #[arg(long)]
    pub keep_length: bool,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Settings the app runs with
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub initial_count: Option<NonZeroUsize>,
    pub seed: Option<u64>,
    pub session: SessionOptions,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn generator(&self) -> NumberGenerator {
        match self.seed {
            Some(seed) => NumberGenerator::from_seed(seed),
            None => NumberGenerator::from_entropy(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            initial_count: cli.count,
            seed: cli.seed,
            session: SessionOptions {
                step_delay: Duration::from_millis(cli.delay_ms),
                regen_policy: if cli.keep_length {
                    RegenPolicy::KeepLength
                } else {
                    RegenPolicy::ClickedValue
                },
            },
            log_file: cli.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from(Cli::try_parse_from(["sortgrid"]).unwrap());
        assert_eq!(config.initial_count, None);
        assert_eq!(config.session.step_delay, Duration::from_millis(100));
        assert_eq!(config.session.regen_policy, RegenPolicy::ClickedValue);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "sortgrid",
            "--count",
            "25",
            "--seed",
            "9",
            "--delay-ms",
            "5",
            "--keep-length",
            "--log-file",
            "sort.log",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.initial_count.map(NonZeroUsize::get), Some(25));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.session.step_delay, Duration::from_millis(5));
        assert_eq!(config.session.regen_policy, RegenPolicy::KeepLength);
        assert_eq!(config.log_file, Some(PathBuf::from("sort.log")));
    }

    #[test]
    fn test_bad_count_rejected() {
        assert!(Cli::try_parse_from(["sortgrid", "--count", "0"]).is_err());
        assert!(Cli::try_parse_from(["sortgrid", "--count", "many"]).is_err());
    }
}
