use std::io::{self, BufWriter};

use clap::Parser;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

use scrambled_strings::config::DEFAULT_LOG_LEVEL;
use scrambled_strings::{Cli, Config, parse_log_level, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = Config::from(cli);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&config, &mut out) {
        Ok(summary) => {
            info!(
                cases = summary.cases,
                total_matches = summary.total_matches,
                "done"
            );
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "execution terminated with an error");
            Err(err.into())
        }
    }
}

fn init_tracing(log_level: Option<&str>) {
    let mut rejected = None;
    let env_filter = match log_level {
        Some(raw) => {
            let level = parse_log_level(raw).unwrap_or_else(|| {
                rejected = Some(raw);
                DEFAULT_LOG_LEVEL
            });
            EnvFilter::new(level.as_str())
        }
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL.as_str()))
            .unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();

    if let Some(raw) = rejected {
        warn!("invalid log level '{raw}'; defaulting to 'info'");
    }
}
