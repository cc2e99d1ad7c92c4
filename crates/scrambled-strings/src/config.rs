use std::path::PathBuf;

use clap::Parser;
use scramble_core::MatchStrategy;
use tracing::Level;
use wordlist_source::LoadMode;

pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

// Every option can also come from the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "scrambled-strings", version, long_about = None)]
#[command(about = "Counts dictionary words (original or scrambled) appearing as substrings in input strings.")]
#[command(after_help = "Examples:\n  \
    scrambled-strings --dictionary /path/to/dictionary.txt --input /path/to/input.txt\n  \
    scrambled-strings --dictionary /path/to/dictionary.txt --input /path/to/input.txt --log-level debug")]
pub struct Cli {
    /// Path to the dictionary file, one word per line.
    #[arg(long, env = "DICTIONARY_PATH")]
    pub dictionary: PathBuf,

    /// Path to the input file, one case per line.
    #[arg(long, env = "INPUT_PATH")]
    pub input: PathBuf,

    /// Log verbosity: trace, debug, info, warn, error (fatal and panic map to error).
    /// Falls back to RUST_LOG, then info.
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// How files are loaded: mmap or owned.
    #[arg(long, env = "LOAD_MODE", default_value_t = LoadMode::Mmap)]
    pub load_mode: LoadMode,

    /// Matching algorithm: scan or bucketed.
    #[arg(long, env = "MATCH_STRATEGY", default_value_t = MatchStrategy::Scan)]
    pub strategy: MatchStrategy,
}

/// Settings consumed by [`crate::run::run`].
#[derive(Debug, Clone)]
pub struct Config {
    pub dictionary_path: PathBuf,
    pub input_path: PathBuf,
    pub load_mode: LoadMode,
    pub strategy: MatchStrategy,
}

impl Config {
    pub fn new(dictionary_path: impl Into<PathBuf>, input_path: impl Into<PathBuf>) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
            input_path: input_path.into(),
            load_mode: LoadMode::default(),
            strategy: MatchStrategy::default(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            dictionary_path: cli.dictionary,
            input_path: cli.input,
            load_mode: cli.load_mode,
            strategy: cli.strategy,
        }
    }
}

/// Parse a user-facing log level name.
///
/// `fatal` and `panic` have no tracing equivalent and map to `error`.
pub fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" | "fatal" | "panic" => Some(Level::ERROR),
        _ => None,
    }
}
