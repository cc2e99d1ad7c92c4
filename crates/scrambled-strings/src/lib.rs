pub mod config;
pub mod run;
pub mod validate;

pub use config::{Cli, Config, parse_log_level};
pub use run::{RunError, RunSummary, run};
pub use validate::{PathProblem, ValidationError, validate_args};
