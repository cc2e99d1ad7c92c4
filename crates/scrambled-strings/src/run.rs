use std::io::{self, Write};
use std::time::Instant;

use scramble_core::{DictionaryIndex, LineMatcher};
use thiserror::Error;
use tracing::info;
use wordlist_source::LineSource;

use crate::config::Config;
use crate::validate::{ValidationError, validate_args};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to read dictionary file: {0:#}")]
    Dictionary(anyhow::Error),
    #[error("failed to read input file: {0:#}")]
    Input(anyhow::Error),
    #[error("failed to write results: {0}")]
    Output(io::Error),
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RunSummary {
    pub dictionary_words: usize,
    pub distinct_words: usize,
    pub cases: usize,
    pub total_matches: usize,
}

/// Validate paths, load both files, and write one `Case #n: count` line per
/// input line to `out`.
///
/// Nothing is written unless both files validated and loaded.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, RunError> {
    info!(
        dictionary = %config.dictionary_path.display(),
        input = %config.input_path.display(),
        load_mode = %config.load_mode,
        strategy = %config.strategy,
        "starting run"
    );
    validate_args(&config.dictionary_path, &config.input_path)?;

    let dictionary = LineSource::load_with_mode(&config.dictionary_path, config.load_mode)
        .map_err(RunError::Dictionary)?;
    let dictionary_words = dictionary.line_count();
    info!(word_count = dictionary_words, "loaded dictionary words");

    let start = Instant::now();
    let index = DictionaryIndex::build(dictionary.lines());
    info!(
        distinct = index.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dictionary index built"
    );

    let input = LineSource::load_with_mode(&config.input_path, config.load_mode)
        .map_err(RunError::Input)?;
    info!(input_line_count = input.line_count(), "loaded input strings");

    let matcher = LineMatcher::with_strategy(&index, config.strategy);
    let mut summary = RunSummary {
        dictionary_words,
        distinct_words: index.len(),
        ..RunSummary::default()
    };
    for (i, line) in input.lines().enumerate() {
        let case = i + 1;
        let match_count = matcher.count(line);
        info!(case, match_count, "processed input string");
        writeln!(out, "Case #{case}: {match_count}").map_err(RunError::Output)?;
        summary.cases += 1;
        summary.total_matches += match_count;
    }
    out.flush().map_err(RunError::Output)?;

    info!(cases = summary.cases, "run completed successfully");
    Ok(summary)
}
