use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;
use tracing::{debug, debug_span};

use crate::canonical::{CanonicalForm, canonical_form_chars};
use crate::index::{DictionaryIndex, IndexEntry};

type MatchSet = BitVec<usize, Lsb0>;

/// Algorithm used to count a line's matches. Both give identical counts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum MatchStrategy {
    /// Per entry, canonicalize every window of the entry's length until one
    /// matches.
    #[default]
    Scan,
    /// Per distinct entry length, canonicalize every window once and look the
    /// entries up in the resulting set.
    Bucketed,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchStrategy::Scan => "scan",
            MatchStrategy::Bucketed => "bucketed",
        })
    }
}

impl FromStr for MatchStrategy {
    type Err = UnknownStrategy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "scan" => Ok(MatchStrategy::Scan),
            "bucketed" => Ok(MatchStrategy::Bucketed),
            _ => Err(UnknownStrategy(raw.to_string())),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown match strategy: {}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

/// Count the dictionary entries that occur in `line`, as spelled or scrambled.
///
/// Each entry contributes at most 1 no matter how many windows match it, so
/// the result never exceeds `index.len()`.
///
/// ```rust
/// use scramble_core::{DictionaryIndex, count_matches};
///
/// let index = DictionaryIndex::build(["axpaj", "apxaj", "dnrbt", "pjxdn", "abd"]);
/// let line = "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt";
/// assert_eq!(count_matches(&index, line), 4);
/// ```
pub fn count_matches(index: &DictionaryIndex, line: &str) -> usize {
    count_matches_with(index, line, MatchStrategy::Scan)
}

pub fn count_matches_with(index: &DictionaryIndex, line: &str, strategy: MatchStrategy) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let _span = debug_span!("count_matches", line_len = chars.len(), %strategy).entered();
    let count = match_set(index, &chars, strategy).count_ones();
    debug!(total_matches = count, "finished counting matches");
    count
}

/// Reusable matcher bound to one index and strategy.
#[derive(Clone, Copy, Debug)]
pub struct LineMatcher<'a> {
    index: &'a DictionaryIndex,
    strategy: MatchStrategy,
}

impl<'a> LineMatcher<'a> {
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self::with_strategy(index, MatchStrategy::default())
    }

    pub fn with_strategy(index: &'a DictionaryIndex, strategy: MatchStrategy) -> Self {
        Self { index, strategy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn count(&self, line: &str) -> usize {
        count_matches_with(self.index, line, self.strategy)
    }

    /// Counts for every line, in input order.
    pub fn count_all<I, S>(&self, lines: I) -> Vec<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.count(line.as_ref()))
            .collect()
    }

    /// The entries matched by `line`, in first-occurrence order.
    pub fn matched_entries(&self, line: &str) -> Vec<&'a IndexEntry> {
        let chars: Vec<char> = line.chars().collect();
        let index = self.index;
        match_set(index, &chars, self.strategy)
            .iter_ones()
            .map(|slot| index.entry(slot))
            .collect()
    }
}

fn match_set(index: &DictionaryIndex, line: &[char], strategy: MatchStrategy) -> MatchSet {
    let mut matched = bitvec![usize, Lsb0; 0; index.len()];
    match strategy {
        MatchStrategy::Scan => scan(index, line, &mut matched),
        MatchStrategy::Bucketed => bucketed(index, line, &mut matched),
    }
    matched
}

fn scan(index: &DictionaryIndex, line: &[char], matched: &mut MatchSet) {
    for (slot, entry) in index.iter().enumerate() {
        let len = entry.char_len();
        if len > line.len() {
            continue;
        }
        let hit = (0..=line.len() - len)
            .find(|&offset| canonical_form_chars(&line[offset..offset + len]) == *entry.canonical());
        if let Some(offset) = hit {
            debug!(word = entry.word(), offset, "match found");
            matched.set(slot, true);
        }
    }
}

fn bucketed(index: &DictionaryIndex, line: &[char], matched: &mut MatchSet) {
    for len in index.lengths() {
        // lengths ascend, so nothing after this fits either
        if len > line.len() {
            break;
        }
        let windows: HashSet<CanonicalForm> = (0..=line.len() - len)
            .map(|offset| canonical_form_chars(&line[offset..offset + len]))
            .collect();
        for &slot in index.slots_of_len(len) {
            let entry = index.entry(slot);
            if windows.contains(entry.canonical()) {
                debug!(word = entry.word(), "match found");
                matched.set(slot, true);
            }
        }
    }
}
