//! Scramble-invariant dictionary matching.
//!
//! A word "appears" in a line when some substring of the line of the same
//! length is either the word itself or a scramble of it that keeps the first
//! and last character in place. This crate provides the three pieces needed
//! to count such appearances:
//!
//! - [`canonical_form`] maps a word to a normal form shared by all of its
//!   scrambles (ends fixed, middle sorted).
//! - [`DictionaryIndex`] deduplicates dictionary words and precomputes their
//!   canonical forms once per run.
//! - [`count_matches`] / [`LineMatcher`] count, per line, how many distinct
//!   index entries have at least one matching window.
//!
//! All operations are total. Diagnostics go through `tracing` and cost nothing
//! unless the caller installs a subscriber.
//!
//! ```rust
//! use scramble_core::{DictionaryIndex, LineMatcher, MatchStrategy};
//!
//! let index = DictionaryIndex::build(["axpaj", "apxaj", "dnrbt", "pjxdn", "abd"]);
//! let matcher = LineMatcher::with_strategy(&index, MatchStrategy::Bucketed);
//! let counts = matcher.count_all([
//!     "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt",
//!     "nothingmatcheshere",
//! ]);
//! assert_eq!(counts, vec![4, 0]);
//! ```

pub mod canonical;
pub mod index;
pub mod matcher;

pub use canonical::{CanonicalForm, canonical_form, canonical_form_chars};
pub use index::{DictionaryIndex, IndexEntry};
pub use matcher::{
    LineMatcher, MatchStrategy, UnknownStrategy, count_matches, count_matches_with,
};
