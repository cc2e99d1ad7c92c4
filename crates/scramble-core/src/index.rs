use std::collections::{BTreeMap, HashMap};

use tracing::{info, trace};

use crate::canonical::{CanonicalForm, canonical_form};

/// One distinct dictionary word and its precomputed canonical form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexEntry {
    word: String,
    canonical: CanonicalForm,
    char_len: usize,
}

impl IndexEntry {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn canonical(&self) -> &CanonicalForm {
        &self.canonical
    }

    /// Length of the word in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }
}

/// Mapping from each distinct dictionary word to its canonical form.
///
/// Built once per dictionary load and read-only afterwards. Entries keep the
/// order in which words first appeared and are also grouped by length.
#[derive(Clone, Debug, Default)]
pub struct DictionaryIndex {
    entries: Vec<IndexEntry>,
    by_word: HashMap<String, usize>,
    by_len: BTreeMap<usize, Vec<usize>>,
}

impl DictionaryIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index in a single pass over `words`.
    ///
    /// The first occurrence of a word wins; later exact duplicates are skipped
    /// without recomputing their canonical form.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let mut seen = 0usize;
        for word in words {
            let word = word.as_ref();
            seen += 1;
            if index.by_word.contains_key(word) {
                trace!(word, "skipped duplicate word in dictionary");
                continue;
            }

            let canonical = canonical_form(word);
            let char_len = word.chars().count();
            let slot = index.entries.len();
            trace!(word, canonical = %canonical, "added canonical form to dictionary index");
            index.by_word.insert(word.to_string(), slot);
            index.by_len.entry(char_len).or_default().push(slot);
            index.entries.push(IndexEntry {
                word: word.to_string(),
                canonical,
                char_len,
            });
        }

        info!(
            word_count = seen,
            distinct = index.entries.len(),
            "finished precomputing canonical forms"
        );
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&CanonicalForm> {
        self.by_word
            .get(word)
            .map(|&slot| &self.entries[slot].canonical)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> + '_ {
        self.entries.iter()
    }

    /// Distinct entry lengths in ascending order.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_len.keys().copied()
    }

    /// Entries of exactly `char_len` characters, with their positions in
    /// first-occurrence order.
    pub(crate) fn slots_of_len(&self, char_len: usize) -> &[usize] {
        self.by_len.get(&char_len).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn entry(&self, slot: usize) -> &IndexEntry {
        &self.entries[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precomputes_forms_for_sample_dictionary() {
        let index = DictionaryIndex::build(["axpaj", "apxaj", "dnrbt", "pjxdn", "abd"]);
        assert_eq!(index.len(), 5);
        assert_eq!(index.get("axpaj").unwrap(), "aapxj");
        assert_eq!(index.get("apxaj").unwrap(), "aapxj");
        assert_eq!(index.get("dnrbt").unwrap(), "dbnrt");
        assert_eq!(index.get("pjxdn").unwrap(), "pdjxn");
        assert_eq!(index.get("abd").unwrap(), "abd");
        assert!(index.get("missing").is_none());
    }

    #[test]
    fn deduplicates_exact_repeats() {
        let index = DictionaryIndex::build(["word", "word"]);
        assert_eq!(index.len(), 1);
        assert!(index.contains("word"));

        let forward = DictionaryIndex::build(["one", "two"]);
        let backward = DictionaryIndex::build(["two", "one"]);
        assert_eq!(forward.len(), 2);
        assert_eq!(backward.len(), 2);
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let index = DictionaryIndex::build(vec!["b", "a", "b", "c", "a"]);
        let words: Vec<&str> = index.iter().map(IndexEntry::word).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
    }

    #[test]
    fn scrambles_stay_distinct_keys() {
        // same canonical form, different spelling: both kept
        let index = DictionaryIndex::build(["axpaj", "apxaj"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("axpaj"), index.get("apxaj"));
    }

    #[test]
    fn empty_input_gives_empty_index() {
        let index = DictionaryIndex::build(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.lengths().count(), 0);
    }

    #[test]
    fn groups_entries_by_length() {
        let index = DictionaryIndex::build(["abc", "de", "fgh", "", "ijkl"]);
        assert_eq!(index.lengths().collect::<Vec<_>>(), vec![0, 2, 3, 4]);
        let three: Vec<&str> = index
            .slots_of_len(3)
            .iter()
            .map(|&slot| index.entry(slot).word())
            .collect();
        assert_eq!(three, vec!["abc", "fgh"]);
        assert!(index.slots_of_len(7).is_empty());
    }
}
