use proptest::prelude::*;

use scramble_core::{
    DictionaryIndex, LineMatcher, MatchStrategy, canonical_form, count_matches_with,
};

fn word() -> impl Strategy<Value = String> {
    "[a-e]{0,8}"
}

fn line() -> impl Strategy<Value = String> {
    "[a-e]{0,24}"
}

/// A word of at least three characters plus a scramble of it with the ends fixed.
fn word_and_scramble() -> impl Strategy<Value = (String, String)> {
    "[a-z]{3,12}".prop_flat_map(|word| {
        let chars: Vec<char> = word.chars().collect();
        let first = chars[0];
        let last = chars[chars.len() - 1];
        let middle = chars[1..chars.len() - 1].to_vec();
        (Just(word), Just(middle).prop_shuffle()).prop_map(move |(word, middle)| {
            let mut scrambled = String::new();
            scrambled.push(first);
            scrambled.extend(middle);
            scrambled.push(last);
            (word, scrambled)
        })
    })
}

proptest! {
    #[test]
    fn canonical_form_keeps_length(w in "\\PC{0,16}") {
        prop_assert_eq!(canonical_form(&w).char_len(), w.chars().count());
    }

    #[test]
    fn short_words_are_unchanged(w in "\\PC{0,2}") {
        let form = canonical_form(&w);
        prop_assert_eq!(form.as_str(), w.as_str());
    }

    #[test]
    fn canonical_form_is_idempotent(w in "\\PC{0,16}") {
        let once = canonical_form(&w);
        prop_assert_eq!(canonical_form(once.as_str()), once);
    }

    #[test]
    fn scrambles_share_a_canonical_form((w, s) in word_and_scramble()) {
        prop_assert_eq!(canonical_form(&w), canonical_form(&s));
    }

    #[test]
    fn index_size_matches_distinct_words(words in prop::collection::vec(word(), 0..20)) {
        let index = DictionaryIndex::build(&words);
        let mut distinct = words.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(index.len(), distinct.len());
        for w in &words {
            let expected = canonical_form(w);
            prop_assert_eq!(index.get(w), Some(&expected));
        }
    }

    #[test]
    fn count_never_exceeds_index_size(
        words in prop::collection::vec(word(), 0..20),
        l in line(),
    ) {
        let index = DictionaryIndex::build(&words);
        prop_assert!(count_matches_with(&index, &l, MatchStrategy::Scan) <= index.len());
    }

    #[test]
    fn strategies_agree(
        words in prop::collection::vec(word(), 0..20),
        lines in prop::collection::vec(line(), 0..8),
    ) {
        let index = DictionaryIndex::build(&words);
        let scan = LineMatcher::with_strategy(&index, MatchStrategy::Scan).count_all(&lines);
        let bucketed = LineMatcher::with_strategy(&index, MatchStrategy::Bucketed).count_all(&lines);
        prop_assert_eq!(scan, bucketed);
    }

    #[test]
    fn a_line_containing_a_scramble_matches((w, s) in word_and_scramble(), prefix in line(), suffix in line()) {
        let index = DictionaryIndex::build([w]);
        let l = format!("{prefix}{s}{suffix}");
        prop_assert_eq!(count_matches_with(&index, &l, MatchStrategy::Scan), 1);
    }
}

#[test]
fn sample_dictionary_end_to_end() {
    let index = DictionaryIndex::build(["axpaj", "apxaj", "dnrbt", "pjxdn", "abd"]);
    let matcher = LineMatcher::new(&index);
    assert_eq!(
        matcher.count("aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt"),
        4
    );
    assert_eq!(matcher.count("nothingmatcheshere"), 0);
    assert_eq!(canonical_form("axpaj"), "aapxj");
}
