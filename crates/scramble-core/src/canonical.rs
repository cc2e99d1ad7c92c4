use std::fmt;

use tracing::trace;

/// Scramble-invariant normal form of a word.
///
/// The first and last characters stay in place and the characters between
/// them are sorted by code point. Two words share a canonical form exactly when
/// they have the same length, the same first and last character, and the same
/// multiset of middle characters.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct CanonicalForm(String);

impl CanonicalForm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, which always equals the source word's length.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalForm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CanonicalForm {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalForm {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Compute the canonical form of `word`.
///
/// Words of two characters or fewer are returned unchanged.
///
/// ```rust
/// use scramble_core::canonical_form;
///
/// assert_eq!(canonical_form("axpaj"), "aapxj");
/// assert_eq!(canonical_form("ab"), "ab");
/// ```
pub fn canonical_form(word: &str) -> CanonicalForm {
    if word.chars().nth(2).is_none() {
        trace!(word, "word has 2 or fewer characters; canonical form is the word");
        return CanonicalForm(word.to_string());
    }
    let chars: Vec<char> = word.chars().collect();
    canonical_form_chars(&chars)
}

/// Same as [`canonical_form`] over a slice of characters, used for line windows.
pub fn canonical_form_chars(chars: &[char]) -> CanonicalForm {
    let len = chars.len();
    if len <= 2 {
        return CanonicalForm(chars.iter().collect());
    }

    let mut middle = chars[1..len - 1].to_vec();
    middle.sort_unstable();

    let mut canonical = String::with_capacity(len * 4);
    canonical.push(chars[0]);
    canonical.extend(middle);
    canonical.push(chars[len - 1]);
    trace!(canonical = %canonical, "computed canonical form");
    CanonicalForm(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_middle_and_keeps_ends() {
        assert_eq!(canonical_form("axpaj"), "aapxj");
        assert_eq!(canonical_form("apxaj"), "aapxj");
        assert_eq!(canonical_form("dnrbt"), "dbnrt");
        assert_eq!(canonical_form("pjxdn"), "pdjxn");
        assert_eq!(canonical_form("abd"), "abd");
    }

    #[test]
    fn short_words_are_their_own_form() {
        assert_eq!(canonical_form(""), "");
        assert_eq!(canonical_form("a"), "a");
        assert_eq!(canonical_form("ab"), "ab");
        assert_eq!(canonical_form("ba"), "ba");
    }

    #[test]
    fn last_character_is_not_sorted_into_middle() {
        // sorting the whole word would give "aajpx"
        assert_ne!(canonical_form("axpaj"), "aajpx");
        assert_eq!(canonical_form("zyxa"), "zxya");
    }

    #[test]
    fn handles_multibyte_characters() {
        let form = canonical_form("héllo");
        assert_eq!(form, "hlléo");
        assert_eq!(form.char_len(), 5);
        assert_eq!(canonical_form("ñzaé"), "ñazé");
    }

    #[test]
    fn slice_and_str_forms_agree() {
        let chars: Vec<char> = "scrambled".chars().collect();
        assert_eq!(canonical_form_chars(&chars), canonical_form("scrambled"));
        assert_eq!(canonical_form_chars(&[]), canonical_form(""));
    }
}
