//! Dictionary capability for word validation
//!
//! The validator only needs to ask "is this a real word in this locale?".
//! Any [`Dictionary`] can answer that, including plain closures, so tests can
//! plug in a fake. [`WordList`] is the stock implementation: an embedded
//! English list compiled into the binary, or a list loaded from a file.

use super::roots::word_lines;
use crate::error::WordListError;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Locale of the embedded word list
pub const DEFAULT_LOCALE: &str = "en";

/// Embedded English wordlist, lowercase, one word per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Built once on first use
static ENGLISH: Lazy<WordList> = Lazy::new(|| WordList::parse(DEFAULT_LOCALE, WORDS_DATA));

/// Spell-check capability consumed by the validator.
///
/// Implementations must be deterministic for a given word and locale for the
/// lifetime of the process. Lookup failures are reported as `false`.
pub trait Dictionary {
    fn is_recognized_word(&self, word: &str, locale: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_recognized_word(&self, word: &str, locale: &str) -> bool {
        self(word, locale)
    }
}

/// A set of lowercase words for a single locale.
#[derive(Debug, Clone)]
pub struct WordList {
    locale: String,
    words: HashSet<String>,
}

impl WordList {
    /// Parse a word list from text: one word per line, blank lines and
    /// `#` comments ignored.
    pub fn parse(locale: impl Into<String>, text: &str) -> Self {
        Self {
            locale: locale.into(),
            words: word_lines(text).collect(),
        }
    }

    /// Load a word list from a file.
    pub fn from_file(locale: impl Into<String>, path: &Path) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path).map_err(|source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(locale, &text);
        debug!(path = %path.display(), words = list.len(), "loaded dictionary");
        Ok(list)
    }

    /// The embedded English word list.
    pub fn english() -> &'static WordList {
        &ENGLISH
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Case-insensitive membership test, ignoring locale.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_recognized_word(&self, word: &str, locale: &str) -> bool {
        locale.eq_ignore_ascii_case(&self.locale) && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_has_common_words() {
        let english = WordList::english();
        assert!(english.contains("scramble"));
        assert!(english.contains("amble"));
        assert!(english.contains("cab"));
        assert!(english.contains("arm"));
        assert!(english.contains("am"));
    }

    #[test]
    fn test_case_insensitive() {
        let english = WordList::english();
        assert!(english.contains("Amble"));
        assert!(english.contains("AMBLE"));
        assert!(english.contains("aMbLe"));
    }

    #[test]
    fn test_invalid_words() {
        let english = WordList::english();
        assert!(!english.contains("xyzzyplugh"));
        assert!(!english.contains("asdfghjkl"));
        assert!(!english.contains(""));
    }

    #[test]
    fn test_word_count() {
        let count = WordList::english().len();
        assert!(count > 100_000, "Expected 100K+ words, got {}", count);
        assert!(count < 120_000, "Expected <120K words, got {}", count);
        assert_eq!(WordList::english().locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_everyday_words() {
        let english = WordList::english();
        for word in ["stop", "pilot", "spit", "said", "raid", "took", "tone", "unit", "tuna"] {
            assert!(english.contains(word), "{} missing from dictionary", word);
        }
    }

    #[test]
    fn test_english_is_shared() {
        assert!(std::ptr::eq(WordList::english(), WordList::english()));
    }

    #[test]
    fn test_locale_must_match() {
        let english = WordList::english();
        assert!(english.is_recognized_word("cab", "en"));
        assert!(english.is_recognized_word("cab", "EN"));
        assert!(!english.is_recognized_word("cab", "fr"));
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let list = WordList::parse("en", "# header\nCab\n\n  arm  \n#arm2\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("cab"));
        assert!(list.contains("arm"));
        assert!(!list.contains("#arm2"));
    }

    #[test]
    fn test_closure_is_a_dictionary() {
        let only_cab = |word: &str, _locale: &str| word == "cab";
        assert!(only_cab.is_recognized_word("cab", "en"));
        assert!(!only_cab.is_recognized_word("arm", "en"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mot\nchat").unwrap();

        let list = WordList::from_file("fr", file.path()).unwrap();
        assert_eq!(list.locale(), "fr");
        assert!(list.is_recognized_word("chat", "fr"));
        assert!(!list.is_recognized_word("chat", "en"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = WordList::from_file("en", Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(WordListError::Read { .. })));
    }
}
