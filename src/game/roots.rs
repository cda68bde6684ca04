//! Root word source: candidate words a round can be played on

use crate::error::WordListError;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::path::Path;
use tracing::debug;

/// Embedded candidate roots, one per line
static ROOTS_DATA: &str = include_str!("../../data/roots.txt");

/// Used when the candidate list is empty
pub const FALLBACK_ROOT: &str = "scramble";

/// Split word-list text into lowercase words, skipping blank lines and
/// `#` comments.
pub(crate) fn word_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}

/// A list of candidate root words.
#[derive(Debug, Clone, Default)]
pub struct RootWords {
    words: Vec<String>,
}

impl RootWords {
    pub fn parse(text: &str) -> Self {
        Self {
            words: word_lines(text).collect(),
        }
    }

    /// The candidate list compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse(ROOTS_DATA)
    }

    pub fn from_file(path: &Path) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path).map_err(|source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let roots = Self::parse(&text);
        debug!(path = %path.display(), roots = roots.len(), "loaded root words");
        Ok(roots)
    }

    /// Pick a root word using a specific RNG (for seeding).
    /// Falls back to [`FALLBACK_ROOT`] when the list is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_ROOT)
    }

    #[cfg(test)]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RootWord;
    use rand::SeedableRng;

    #[test]
    fn test_embedded_roots_are_valid() {
        let roots = RootWords::embedded();
        assert!(!roots.is_empty());
        for word in roots.words() {
            assert!(RootWord::new(word).is_ok(), "bad root in list: {}", word);
        }
    }

    #[test]
    fn test_embedded_roots_have_eight_letters() {
        for word in RootWords::embedded().words() {
            assert_eq!(word.chars().count(), 8, "root {} is not eight letters", word);
        }
    }

    #[test]
    fn test_embedded_roots_are_dictionary_words() {
        let english = crate::game::WordList::english();
        for word in RootWords::embedded().words() {
            assert!(english.contains(word), "root {} missing from dictionary", word);
        }
    }

    #[test]
    fn test_choose_comes_from_list() {
        let roots = RootWords::parse("alpha\nbravo\ncharlie\n");
        let mut rng = rand::rng();
        for _ in 0..50 {
            let picked = roots.choose(&mut rng);
            assert!(roots.words().iter().any(|w| w == picked));
        }
    }

    #[test]
    fn test_empty_list_falls_back() {
        let roots = RootWords::parse("\n# nothing here\n");
        assert!(roots.is_empty());
        assert_eq!(roots.choose(&mut rand::rng()), FALLBACK_ROOT);
    }

    #[test]
    fn test_seeded_choice_is_deterministic() {
        let roots = RootWords::embedded();
        let mut rng1 = rand::rngs::StdRng::seed_from_u64(42);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(42);

        assert_eq!(roots.choose(&mut rng1), roots.choose(&mut rng2));
    }

    #[test]
    fn test_parse_lowercases() {
        let roots = RootWords::parse("  Silkworm \nTREASURE");
        assert_eq!(roots.words(), &["silkworm".to_string(), "treasure".to_string()]);
    }
}
