//! Stop-word set implementation.
//!
//! This module provides the set of words excluded from feature extraction.
//! Includes a default English stop word list, with support for custom word
//! lists.
//!
//! # Examples
//!
//! ```
//! use opine::analysis::stop_words::StopWordSet;
//!
//! let stop_words = StopWordSet::new(); // Uses default English stop words
//! assert!(stop_words.contains("the"));
//! assert!(!stop_words.contains("excellent"));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default English stop words list.
///
/// Common English words that typically carry no subjectivity signal.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with", "--", "i", "'",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A set of words excluded from feature extraction.
///
/// Membership is exact and case-sensitive, matching the tokenizer's
/// behavior of preserving token text as-is.
///
/// # Examples
///
/// ```
/// use opine::analysis::stop_words::StopWordSet;
///
/// let stop_words = StopWordSet::from_words(vec!["--", "i", "'"]);
/// assert!(stop_words.contains("--"));
/// assert_eq!(stop_words.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Create a new stop word set with the default English stop words.
    pub fn new() -> Self {
        Self::with_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create an empty stop word set.
    pub fn empty() -> Self {
        StopWordSet {
            words: HashSet::new(),
        }
    }

    /// Create a new stop word set from an existing set of words.
    pub fn with_words(words: HashSet<String>) -> Self {
        StopWordSet { words }
    }

    /// Create a new stop word set from a list of words.
    ///
    /// # Examples
    ///
    /// ```
    /// use opine::analysis::stop_words::StopWordSet;
    ///
    /// let stop_words = StopWordSet::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(stop_words.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(|s| s.into()).collect();
        Self::with_words(words)
    }

    /// Add a word to the set, builder-style.
    pub fn with_word<S: Into<String>>(mut self, word: S) -> Self {
        self.words.insert(word.into());
        self
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stop_words() {
        let stop_words = StopWordSet::new();

        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("--"));
        assert!(!stop_words.contains("movie"));
    }

    #[test]
    fn test_empty_stop_words() {
        let stop_words = StopWordSet::empty();

        assert!(stop_words.is_empty());
        assert!(!stop_words.contains("the"));
    }

    #[test]
    fn test_from_words() {
        let stop_words = StopWordSet::from_words(vec!["--", "i", "'"]);

        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("i"));
        assert!(!stop_words.contains("I"));
    }

    #[test]
    fn test_with_word_builder() {
        let stop_words = StopWordSet::empty().with_word("uh").with_word("um");

        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("um"));
    }
}
