//! Tokenizer implementations for sentence analysis.

use crate::error::Result;

/// Trait for tokenizers that convert a sentence into word tokens.
///
/// Tokenizers here produce plain strings rather than annotated tokens:
/// presence features only care about the word text, never about offsets
/// or positions.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a sequence of word tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on whitespace.
///
/// Token text is preserved exactly: no lowercasing, no punctuation
/// stripping. Matching against stop words is therefore case-sensitive.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(|word| word.to_string()).collect())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
