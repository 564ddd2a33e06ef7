//! Feature extraction from token sequences.
//!
//! The extractor turns a tokenized sentence into a [`FeatureSet`] of
//! word-presence features, filtering stop words along the way. Extraction
//! is a pure function of its inputs: duplicate tokens collapse to a single
//! feature, because presence is modeled, not frequency.

use std::collections::HashSet;

use crate::analysis::stop_words::StopWordSet;
use crate::classifier::feature::{Feature, FeatureSet, Label};

/// Configuration for feature extraction.
#[derive(Clone, Debug, Default)]
pub struct ExtractorConfig {
    /// Words to exclude from extraction.
    pub stop_words: StopWordSet,
}

impl ExtractorConfig {
    /// Create a configuration with an empty stop word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stop word set, builder-style.
    pub fn with_stop_words(mut self, stop_words: StopWordSet) -> Self {
        self.stop_words = stop_words;
        self
    }
}

/// Extractor that builds word-presence feature sets from token sequences.
///
/// # Examples
///
/// ```
/// use opine::analysis::stop_words::StopWordSet;
/// use opine::classifier::extractor::{ExtractorConfig, FeatureExtractor};
/// use opine::classifier::feature::Label;
///
/// let config = ExtractorConfig::new().with_stop_words(StopWordSet::from_words(vec!["the"]));
/// let extractor = FeatureExtractor::new(config);
///
/// let tokens = vec!["the".to_string(), "movie".to_string(), "movie".to_string()];
/// let set = extractor.build(&tokens, Some(Label::Subj));
///
/// // "the" is filtered, the duplicate "movie" collapses
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FeatureExtractor {
    config: ExtractorConfig,
}

impl FeatureExtractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        FeatureExtractor { config }
    }

    /// Get the extractor configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build a feature set from a token sequence.
    ///
    /// Every token that is not a stop word (exact, case-sensitive match)
    /// becomes a presence feature. An all-stop-word or empty input yields
    /// an empty feature set, which is valid and classifies with zero
    /// accumulated evidence.
    pub fn build<S: AsRef<str>>(&self, tokens: &[S], known_class: Option<Label>) -> FeatureSet {
        let mut features = HashSet::new();

        for token in tokens {
            let word = token.as_ref();
            if !self.config.stop_words.contains(word) {
                features.insert(Feature::present(word));
            }
        }

        FeatureSet::new(features, known_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor_with(words: Vec<&str>) -> FeatureExtractor {
        FeatureExtractor::new(
            ExtractorConfig::new().with_stop_words(StopWordSet::from_words(words)),
        )
    }

    #[test]
    fn test_build_filters_stop_words() {
        let extractor = extractor_with(vec!["--", "i", "'"]);
        let tokens = vec!["i", "loved", "--", "this", "film"];

        let set = extractor.build(&tokens, Some(Label::Subj));

        assert_eq!(set.len(), 3);
        assert!(set.features.contains(&Feature::present("loved")));
        assert!(!set.features.contains(&Feature::present("i")));
        assert_eq!(set.known_class, Some(Label::Subj));
    }

    #[test]
    fn test_build_collapses_duplicates() {
        let extractor = FeatureExtractor::default();
        let tokens = vec!["good", "good", "good"];

        let set = extractor.build(&tokens, None);

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_build_is_case_sensitive() {
        let extractor = extractor_with(vec!["the"]);
        let tokens = vec!["The", "the"];

        let set = extractor.build(&tokens, None);

        assert_eq!(set.len(), 1);
        assert!(set.features.contains(&Feature::present("The")));
    }

    #[test]
    fn test_build_all_stop_words_yields_empty_set() {
        let extractor = extractor_with(vec!["a", "b"]);
        let tokens = vec!["a", "b", "a"];

        let set = extractor.build(&tokens, None);

        assert!(set.is_empty());
    }

    #[test]
    fn test_build_empty_input() {
        let extractor = FeatureExtractor::default();
        let tokens: Vec<String> = Vec::new();

        let set = extractor.build(&tokens, None);

        assert!(set.is_empty());
        assert_eq!(set.known_class, None);
    }
}
