//! Line-oriented corpus loading.
//!
//! A corpus file holds one sentence per line; all sentences in a file share
//! one class label (the subjectivity corpus ships as one file of subjective
//! and one file of objective sentences). Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::classifier::extractor::FeatureExtractor;
use crate::classifier::feature::{FeatureSet, Label};
use crate::error::Result;

/// Load a corpus file as tokenized sentences.
///
/// Each non-blank line becomes one whitespace-tokenized sentence.
pub fn load_sentences<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let tokenizer = WhitespaceTokenizer::new();
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut sentences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        sentences.push(tokenizer.tokenize(&line)?);
    }

    debug!(
        "loaded {} sentences from {}",
        sentences.len(),
        path.as_ref().display()
    );

    Ok(sentences)
}

/// Load a corpus file and extract one labeled feature set per sentence.
pub fn load_labeled<P: AsRef<Path>>(
    path: P,
    label: Label,
    extractor: &FeatureExtractor,
) -> Result<Vec<FeatureSet>> {
    let sentences = load_sentences(path)?;
    Ok(sentences
        .iter()
        .map(|tokens| extractor.build(tokens, Some(label)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::TempDir;

    use crate::analysis::stop_words::StopWordSet;
    use crate::classifier::extractor::ExtractorConfig;
    use crate::classifier::feature::Feature;

    fn write_corpus(dir: &TempDir, name: &str, lines: &[&str]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        path
    }

    #[test]
    fn test_load_sentences_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_corpus(&dir, "subj.txt", &["a fine film", "", "  ", "dull plot"]);

        let sentences = load_sentences(&path).unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], vec!["a", "fine", "film"]);
        assert_eq!(sentences[1], vec!["dull", "plot"]);
    }

    #[test]
    fn test_load_labeled_applies_extractor() {
        let dir = TempDir::new().unwrap();
        let path = write_corpus(&dir, "obj.txt", &["the plot thickens"]);

        let extractor = FeatureExtractor::new(
            ExtractorConfig::new().with_stop_words(StopWordSet::from_words(vec!["the"])),
        );
        let sets = load_labeled(&path, Label::Obj, &extractor).unwrap();

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].known_class, Some(Label::Obj));
        assert_eq!(sets[0].len(), 2);
        assert!(sets[0].features.contains(&Feature::present("plot")));
    }

    #[test]
    fn test_load_sentences_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_sentences(&missing).unwrap_err();
        assert!(matches!(err, crate::error::OpineError::Io(_)));
    }
}
