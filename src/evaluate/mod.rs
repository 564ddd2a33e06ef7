//! Train/test splitting and accuracy evaluation.
//!
//! The split shuffles with a seeded [`StdRng`] so runs are reproducible;
//! evaluation compares classifier predictions against the known class of
//! each held-out example.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::classifier::feature::FeatureSet;
use crate::classifier::model::SubjectivityClassifier;
use crate::error::{OpineError, Result};

/// Shuffle labeled examples and split off a test partition.
///
/// The first `test_size` shuffled examples become the test set, the rest
/// the training set. A `test_size` larger than the input is clamped, which
/// leaves the training set empty.
pub fn shuffle_split(
    mut sets: Vec<FeatureSet>,
    test_size: usize,
    seed: u64,
) -> (Vec<FeatureSet>, Vec<FeatureSet>) {
    let mut rng = StdRng::seed_from_u64(seed);
    sets.shuffle(&mut rng);

    let test_size = test_size.min(sets.len());
    let train = sets.split_off(test_size);
    (train, sets)
}

/// Outcome of evaluating a classifier over a held-out set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Number of correctly classified examples.
    pub correct: usize,
    /// Total number of evaluated examples.
    pub total: usize,
}

impl Evaluation {
    /// Accuracy as a fraction in `[0, 1]`; 0 for an empty test set.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Evaluate a trained classifier against labeled examples.
///
/// Every test example must carry a known class to compare against.
pub fn evaluate(
    classifier: &SubjectivityClassifier,
    testing_set: &[FeatureSet],
) -> Result<Evaluation> {
    let mut correct = 0;

    for feature_set in testing_set {
        let expected = feature_set.known_class.ok_or_else(|| {
            OpineError::invalid_label("test example has no known class")
        })?;
        if classifier.classify(feature_set).label == expected {
            correct += 1;
        }
    }

    let evaluation = Evaluation {
        correct,
        total: testing_set.len(),
    };
    info!(
        "evaluated {} examples, accuracy {:.2}%",
        evaluation.total,
        evaluation.accuracy() * 100.0
    );

    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::feature::{Feature, Label};

    fn labeled(words: &[&str], label: Label) -> FeatureSet {
        FeatureSet::from_features(words.iter().map(|w| Feature::present(*w)))
            .with_known_class(label)
    }

    fn sample_sets(n: usize) -> Vec<FeatureSet> {
        (0..n)
            .map(|i| {
                let word = format!("w{i}");
                let label = if i % 2 == 0 { Label::Subj } else { Label::Obj };
                labeled(&[word.as_str()], label)
            })
            .collect()
    }

    #[test]
    fn test_shuffle_split_sizes() {
        let (train, test) = shuffle_split(sample_sets(10), 3, 42);

        assert_eq!(train.len(), 7);
        assert_eq!(test.len(), 3);
    }

    #[test]
    fn test_shuffle_split_is_deterministic_per_seed() {
        let (train_a, test_a) = shuffle_split(sample_sets(20), 5, 7);
        let (train_b, test_b) = shuffle_split(sample_sets(20), 5, 7);

        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_shuffle_split_clamps_oversized_test() {
        let (train, test) = shuffle_split(sample_sets(4), 100, 0);

        assert!(train.is_empty());
        assert_eq!(test.len(), 4);
    }

    #[test]
    fn test_evaluate_counts_correct_predictions() {
        let training_set = vec![
            labeled(&["great"], Label::Subj),
            labeled(&["report"], Label::Obj),
        ];
        let classifier = SubjectivityClassifier::train(&training_set).unwrap();

        let testing_set = vec![
            labeled(&["great"], Label::Subj),
            labeled(&["report"], Label::Obj),
            labeled(&["report"], Label::Subj), // misclassified as obj
        ];
        let evaluation = evaluate(&classifier, &testing_set).unwrap();

        assert_eq!(evaluation.correct, 2);
        assert_eq!(evaluation.total, 3);
        assert!((evaluation.accuracy() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_requires_labels() {
        let classifier = SubjectivityClassifier::train(&[
            labeled(&["a"], Label::Subj),
            labeled(&["b"], Label::Obj),
        ])
        .unwrap();
        let testing_set = vec![FeatureSet::from_features(vec![Feature::present("a")])];

        let err = evaluate(&classifier, &testing_set).unwrap_err();
        assert!(matches!(err, OpineError::InvalidLabel(_)));
    }

    #[test]
    fn test_empty_evaluation_accuracy_is_zero() {
        let evaluation = Evaluation {
            correct: 0,
            total: 0,
        };
        assert_eq!(evaluation.accuracy(), 0.0);
    }
}
