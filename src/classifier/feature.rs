//! Feature types for subjectivity classification.
//!
//! This module defines the core data structures that describe one example:
//!
//! - [`Label`] - One of the two target classes, subjective or objective
//! - [`Feature`] - A single named boolean signal (presence of a word)
//! - [`FeatureSet`] - The set of features describing one sentence, with an
//!   optional ground-truth label
//!
//! # Examples
//!
//! Creating a feature:
//!
//! ```
//! use opine::classifier::feature::Feature;
//!
//! let feature = Feature::present("excellent");
//! assert_eq!(feature.name, "excellent");
//! assert!(feature.value);
//! ```
//!
//! Parsing a label:
//!
//! ```
//! use opine::classifier::feature::Label;
//!
//! let label: Label = "subj".parse().unwrap();
//! assert_eq!(label, Label::Subj);
//! assert!("spam".parse::<Label>().is_err());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpineError;

/// One of the two target classes for sentence classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// The sentence expresses an opinion or sentiment.
    Subj,
    /// The sentence states factual content.
    Obj,
}

impl Label {
    /// Get the canonical string form of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Subj => "subj",
            Label::Obj => "obj",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = OpineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subj" => Ok(Label::Subj),
            "obj" => Ok(Label::Obj),
            other => Err(OpineError::invalid_label(other)),
        }
    }
}

/// A single named boolean signal extracted from a sentence.
///
/// Here a feature always records the presence of a specific word, so
/// `value` is `true` for every extracted feature; the field exists so that
/// equality and hashing cover the full (name, value) pair.
///
/// Features are immutable once created and are used as hash-map keys in the
/// trained probability table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    /// The name of the feature (the observed word).
    pub name: String,
    /// The value of the feature (`true` = present).
    pub value: bool,
}

impl Feature {
    /// Create a new feature.
    pub fn new<S: Into<String>>(name: S, value: bool) -> Self {
        Feature {
            name: name.into(),
            value,
        }
    }

    /// Create a presence feature (`value = true`) for the given word.
    pub fn present<S: Into<String>>(name: S) -> Self {
        Feature::new(name, true)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// The set of features that represent a single sentence.
///
/// Optionally carries the known class of the sentence: present for training
/// and evaluation examples, absent during inference. The feature set may be
/// empty (every token was a stop word); such an example classifies with
/// zero accumulated evidence.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureSet {
    /// The features that define this sentence.
    pub features: HashSet<Feature>,
    /// Pre-defined classification of this sentence, if known.
    pub known_class: Option<Label>,
}

impl FeatureSet {
    /// Create a new feature set.
    pub fn new(features: HashSet<Feature>, known_class: Option<Label>) -> Self {
        FeatureSet {
            features,
            known_class,
        }
    }

    /// Create an unlabeled feature set from a list of features.
    pub fn from_features<I>(features: I) -> Self
    where
        I: IntoIterator<Item = Feature>,
    {
        FeatureSet::new(features.into_iter().collect(), None)
    }

    /// Attach a known class label, builder-style.
    pub fn with_known_class(mut self, label: Label) -> Self {
        self.known_class = Some(label);
        self
    }

    /// Get the number of features in this set.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check whether this set has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
