//! Trained subjectivity classifier.
//!
//! Training builds a probability table mapping every feature seen in the
//! training set to its per-class occurrence rates: the fraction of subjective
//! (respectively objective) examples containing that feature. Inference
//! accumulates `ln(rate + 1)` per recognized feature in log-space and picks
//! the class with the larger score; ties go to [`Label::Subj`].
//!
//! The `+1` offset keeps the logarithm argument in `[1, 2]` and scores
//! relative co-occurrence rate rather than a textbook naive-Bayes joint
//! probability. It is a fixed scoring policy, not an accident.

use std::cmp::Ordering;
use std::fmt;

use ahash::AHashMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::classifier::feature::{Feature, FeatureSet, Label};
use crate::error::{OpineError, Result};

/// Denominator substituted when a class has zero training examples.
///
/// This guards the normalization against division by zero; a zero-count
/// class signals a malformed training set, not normal operation.
const ZERO_CLASS_EPSILON: f64 = 1e-5;

/// Per-feature conditional occurrence rates given each class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassRates {
    /// Fraction of subjective training examples containing the feature.
    pub subj: f64,
    /// Fraction of objective training examples containing the feature.
    pub obj: f64,
}

/// Mapping from feature to its per-class occurrence rates.
pub type ProbabilityTable = AHashMap<Feature, ClassRates>;

/// Structured result of classifying one feature set.
///
/// Exposes the raw log-space accumulators alongside the decided label so
/// callers can inspect the evidence (or detect the zero-evidence case,
/// where both scores are 0 and the tie-break yields `Subj`) without
/// parsing any formatted output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The predicted class.
    pub label: Label,
    /// Accumulated log-space evidence for the subjective class.
    pub subj_score: f64,
    /// Accumulated log-space evidence for the objective class.
    pub obj_score: f64,
}

/// Direction of a ranked feature's informativeness ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioTag {
    /// The subjective rate dominates (or the rates are equal).
    #[serde(rename = "subj:obj")]
    SubjToObj,
    /// The objective rate dominates.
    #[serde(rename = "obj:subj")]
    ObjToSubj,
}

impl RatioTag {
    /// Get the conventional string form of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            RatioTag::SubjToObj => "subj:obj",
            RatioTag::ObjToSubj => "obj:subj",
        }
    }
}

impl fmt::Display for RatioTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the feature informativeness ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedFeature {
    /// The ranked feature.
    pub feature: Feature,
    /// Which class dominates for this feature.
    pub dominant: RatioTag,
    /// Ratio of the larger class rate to the smaller (>= 1.0).
    pub ratio: f64,
}

/// A trained subjectivity classifier.
///
/// The probability table is built once by [`train`](Self::train) and never
/// mutated afterwards, so a trained instance is safe to share read-only
/// across threads.
#[derive(Clone)]
pub struct SubjectivityClassifier {
    table: ProbabilityTable,
}

impl fmt::Debug for SubjectivityClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubjectivityClassifier")
            .field("table_size", &self.table.len())
            .finish()
    }
}

impl SubjectivityClassifier {
    /// Create a classifier directly from an existing probability table.
    pub fn from_table(table: ProbabilityTable) -> Self {
        SubjectivityClassifier { table }
    }

    /// Get the trained probability table.
    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    /// Train a classifier on labeled feature sets.
    ///
    /// Every example must carry a known class; an unlabeled example is an
    /// [`OpineError::InvalidLabel`] error. Counting is a single pass and
    /// the resulting table is independent of example order.
    ///
    /// A class with zero examples is normalized against
    /// [`ZERO_CLASS_EPSILON`] instead of erroring, which preserves the
    /// behavior of degrading on a single-class training set; a warning is
    /// logged because such a set is almost certainly a data-setup mistake.
    pub fn train(training_set: &[FeatureSet]) -> Result<Self> {
        let mut subj_count: usize = 0;
        let mut obj_count: usize = 0;
        let mut feature_counts: AHashMap<Feature, (usize, usize)> = AHashMap::new();

        for feature_set in training_set {
            let label = feature_set.known_class.ok_or_else(|| {
                OpineError::invalid_label("training example has no known class")
            })?;

            match label {
                Label::Subj => subj_count += 1,
                Label::Obj => obj_count += 1,
            }

            for feature in &feature_set.features {
                let counts = feature_counts.entry(feature.clone()).or_insert((0, 0));
                match label {
                    Label::Subj => counts.0 += 1,
                    Label::Obj => counts.1 += 1,
                }
            }
        }

        if subj_count == 0 || obj_count == 0 {
            warn!(
                "degenerate training set: {subj_count} subjective and {obj_count} objective \
                 examples; rates for the empty class are meaningless"
            );
        }

        let subj_denominator = if subj_count == 0 {
            ZERO_CLASS_EPSILON
        } else {
            subj_count as f64
        };
        let obj_denominator = if obj_count == 0 {
            ZERO_CLASS_EPSILON
        } else {
            obj_count as f64
        };

        let table = feature_counts
            .into_iter()
            .map(|(feature, (subj_hits, obj_hits))| {
                let rates = ClassRates {
                    subj: subj_hits as f64 / subj_denominator,
                    obj: obj_hits as f64 / obj_denominator,
                };
                (feature, rates)
            })
            .collect();

        Ok(SubjectivityClassifier { table })
    }

    /// Classify a single feature set.
    ///
    /// Features absent from the trained table contribute nothing: unseen
    /// evidence is neutral, never penalized. With no contributing features
    /// both scores stay 0 and the tie-break picks [`Label::Subj`].
    pub fn classify(&self, example: &FeatureSet) -> Classification {
        let mut subj_score = 0.0;
        let mut obj_score = 0.0;

        for feature in &example.features {
            if let Some(rates) = self.table.get(feature) {
                subj_score += (rates.subj + 1.0).ln();
                obj_score += (rates.obj + 1.0).ln();
            }
        }

        let label = if subj_score >= obj_score {
            Label::Subj
        } else {
            Label::Obj
        };

        Classification {
            label,
            subj_score,
            obj_score,
        }
    }

    /// Rank features by informativeness, most discriminative first.
    ///
    /// A feature whose rate for either class is exactly zero has an
    /// undefined ratio and is excluded from the ranking entirely. Equal
    /// rates rank with ratio 1.0 tagged subj:obj. At most `top_n` entries
    /// are returned; fewer if the table has fewer qualifying features.
    pub fn rank_features(&self, top_n: usize) -> Vec<RankedFeature> {
        let mut ranked: Vec<RankedFeature> = self
            .table
            .iter()
            .filter(|(_, rates)| rates.subj != 0.0 && rates.obj != 0.0)
            .map(|(feature, rates)| {
                let (dominant, ratio) = if rates.subj >= rates.obj {
                    (RatioTag::SubjToObj, rates.subj / rates.obj)
                } else {
                    (RatioTag::ObjToSubj, rates.obj / rates.subj)
                };
                RankedFeature {
                    feature: feature.clone(),
                    dominant,
                    ratio,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));
        ranked.truncate(top_n);
        ranked
    }
}
