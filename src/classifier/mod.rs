//! Subjectivity classification for Opine.
//!
//! This module holds the core of the crate: word-presence features, the
//! feature extractor, and the trained classifier with its probability table.
//!
//! The pipeline is:
//!
//! ```text
//! Raw tokens → FeatureExtractor → FeatureSet → SubjectivityClassifier
//!                                               ├── train (labeled sets)
//!                                               ├── classify (unlabeled set)
//!                                               └── rank_features
//! ```

pub mod extractor;
pub mod feature;
pub mod model;

// Re-export commonly used types
pub use extractor::*;
pub use feature::*;
pub use model::*;
