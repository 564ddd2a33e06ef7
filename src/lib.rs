//! # Opine
//!
//! A small supervised subjectivity classifier for sentences, written in Rust.
//!
//! ## Features
//!
//! - Word-presence feature extraction with configurable stop words
//! - Naive-Bayes-like training over labeled sentence sets
//! - Log-space scoring with a fixed, documented tie-break
//! - Informativeness ranking of learned features
//! - Line-oriented corpus loading and seeded train/test evaluation

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod evaluate;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
