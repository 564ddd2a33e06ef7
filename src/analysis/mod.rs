//! Text analysis module for Opine.
//!
//! This module provides the tokenization and stop-word handling that turns a
//! raw sentence into the token sequence consumed by feature extraction.

pub mod stop_words;
pub mod tokenizer;

// Re-export commonly used types
pub use stop_words::*;
pub use tokenizer::*;
