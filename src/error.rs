//! Error types for the Opine library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`OpineError`] enum.
//!
//! # Examples
//!
//! ```
//! use opine::error::{OpineError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OpineError::invalid_label("maybe"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Opine operations.
#[derive(Error, Debug)]
pub enum OpineError {
    /// I/O errors (corpus files, output sinks, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, stop-word handling)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus-related errors (malformed corpus files, empty corpora)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// An unrecognized or missing class label
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OpineError.
pub type Result<T> = std::result::Result<T, OpineError>;

impl OpineError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        OpineError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        OpineError::Corpus(msg.into())
    }

    /// Create a new invalid-label error.
    pub fn invalid_label<S: Into<String>>(msg: S) -> Self {
        OpineError::InvalidLabel(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        OpineError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OpineError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        OpineError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
