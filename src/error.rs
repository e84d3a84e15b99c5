//! Error types for the Milozvuk library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`MilozvukError`] enum. The correction engine itself has no
//! failing states for any input text; errors only arise at the outer seams
//! (pattern compilation, file loading, serialization).
//!
//! # Examples
//!
//! ```
//! use milozvuk::error::{MilozvukError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MilozvukError::invalid_operation("Nothing to correct"))
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

/// The main error type for Milozvuk operations.
#[derive(Error, Debug)]
pub enum MilozvukError {
    /// I/O errors (fixture loading, stdin).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, pattern compilation).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MilozvukError.
pub type Result<T> = std::result::Result<T, MilozvukError>;

impl MilozvukError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MilozvukError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        MilozvukError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MilozvukError::Other(msg.into())
    }
}
