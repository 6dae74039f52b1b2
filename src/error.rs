//! Error types for the Sahayak library.
//!
//! Classification and prompt assembly are total functions and never fail.
//! Errors only arise at the edges: loading configuration or template files,
//! parsing labels, validating service input, and talking to a generator.
//! All of them are represented by the [`SahayakError`] enum.
//!
//! # Examples
//!
//! ```
//! use sahayak::error::{Result, SahayakError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SahayakError::invalid_argument("query must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sahayak operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum SahayakError {
    /// I/O errors (config files, template files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A label could not be parsed into one of the known categories
    #[error("Parse error: {0}")]
    Parse(String),

    /// Template catalogue errors (bad overlay records)
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures reported by a generation backend
    #[error("Generation error: {0}")]
    Generation(String),

    /// Caller supplied input that the service refuses to process
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SahayakError.
pub type Result<T> = std::result::Result<T, SahayakError>;

impl SahayakError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SahayakError::Parse(msg.into())
    }

    /// Create a new template error.
    pub fn template<S: Into<String>>(msg: S) -> Self {
        SahayakError::Template(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SahayakError::Config(msg.into())
    }

    /// Create a new generation error.
    pub fn generation<S: Into<String>>(msg: S) -> Self {
        SahayakError::Generation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SahayakError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SahayakError::NotFound(msg.into())
    }
}
