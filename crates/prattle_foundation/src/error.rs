//! Error types for the Prattle system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use thiserror::Error;

/// Convenient result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Prattle operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a configuration error.
    ///
    /// Configuration errors are detected lazily, at first use of a clause
    /// (template build or combination count), never at construction.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration {
            message: message.into(),
        })
    }

    /// Creates a parse error at the given byte offset.
    #[must_use]
    pub fn parse(message: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            offset,
        })
    }

    /// Creates an empty-category error for a lexicon category with no entries.
    #[must_use]
    pub fn empty_category(category: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyCategory {
            category: category.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A clause's weight factors are mutually inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the inconsistency.
        message: String,
    },

    /// Parse error in the textual phrase-description format.
    #[error("parse error at offset {offset}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Byte offset into the source text.
        offset: usize,
    },

    /// A lexicon category referenced during resolution has no entries.
    ///
    /// Lexicon adequacy is a caller precondition; this surfaces the violation
    /// as an error from the resolver's pick operations rather than a panic.
    #[error("lexicon category is empty: {category}")]
    EmptyCategory {
        /// The category that had no entries.
        category: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
