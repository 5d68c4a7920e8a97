//! Error handling for ShapeKit
//!
//! Provides the error types surfaced while building a path:
//! - Path errors (malformed command definitions, `d` syntax errors)
//! - I/O and generic errors for the outer layers
//!
//! Broken internal invariants (a segment without its required predecessor,
//! a handle the segment does not expose) are programming faults and panic
//! instead of producing one of these values.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path error type
///
/// Construction and parsing are all-or-nothing: whenever one of these is
/// returned, no partially built path has been exposed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A command definition has an unknown letter or the wrong arity,
    /// or the command list does not start with a move
    #[error("Malformed command at index {index}: {reason}")]
    MalformedCommand {
        /// Position of the offending definition in the command list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// The textual path description could not be parsed
    #[error("Syntax error at token {position}: {reason}")]
    Syntax {
        /// Index of the offending token.
        position: usize,
        /// What is wrong with it.
        reason: String,
    },
}

impl PathError {
    /// Create a malformed command error
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        PathError::MalformedCommand {
            index,
            reason: reason.into(),
        }
    }

    /// Create a syntax error
    pub fn syntax(position: usize, reason: impl Into<String>) -> Self {
        PathError::Syntax {
            position,
            reason: reason.into(),
        }
    }
}

/// Main error type for ShapeKit
#[derive(Error, Debug)]
pub enum Error {
    /// Path construction or parsing error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a `d` syntax error
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Error::Path(PathError::Syntax { .. }))
    }

    /// Check if this is a malformed command definition
    pub fn is_malformed_command(&self) -> bool {
        matches!(self, Error::Path(PathError::MalformedCommand { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
