//! Error types for the IRC grammar library.
//!
//! Wire-text parsers in this crate are total and never return these errors.
//! They are reserved for explicitly invalid structural input (casemap tables,
//! command argument descriptors, mask patterns) and for the search and
//! unsupported operations of [`CaseString`](crate::CaseString).

use thiserror::Error;

/// Convenience type alias for Results using [`GrammarError`].
pub type Result<T, E = GrammarError> = std::result::Result<T, E>;

/// Errors raised when a structural precondition is violated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GrammarError {
    /// The two sides of a casemap differ in length.
    #[error("casemap length mismatch: {lower} lower vs {upper} upper characters")]
    CasemapLength {
        /// Number of characters on the lower-case side.
        lower: usize,
        /// Number of characters on the upper-case side.
        upper: usize,
    },

    /// A character appears twice on one side of a casemap.
    #[error("duplicate casemap character: {0:?}")]
    DuplicateCasemapChar(char),

    /// A casemap pairs characters with different UTF-8 widths.
    #[error("casemap pairs {lower:?} and {upper:?} with different encoded widths")]
    CasemapWidth {
        /// The lower-case character.
        lower: char,
        /// The upper-case character.
        upper: char,
    },

    /// A command argument descriptor was not `<name>` or `[name]`.
    #[error("unable to parse argument: {0}")]
    InvalidArgument(String),

    /// Not enough parameters for a command.
    #[error("not enough arguments for {command}: expected {expected}, got {got}")]
    NotEnoughArguments {
        /// The command being checked.
        command: &'static str,
        /// Minimum number of parameters.
        expected: usize,
        /// Actual number of parameters.
        got: usize,
    },

    /// Too many parameters for a command.
    #[error("too many arguments for {command}: expected at most {expected}, got {got}")]
    TooManyArguments {
        /// The command being checked.
        command: &'static str,
        /// Maximum number of parameters.
        expected: usize,
        /// Actual number of parameters.
        got: usize,
    },

    /// A hostmask pattern could not be compiled.
    #[error("invalid mask pattern: {pattern}")]
    InvalidMask {
        /// The raw glob pattern.
        pattern: String,
        /// The underlying regex error.
        #[source]
        cause: regex::Error,
    },
}

/// Errors from [`CaseString`](crate::CaseString) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CaseStringError {
    /// `index`/`rindex` did not find the needle.
    #[error("substring not found: {0:?}")]
    NotFound(String),

    /// The operation has no well-defined casemapped semantics.
    #[error("{0} is not supported on casemapped strings")]
    Unsupported(&'static str),
}
