//! Error types for the IBLT set-reconciliation engine

use std::fmt;

/// Errors that can occur while building, mutating or peeling an IBLT, or
/// while driving the surrounding key-stream collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IbltError {
    /// Bad or missing CLI option.
    OptionError {
        /// Name of the offending option.
        option: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Could not open a path for reading or writing.
    FileError {
        /// Path that could not be opened.
        path: String,
        /// Underlying reason, if known.
        reason: String,
    },

    /// A read or write truncated or otherwise failed.
    IOError(String),

    /// An argument fell outside the permitted range.
    ValueError {
        /// Parameter name.
        param: String,
        /// Value provided.
        value: String,
        /// Constraint that was violated.
        constraint: String,
    },

    /// Requested allocation could not be satisfied.
    AllocError(String),

    /// An index or length exceeded an invariant.
    OutOfBoundsError {
        /// Index or length that was out of bounds.
        index: usize,
        /// Bound it should have respected.
        bound: usize,
    },

    /// An invariant was violated at runtime.
    RuntimeError(String),

    /// Two sketches disagree on construction parameters.
    IncompatibleError {
        /// Why the sketches are incompatible.
        reason: String,
    },

    /// Peeling terminated with residual 1/3-counts remaining.
    UnpeelableFailure,

    /// Peeling exceeded its `2n` iteration budget.
    InfiniteLoopFailure,

    /// Peeling recovered the full difference size but with ambiguous
    /// positive/negative orientation (residual 2-counts).
    AsymmetricFailure,
}

impl fmt::Display for IbltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IbltError::OptionError { option, reason } => {
                write!(f, "option error on '{option}': {reason}")
            }
            IbltError::FileError { path, reason } => {
                write!(f, "unable to open '{path}': {reason}")
            }
            IbltError::IOError(msg) => write!(f, "I/O error: {msg}"),
            IbltError::ValueError {
                param,
                value,
                constraint,
            } => write!(f, "invalid value for '{param}': '{value}' {constraint}"),
            IbltError::AllocError(msg) => write!(f, "allocation failed: {msg}"),
            IbltError::OutOfBoundsError { index, bound } => {
                write!(f, "index {index} exceeds bound {bound}")
            }
            IbltError::RuntimeError(msg) => write!(f, "runtime invariant violated: {msg}"),
            IbltError::IncompatibleError { reason } => {
                write!(f, "incompatible sketches: {reason}")
            }
            IbltError::UnpeelableFailure => {
                write!(f, "peeling terminated with residual unpeelable buckets")
            }
            IbltError::InfiniteLoopFailure => {
                write!(f, "peeling exceeded its iteration budget")
            }
            IbltError::AsymmetricFailure => write!(
                f,
                "peeling recovered the difference size but orientation is ambiguous"
            ),
        }
    }
}

impl std::error::Error for IbltError {}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IbltError>;
