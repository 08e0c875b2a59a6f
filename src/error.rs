//! Error types for sequence construction and required-value consumers.
//!
//! Lazy operators validate their numeric arguments synchronously, before the
//! first pull, and report bad values as [`SeqError::InvalidArgument`]. Aggregators
//! report absence with `Option`; only consumers that were explicitly asked for a
//! value (such as [`Sequence::fetch`](crate::Sequence::fetch)) return
//! [`SeqError::EmptySequence`].

use thiserror::Error;

/// Result alias for operations that fail only with a [`SeqError`].
pub type SeqResult<T> = Result<T, SeqError>;

/// Errors raised by sequence operators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// A count, step or stride that must be positive was zero.
    #[error("invalid argument `{arg}` for `{op}`: {value} (must be positive)")]
    InvalidArgument {
        /// Operator that rejected the argument.
        op: &'static str,
        /// Name of the offending argument.
        arg: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// A required value was requested from a sequence that could not supply it.
    #[error("`{op}` found no element to return")]
    EmptySequence {
        /// Consumer that came up empty.
        op: &'static str,
    },
}

/// Reject `value == 0` for a positive-only argument.
pub(crate) fn require_positive(op: &'static str, arg: &'static str, value: usize) -> SeqResult<usize> {
    if value == 0 {
        tracing::debug!(op, arg, value, "rejecting non-positive argument");
        return Err(SeqError::InvalidArgument { op, arg, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected_with_context() {
        let err = require_positive("chunk_every", "count", 0).unwrap_err();
        assert_eq!(
            err,
            SeqError::InvalidArgument { op: "chunk_every", arg: "count", value: 0 }
        );
        assert!(err.to_string().contains("chunk_every"));
    }

    #[test]
    fn positive_passes_through() {
        assert_eq!(require_positive("take_every", "n", 3), Ok(3));
    }
}
