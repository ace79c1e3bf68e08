//! Rupa Error Types
//!
//! Defines all error conditions produced by the Rupa core.
//! Errors are deterministic and scoped strictly to core concerns; type-level
//! misuse (an unsupported operand pair) is rejected by the compiler and has
//! no variant here.

use crate::value::tag::ValueTag;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RupaError {
    /// Safe-mode read of a tagged value under a tag other than the stored one
    #[error("tag mismatch: requested {requested:?}, stored {stored:?}")]
    TagMismatch {
        requested: ValueTag,
        stored: ValueTag,
    },

    /// Checked arithmetic left the representable range
    #[error("arithmetic overflow")]
    Overflow,

    /// A host sink refused an emitted message
    #[error("emission rejected: {0}")]
    Emission(String),
}

pub type RupaResult<T> = Result<T, RupaError>;
