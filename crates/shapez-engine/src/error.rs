use std::fmt;

use crate::schema::Target;

/// Error raised while filling a parameter block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockError {
    /// More elements than the block has fixed slots for.
    CapacityExceeded { block: &'static str, capacity: usize, requested: usize },
    /// The record (or one of its optional fields) does not exist in the target.
    Unsupported { block: &'static str, target: Target },
    /// A value the shader cannot consume (non-finite, negative size, ...).
    InvalidValue { block: &'static str, field: &'static str, reason: String },
}

impl BlockError {
    pub(crate) fn invalid(
        block: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        BlockError::InvalidValue { block, field, reason: reason.into() }
    }
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::CapacityExceeded { block, capacity, requested } => {
                write!(f, "{block} holds at most {capacity} elements, got {requested}")
            }
            BlockError::Unsupported { block, target } => {
                write!(f, "{block} is not available in the {target} target")
            }
            BlockError::InvalidValue { block, field, reason } => {
                write!(f, "invalid {block}.{field}: {reason}")
            }
        }
    }
}

impl std::error::Error for BlockError {}
