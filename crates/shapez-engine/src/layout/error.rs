use std::fmt;

/// A violation of the binary layout contract between a block and its shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A field starts before the previous field ends.
    Overlap { block: &'static str, field: &'static str },
    /// A field offset is not a multiple of its alignment.
    Misaligned { block: &'static str, field: &'static str, offset: usize, align: usize },
    /// A field sits at a different offset than the shader compiler would place it.
    UnexpectedOffset { block: &'static str, field: &'static str, expected: usize, actual: usize },
    /// A field extends past the end of the block.
    OutOfBounds { block: &'static str, field: &'static str },
    /// Block size differs from the aligned end of its last field.
    SizeMismatch { block: &'static str, expected: usize, actual: usize },
    /// The block disagrees with an externally reported layout.
    Mismatch { block: &'static str, detail: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Overlap { block, field } => {
                write!(f, "{block}.{field} overlaps the previous field")
            }
            LayoutError::Misaligned { block, field, offset, align } => {
                write!(f, "{block}.{field} at offset {offset} is not {align}-byte aligned")
            }
            LayoutError::UnexpectedOffset { block, field, expected, actual } => {
                write!(f, "{block}.{field} is at offset {actual}, shader expects {expected}")
            }
            LayoutError::OutOfBounds { block, field } => {
                write!(f, "{block}.{field} extends past the end of the block")
            }
            LayoutError::SizeMismatch { block, expected, actual } => {
                write!(f, "{block} is {actual} bytes, shader expects {expected}")
            }
            LayoutError::Mismatch { block, detail } => write!(f, "{block}: {detail}"),
        }
    }
}

impl std::error::Error for LayoutError {}
