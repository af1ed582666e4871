use super::{Field, LayoutError};

/// Byte layout of one shader parameter block.
///
/// Layouts are `const` values generated next to each `#[repr(C)]` struct, so
/// the table and the struct cannot drift apart without a failing check.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlockLayout {
    /// Type name on the shader side (e.g. `MM_BOX`, `LightUniforms`).
    pub name: &'static str,
    /// `size_of` the Rust struct, which is also the shader stride.
    pub size: usize,
    pub fields: &'static [Field],
}

#[inline]
const fn align_up(v: usize, align: usize) -> usize {
    v.div_ceil(align) * align
}

impl BlockLayout {
    /// Largest field alignment (at least 4).
    pub fn align(&self) -> usize {
        self.fields.iter().map(|f| f.kind.align()).fold(4, usize::max)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks the table against the shader compiler's placement rules.
    ///
    /// Every field must start at the first suitably aligned offset after the
    /// previous field, and the block size must be the aligned end of the last
    /// field.
    pub fn verify(&self) -> Result<(), LayoutError> {
        let block = self.name;
        let mut cursor = 0usize;

        for field in self.fields {
            let align = field.kind.align();
            if field.offset < cursor {
                return Err(LayoutError::Overlap { block, field: field.name });
            }
            if field.offset % align != 0 {
                return Err(LayoutError::Misaligned {
                    block,
                    field: field.name,
                    offset: field.offset,
                    align,
                });
            }
            let expected = align_up(cursor, align);
            if field.offset != expected {
                return Err(LayoutError::UnexpectedOffset {
                    block,
                    field: field.name,
                    expected,
                    actual: field.offset,
                });
            }
            if field.end() > self.size {
                return Err(LayoutError::OutOfBounds { block, field: field.name });
            }
            cursor = field.end();
        }

        let expected = align_up(cursor, self.align());
        if expected != self.size {
            return Err(LayoutError::SizeMismatch { block, expected, actual: self.size });
        }
        Ok(())
    }

    /// Compares against `(field name, offset)` pairs reported by the shader
    /// side (e.g. from pipeline reflection), plus the expected block size.
    pub fn check_offsets(
        &self,
        expected: &[(&str, usize)],
        size: usize,
    ) -> Result<(), LayoutError> {
        let block = self.name;
        if self.size != size {
            return Err(LayoutError::SizeMismatch { block, expected: size, actual: self.size });
        }
        if expected.len() != self.fields.len() {
            return Err(LayoutError::Mismatch {
                block,
                detail: format!("{} fields, shader reports {}", self.fields.len(), expected.len()),
            });
        }
        for (field, &(name, offset)) in self.fields.iter().zip(expected) {
            if field.name != name {
                return Err(LayoutError::Mismatch {
                    block,
                    detail: format!("field `{}` where shader has `{name}`", field.name),
                });
            }
            if field.offset != offset {
                return Err(LayoutError::UnexpectedOffset {
                    block,
                    field: field.name,
                    expected: offset,
                    actual: field.offset,
                });
            }
        }
        Ok(())
    }

    /// Compares two layouts field by field (name, kind, offset) and by size.
    pub fn diff(&self, other: &BlockLayout) -> Result<(), LayoutError> {
        let block = self.name;
        if self.size != other.size {
            return Err(LayoutError::SizeMismatch {
                block,
                expected: other.size,
                actual: self.size,
            });
        }
        for (i, (a, b)) in self.fields.iter().zip(other.fields).enumerate() {
            if a != b {
                return Err(LayoutError::Mismatch {
                    block,
                    detail: format!(
                        "field #{i}: `{}` @{} vs `{}` @{}",
                        a.name, a.offset, b.name, b.offset
                    ),
                });
            }
        }
        if self.fields.len() != other.fields.len() {
            return Err(LayoutError::Mismatch {
                block,
                detail: format!("{} fields vs {}", self.fields.len(), other.fields.len()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FieldKind;

    const GOOD: BlockLayout = BlockLayout {
        name: "GOOD",
        size: 32,
        fields: &[
            Field::new("size", FieldKind::Float2, 0),
            Field::new("color", FieldKind::Float4, 16),
        ],
    };

    // ── verify ────────────────────────────────────────────────────────────

    #[test]
    fn verify_accepts_natural_layout() {
        assert_eq!(GOOD.verify(), Ok(()));
        assert_eq!(GOOD.align(), 16);
    }

    #[test]
    fn verify_rejects_unaligned_vector() {
        const BAD: BlockLayout = BlockLayout {
            name: "BAD",
            size: 32,
            fields: &[
                Field::new("size", FieldKind::Float2, 0),
                Field::new("color", FieldKind::Float4, 8),
            ],
        };
        assert!(matches!(BAD.verify(), Err(LayoutError::Misaligned { field: "color", .. })));
    }

    #[test]
    fn verify_rejects_gap_the_compiler_would_not_insert() {
        const BAD: BlockLayout = BlockLayout {
            name: "BAD",
            size: 48,
            fields: &[
                Field::new("size", FieldKind::Float2, 0),
                Field::new("color", FieldKind::Float4, 32),
            ],
        };
        assert_eq!(
            BAD.verify(),
            Err(LayoutError::UnexpectedOffset {
                block: "BAD",
                field: "color",
                expected: 16,
                actual: 32,
            })
        );
    }

    #[test]
    fn verify_rejects_unrounded_size() {
        const BAD: BlockLayout = BlockLayout {
            name: "BAD",
            size: 20,
            fields: &[
                Field::new("color", FieldKind::Float4, 0),
                Field::new("radius", FieldKind::Float, 16),
            ],
        };
        assert_eq!(
            BAD.verify(),
            Err(LayoutError::SizeMismatch { block: "BAD", expected: 32, actual: 20 })
        );
    }

    // ── check_offsets / diff ──────────────────────────────────────────────

    #[test]
    fn check_offsets_reports_first_divergence() {
        assert!(GOOD.check_offsets(&[("size", 0), ("color", 16)], 32).is_ok());
        assert!(matches!(
            GOOD.check_offsets(&[("size", 0), ("color", 8)], 32),
            Err(LayoutError::UnexpectedOffset { field: "color", expected: 8, actual: 16, .. })
        ));
        assert!(matches!(
            GOOD.check_offsets(&[("size", 0), ("fill", 16)], 32),
            Err(LayoutError::Mismatch { .. })
        ));
    }

    #[test]
    fn diff_detects_inserted_field() {
        const WIDER: BlockLayout = BlockLayout {
            name: "GOOD",
            size: 32,
            fields: &[
                Field::new("size", FieldKind::Float2, 0),
                Field::new("round", FieldKind::Float, 8),
                Field::new("color", FieldKind::Float4, 16),
            ],
        };
        assert!(GOOD.diff(&GOOD).is_ok());
        assert!(matches!(GOOD.diff(&WIDER), Err(LayoutError::Mismatch { .. })));
    }
}
