use super::BlockLayout;

/// Shader-side type of a block field.
///
/// Sizes and alignments follow the Metal shading language, which is what the
/// consuming shaders are compiled with:
///
/// | kind       | size | align |
/// |------------|------|-------|
/// | `Int`      | 4    | 4     |
/// | `Float`    | 4    | 4     |
/// | `Float2`   | 8    | 8     |
/// | `Float3`   | 16   | 16    |
/// | `Float4`   | 16   | 16    |
/// | `Float3x3` | 48   | 16    |
/// | `Float4x4` | 64   | 16    |
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FieldKind {
    Int,
    Float,
    Float2,
    Float3,
    Float4,
    Float3x3,
    Float4x4,
    /// Fixed-capacity array; the element stride equals the element size.
    Array(&'static FieldKind, usize),
    /// Nested block (e.g. `Light` inside `LightUniforms`).
    Block(&'static BlockLayout),
}

impl FieldKind {
    pub const fn size(&self) -> usize {
        match self {
            FieldKind::Int | FieldKind::Float => 4,
            FieldKind::Float2 => 8,
            FieldKind::Float3 | FieldKind::Float4 => 16,
            FieldKind::Float3x3 => 48,
            FieldKind::Float4x4 => 64,
            FieldKind::Array(elem, len) => elem.size() * *len,
            FieldKind::Block(layout) => layout.size,
        }
    }

    pub fn align(&self) -> usize {
        match self {
            FieldKind::Int | FieldKind::Float => 4,
            FieldKind::Float2 => 8,
            FieldKind::Float3 | FieldKind::Float4 | FieldKind::Float3x3 | FieldKind::Float4x4 => 16,
            FieldKind::Array(elem, _) => elem.align(),
            FieldKind::Block(layout) => layout.align(),
        }
    }

    /// Type name as written in a Metal / simd header.
    pub fn msl_type(&self) -> &'static str {
        match self {
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Float2 => "vector_float2",
            FieldKind::Float3 => "simd_float3",
            FieldKind::Float4 => "vector_float4",
            FieldKind::Float3x3 => "matrix_float3x3",
            FieldKind::Float4x4 => "matrix_float4x4",
            FieldKind::Array(elem, _) => elem.msl_type(),
            FieldKind::Block(layout) => layout.name,
        }
    }

    /// Array length, if this is an array kind.
    #[inline]
    pub fn array_len(&self) -> Option<usize> {
        match self {
            FieldKind::Array(_, len) => Some(*len),
            _ => None,
        }
    }
}

/// A named field at a byte offset inside a block.
///
/// Padding members of the Rust structs are not listed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Field {
    /// Field name on the shader side (camelCase, as the shaders spell it).
    pub name: &'static str,
    pub kind: FieldKind,
    pub offset: usize,
}

impl Field {
    #[inline]
    pub const fn new(name: &'static str, kind: FieldKind, offset: usize) -> Self {
        Self { name, kind, offset }
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.kind.size()
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.kind.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_sizes_follow_metal_rules() {
        assert_eq!(FieldKind::Float2.size(), 8);
        assert_eq!(FieldKind::Float3.size(), 16);
        assert_eq!(FieldKind::Float3.align(), 16);
        assert_eq!(FieldKind::Float3x3.size(), 48);
    }

    #[test]
    fn array_size_is_element_size_times_len() {
        let kind = FieldKind::Array(&FieldKind::Float4, 300);
        assert_eq!(kind.size(), 4800);
        assert_eq!(kind.align(), 16);
        assert_eq!(kind.array_len(), Some(300));
    }
}
