//! Metal header emission.
//!
//! Renders block layouts as `typedef struct` declarations so the shader side
//! can include a header generated from the same tables the Rust side uses.

use super::{BlockLayout, FieldKind};

/// Renders one block as a Metal `typedef struct`.
pub fn emit_block(layout: &BlockLayout) -> String {
    let mut out = String::from("typedef struct\n{\n");
    for field in layout.fields {
        let ty = field.kind.msl_type();
        let line = match field.kind {
            FieldKind::Array(_, len) => format!("    {ty:<20}{}[{len}];\n", field.name),
            _ => format!("    {ty:<20}{};\n", field.name),
        };
        out.push_str(&line);
    }
    out.push_str(&format!("}} {};\n", layout.name));
    out
}

/// Renders a complete header with include guard for a set of blocks.
///
/// Blocks are written in the given order; nested blocks must precede the
/// blocks that embed them.
pub fn emit_header(guard: &str, layouts: &[&BlockLayout]) -> String {
    let mut out = format!("#ifndef {guard}\n#define {guard}\n\n#include <simd/simd.h>\n");
    for layout in layouts {
        out.push('\n');
        out.push_str(&emit_block(layout));
    }
    out.push_str(&format!("\n#endif /* {guard} */\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Field;

    const NODE_LIKE: BlockLayout = BlockLayout {
        name: "TERMINALS",
        size: 176,
        fields: &[
            Field::new("count", FieldKind::Float, 0),
            Field::new("colors", FieldKind::Array(&FieldKind::Float4, 10), 16),
        ],
    };

    #[test]
    fn emits_arrays_with_length_suffix() {
        let text = emit_block(&NODE_LIKE);
        assert!(text.starts_with("typedef struct\n{\n"));
        assert!(text.contains("vector_float4       colors[10];"));
        assert!(text.ends_with("} TERMINALS;\n"));
    }

    #[test]
    fn block_text_is_exact() {
        let expected = "typedef struct\n{\n    float               count;\n    \
                        vector_float4       colors[10];\n} TERMINALS;\n";
        assert_eq!(emit_block(&NODE_LIKE), expected);
    }

    #[test]
    fn header_has_guard_and_include() {
        let text = emit_header("TEST_H", &[&NODE_LIKE]);
        assert!(text.starts_with("#ifndef TEST_H\n#define TEST_H\n"));
        assert!(text.contains("#include <simd/simd.h>"));
        assert!(text.ends_with("} TERMINALS;\n\n#endif /* TEST_H */\n"));
    }
}
