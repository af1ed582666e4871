use bytemuck::{Pod, Zeroable};

use crate::layout::{uniform_block, FieldKind};

/// Number of right-side terminal color slots in [`NodeData`].
pub const RIGHT_TERMINAL_SLOTS: usize = 10;

/// Visual descriptor of one node-graph node (`NODE_DATA`).
///
/// Flags are floats because the shader compares them numerically:
/// `selected` is 0/1, `hover_index` is -1 when nothing is hovered.
/// Terminal colors carry the terminal brand color; alpha 0 hides a slot.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct NodeData {
    pub size: [f32; 2],
    pub selected: f32,
    pub hover_index: f32,
    pub scale: f32,
    pub border_round: f32,
    pub _pad0: [f32; 2],

    pub has_icons1: [f32; 4],

    pub left_terminal_count: f32,
    pub top_terminal_count: f32,
    pub right_terminal_count: f32,
    pub bottom_terminal_count: f32,

    pub brand_color: [f32; 4],

    pub right_terminals: [[f32; 4]; RIGHT_TERMINAL_SLOTS],

    pub left_terminal: [f32; 4],
    pub top_terminal: [f32; 4],
    pub bottom_terminal: [f32; 4],
}

uniform_block!(NodeData, "NODE_DATA", {
    "size" => size: FieldKind::Float2,
    "selected" => selected: FieldKind::Float,
    "hoverIndex" => hover_index: FieldKind::Float,
    "scale" => scale: FieldKind::Float,
    "borderRound" => border_round: FieldKind::Float,
    "hasIcons1" => has_icons1: FieldKind::Float4,
    "leftTerminalCount" => left_terminal_count: FieldKind::Float,
    "topTerminalCount" => top_terminal_count: FieldKind::Float,
    "rightTerminalCount" => right_terminal_count: FieldKind::Float,
    "bottomTerminalCount" => bottom_terminal_count: FieldKind::Float,
    "brandColor" => brand_color: FieldKind::Float4,
    "rightTerminals" => right_terminals: FieldKind::Array(&FieldKind::Float4, RIGHT_TERMINAL_SLOTS),
    "leftTerminal" => left_terminal: FieldKind::Float4,
    "topTerminal" => top_terminal: FieldKind::Float4,
    "bottomTerminal" => bottom_terminal: FieldKind::Float4,
});

const _: () = assert!(core::mem::size_of::<NodeData>() == 288);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::UniformBlock;

    #[test]
    fn node_layout_matches_shader() {
        assert_eq!(NodeData::LAYOUT.verify(), Ok(()));
        assert_eq!(
            NodeData::LAYOUT.check_offsets(
                &[
                    ("size", 0),
                    ("selected", 8),
                    ("hoverIndex", 12),
                    ("scale", 16),
                    ("borderRound", 20),
                    ("hasIcons1", 32),
                    ("leftTerminalCount", 48),
                    ("topTerminalCount", 52),
                    ("rightTerminalCount", 56),
                    ("bottomTerminalCount", 60),
                    ("brandColor", 64),
                    ("rightTerminals", 80),
                    ("leftTerminal", 240),
                    ("topTerminal", 256),
                    ("bottomTerminal", 272),
                ],
                288,
            ),
            Ok(())
        );
    }

    #[test]
    fn always_ten_right_terminal_slots() {
        let field = NodeData::LAYOUT.field("rightTerminals");
        assert_eq!(field.and_then(|f| f.kind.array_len()), Some(10));
    }
}
