//! Node-graph visuals.
//!
//! A node is drawn by one shader call; [`NodeVisual::to_block`] packs its
//! body, selection, hover and terminal colors into the node record.

use crate::blocks::{NodeData, RIGHT_TERMINAL_SLOTS};
use crate::error::BlockError;
use crate::paint::Color;

/// Node category, shown as the body's brand color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum NodeBrand {
    Property,
    #[default]
    Behavior,
    Function,
    Arithmetic,
}

/// Side of the node a terminal sits on.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Connector {
    #[default]
    Left,
    Top,
    Right,
    Bottom,
}

/// What a terminal accepts, shown as the terminal's color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TerminalBrand {
    #[default]
    All,
    Properties,
    Behavior,
    FloatVariable,
    Float2Variable,
    DirectionVariable,
    Float3Variable,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Terminal {
    pub connector: Connector,
    pub brand: TerminalBrand,
}

impl Terminal {
    pub const fn new(connector: Connector, brand: TerminalBrand) -> Self {
        Self { connector, brand }
    }
}

/// Colors of the node editor.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSkin {
    pub property: Color,
    pub behavior: Color,
    pub function: Color,
    pub arithmetic: Color,

    pub terminal_all: Color,
    pub terminal_properties: Color,
    pub terminal_behavior: Color,
    pub terminal_float: Color,
    pub terminal_float2: Color,
    pub terminal_direction: Color,
    pub terminal_float3: Color,
}

impl Default for NodeSkin {
    fn default() -> Self {
        Self {
            property: Color::from_srgb_u8(0x3f, 0x6e, 0xa8, 0xff),
            behavior: Color::from_srgb_u8(0x8c, 0x4d, 0x9e, 0xff),
            function: Color::from_srgb_u8(0x3d, 0x8b, 0x5a, 0xff),
            arithmetic: Color::from_srgb_u8(0xb3, 0x7a, 0x2e, 0xff),

            terminal_all: Color::from_srgb_u8(0xc8, 0xc8, 0xc8, 0xff),
            terminal_properties: Color::from_srgb_u8(0x5b, 0x8d, 0xd0, 0xff),
            terminal_behavior: Color::from_srgb_u8(0xb0, 0x6f, 0xc4, 0xff),
            terminal_float: Color::from_srgb_u8(0x6c, 0xc2, 0x8a, 0xff),
            terminal_float2: Color::from_srgb_u8(0x4f, 0xb3, 0xb3, 0xff),
            terminal_direction: Color::from_srgb_u8(0xd4, 0x9a, 0x4a, 0xff),
            terminal_float3: Color::from_srgb_u8(0xd0, 0x6a, 0x6a, 0xff),
        }
    }
}

impl NodeSkin {
    pub fn brand_color(&self, brand: NodeBrand) -> Color {
        match brand {
            NodeBrand::Property => self.property,
            NodeBrand::Behavior => self.behavior,
            NodeBrand::Function => self.function,
            NodeBrand::Arithmetic => self.arithmetic,
        }
    }

    pub fn terminal_color(&self, brand: TerminalBrand) -> Color {
        match brand {
            TerminalBrand::All => self.terminal_all,
            TerminalBrand::Properties => self.terminal_properties,
            TerminalBrand::Behavior => self.terminal_behavior,
            TerminalBrand::FloatVariable => self.terminal_float,
            TerminalBrand::Float2Variable => self.terminal_float2,
            TerminalBrand::DirectionVariable => self.terminal_direction,
            TerminalBrand::Float3Variable => self.terminal_float3,
        }
    }
}

/// Everything the node shader needs to draw one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeVisual {
    /// Node size in physical pixels.
    pub size: [f32; 2],
    pub selected: bool,
    /// Index of the hovered terminal, if any.
    pub hover_terminal: Option<usize>,
    pub scale: f32,
    pub border_round: f32,
    /// Which of the (up to four) header icons are shown.
    pub icons: [bool; 4],
    pub brand: NodeBrand,
    pub terminals: Vec<Terminal>,
}

impl NodeVisual {
    fn count(&self, side: Connector) -> usize {
        self.terminals.iter().filter(|t| t.connector == side).count()
    }

    fn first(&self, side: Connector) -> Option<&Terminal> {
        self.terminals.iter().find(|t| t.connector == side)
    }

    /// Packs the node record.
    ///
    /// Right terminals get one color slot each, in order; left, top and
    /// bottom use the color of their first terminal. More right terminals
    /// than slots fail with [`BlockError::CapacityExceeded`].
    pub fn to_block(&self, skin: &NodeSkin) -> Result<NodeData, BlockError> {
        let right = self.count(Connector::Right);
        if right > RIGHT_TERMINAL_SLOTS {
            return Err(BlockError::CapacityExceeded {
                block: "NODE_DATA",
                capacity: RIGHT_TERMINAL_SLOTS,
                requested: right,
            });
        }

        let side_color = |side| {
            self.first(side).map(|t| skin.terminal_color(t.brand).to_array()).unwrap_or_default()
        };
        let flag = |b: bool| if b { 1.0 } else { 0.0 };

        let mut block = NodeData {
            size: self.size,
            selected: flag(self.selected),
            hover_index: self.hover_terminal.map_or(-1.0, |i| i as f32),
            scale: self.scale,
            border_round: self.border_round,
            has_icons1: self.icons.map(flag),
            left_terminal_count: self.count(Connector::Left) as f32,
            top_terminal_count: self.count(Connector::Top) as f32,
            right_terminal_count: right as f32,
            bottom_terminal_count: self.count(Connector::Bottom) as f32,
            brand_color: skin.brand_color(self.brand).to_array(),
            left_terminal: side_color(Connector::Left),
            top_terminal: side_color(Connector::Top),
            bottom_terminal: side_color(Connector::Bottom),
            ..NodeData::default()
        };

        let right_terminals = self.terminals.iter().filter(|t| t.connector == Connector::Right);
        for (slot, t) in block.right_terminals.iter_mut().zip(right_terminals) {
            *slot = skin.terminal_color(t.brand).to_array();
        }
        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(terminals: Vec<Terminal>) -> NodeVisual {
        NodeVisual {
            size: [230.0, 65.0],
            scale: 1.0,
            border_round: 8.0,
            terminals,
            ..NodeVisual::default()
        }
    }

    // ── counts & colors ───────────────────────────────────────────────────

    #[test]
    fn terminals_are_counted_per_side() {
        let skin = NodeSkin::default();
        let n = node(vec![
            Terminal::new(Connector::Left, TerminalBrand::Behavior),
            Terminal::new(Connector::Right, TerminalBrand::FloatVariable),
            Terminal::new(Connector::Right, TerminalBrand::Float3Variable),
            Terminal::new(Connector::Bottom, TerminalBrand::All),
        ]);
        let block = n.to_block(&skin).unwrap();

        assert_eq!(block.left_terminal_count, 1.0);
        assert_eq!(block.top_terminal_count, 0.0);
        assert_eq!(block.right_terminal_count, 2.0);
        assert_eq!(block.bottom_terminal_count, 1.0);
        assert_eq!(block.right_terminals[0], skin.terminal_float.to_array());
        assert_eq!(block.right_terminals[1], skin.terminal_float3.to_array());
        assert_eq!(block.right_terminals[2], [0.0; 4]);
        assert_eq!(block.left_terminal, skin.terminal_behavior.to_array());
        assert_eq!(block.top_terminal, [0.0; 4]);
    }

    #[test]
    fn hover_and_selection_flags() {
        let skin = NodeSkin::default();
        let mut n = node(Vec::new());
        assert_eq!(n.to_block(&skin).unwrap().hover_index, -1.0);

        n.hover_terminal = Some(3);
        n.selected = true;
        n.icons = [true, false, true, false];
        n.brand = NodeBrand::Arithmetic;
        let block = n.to_block(&skin).unwrap();
        assert_eq!(block.hover_index, 3.0);
        assert_eq!(block.selected, 1.0);
        assert_eq!(block.has_icons1, [1.0, 0.0, 1.0, 0.0]);
        assert_eq!(block.brand_color, skin.arithmetic.to_array());
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn ten_right_terminals_fit() {
        let right = Terminal::new(Connector::Right, TerminalBrand::All);
        let n = node(vec![right; RIGHT_TERMINAL_SLOTS]);
        assert!(n.to_block(&NodeSkin::default()).is_ok());
    }

    #[test]
    fn eleven_right_terminals_fail() {
        let n = node(vec![Terminal::new(Connector::Right, TerminalBrand::All); 11]);
        assert_eq!(
            n.to_block(&NodeSkin::default()),
            Err(BlockError::CapacityExceeded { block: "NODE_DATA", capacity: 10, requested: 11 })
        );
    }
}
