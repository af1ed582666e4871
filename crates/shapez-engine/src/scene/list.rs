use crate::config::RenderConfig;
use crate::coords::Rect;
use crate::error::BlockError;
use crate::schema::Primitive;

use super::{DrawCmd, SortKey, TextureSlot, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in physical pixels. `None` = no clipping.
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// Every `push_*` builder encodes its block with the list's
/// [`RenderConfig`]: the target picks the layout, the scale factor turns the
/// logical input into physical block values and quads.
///
/// Paint-order iteration reuses an internal index buffer; no per-frame
/// allocation once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    config: RenderConfig,
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is the effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new(config: RenderConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replaces the frame configuration. Already recorded items keep the
    /// blocks they were encoded with.
    #[inline]
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    #[inline]
    pub(crate) fn scale(&self) -> f32 {
        self.config.scale_factor
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes an already encoded command with the given z-index.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Encodes `prim` for the current target and records it over `quad`
    /// (logical pixels).
    ///
    /// Nothing is recorded when encoding fails.
    pub fn push_primitive(
        &mut self,
        z: ZIndex,
        prim: &Primitive,
        quad: Rect,
        texture: Option<TextureSlot>,
    ) -> Result<(), BlockError> {
        let block = prim
            .encode(self.config.target)
            .inspect_err(|e| log::warn!("draw skipped: {e}"))?;
        self.push(
            z,
            DrawCmd { pipeline: prim.pipeline(), quad: quad.scaled(self.scale()), block, texture },
        );
        Ok(())
    }

    /// Begins a scissor region (logical pixels), intersected with any parent
    /// region. Calls must be balanced with [`pop_clip`](Self::pop_clip).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let rect = rect.scaled(self.scale());
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap: a zero-area rect makes the renderer skip the draws.
            Some(&parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order (back-to-front).
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}
