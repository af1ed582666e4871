/// Draw layer. Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Editor chrome behind everything else.
    pub const BACKGROUND: ZIndex = ZIndex(-100);
    /// Node-graph bodies.
    pub const NODES: ZIndex = ZIndex(0);
    /// Menus, popups, gizmo overlays.
    pub const OVERLAY: ZIndex = ZIndex(100);

    #[inline]
    pub const fn above(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
