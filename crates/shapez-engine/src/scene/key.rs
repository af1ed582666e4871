use super::ZIndex;

/// Paint-order key: `z` ascending, then insertion `order` for equal layers.
///
/// Field order matters; the derived `Ord` compares `z` first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_insertion_order() {
        assert!(SortKey::new(ZIndex(0), 9) < SortKey::new(ZIndex(1), 0));
        assert!(SortKey::new(ZIndex(1), 0) < SortKey::new(ZIndex(1), 1));
    }

    #[test]
    fn layers_are_ordered() {
        assert!(ZIndex::BACKGROUND < ZIndex::NODES);
        assert!(ZIndex::NODES.above() < ZIndex::OVERLAY);
    }
}
