use crate::layout::UniformBlock;

/// Remembers the last value written for one block slot.
///
/// Comparison is bytewise, so a NaN that did not change is not dirty and
/// `-0.0` vs `0.0` is.
#[derive(Debug)]
pub struct BlockCache<T: UniformBlock> {
    last: Option<T>,
}

impl<T: UniformBlock> Default for BlockCache<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: UniformBlock> BlockCache<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Returns true when `value` differs from the stored one (or nothing is
    /// stored yet) and records it.
    pub fn update(&mut self, value: &T) -> bool {
        if self.last.as_ref().is_some_and(|last| last.as_bytes() == value.as_bytes()) {
            return false;
        }
        self.last = Some(*value);
        true
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Forgets the stored value; the next update is always dirty.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::SphereParams;

    #[test]
    fn first_write_is_dirty_then_clean() {
        let mut cache = BlockCache::new();
        let block = SphereParams { radius: 4.0, ..SphereParams::default() };
        assert!(cache.update(&block));
        assert!(!cache.update(&block));
    }

    #[test]
    fn byte_change_is_dirty() {
        let mut cache = BlockCache::new();
        cache.update(&SphereParams::default());
        assert!(cache.update(&SphereParams { border_size: 1.0, ..SphereParams::default() }));
        assert_eq!(cache.get().map(|b| b.border_size), Some(1.0));
    }

    #[test]
    fn signed_zero_counts_as_change() {
        let mut cache = BlockCache::new();
        cache.update(&SphereParams { radius: 0.0, ..SphereParams::default() });
        assert!(cache.update(&SphereParams { radius: -0.0, ..SphereParams::default() }));
    }

    #[test]
    fn invalidate_forces_write() {
        let mut cache = BlockCache::new();
        let block = SphereParams::default();
        cache.update(&block);
        cache.invalidate();
        assert!(cache.update(&block));
    }
}
