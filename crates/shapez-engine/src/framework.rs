//! Surface for host frameworks embedding the node-graph view.
//!
//! Platform shells only exchange the node record with the engine, so this
//! re-exports just that, plus the layout of the record for header checks.

pub use crate::blocks::{NodeData, RIGHT_TERMINAL_SLOTS};

use crate::layout::{BlockLayout, UniformBlock};

/// Engine crate version, for host-side compatibility checks.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Layout of [`NodeData`] as the host must declare it.
pub fn node_layout() -> &'static BlockLayout {
    &NodeData::LAYOUT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_layout_is_stable() {
        let layout = node_layout();
        assert_eq!(layout.name, "NODE_DATA");
        assert_eq!(layout.size, 288);
        assert!(layout.verify().is_ok());
    }

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
