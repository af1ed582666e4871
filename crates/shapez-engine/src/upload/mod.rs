//! Moving blocks into GPU memory.
//!
//! Blocks are plain bytes; these helpers create the wgpu buffers, skip
//! writes of unchanged blocks and grow per-frame streams.

mod buffer;
mod cache;
mod vertex;

pub use buffer::{grown_capacity, min_binding_size, pack_blocks, BlockBuffer, DynamicBuffer};
pub use cache::BlockCache;
pub use vertex::frame_vertices;
