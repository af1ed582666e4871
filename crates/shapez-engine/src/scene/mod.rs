//! Draw stream for the 2D UI pass.
//!
//! Responsibilities:
//! - encode primitive blocks for the frame's target and scale factor
//! - provide deterministic ordering (z-index + insertion order)
//! - keep one builder file per primitive family under `scene::shapes`

mod cmd;
mod key;
mod list;
mod quad;
mod z_index;

pub mod shapes;

pub use cmd::{DrawCmd, TextureSlot};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use quad::quad_vertices;
pub use shapes::line::SplineFill;
pub use shapes::Border;
pub use z_index::ZIndex;
