//! Screen-space geometry shared by the draw builders.
//!
//! - Logical pixels, scaled by the frame's scale factor before encoding
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
