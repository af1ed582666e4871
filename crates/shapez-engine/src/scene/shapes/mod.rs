//! Block builders, one file per primitive family.
//!
//! Each builder takes logical pixels, converts to the physical values its
//! block expects and records the encoded command on the [`DrawList`].
//!
//! [`DrawList`]: crate::scene::DrawList

pub(crate) mod arc;
pub(crate) mod boxes;
pub(crate) mod color_wheel;
pub mod line;
pub(crate) mod point_graph;
pub(crate) mod sphere;
pub(crate) mod text;
pub(crate) mod texture;

use crate::coords::{Rect, Vec2};
use crate::error::BlockError;
use crate::paint::Color;

/// Stroke straddling the outer edge of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub const NONE: Border = Border { width: 0.0, color: Color::TRANSPARENT };

    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

impl Default for Border {
    fn default() -> Self {
        Border::NONE
    }
}

pub(crate) fn check_rect(block: &'static str, rect: Rect) -> Result<(), BlockError> {
    if !rect.is_finite() {
        return Err(BlockError::invalid(block, "size", "non-finite geometry"));
    }
    if rect.size.x < 0.0 || rect.size.y < 0.0 {
        return Err(BlockError::invalid(block, "size", format!("negative extent {:?}", rect.size)));
    }
    Ok(())
}

pub(crate) fn check_points(block: &'static str, points: &[Vec2]) -> Result<(), BlockError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(i) => Err(BlockError::invalid(block, "points", format!("point {i} is not finite"))),
        None => Ok(()),
    }
}
