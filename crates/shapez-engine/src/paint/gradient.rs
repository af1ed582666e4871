use crate::coords::Vec2;

use super::Color;

/// A single gradient stop; `t` is expected in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient across a box.
///
/// `start` and `end` are in the box's normalized UV space (`(0, 0)` top-left,
/// `(1, 1)` bottom-right), matching the `uv1`/`uv2` fields of the gradient
/// block.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Two-stop gradient from `from` to `to`.
    pub fn two_stop(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)])
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && self.start != self.end
    }

    /// Endpoint colors as drawn by the gradient shader, which only
    /// interpolates between two colors. Stops are taken in `t` order;
    /// interior stops are dropped.
    pub fn endpoint_colors(&self) -> Option<(Color, Color)> {
        let first = self.stops.iter().min_by(|a, b| a.t.total_cmp(&b.t))?;
        let last = self.stops.iter().max_by(|a, b| a.t.total_cmp(&b.t))?;
        if self.stops.len() > 2 {
            log::debug!("gradient: {} interior stop(s) ignored", self.stops.len() - 2);
        }
        Some((first.color, last.color))
    }
}
