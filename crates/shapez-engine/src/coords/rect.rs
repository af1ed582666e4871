use super::Vec2;

/// Axis-aligned rectangle, top-left origin.
///
/// Builders take rectangles in logical pixels; [`Rect::scaled`] converts to the
/// physical pixels a draw command carries.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Multiplies origin and size by `factor` (logical → physical).
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self { origin: self.origin * factor, size: self.size * factor }
    }

    /// Grows the rectangle by `amount` in total along each axis, keeping the
    /// center fixed. A border of width `b` straddles the edge, so its quad
    /// is `expanded(b)`.
    #[inline]
    pub fn expanded(self, amount: f32) -> Self {
        let half = amount * 0.5;
        Rect::new(
            self.origin.x - half,
            self.origin.y - half,
            self.size.x + amount,
            self.size.y + amount,
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Overlap of two rectangles; `None` when they only touch or are disjoint.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a_max, b_max) = (self.max(), other.max());
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let w = a_max.x.min(b_max.x) - x0;
        let h = a_max.y.min(b_max.y) - y0;
        (w > 0.0 && h > 0.0).then(|| Rect::new(x0, y0, w, h))
    }
}
