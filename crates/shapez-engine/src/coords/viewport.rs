/// Drawable area in logical pixels.
///
/// Quad vertices are expressed relative to the viewport center, so every
/// builder needs the current size; [`Viewport::physical`] gives the size the
/// shaders see.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn physical(self, scale_factor: f32) -> Viewport {
        Viewport::new(self.width * scale_factor, self.height * scale_factor)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.width, self.height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_scales_both_axes() {
        assert_eq!(Viewport::new(800.0, 600.0).physical(2.0), Viewport::new(1600.0, 1200.0));
    }

    #[test]
    fn zero_or_nan_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
