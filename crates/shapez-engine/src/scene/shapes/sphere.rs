use crate::blocks::SphereParams;
use crate::coords::{Rect, Vec2};
use crate::error::BlockError;
use crate::paint::Color;
use crate::schema::Primitive;
use crate::scene::{DrawList, ZIndex};

use super::Border;

impl DrawList {
    /// Records a filled circle centered on `center`.
    pub fn push_sphere(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Border,
    ) -> Result<(), BlockError> {
        if !(radius.is_finite() && radius >= 0.0) {
            let reason = format!("{radius} is not a valid radius");
            return Err(BlockError::invalid("MM_SPHERE", "radius", reason));
        }
        let prim = Primitive::Sphere(SphereParams {
            fill_color: fill.to_array(),
            border_color: border.color.to_array(),
            radius: radius * self.scale(),
            border_size: border.width,
            _pad: [0.0; 2],
        });
        let bounds = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
        self.push_bordered(z, "MM_SPHERE", &prim, bounds, border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;

    #[test]
    fn radius_scales_and_quad_covers_border() {
        let mut l = DrawList::new(RenderConfig::default().with_scale_factor(2.0));
        let border = Border::new(2.0, Color::BLACK);
        l.push_sphere(ZIndex(0), Vec2::new(50.0, 50.0), 10.0, Color::WHITE, border).unwrap();

        let cmd = &l.items()[0].cmd;
        let f: &[f32] = bytemuck::cast_slice(&cmd.block.bytes);
        assert_eq!(f[8], 20.0);
        assert_eq!(f[9], 2.0);
        // (40 - 1, 40 - 1, 20 + 2, 20 + 2) * 2
        assert_eq!(cmd.quad, Rect::new(78.0, 78.0, 44.0, 44.0));
    }

    #[test]
    fn nan_radius_is_rejected() {
        let mut l = DrawList::new(RenderConfig::default());
        let center = Vec2::new(0.0, 0.0);
        let err = l.push_sphere(ZIndex(0), center, f32::NAN, Color::WHITE, Border::NONE);
        assert!(err.is_err());
    }
}
