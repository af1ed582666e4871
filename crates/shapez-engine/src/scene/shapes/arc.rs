use crate::blocks::ArcParams;
use crate::coords::{Rect, Vec2};
use crate::error::BlockError;
use crate::paint::Color;
use crate::schema::Primitive;
use crate::scene::{DrawList, ZIndex};

impl DrawList {
    /// Records a ring segment around `center`, symmetric about the vertical
    /// axis, spanning `aperture` radians. RZ only.
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        thickness: f32,
        aperture: f32,
        color: Color,
    ) -> Result<(), BlockError> {
        if !aperture.is_finite() {
            return Err(BlockError::invalid("MM_ARC", "sc", "aperture is not finite"));
        }
        let half = aperture.clamp(0.0, core::f32::consts::TAU) / 2.0;
        if half * 2.0 != aperture {
            log::debug!("arc aperture {aperture} clamped to [0, 2π]");
        }

        let s = self.scale();
        let extent = radius + thickness;
        let quad = Rect::new(center.x - extent, center.y - extent, extent * 2.0, extent * 2.0);
        super::check_rect("MM_ARC", quad)?;

        let prim = Primitive::Arc(ArcParams {
            sc: [half.sin(), half.cos()],
            r: [radius * s, thickness * s],
            color: color.to_array(),
        });
        self.push_primitive(z, &prim, quad, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::schema::Target;

    #[test]
    fn half_circle_arc() {
        let config = RenderConfig::default().with_target(Target::Rz).with_scale_factor(2.0);
        let mut l = DrawList::new(config);
        l.push_arc(ZIndex(0), Vec2::new(20.0, 20.0), 8.0, 2.0, core::f32::consts::PI, Color::WHITE)
            .unwrap();

        let cmd = &l.items()[0].cmd;
        let f: &[f32] = bytemuck::cast_slice(&cmd.block.bytes);
        assert!((f[0] - 1.0).abs() < 1e-6);
        assert!(f[1].abs() < 1e-6);
        assert_eq!(&f[2..4], &[16.0, 4.0]);
        assert_eq!(cmd.quad, Rect::new(20.0, 20.0, 40.0, 40.0));
    }

    #[test]
    fn arc_is_unsupported_on_main() {
        let mut l = DrawList::new(RenderConfig::default());
        let err = l.push_arc(ZIndex(0), Vec2::new(0.0, 0.0), 1.0, 1.0, 1.0, Color::WHITE);
        assert!(matches!(err, Err(BlockError::Unsupported { .. })));
    }
}
