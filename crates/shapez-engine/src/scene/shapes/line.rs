use crate::blocks::{LineParams, SplineParams};
use crate::coords::{Rect, Vec2};
use crate::error::BlockError;
use crate::paint::Color;
use crate::schema::Primitive;
use crate::scene::{DrawList, ZIndex};

use super::{check_points, Border};

/// Which side of a spline the shader fills.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SplineFill {
    #[default]
    None,
    Below,
    Above,
}

/// Bounding box of `points` grown by `pad` on every side.
fn padded_bounds(points: &[Vec2], pad: f32) -> Rect {
    let (mut min, mut max) = (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN));
    for p in points {
        min = min.min(*p);
        max = max.max(*p);
    }
    Rect::new(min.x - pad, min.y - pad, max.x - min.x + 2.0 * pad, max.y - min.y + 2.0 * pad)
}

impl DrawList {
    /// Records a straight stroke from `start` to `end`.
    ///
    /// `width` is measured from the center line; the quad is the points'
    /// bounding box grown by `width + border / 2`, and the end points are
    /// sent relative to it.
    pub fn push_line(
        &mut self,
        z: ZIndex,
        start: Vec2,
        end: Vec2,
        width: f32,
        fill: Color,
        border: Border,
    ) -> Result<(), BlockError> {
        check_points("MM_LINE", &[start, end])?;
        let s = self.scale();
        let quad = padded_bounds(&[start, end], width + border.width / 2.0);

        let prim = Primitive::Line(LineParams {
            size: (quad.size * s).to_array(),
            sp: ((start - quad.origin) * s).to_array(),
            ep: ((end - quad.origin) * s).to_array(),
            width: width * s,
            border_size: border.width,
            fill_color: fill.to_array(),
            border_color: border.color.to_array(),
        });
        self.push_primitive(z, &prim, quad, None)
    }

    /// Records a quadratic spline through `start`, bending toward `control`,
    /// ending in `end`. RZ only.
    pub fn push_spline(
        &mut self,
        z: ZIndex,
        [start, control, end]: [Vec2; 3],
        width: f32,
        fill: Color,
        border: Border,
        area: SplineFill,
    ) -> Result<(), BlockError> {
        check_points("MM_SPLINE", &[start, control, end])?;
        let s = self.scale();
        let quad = padded_bounds(&[start, control, end], width + border.width / 2.0);
        let rel = |p: Vec2| ((p - quad.origin) * s).to_array();

        let prim = Primitive::Spline(SplineParams {
            size: (quad.size * s).to_array(),
            sp: rel(start),
            cp: rel(control),
            ep: rel(end),
            width: width * s,
            border_size: border.width,
            fill1: if area == SplineFill::Below { 1.0 } else { 0.0 },
            fill2: if area == SplineFill::Above { 1.0 } else { 0.0 },
            fill_color: fill.to_array(),
            border_color: border.color.to_array(),
        });
        self.push_primitive(z, &prim, quad, None)
    }
}
