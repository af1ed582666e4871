use crate::blocks::{BoxGradientParams, BoxedMenuParams};
use crate::coords::Rect;
use crate::error::BlockError;
use crate::paint::{Color, Paint};
use crate::schema::{BoxRecord, Primitive};
use crate::scene::{DrawList, ZIndex};

use super::{check_rect, Border};

impl DrawList {
    /// Records a rounded box filled with `paint`.
    ///
    /// A gradient paint switches to the gradient block, whose colors are
    /// always opaque. `round` and the border width are passed through
    /// unscaled; the shader works on them in its own units.
    pub fn push_box(
        &mut self,
        z: ZIndex,
        rect: Rect,
        round: f32,
        paint: &Paint,
        border: Border,
    ) -> Result<(), BlockError> {
        let (block, prim) = match paint {
            Paint::Solid(fill) => {
                let record = BoxRecord {
                    size: (rect.size * self.scale()).to_array(),
                    round,
                    border_size: border.width,
                    fill_color: fill.to_array(),
                    border_color: border.color.to_array(),
                    rotation: None,
                };
                ("MM_BOX", Primitive::Box(record))
            }
            Paint::LinearGradient(gradient) => {
                let (from, to) = gradient.endpoint_colors().ok_or_else(|| {
                    BlockError::invalid(
                        "MM_BOX_GRADIENT",
                        "gradientColor1",
                        "gradient has no stops",
                    )
                })?;
                let params = BoxGradientParams {
                    size: (rect.size * self.scale()).to_array(),
                    round,
                    border_size: border.width,
                    uv1: gradient.start.to_array(),
                    uv2: gradient.end.to_array(),
                    gradient_color1: from.opaque().to_array(),
                    gradient_color2: to.opaque().to_array(),
                    border_color: border.color.to_array(),
                };
                ("MM_BOX_GRADIENT", Primitive::BoxGradient(params))
            }
        };
        self.push_bordered(z, block, &prim, rect, border)
    }

    /// Records a box with three horizontal bars (menu button).
    pub fn push_boxed_menu(
        &mut self,
        z: ZIndex,
        rect: Rect,
        round: f32,
        fill: Color,
        border: Border,
    ) -> Result<(), BlockError> {
        let prim = Primitive::BoxedMenu(BoxedMenuParams {
            size: (rect.size * self.scale()).to_array(),
            round,
            border_size: border.width,
            fill_color: fill.to_array(),
            border_color: border.color.to_array(),
        });
        self.push_bordered(z, "MM_BOXEDMENU", &prim, rect, border)
    }

    /// Records a box rotated by `angle` radians around its center.
    ///
    /// Only the RZ target has the rotated box block; on Main this fails with
    /// [`BlockError::Unsupported`].
    pub fn push_rotated_box(
        &mut self,
        z: ZIndex,
        rect: Rect,
        round: f32,
        fill: Color,
        border: Border,
        angle: f32,
    ) -> Result<(), BlockError> {
        if !angle.is_finite() {
            return Err(BlockError::invalid("MM_ROTATEDBOX", "rotation", "angle is not finite"));
        }
        let prim = Primitive::Box(BoxRecord {
            size: (rect.size * self.scale()).to_array(),
            round,
            border_size: border.width,
            fill_color: fill.to_array(),
            border_color: border.color.to_array(),
            rotation: Some(angle),
        });
        self.push_bordered(z, "MM_ROTATEDBOX", &prim, rect, border)
    }

    /// Quad grown by the border width so the stroke straddling the edge is
    /// covered.
    pub(crate) fn push_bordered(
        &mut self,
        z: ZIndex,
        block: &'static str,
        prim: &Primitive,
        rect: Rect,
        border: Border,
    ) -> Result<(), BlockError> {
        check_rect(block, rect)?;
        self.push_primitive(z, prim, rect.expanded(border.width), None)
    }
}
