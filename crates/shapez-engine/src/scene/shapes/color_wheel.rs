use crate::blocks::ColorWheelParams;
use crate::coords::Rect;
use crate::error::BlockError;
use crate::paint::Color;
use crate::schema::Primitive;
use crate::scene::{DrawList, ZIndex};

impl DrawList {
    /// Records a hue/saturation wheel filling `rect`; `color` is the
    /// currently picked value the shader marks.
    pub fn push_color_wheel(
        &mut self,
        z: ZIndex,
        rect: Rect,
        color: Color,
    ) -> Result<(), BlockError> {
        super::check_rect("MM_COLORWHEEL", rect)?;
        let prim = Primitive::ColorWheel(ColorWheelParams {
            size: (rect.size * self.scale()).to_array(),
            _pad: [0.0; 2],
            color: color.to_array(),
        });
        self.push_primitive(z, &prim, rect, None)
    }
}
