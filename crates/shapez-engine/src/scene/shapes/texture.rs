use crate::coords::{Rect, Vec2};
use crate::error::BlockError;
use crate::schema::{Primitive, TextureRecord, TextureRounding};
use crate::scene::{DrawList, TextureSlot, ZIndex};

impl DrawList {
    /// Records a textured quad at `pos` showing a texture of `texture_size`
    /// texels, displayed at `1 / zoom` of its size.
    ///
    /// `rounding` (premultiplied input, rounded clip rect) is only available
    /// on the RZ target.
    pub fn push_texture(
        &mut self,
        z: ZIndex,
        slot: TextureSlot,
        pos: Vec2,
        texture_size: Vec2,
        zoom: f32,
        rounding: Option<TextureRounding>,
    ) -> Result<(), BlockError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            let reason = format!("zoom {zoom} must be positive");
            return Err(BlockError::invalid("MM_TEXTURE", "size", reason));
        }
        let quad = Rect::new(pos.x, pos.y, texture_size.x / zoom, texture_size.y / zoom);
        super::check_rect("MM_TEXTURE", quad)?;

        let prim = Primitive::Texture(TextureRecord {
            screen_size: self.config().physical_viewport().to_array(),
            pos: pos.to_array(),
            size: (texture_size * self.scale()).to_array(),
            rounding,
        });
        self.push_primitive(z, &prim, quad, Some(slot))
    }
}
