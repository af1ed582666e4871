use crate::coords::Vec2;
use crate::error::BlockError;
use crate::paint::Color;
use crate::schema::Primitive;
use crate::scene::{DrawList, TextureSlot, ZIndex};
use crate::text::{layout_text, BitmapFont, TextRun};

impl DrawList {
    /// Records one text draw per glyph of an already laid-out run.
    ///
    /// The run must have been laid out with this list's scale factor.
    pub fn push_text_run(&mut self, z: ZIndex, run: &TextRun) -> Result<(), BlockError> {
        for glyph in &run.glyphs {
            let prim = Primitive::Text(glyph.params);
            self.push_primitive(z, &prim, glyph.quad, Some(TextureSlot::FontAtlas))?;
        }
        Ok(())
    }

    /// Lays out `text` at `origin` and records it.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        font: &BitmapFont,
        text: &str,
        origin: Vec2,
        scale: f32,
        color: Color,
    ) -> Result<(), BlockError> {
        let run = layout_text(font, text, origin, scale, color, self.scale());
        self.push_text_run(z, &run)
    }
}
