use std::collections::HashMap;

/// One character of a bitmap font, in atlas texels.
///
/// `x, y, width, height` locate the glyph in the atlas; `xoffset` and
/// `yoffset` place it relative to the pen (top of the line), and
/// `xadvance` moves the pen to the next character.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Glyph {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub xoffset: f32,
    pub yoffset: f32,
    pub xadvance: f32,
}

/// Character metrics for a single glyph atlas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BitmapFont {
    /// Atlas texture size in texels.
    pub atlas_size: [f32; 2],
    pub line_height: f32,
    pub glyphs: HashMap<char, Glyph>,
}

impl BitmapFont {
    pub fn new(atlas_size: [f32; 2], line_height: f32) -> Self {
        Self { atlas_size, line_height, glyphs: HashMap::new() }
    }

    #[inline]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn insert(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch, glyph);
    }

    /// Pen advance of `text` at `scale`, skipping characters the font lacks.
    pub fn measure(&self, text: &str, scale: f32) -> f32 {
        text.chars().filter_map(|c| self.glyph(c)).map(|g| g.xadvance * scale).sum()
    }
}
