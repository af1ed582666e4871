use crate::blocks::TextParams;
use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;

use super::BitmapFont;

/// One laid-out character: its quad (logical pixels) and text block.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionedGlyph {
    pub ch: char,
    pub quad: Rect,
    pub params: TextParams,
}

/// A laid-out line of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRun {
    pub glyphs: Vec<PositionedGlyph>,
    /// Total pen advance in logical pixels.
    pub advance: f32,
}

/// Lays out `text` on a single line starting at `origin` (top-left).
///
/// The pen advances by `xadvance * scale`; characters the font lacks are
/// skipped and do not advance the pen. Atlas coordinates in the block are
/// multiplied by `scale_factor`, the quads stay logical.
pub fn layout_text(
    font: &BitmapFont,
    text: &str,
    origin: Vec2,
    scale: f32,
    color: Color,
    scale_factor: f32,
) -> TextRun {
    let sf = scale_factor;
    let mut pen_x = origin.x;
    let mut glyphs = Vec::with_capacity(text.len());
    let mut missing = 0usize;

    for ch in text.chars() {
        let Some(g) = font.glyph(ch) else {
            missing += 1;
            continue;
        };

        glyphs.push(PositionedGlyph {
            ch,
            quad: Rect::new(
                pen_x + g.xoffset * scale,
                origin.y + g.yoffset * scale,
                g.width * scale,
                g.height * scale,
            ),
            params: TextParams {
                atlas_size: [font.atlas_size[0] * sf, font.atlas_size[1] * sf],
                font_pos: [g.x * sf, g.y * sf],
                font_size: [g.width * sf, g.height * sf],
                _pad: [0.0; 2],
                color: color.to_array(),
            },
        });
        pen_x += g.xadvance * scale;
    }

    if missing > 0 {
        log::warn!("text layout: {missing} character(s) of {text:?} not in font, skipped");
    }

    TextRun { glyphs, advance: pen_x - origin.x }
}

#[derive(Debug, Clone, PartialEq)]
struct RunKey {
    text: String,
    origin: Vec2,
    viewport: Viewport,
    scale: f32,
    scale_factor: f32,
    color: Color,
}

/// Keeps the last laid-out run of one label.
///
/// Re-layout happens only when the label moves, the viewport is resized, or
/// its text, scale or color change.
#[derive(Debug, Default)]
pub struct TextRunCache {
    key: Option<RunKey>,
    run: TextRun,
    hits: u64,
    misses: u64,
}

impl TextRunCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_layout(
        &mut self,
        font: &BitmapFont,
        text: &str,
        origin: Vec2,
        scale: f32,
        color: Color,
        scale_factor: f32,
        viewport: Viewport,
    ) -> &TextRun {
        let key = RunKey { text: text.to_owned(), origin, viewport, scale, scale_factor, color };
        if self.key.as_ref() == Some(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.run = layout_text(font, text, origin, scale, color, scale_factor);
            self.key = Some(key);
        }
        &self.run
    }

    /// Forces the next lookup to lay out again (e.g. after the atlas changed).
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Glyph;

    fn font() -> BitmapFont {
        let mut f = BitmapFont::new([128.0, 64.0], 12.0);
        let a = Glyph {
            x: 1.0,
            y: 2.0,
            width: 8.0,
            height: 10.0,
            xoffset: 1.0,
            yoffset: 2.0,
            xadvance: 9.0,
        };
        let b = Glyph { x: 10.0, width: 7.0, xoffset: 0.0, xadvance: 8.0, ..a };
        f.insert('A', a);
        f.insert('B', b);
        f
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn pen_advances_by_scaled_xadvance() {
        let run = layout_text(&font(), "AB", Vec2::new(10.0, 20.0), 2.0, Color::WHITE, 1.0);
        assert_eq!(run.glyphs.len(), 2);
        assert_eq!(run.glyphs[0].quad, Rect::new(12.0, 24.0, 16.0, 20.0));
        assert_eq!(run.glyphs[1].quad.origin.x, 28.0);
        assert_eq!(run.advance, 34.0);
        assert_eq!(run.advance, font().measure("AB", 2.0));
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let run = layout_text(&font(), "A?B", Vec2::new(0.0, 0.0), 1.0, Color::WHITE, 1.0);
        let chars: String = run.glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(chars, "AB");
        assert_eq!(run.glyphs[1].quad.origin.x, 9.0);
        assert_eq!(run.advance, font().measure("A?B", 1.0));
    }

    #[test]
    fn block_uses_scale_factor_not_text_scale() {
        let run = layout_text(&font(), "B", Vec2::new(0.0, 0.0), 3.0, Color::BLACK, 2.0);
        let p = run.glyphs[0].params;
        assert_eq!(p.atlas_size, [256.0, 128.0]);
        assert_eq!(p.font_pos, [20.0, 4.0]);
        assert_eq!(p.font_size, [14.0, 20.0]);
        assert_eq!(p.color, [0.0, 0.0, 0.0, 1.0]);
    }

    // ── cache ─────────────────────────────────────────────────────────────

    #[test]
    fn cache_hits_on_same_origin_and_viewport() {
        let f = font();
        let vp = Viewport::new(800.0, 600.0);
        let mut cache = TextRunCache::new();
        let at = Vec2::new(5.0, 5.0);

        cache.get_or_layout(&f, "AB", at, 1.0, Color::WHITE, 1.0, vp);
        cache.get_or_layout(&f, "AB", at, 1.0, Color::WHITE, 1.0, vp);
        assert_eq!(cache.stats(), (1, 1));

        cache.get_or_layout(&f, "AB", Vec2::new(6.0, 5.0), 1.0, Color::WHITE, 1.0, vp);
        let resized = Viewport::new(640.0, 480.0);
        cache.get_or_layout(&f, "AB", Vec2::new(6.0, 5.0), 1.0, Color::WHITE, 1.0, resized);
        assert_eq!(cache.stats(), (1, 3));
    }

    #[test]
    fn invalidate_forces_relayout() {
        let f = font();
        let mut cache = TextRunCache::new();
        let vp = Viewport::new(1.0, 1.0);
        cache.get_or_layout(&f, "A", Vec2::splat(0.0), 1.0, Color::WHITE, 1.0, vp);
        cache.invalidate();
        let run = cache.get_or_layout(&f, "A", Vec2::splat(0.0), 1.0, Color::WHITE, 1.0, vp);
        assert_eq!(run.glyphs.len(), 1);
        assert_eq!(cache.stats(), (0, 2));
    }
}
