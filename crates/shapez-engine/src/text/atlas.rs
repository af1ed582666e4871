use std::fmt;

use super::{BitmapFont, Glyph};

const DEFAULT_ATLAS_SIZE: u32 = 1024;
const GLYPH_PADDING: u32 = 1; // texels between glyphs

/// Error returned by [`GlyphAtlas::rasterize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Single-channel (R8) glyph atlas plus the metrics of every packed glyph.
///
/// Glyphs are packed on shelves: left to right along the current row, a new
/// row once the next glyph does not fit horizontally.
pub struct GlyphAtlas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    font: BitmapFont,

    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
}

/// Placement metrics of a rasterized glyph, in pixels at raster size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphMetrics {
    pub xoffset: f32,
    pub yoffset: f32,
    pub xadvance: f32,
}

/// Byte length of a `w × h` single-channel image, `None` on overflow.
#[inline]
fn texel_count(w: u32, h: u32) -> Option<usize> {
    (w as usize).checked_mul(h as usize)
}

impl GlyphAtlas {
    /// Empty atlas of `width × height` texels.
    ///
    /// Both sides must be non-zero and within the default wgpu 2D texture
    /// limit, since the atlas is uploaded as one texture.
    pub fn new(width: u32, height: u32, line_height: f32) -> Result<Self, FontLoadError> {
        let max = wgpu::Limits::default().max_texture_dimension_2d;
        let len = texel_count(width, height)
            .filter(|_| (1..=max).contains(&width) && (1..=max).contains(&height))
            .ok_or_else(|| FontLoadError(format!("atlas {width}×{height} exceeds 1..={max}")))?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
            font: BitmapFont::new([width as f32, height as f32], line_height),
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
        })
    }

    /// Rasterizes `charset` from a TrueType/OpenType font at `px` pixels.
    ///
    /// Characters the font has no glyph for are skipped with a warning.
    pub fn rasterize(
        font_bytes: &[u8],
        px: f32,
        charset: impl IntoIterator<Item = char>,
    ) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(font_bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;

        let line = font
            .horizontal_line_metrics(px)
            .ok_or_else(|| FontLoadError("font has no horizontal metrics".into()))?;

        let mut atlas = Self::new(DEFAULT_ATLAS_SIZE, DEFAULT_ATLAS_SIZE, line.new_line_size)?;
        let mut skipped = 0usize;

        for ch in charset {
            if font.lookup_glyph_index(ch) == 0 && !ch.is_whitespace() {
                skipped += 1;
                continue;
            }
            let (m, bitmap) = font.rasterize(ch, px);
            let metrics = GlyphMetrics {
                xoffset: m.xmin as f32,
                // distance from the top of the line to the top of the bitmap
                yoffset: line.ascent - (m.ymin as f32 + m.height as f32),
                xadvance: m.advance_width,
            };
            atlas.insert(ch, &bitmap, m.width as u32, m.height as u32, metrics)?;
        }

        if skipped > 0 {
            log::warn!("glyph atlas: {skipped} character(s) missing from font");
        }
        log::debug!(
            "glyph atlas: {} glyphs at {px}px, {}×{} texels",
            atlas.font.glyphs.len(),
            atlas.width,
            atlas.height
        );
        Ok(atlas)
    }

    /// Copies a `w × h` coverage bitmap into the atlas and records its glyph.
    ///
    /// Empty bitmaps (spaces) only record metrics.
    pub fn insert(
        &mut self,
        ch: char,
        bitmap: &[u8],
        w: u32,
        h: u32,
        metrics: GlyphMetrics,
    ) -> Result<(), FontLoadError> {
        let expected = texel_count(w, h)
            .ok_or_else(|| FontLoadError(format!("glyph {ch:?} of {w}×{h} is too large")))?;
        if bitmap.len() != expected {
            let got = bitmap.len();
            let reason = format!("bitmap for {ch:?} has {got} bytes, expected {expected}");
            return Err(FontLoadError(reason));
        }

        let (gx, gy) = if w == 0 || h == 0 {
            (0, 0)
        } else {
            let (gx, gy) = self.place(w, h).ok_or_else(|| {
                FontLoadError(format!("atlas {}×{} is full at {ch:?}", self.width, self.height))
            })?;
            let (w, stride) = (w as usize, self.width as usize);
            for (row, src) in bitmap.chunks_exact(w).enumerate() {
                let dst = (gy as usize + row) * stride + gx as usize;
                self.pixels[dst..dst + w].copy_from_slice(src);
            }
            (gx, gy)
        };

        self.font.insert(
            ch,
            Glyph {
                x: gx as f32,
                y: gy as f32,
                width: w as f32,
                height: h as f32,
                xoffset: metrics.xoffset,
                yoffset: metrics.yoffset,
                xadvance: metrics.xadvance,
            },
        );
        Ok(())
    }

    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        // u64 so oversized glyphs fail the bounds check instead of wrapping
        let fits = |cursor: u32, len: u32, limit: u32| {
            u64::from(cursor) + u64::from(len) + u64::from(GLYPH_PADDING) <= u64::from(limit)
        };
        // Advance to a new shelf row when the glyph doesn't fit horizontally.
        if !fits(self.cursor_x, w, self.width) {
            self.cursor_y = self.cursor_y.saturating_add(self.row_height + GLYPH_PADDING);
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if !fits(self.cursor_x, w, self.width) || !fits(self.cursor_y, h, self.height) {
            return None;
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(pos)
    }

    #[inline]
    pub fn font(&self) -> &BitmapFont {
        &self.font
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Uploads the atlas as an `R8Unorm` texture.
    pub fn create_texture(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::Texture {
        let size =
            wgpu::Extent3d { width: self.width, height: self.height, depth_or_array_layers: 1 };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("shapez glyph atlas"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.width),
                rows_per_image: Some(self.height),
            },
            size,
        );
        texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(adv: f32) -> GlyphMetrics {
        GlyphMetrics { xoffset: 0.0, yoffset: 0.0, xadvance: adv }
    }

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn glyphs_pack_left_to_right_then_wrap() {
        let mut atlas = GlyphAtlas::new(16, 16, 10.0).unwrap();
        atlas.insert('a', &[255; 6 * 4], 6, 4, metrics(6.0)).unwrap();
        atlas.insert('b', &[255; 6 * 5], 6, 5, metrics(6.0)).unwrap();
        // 1 + 6 + 1 + 6 + 1 = 15; a third 6-wide glyph wraps
        atlas.insert('c', &[255; 6 * 3], 6, 3, metrics(6.0)).unwrap();

        let f = atlas.font();
        assert_eq!((f.glyph('a').unwrap().x, f.glyph('a').unwrap().y), (1.0, 1.0));
        assert_eq!((f.glyph('b').unwrap().x, f.glyph('b').unwrap().y), (8.0, 1.0));
        assert_eq!((f.glyph('c').unwrap().x, f.glyph('c').unwrap().y), (1.0, 7.0));
    }

    #[test]
    fn bitmap_rows_are_copied() {
        let mut atlas = GlyphAtlas::new(8, 8, 4.0).unwrap();
        atlas.insert('x', &[1, 2, 3, 4], 2, 2, metrics(2.0)).unwrap();
        let px = atlas.pixels();
        assert_eq!(&px[9..11], &[1, 2]);
        assert_eq!(&px[17..19], &[3, 4]);
    }

    #[test]
    fn full_atlas_is_an_error() {
        let mut atlas = GlyphAtlas::new(8, 8, 4.0).unwrap();
        assert!(atlas.insert('a', &[0; 36], 6, 6, metrics(6.0)).is_ok());
        assert!(atlas.insert('b', &[0; 36], 6, 6, metrics(6.0)).is_err());
    }

    #[test]
    fn space_records_advance_only() {
        let mut atlas = GlyphAtlas::new(8, 8, 4.0).unwrap();
        atlas.insert(' ', &[], 0, 0, metrics(3.0)).unwrap();
        let g = atlas.font().glyph(' ').unwrap();
        assert_eq!((g.width, g.xadvance), (0.0, 3.0));
    }

    #[test]
    fn oversized_requests_are_errors() {
        assert!(GlyphAtlas::new(u32::MAX, u32::MAX, 4.0).is_err());
        assert!(GlyphAtlas::new(65_536, 65_536, 4.0).is_err());
        assert!(GlyphAtlas::new(0, 8, 4.0).is_err());
        let mut atlas = GlyphAtlas::new(8, 8, 4.0).unwrap();
        // 65536 × 65536 wraps to 0 in u32 arithmetic
        assert!(atlas.insert('a', &[], 65_536, 65_536, metrics(1.0)).is_err());
        assert!(atlas.insert('b', &[0; 4], u32::MAX, 1, metrics(1.0)).is_err());
        assert!(atlas.font().glyph('a').is_none());
    }

    // ── loading ───────────────────────────────────────────────────────────

    #[test]
    fn garbage_bytes_fail_to_load() {
        assert!(GlyphAtlas::rasterize(b"not a font", 16.0, 'a'..='z').is_err());
    }
}
