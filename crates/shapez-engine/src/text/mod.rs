//! Bitmap text: glyph atlas, per-character layout and run caching.
//!
//! The text shader samples one R8 atlas per font. [`GlyphAtlas`] rasterizes
//! a character set with fontdue, [`layout_text`] turns a string into one
//! text block per character.

mod atlas;
mod font;
mod layout;

pub use atlas::{FontLoadError, GlyphAtlas, GlyphMetrics};
pub use font::{BitmapFont, Glyph};
pub use layout::{layout_text, PositionedGlyph, TextRun, TextRunCache};
