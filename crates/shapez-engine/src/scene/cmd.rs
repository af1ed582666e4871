use crate::blocks::Vertex;
use crate::coords::{Rect, Viewport};
use crate::schema::{EncodedBlock, PipelineKind};

use super::quad_vertices;

/// Texture a draw command samples, if any.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TextureSlot {
    /// The glyph atlas of the active bitmap font.
    FontAtlas,
    /// Caller-managed texture, identified by an opaque handle.
    Image(u32),
}

/// One quad draw: the fragment program, its quad and its parameter block.
///
/// `quad` is in physical pixels; the block bytes are copied into the
/// fragment buffer unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub pipeline: PipelineKind,
    pub quad: Rect,
    pub block: EncodedBlock,
    pub texture: Option<TextureSlot>,
}

impl DrawCmd {
    /// Vertex data for this command in a viewport of `physical` size.
    #[inline]
    pub fn vertices(&self, physical: Viewport) -> [Vertex; 6] {
        quad_vertices(self.quad, physical)
    }
}
