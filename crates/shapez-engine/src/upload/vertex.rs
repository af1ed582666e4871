use crate::blocks::Vertex;
use crate::coords::Viewport;
use crate::scene::DrawList;

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    /// Vertex buffer layout of `MM_Vertex`: position at location 0, texture
    /// coordinate at location 1.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: core::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Vertices of every item of `list`, six per item, in paint order.
pub fn frame_vertices(list: &mut DrawList) -> Vec<Vertex> {
    let physical: Viewport = list.config().physical_viewport();
    let mut out = Vec::with_capacity(list.len() * 6);
    for item in list.iter_in_paint_order() {
        out.extend_from_slice(&item.cmd.vertices(physical));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::{Border, ZIndex};

    #[test]
    fn layout_matches_block() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 16);
        assert_eq!(layout.attributes[1].offset, 8);
    }

    #[test]
    fn six_vertices_per_item_in_paint_order() {
        let config = RenderConfig::default().with_viewport(Viewport::new(100.0, 100.0));
        let mut list = DrawList::new(config);
        let center = Vec2::new(50.0, 50.0);
        list.push_sphere(ZIndex(1), center, 5.0, Color::WHITE, Border::NONE).unwrap();
        let full = Rect::new(0.0, 0.0, 100.0, 100.0);
        list.push_color_wheel(ZIndex(0), full, Color::WHITE).unwrap();

        let verts = frame_vertices(&mut list);
        assert_eq!(verts.len(), 12);
        // the full-screen wheel (z 0) comes first
        assert_eq!(verts[2].position, [-50.0, 50.0]);
        assert_eq!(verts[8].position, [-5.0, 5.0]);
    }
}
