use crate::blocks::Vertex;
use crate::coords::{Rect, Viewport};

/// Six vertices (two triangles) covering `rect`.
///
/// `rect` and `viewport` must be in the same pixel space (physical for a
/// draw command). Positions are relative to the viewport center with +Y up;
/// texture coordinates run 0..1 from the rect's top-left corner.
pub fn quad_vertices(rect: Rect, viewport: Viewport) -> [Vertex; 6] {
    let left = -viewport.width / 2.0 + rect.origin.x;
    let right = left + rect.size.x;
    let top = viewport.height / 2.0 - rect.origin.y;
    let bottom = top - rect.size.y;

    let v = |x: f32, y: f32, u: f32, t: f32| Vertex { position: [x, y], tex_coord: [u, t] };
    [
        v(right, bottom, 1.0, 1.0),
        v(left, bottom, 0.0, 1.0),
        v(left, top, 0.0, 0.0),
        v(right, bottom, 1.0, 1.0),
        v(left, top, 0.0, 0.0),
        v(right, top, 1.0, 0.0),
    ]
}
