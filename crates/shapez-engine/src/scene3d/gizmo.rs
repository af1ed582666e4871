use glam::Vec3;

use crate::blocks::Gizmo3D;
use crate::coords::Rect;

use super::{BoundingFrame, Camera};

/// Edge length of the cube the gizmo is ray-marched in.
const GIZMO_EXTENT: f32 = 1.5;

/// Gizmo handle under the cursor (or being dragged).
///
/// The discriminant is what the shader receives in `hoverState`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum GizmoHover {
    #[default]
    Inactive = 0,
    CenterMove,
    XAxisMove,
    YAxisMove,
    ZAxisMove,
    XAxisRotate,
    YAxisRotate,
    ZAxisRotate,
    XAxisScale,
    YAxisScale,
    ZAxisScale,
    XyzAxisScale,
}

impl GizmoHover {
    #[inline]
    pub fn shader_value(self) -> f32 {
        self as u8 as f32
    }
}

/// Axes whose scale handle is locked, as a bit set.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct LockedAxes(pub u8);

impl LockedAxes {
    pub const NONE: LockedAxes = LockedAxes(0);
    pub const X: LockedAxes = LockedAxes(1);
    pub const Y: LockedAxes = LockedAxes(2);
    pub const Z: LockedAxes = LockedAxes(4);

    #[inline]
    pub const fn with(self, other: LockedAxes) -> Self {
        LockedAxes(self.0 | other.0)
    }
}

/// State of the 3D transform gizmo for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GizmoState {
    pub hover: GizmoHover,
    pub locked: LockedAxes,
    /// World position of the manipulated object.
    pub position: Vec3,
    /// Rotation in degrees.
    pub rotation: Vec3,
    /// Parent pivot the position is relative to.
    pub pivot: Vec3,
}

impl GizmoState {
    /// Encodes the gizmo block for a gizmo drawn in `rect` (physical pixels).
    pub fn to_block(&self, camera: &Camera, rect: Rect) -> Gizmo3D {
        let frame = BoundingFrame::from_box(
            self.position - Vec3::splat(GIZMO_EXTENT / 2.0),
            Vec3::splat(GIZMO_EXTENT),
            self.rotation,
        );

        Gizmo3D {
            size: rect.size.to_array(),
            hover_state: self.hover.shader_value(),
            locked_scale_axes: self.locked.0 as f32,
            origin: camera.origin.extend(camera.fov).to_array(),
            look_at: camera.look_at.extend(0.0).to_array(),
            position: self.position.extend(0.0).to_array(),
            rotation: self.rotation.extend(0.0).to_array(),
            pivot: self.pivot.extend(0.0).to_array(),
            p: frame.p.to_array(),
            l: frame.l.to_array(),
            f: frame.f_columns(),
            ..Gizmo3D::default()
        }
    }
}
