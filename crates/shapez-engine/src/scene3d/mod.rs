//! Blocks of the 3D ray-marching pipeline.
//!
//! Objects are marched inside an oriented bounding box; [`BoundingFrame`]
//! precomputes the box frame the fragment shader needs, [`CameraUniforms`]
//! fills the per-object blocks, [`LightSet`] the fixed light array.

mod bbox;
mod camera;
mod gizmo;
mod lights;
mod spheres;

pub use bbox::{BoundingFrame, ObjectTransform};
pub use camera::{Camera, CameraUniforms};
pub use gizmo::{GizmoHover, GizmoState, LockedAxes};
pub use lights::LightSet;
pub use spheres::{contact_spheres, sphere_stream, ColoredSphere, ObjectSpheres};
