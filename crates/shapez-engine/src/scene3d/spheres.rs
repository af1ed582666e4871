use glam::{Vec3, Vec4};

use crate::blocks::SphereUniforms;
use crate::error::BlockError;
use crate::paint::Color;

/// Collision spheres of one object, relative to its position.
///
/// Each sphere is `(x, y, z, radius)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSpheres {
    pub position: Vec3,
    pub spheres: Vec<Vec4>,
}

/// Flattens the spheres of several objects into world space.
///
/// Returns the header block (count, plus the position and rotation of the
/// object being tested) and the sphere buffer it describes.
pub fn contact_spheres(
    objects: &[ObjectSpheres],
    position: Vec3,
    rotation: Vec3,
) -> (SphereUniforms, Vec<[f32; 4]>) {
    let data: Vec<[f32; 4]> = objects
        .iter()
        .flat_map(|o| o.spheres.iter().map(move |s| (*s + o.position.extend(0.0)).to_array()))
        .collect();

    let header = SphereUniforms {
        number_of_spheres: data.len() as i32,
        position: position.to_array(),
        rotation: rotation.to_array(),
        ..SphereUniforms::default()
    };
    (header, data)
}

/// A sphere for the preview ray marcher.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColoredSphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
}

/// Interleaved `[center + radius, color]` pairs closed by a negative-radius
/// sentinel, the buffer the sphere preview shader walks.
///
/// A negative radius in the input would end the walk early and is rejected.
pub fn sphere_stream(spheres: &[ColoredSphere]) -> Result<Vec<[f32; 4]>, BlockError> {
    let mut out = Vec::with_capacity(spheres.len() * 2 + 1);
    for (i, s) in spheres.iter().enumerate() {
        if s.radius.is_nan() || s.radius < 0.0 {
            return Err(BlockError::invalid(
                "spheres",
                "posAndRadius",
                format!("sphere {i} has radius {}", s.radius),
            ));
        }
        out.push(s.center.extend(s.radius).to_array());
        out.push(s.color.to_array());
    }
    out.push([0.0, 0.0, 0.0, -1.0]);
    Ok(out)
}
