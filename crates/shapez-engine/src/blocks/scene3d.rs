//! 3D pipeline blocks: camera/object uniforms, lights, spheres, gizmo.
//!
//! `float3` members occupy 16 bytes on the shader side, so each `[f32; 3]`
//! here is followed by one padding float.

use bytemuck::{Pod, Zeroable};

use crate::layout::{uniform_block, FieldKind};

/// Number of light slots in [`LightUniforms`], independent of the active count.
pub const MAX_LIGHTS: usize = 10;

/// Per-object transform state for the vertex stage.
///
/// Matrices are column-major (`[column][row]`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ObjectVertexUniforms {
    pub model_matrix: [[f32; 4]; 4],
    pub view_matrix: [[f32; 4]; 4],
    pub projection_matrix: [[f32; 4]; 4],
}

uniform_block!(ObjectVertexUniforms, "ObjectVertexUniforms", {
    "modelMatrix" => model_matrix: FieldKind::Float4x4,
    "viewMatrix" => view_matrix: FieldKind::Float4x4,
    "projectionMatrix" => projection_matrix: FieldKind::Float4x4,
});

/// Per-object fragment state, main target: camera plus bounding-box pose.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ObjectFragmentUniforms {
    pub camera_origin: [f32; 3],
    pub _pad0: f32,
    pub camera_look_at: [f32; 3],
    pub _pad1: f32,
    pub screen_size: [f32; 2],
    pub _pad2: [f32; 2],
    pub bbox_pos: [f32; 3],
    pub _pad3: f32,
    pub bbox_size: [f32; 3],
    pub _pad4: f32,
    pub bbox_rotation: [f32; 3],
    pub _pad5: f32,
    pub max_distance: f32,
    pub _pad6: [f32; 3],
}

uniform_block!(ObjectFragmentUniforms, "ObjectFragmentUniforms", {
    "cameraOrigin" => camera_origin: FieldKind::Float3,
    "cameraLookAt" => camera_look_at: FieldKind::Float3,
    "screenSize" => screen_size: FieldKind::Float2,
    "bboxPos" => bbox_pos: FieldKind::Float3,
    "bboxSize" => bbox_size: FieldKind::Float3,
    "bboxRotation" => bbox_rotation: FieldKind::Float3,
    "maxDistance" => max_distance: FieldKind::Float,
});

/// Per-object fragment state, RZ target: camera only.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RzObjectFragmentUniforms {
    pub camera_origin: [f32; 3],
    pub _pad0: f32,
    pub camera_look_at: [f32; 3],
    pub _pad1: f32,
    pub screen_size: [f32; 2],
    pub max_distance: f32,
    pub _pad2: f32,
}

uniform_block!(RzObjectFragmentUniforms, "ObjectFragmentUniforms", {
    "cameraOrigin" => camera_origin: FieldKind::Float3,
    "cameraLookAt" => camera_look_at: FieldKind::Float3,
    "screenSize" => screen_size: FieldKind::Float2,
    "maxDistance" => max_distance: FieldKind::Float,
});

/// Fragment state of the ray-traced object pass.
///
/// The bounding box is passed as an oriented frame: `p` is the rotated min
/// corner, `l` the axis lengths and `f` the inverse-scaled axes (columns).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct FragmentUniforms {
    pub camera_origin: [f32; 3],
    pub _pad0: f32,
    pub camera_look_at: [f32; 3],
    pub _pad1: f32,
    pub screen_size: [f32; 2],
    pub _pad2: [f32; 2],
    pub ambient_color: [f32; 4],
    pub p: [f32; 3],
    pub _pad3: f32,
    pub l: [f32; 3],
    pub _pad4: f32,
    pub f: [[f32; 4]; 3],
    pub max_distance: f32,
    pub _pad5: [f32; 3],
}

uniform_block!(FragmentUniforms, "FragmentUniforms", {
    "cameraOrigin" => camera_origin: FieldKind::Float3,
    "cameraLookAt" => camera_look_at: FieldKind::Float3,
    "screenSize" => screen_size: FieldKind::Float2,
    "ambientColor" => ambient_color: FieldKind::Float4,
    "P" => p: FieldKind::Float3,
    "L" => l: FieldKind::Float3,
    "F" => f: FieldKind::Float3x3,
    "maxDistance" => max_distance: FieldKind::Float,
});

/// One light slot.
///
/// `light_type` 0 is the sun (`direction_to_light` is a direction), 1 is a
/// point light (`direction_to_light.xyz` is its position, `w = 1`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Light {
    pub light_type: i32,
    pub _pad: [i32; 3],
    pub light_color: [f32; 4],
    pub direction_to_light: [f32; 4],
}

uniform_block!(Light, "Light", {
    "lightType" => light_type: FieldKind::Int,
    "lightColor" => light_color: FieldKind::Float4,
    "directionToLight" => direction_to_light: FieldKind::Float4,
});

/// Fixed block of [`MAX_LIGHTS`] light slots plus the active count.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct LightUniforms {
    pub number_of_lights: i32,
    pub _pad: [i32; 3],
    pub lights: [Light; MAX_LIGHTS],
}

uniform_block!(LightUniforms, "LightUniforms", {
    "numberOfLights" => number_of_lights: FieldKind::Int,
    "lights" => lights: FieldKind::Array(&FieldKind::Block(&Light::LAYOUT), MAX_LIGHTS),
});

/// Placement of a sphere set for the contact kernel.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SphereUniforms {
    pub number_of_spheres: i32,
    pub _pad0: [i32; 3],
    pub position: [f32; 3],
    pub _pad1: f32,
    pub rotation: [f32; 3],
    pub _pad2: f32,
}

uniform_block!(SphereUniforms, "SphereUniforms", {
    "numberOfSpheres" => number_of_spheres: FieldKind::Int,
    "position" => position: FieldKind::Float3,
    "rotation" => rotation: FieldKind::Float3,
});

/// On-screen 3D manipulator state (`GIZMO3D`).
///
/// `origin.w` carries the camera field of view in degrees.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Gizmo3D {
    pub size: [f32; 2],
    pub hover_state: f32,
    pub locked_scale_axes: f32,
    pub origin: [f32; 4],
    pub look_at: [f32; 4],
    pub position: [f32; 4],
    pub rotation: [f32; 4],
    pub pivot: [f32; 4],
    pub p: [f32; 3],
    pub _pad0: f32,
    pub l: [f32; 3],
    pub _pad1: f32,
    pub f: [[f32; 4]; 3],
}

uniform_block!(Gizmo3D, "GIZMO3D", {
    "size" => size: FieldKind::Float2,
    "hoverState" => hover_state: FieldKind::Float,
    "lockedScaleAxes" => locked_scale_axes: FieldKind::Float,
    "origin" => origin: FieldKind::Float4,
    "lookAt" => look_at: FieldKind::Float4,
    "position" => position: FieldKind::Float4,
    "rotation" => rotation: FieldKind::Float4,
    "pivot" => pivot: FieldKind::Float4,
    "P" => p: FieldKind::Float3,
    "L" => l: FieldKind::Float3,
    "F" => f: FieldKind::Float3x3,
});

const _: () = assert!(core::mem::size_of::<ObjectVertexUniforms>() == 192);
const _: () = assert!(core::mem::size_of::<ObjectFragmentUniforms>() == 112);
const _: () = assert!(core::mem::size_of::<RzObjectFragmentUniforms>() == 48);
const _: () = assert!(core::mem::size_of::<FragmentUniforms>() == 160);
const _: () = assert!(core::mem::size_of::<Light>() == 48);
const _: () = assert!(core::mem::size_of::<LightUniforms>() == 496);
const _: () = assert!(core::mem::size_of::<SphereUniforms>() == 48);
const _: () = assert!(core::mem::size_of::<Gizmo3D>() == 176);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::UniformBlock;

    #[test]
    fn scene_blocks_follow_placement_rules() {
        for layout in [
            ObjectVertexUniforms::LAYOUT,
            ObjectFragmentUniforms::LAYOUT,
            RzObjectFragmentUniforms::LAYOUT,
            FragmentUniforms::LAYOUT,
            Light::LAYOUT,
            LightUniforms::LAYOUT,
            SphereUniforms::LAYOUT,
            Gizmo3D::LAYOUT,
        ] {
            assert_eq!(layout.verify(), Ok(()), "{}", layout.name);
        }
    }

    #[test]
    fn light_block_always_reserves_ten_slots() {
        let lights = LightUniforms::LAYOUT.field("lights").map(|f| (f.offset, f.size()));
        assert_eq!(lights, Some((16, 10 * 48)));

        let mut block = LightUniforms::default();
        block.number_of_lights = 1;
        assert_eq!(block.as_bytes().len(), 496);
    }

    #[test]
    fn main_fragment_offsets() {
        assert_eq!(
            ObjectFragmentUniforms::LAYOUT.check_offsets(
                &[
                    ("cameraOrigin", 0),
                    ("cameraLookAt", 16),
                    ("screenSize", 32),
                    ("bboxPos", 48),
                    ("bboxSize", 64),
                    ("bboxRotation", 80),
                    ("maxDistance", 96),
                ],
                112,
            ),
            Ok(())
        );
    }

    #[test]
    fn rz_fragment_packs_max_distance_after_screen_size() {
        let max_distance = RzObjectFragmentUniforms::LAYOUT.field("maxDistance");
        assert_eq!(max_distance.map(|f| f.offset), Some(40));
        assert_eq!(RzObjectFragmentUniforms::LAYOUT.size, 48);
    }

    #[test]
    fn gizmo_frame_offsets() {
        let g = Gizmo3D::LAYOUT;
        assert_eq!(g.field("P").map(|f| f.offset), Some(96));
        assert_eq!(g.field("L").map(|f| f.offset), Some(112));
        assert_eq!(g.field("F").map(|f| f.offset), Some(128));
    }

    #[test]
    fn light_type_is_an_int() {
        let light = Light { light_type: 1, ..Light::default() };
        let ints: &[i32] = bytemuck::cast_slice(&light.as_bytes()[..4]);
        assert_eq!(ints, &[1]);
    }
}
