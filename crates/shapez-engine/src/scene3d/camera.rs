use glam::{Mat4, Vec3, Vec4};

use crate::blocks::{
    FragmentUniforms, ObjectFragmentUniforms, ObjectVertexUniforms, RzObjectFragmentUniforms,
};

use super::{BoundingFrame, ObjectTransform};

/// Perspective camera. `fov` is the vertical field of view in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            origin: Vec3::new(0.0, 0.0, 5.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov: 80.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl Camera {
    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.origin, self.look_at, self.up)
    }

    pub fn projection_matrix(&self, screen_size: [f32; 2]) -> Mat4 {
        let aspect = if screen_size[1] > 0.0 { screen_size[0] / screen_size[1] } else { 1.0 };
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }
}

/// Builds the per-object 3D blocks for one camera and render-target size.
#[derive(Debug, Copy, Clone)]
pub struct CameraUniforms<'a> {
    pub camera: &'a Camera,
    pub screen_size: [f32; 2],
}

impl<'a> CameraUniforms<'a> {
    pub fn new(camera: &'a Camera, screen_size: [f32; 2]) -> Self {
        Self { camera, screen_size }
    }

    pub fn vertex(&self, object: &ObjectTransform) -> ObjectVertexUniforms {
        ObjectVertexUniforms {
            model_matrix: object.model_matrix().to_cols_array_2d(),
            view_matrix: self.camera.view_matrix().to_cols_array_2d(),
            projection_matrix: self.camera.projection_matrix(self.screen_size).to_cols_array_2d(),
        }
    }

    /// Main-target object block: camera plus the object's box placement.
    pub fn object_fragment(&self, object: &ObjectTransform) -> ObjectFragmentUniforms {
        let frame = BoundingFrame::from_transform(object);
        ObjectFragmentUniforms {
            camera_origin: self.camera.origin.to_array(),
            camera_look_at: self.camera.look_at.to_array(),
            screen_size: self.screen_size,
            bbox_pos: frame.min_corner.to_array(),
            bbox_size: frame.size.to_array(),
            bbox_rotation: frame.rotation.to_array(),
            max_distance: frame.max_distance,
            ..ObjectFragmentUniforms::default()
        }
    }

    /// RZ object block: camera and march distance only.
    pub fn rz_object_fragment(&self, object: &ObjectTransform) -> RzObjectFragmentUniforms {
        RzObjectFragmentUniforms {
            camera_origin: self.camera.origin.to_array(),
            camera_look_at: self.camera.look_at.to_array(),
            screen_size: self.screen_size,
            max_distance: object.bounding_half_extents().length(),
            ..RzObjectFragmentUniforms::default()
        }
    }

    /// Full-screen pass block with the oriented bounding frame.
    pub fn fragment(&self, object: &ObjectTransform, ambient: Vec4) -> FragmentUniforms {
        let frame = BoundingFrame::from_transform(object);
        FragmentUniforms {
            camera_origin: self.camera.origin.to_array(),
            camera_look_at: self.camera.look_at.to_array(),
            screen_size: self.screen_size,
            ambient_color: ambient.to_array(),
            p: frame.p.to_array(),
            l: frame.l.to_array(),
            f: frame.f_columns(),
            max_distance: frame.max_distance,
            ..FragmentUniforms::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_block_is_column_major() {
        let cam = Camera::default();
        let object =
            ObjectTransform { position: Vec3::new(1.0, 2.0, 3.0), ..ObjectTransform::default() };
        let v = CameraUniforms::new(&cam, [800.0, 600.0]).vertex(&object);
        // translation lives in the fourth column
        assert_eq!(v.model_matrix[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(v.view_matrix[3][2], -5.0);
    }

    #[test]
    fn fragment_blocks_share_camera_and_distance() {
        let cam = Camera::default();
        let object = ObjectTransform {
            half_extents: Some(Vec3::new(3.0, 0.0, 4.0)),
            ..ObjectTransform::default()
        };
        let u = CameraUniforms::new(&cam, [640.0, 480.0]);

        let main = u.object_fragment(&object);
        let rz = u.rz_object_fragment(&object);
        let full = u.fragment(&object, Vec4::new(0.1, 0.1, 0.1, 1.0));

        assert_eq!(main.camera_origin, [0.0, 0.0, 5.0]);
        assert_eq!(main.max_distance, 5.0);
        assert_eq!(rz.max_distance, 5.0);
        assert_eq!(full.max_distance, 5.0);
        assert_eq!(full.screen_size, [640.0, 480.0]);
        assert_eq!(main.bbox_size, [6.0, 0.0, 8.0]);
    }
}
