use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// Placement of one object in the 3D scene.
///
/// `rotation` is in degrees (x, y, z). `half_extents` defaults to a unit
/// half-size when the object carries no explicit bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub half_extents: Option<Vec3>,
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self { position: Vec3::ZERO, rotation: Vec3::ZERO, half_extents: None, scale: 1.0 }
    }
}

impl ObjectTransform {
    /// Scaled half extents of the bounding box.
    #[inline]
    pub fn bounding_half_extents(&self) -> Vec3 {
        self.half_extents.unwrap_or(Vec3::ONE) * self.scale
    }

    /// Translation × rotation × scale, with the translation scaled along
    /// with the object.
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation;
        let rotation =
            Quat::from_euler(EulerRot::XYZ, r.x.to_radians(), r.y.to_radians(), r.z.to_radians());
        Mat4::from_scale_rotation_translation(
            self.bounding_half_extents(),
            rotation,
            self.position * self.scale,
        )
    }
}

/// Oriented bounding box in the form the ray marcher consumes.
///
/// `p` is the rotated minimum corner, `l` the length of each edge and the
/// columns of `f` are the edge vectors divided by their squared length, so
/// `f^T (x - p)` maps a point into the box's unit cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingFrame {
    /// Unrotated minimum corner.
    pub min_corner: Vec3,
    pub size: Vec3,
    /// Rotation in radians, in the shader's sign convention.
    pub rotation: Vec3,
    pub p: Vec3,
    pub l: Vec3,
    pub f: Mat3,
    pub max_distance: f32,
}

impl BoundingFrame {
    pub fn from_transform(t: &ObjectTransform) -> Self {
        let half = t.bounding_half_extents();
        let size = half * 2.0;
        let min_corner = t.position - (size / 2.0 + (1.0 - t.scale) * t.position);

        Self { max_distance: half.length(), ..Self::from_box(min_corner, size, t.rotation) }
    }

    /// Frame of a box spanning `size` from `min_corner`, rotated about its
    /// center by `rotation_deg`.
    pub fn from_box(min_corner: Vec3, size: Vec3, rotation_deg: Vec3) -> Self {
        let rotation = Vec3::new(
            -rotation_deg.x.to_radians(),
            rotation_deg.y.to_radians(),
            -rotation_deg.z.to_radians(),
        );
        // Edges are row vectors multiplied from the left; apply the transpose.
        let rot = Mat3::from_euler(EulerRot::ZYX, rotation.z, rotation.y, rotation.x).transpose();

        let center = min_corner + size / 2.0;
        let axes = [
            rot * Vec3::new(size.x, 0.0, 0.0),
            rot * Vec3::new(0.0, size.y, 0.0),
            rot * Vec3::new(0.0, 0.0, size.z),
        ];
        let inv = |v: Vec3| {
            let d = v.length_squared();
            if d > 0.0 { v / d } else { Vec3::ZERO }
        };

        Self {
            min_corner,
            size,
            rotation,
            p: center - (axes[0] + axes[1] + axes[2]) / 2.0,
            l: Vec3::new(axes[0].length(), axes[1].length(), axes[2].length()),
            f: Mat3::from_cols(inv(axes[0]), inv(axes[1]), inv(axes[2])),
            max_distance: (size / 2.0).length(),
        }
    }

    /// `f` as three 16-byte columns (`float3x3` layout).
    pub fn f_columns(&self) -> [[f32; 4]; 3] {
        let c = |v: Vec3| [v.x, v.y, v.z, 0.0];
        [c(self.f.x_axis), c(self.f.y_axis), c(self.f.z_axis)]
    }
}
