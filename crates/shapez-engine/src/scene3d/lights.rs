use glam::{Vec3, Vec4};

use crate::blocks::{Light, LightUniforms, MAX_LIGHTS};
use crate::error::BlockError;

const SUN: i32 = 0;
const POINT: i32 = 1;

/// Lights of one frame, packed into the fixed ten-slot light block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightSet {
    lights: Vec<Light>,
}

impl LightSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Adds a directional light.
    ///
    /// With a color, the rgb is normalized and multiplied by `strength`;
    /// without one the sun is white at `strength`.
    pub fn push_sun(
        &mut self,
        direction: Vec3,
        color: Option<Vec4>,
        strength: f32,
    ) -> Result<(), BlockError> {
        let light_color = match color {
            Some(c) => (c.truncate().normalize_or_zero() * strength).extend(c.w),
            None => Vec4::new(strength, strength, strength, 1.0),
        };
        self.push(Light {
            light_type: SUN,
            light_color: light_color.to_array(),
            direction_to_light: direction.extend(0.0).to_array(),
            ..Light::default()
        })
    }

    /// Adds a point light at `position`; rgb is multiplied by `strength`.
    pub fn push_point(
        &mut self,
        position: Vec3,
        color: Vec4,
        strength: f32,
    ) -> Result<(), BlockError> {
        let light_color = (color.truncate() * strength).extend(color.w);
        self.push(Light {
            light_type: POINT,
            light_color: light_color.to_array(),
            direction_to_light: position.extend(1.0).to_array(),
            ..Light::default()
        })
    }

    fn push(&mut self, light: Light) -> Result<(), BlockError> {
        if self.lights.len() == MAX_LIGHTS {
            let err = BlockError::CapacityExceeded {
                block: "LightUniforms",
                capacity: MAX_LIGHTS,
                requested: MAX_LIGHTS + 1,
            };
            log::warn!("{err}");
            return Err(err);
        }
        self.lights.push(light);
        Ok(())
    }

    /// Light block with all ten slots; unused slots are zeroed.
    pub fn to_uniforms(&self) -> LightUniforms {
        let mut block = LightUniforms {
            number_of_lights: self.lights.len() as i32,
            ..LightUniforms::default()
        };
        block.lights[..self.lights.len()].copy_from_slice(&self.lights);
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_color_is_normalized_and_scaled() {
        let mut set = LightSet::new();
        set.push_sun(Vec3::new(0.0, 1.0, 0.0), Some(Vec4::new(3.0, 0.0, 4.0, 1.0)), 2.0).unwrap();
        let light = set.to_uniforms().lights[0];
        assert_eq!(light.light_type, 0);
        assert!((light.light_color[0] - 1.2).abs() < 1e-6);
        assert!((light.light_color[2] - 1.6).abs() < 1e-6);
        assert_eq!(light.direction_to_light, [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn colorless_sun_is_white() {
        let mut set = LightSet::new();
        set.push_sun(Vec3::Y, None, 0.5).unwrap();
        assert_eq!(set.to_uniforms().lights[0].light_color, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn point_light_carries_position() {
        let mut set = LightSet::new();
        set.push_point(Vec3::new(1.0, 2.0, 3.0), Vec4::new(1.0, 0.5, 0.0, 1.0), 2.0).unwrap();
        let light = set.to_uniforms().lights[0];
        assert_eq!(light.light_type, 1);
        assert_eq!(light.light_color, [2.0, 1.0, 0.0, 1.0]);
        assert_eq!(light.direction_to_light, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn block_always_has_ten_slots() {
        let mut set = LightSet::new();
        set.push_sun(Vec3::Y, None, 1.0).unwrap();
        let block = set.to_uniforms();
        assert_eq!(block.number_of_lights, 1);
        assert_eq!(block.lights.len(), 10);
        assert_eq!(block.lights[1], Light::default());
        assert_eq!(core::mem::size_of_val(&block), 496);
    }

    #[test]
    fn eleventh_light_is_rejected() {
        let mut set = LightSet::new();
        for _ in 0..MAX_LIGHTS {
            set.push_point(Vec3::ZERO, Vec4::ONE, 1.0).unwrap();
        }
        assert!(matches!(
            set.push_point(Vec3::ZERO, Vec4::ONE, 1.0),
            Err(BlockError::CapacityExceeded { capacity: 10, requested: 11, .. })
        ));
        assert_eq!(set.len(), 10);
    }
}
