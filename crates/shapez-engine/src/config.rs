//! Frame-level render configuration.

use crate::coords::Viewport;
use crate::schema::Target;

/// Settings every builder needs to encode a block: which layout family to
/// use, the logical → physical pixel factor and the viewport size.
///
/// `from_env()` reads `SHAPEZ_TARGET` (`main`, `rz`) and `SHAPEZ_SCALE`
/// (a positive float); unset or unparsable values keep the defaults.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    pub target: Target,
    pub scale_factor: f32,
    /// Viewport in logical pixels.
    pub viewport: Viewport,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target: Target::Main,
            scale_factor: 1.0,
            viewport: Viewport::new(1280.0, 720.0),
        }
    }
}

impl RenderConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SHAPEZ_TARGET").ok().as_deref(),
            std::env::var("SHAPEZ_SCALE").ok().as_deref(),
        )
    }

    fn from_vars(target: Option<&str>, scale: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = target {
            match raw.parse() {
                Ok(t) => config.target = t,
                Err(e) => log::warn!("SHAPEZ_TARGET ignored: {e}"),
            }
        }

        if let Some(raw) = scale {
            match raw.trim().parse::<f32>() {
                Ok(s) if s.is_finite() && s > 0.0 => config.scale_factor = s,
                _ => log::warn!("SHAPEZ_SCALE ignored: {raw:?} is not a positive number"),
            }
        }

        config
    }

    #[inline]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    #[inline]
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    #[inline]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Viewport in physical pixels, the size the shaders receive.
    #[inline]
    pub fn physical_viewport(&self) -> Viewport {
        self.viewport.physical(self.scale_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_vars_keep_defaults() {
        assert_eq!(RenderConfig::from_vars(None, None), RenderConfig::default());
    }

    #[test]
    fn vars_override_target_and_scale() {
        let c = RenderConfig::from_vars(Some("rz"), Some("2"));
        assert_eq!(c.target, Target::Rz);
        assert_eq!(c.scale_factor, 2.0);
    }

    #[test]
    fn bad_scale_is_ignored() {
        for raw in ["0", "-1", "abc", "inf"] {
            assert_eq!(RenderConfig::from_vars(None, Some(raw)).scale_factor, 1.0, "{raw}");
        }
    }

    #[test]
    fn physical_viewport_uses_scale() {
        let c = RenderConfig::default()
            .with_viewport(Viewport::new(100.0, 50.0))
            .with_scale_factor(2.0);
        assert_eq!(c.physical_viewport(), Viewport::new(200.0, 100.0));
    }
}
