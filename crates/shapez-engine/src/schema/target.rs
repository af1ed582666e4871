use std::fmt;
use std::str::FromStr;

use crate::blocks::*;
use crate::layout::{BlockLayout, UniformBlock};

/// Build target whose block set the shaders were compiled against.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Target {
    /// Main application.
    #[default]
    Main,
    /// Reduced-feature RZ application.
    Rz,
}

static MAIN_BLOCKS: [&BlockLayout; 17] = [
    &Vertex::LAYOUT,
    &SphereParams::LAYOUT,
    &LineParams::LAYOUT,
    &BoxParams::LAYOUT,
    &BoxedMenuParams::LAYOUT,
    &BoxGradientParams::LAYOUT,
    &TextureParams::LAYOUT,
    &TextParams::LAYOUT,
    &ColorWheelParams::LAYOUT,
    &ObjectVertexUniforms::LAYOUT,
    &ObjectFragmentUniforms::LAYOUT,
    &FragmentUniforms::LAYOUT,
    &Light::LAYOUT,
    &LightUniforms::LAYOUT,
    &SphereUniforms::LAYOUT,
    &Gizmo3D::LAYOUT,
    &NodeData::LAYOUT,
];

static RZ_BLOCKS: [&BlockLayout; 15] = [
    &Vertex::LAYOUT,
    &SphereParams::LAYOUT,
    &LineParams::LAYOUT,
    &SplineParams::LAYOUT,
    &PointGraphParams::LAYOUT,
    &BoxParams::LAYOUT,
    &RotatedBoxParams::LAYOUT,
    &BoxedMenuParams::LAYOUT,
    &BoxGradientParams::LAYOUT,
    &RzTextureParams::LAYOUT,
    &TextParams::LAYOUT,
    &ColorWheelParams::LAYOUT,
    &ArcParams::LAYOUT,
    &ObjectVertexUniforms::LAYOUT,
    &RzObjectFragmentUniforms::LAYOUT,
];

impl Target {
    pub const ALL: [Target; 2] = [Target::Main, Target::Rz];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Target::Main => "main",
            Target::Rz => "rz",
        }
    }

    /// Every block layout the target's shaders declare, dependencies first.
    pub fn catalog(self) -> &'static [&'static BlockLayout] {
        match self {
            Target::Main => &MAIN_BLOCKS,
            Target::Rz => &RZ_BLOCKS,
        }
    }

    /// Looks up a block by its shader-side name.
    pub fn block(self, name: &str) -> Option<&'static BlockLayout> {
        self.catalog().iter().copied().find(|l| l.name == name)
    }

    #[inline]
    pub fn supports(self, name: &str) -> bool {
        self.block(name).is_some()
    }

    /// Include guard used for the generated Metal header.
    pub fn header_guard(self) -> &'static str {
        match self {
            Target::Main => "SHAPEZ_MAIN_BLOCKS_H",
            Target::Rz => "SHAPEZ_RZ_BLOCKS_H",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown target name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTargetError(pub String);

impl fmt::Display for ParseTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown target `{}` (expected `main` or `rz`)", self.0)
    }
}

impl std::error::Error for ParseTargetError {}

impl FromStr for Target {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "shape-z" | "shapez" => Ok(Target::Main),
            "rz" | "render-z" => Ok(Target::Rz),
            _ => Err(ParseTargetError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_verifies() {
        for target in Target::ALL {
            for layout in target.catalog() {
                assert_eq!(layout.verify(), Ok(()), "{target}: {}", layout.name);
            }
        }
    }

    #[test]
    fn texture_block_differs_per_target() {
        let main = Target::Main.block("MM_TEXTURE").map(|l| l.size);
        let rz = Target::Rz.block("MM_TEXTURE").map(|l| l.size);
        assert_eq!(main, Some(24));
        assert_eq!(rz, Some(48));
    }

    #[test]
    fn rz_only_blocks() {
        for name in ["MM_SPLINE", "MM_POINTGRAPH", "MM_ROTATEDBOX", "MM_ARC"] {
            assert!(Target::Rz.supports(name), "{name}");
            assert!(!Target::Main.supports(name), "{name}");
        }
        assert!(!Target::Rz.supports("LightUniforms"));
    }

    #[test]
    fn nested_blocks_precede_their_users() {
        let catalog = Target::Main.catalog();
        let light = catalog.iter().position(|l| l.name == "Light");
        let uniforms = catalog.iter().position(|l| l.name == "LightUniforms");
        assert!(light < uniforms);
    }

    #[test]
    fn parses_names() {
        assert_eq!("RZ".parse::<Target>(), Ok(Target::Rz));
        assert_eq!(" main ".parse::<Target>(), Ok(Target::Main));
        assert!("tvos".parse::<Target>().is_err());
    }
}
