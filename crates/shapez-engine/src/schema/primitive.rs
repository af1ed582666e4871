use crate::blocks::*;
use crate::error::BlockError;
use crate::layout::UniformBlock;

use super::Target;

/// Fragment program a primitive is drawn with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PipelineKind {
    Sphere,
    Line,
    Spline,
    Box,
    RotatedBox,
    BoxedMenu,
    BoxGradient,
    Texture,
    Text,
    ColorWheel,
    PointGraph,
    Arc,
}

impl PipelineKind {
    /// Name of the fragment function in the shader library.
    pub fn fragment_name(self) -> &'static str {
        match self {
            PipelineKind::Sphere => "m4mSphereDrawable",
            PipelineKind::Line => "m4mLineDrawable",
            PipelineKind::Spline => "m4mSplineDrawable",
            PipelineKind::Box => "m4mBoxDrawable",
            PipelineKind::RotatedBox => "m4mRotatedBoxDrawable",
            PipelineKind::BoxedMenu => "m4mBoxedMenuDrawable",
            PipelineKind::BoxGradient => "m4mBoxGradientDrawable",
            PipelineKind::Texture => "m4mTextureDrawable",
            PipelineKind::Text => "m4mTextDrawable",
            PipelineKind::ColorWheel => "m4mColorWheelDrawable",
            PipelineKind::PointGraph => "m4mPointGraphDrawable",
            PipelineKind::Arc => "m4mArcDrawable",
        }
    }
}

/// Rounded box; `rotation` (radians) is only expressible in the RZ target.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoxRecord {
    pub size: [f32; 2],
    pub round: f32,
    pub border_size: f32,
    pub fill_color: [f32; 4],
    pub border_color: [f32; 4],
    pub rotation: Option<f32>,
}

/// Premultiplication and rounded clipping of a textured quad (RZ only).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextureRounding {
    pub premultiplied: bool,
    pub round: f32,
    pub rect: [f32; 4],
}

/// Textured quad; `rounding` is only expressible in the RZ target.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextureRecord {
    pub screen_size: [f32; 2],
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub rounding: Option<TextureRounding>,
}

/// One UI primitive in the target-independent schema.
///
/// The per-target block structs diverge (a box gains a rotation field in RZ,
/// the texture block gains rounding); this enum is the single versioned
/// description, and [`Primitive::encode`] picks the target's layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(SphereParams),
    Line(LineParams),
    Box(BoxRecord),
    BoxedMenu(BoxedMenuParams),
    BoxGradient(BoxGradientParams),
    Texture(TextureRecord),
    Text(TextParams),
    ColorWheel(ColorWheelParams),
    Spline(SplineParams),
    PointGraph(Box<PointGraphParams>),
    Arc(ArcParams),
}

/// Block bytes ready for a wholesale copy into GPU memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlock {
    /// Shader-side block name.
    pub name: &'static str,
    pub target: Target,
    pub bytes: Vec<u8>,
}

impl EncodedBlock {
    pub fn new<T: UniformBlock>(target: Target, block: &T) -> Self {
        Self { name: T::LAYOUT.name, target, bytes: block.as_bytes().to_vec() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Primitive {
    pub fn pipeline(&self) -> PipelineKind {
        match self {
            Primitive::Sphere(_) => PipelineKind::Sphere,
            Primitive::Line(_) => PipelineKind::Line,
            Primitive::Box(b) if b.rotation.is_some() => PipelineKind::RotatedBox,
            Primitive::Box(_) => PipelineKind::Box,
            Primitive::BoxedMenu(_) => PipelineKind::BoxedMenu,
            Primitive::BoxGradient(_) => PipelineKind::BoxGradient,
            Primitive::Texture(_) => PipelineKind::Texture,
            Primitive::Text(_) => PipelineKind::Text,
            Primitive::ColorWheel(_) => PipelineKind::ColorWheel,
            Primitive::Spline(_) => PipelineKind::Spline,
            Primitive::PointGraph(_) => PipelineKind::PointGraph,
            Primitive::Arc(_) => PipelineKind::Arc,
        }
    }

    /// Encodes the primitive with `target`'s block layout.
    ///
    /// Fails with [`BlockError::Unsupported`] when the target has no block
    /// for the record or cannot represent one of its optional fields.
    pub fn encode(&self, target: Target) -> Result<EncodedBlock, BlockError> {
        let rz_only = |block: &'static str| -> Result<(), BlockError> {
            if target == Target::Rz {
                Ok(())
            } else {
                Err(BlockError::Unsupported { block, target })
            }
        };

        let encoded = match self {
            Primitive::Sphere(p) => EncodedBlock::new(target, p),
            Primitive::Line(p) => EncodedBlock::new(target, p),
            Primitive::Box(b) => match b.rotation {
                None => EncodedBlock::new(
                    target,
                    &BoxParams {
                        size: b.size,
                        round: b.round,
                        border_size: b.border_size,
                        fill_color: b.fill_color,
                        border_color: b.border_color,
                    },
                ),
                Some(angle) => {
                    rz_only(RotatedBoxParams::LAYOUT.name)?;
                    EncodedBlock::new(
                        target,
                        &RotatedBoxParams {
                            size: b.size,
                            round: b.round,
                            border_size: b.border_size,
                            fill_color: b.fill_color,
                            border_color: b.border_color,
                            rotation: [angle, 0.0, 0.0, 0.0],
                        },
                    )
                }
            },
            Primitive::BoxedMenu(p) => EncodedBlock::new(target, p),
            Primitive::BoxGradient(p) => EncodedBlock::new(target, p),
            Primitive::Texture(t) => match target {
                Target::Main => {
                    if t.rounding.is_some() {
                        let block = "MM_TEXTURE.roundingRect";
                        return Err(BlockError::Unsupported { block, target });
                    }
                    EncodedBlock::new(
                        target,
                        &TextureParams { screen_size: t.screen_size, pos: t.pos, size: t.size },
                    )
                }
                Target::Rz => {
                    let rounding = t.rounding.unwrap_or_default();
                    EncodedBlock::new(
                        target,
                        &RzTextureParams {
                            screen_size: t.screen_size,
                            pos: t.pos,
                            size: t.size,
                            prem: if rounding.premultiplied { 1.0 } else { 0.0 },
                            round: rounding.round,
                            rounding_rect: rounding.rect,
                        },
                    )
                }
            },
            Primitive::Text(p) => EncodedBlock::new(target, p),
            Primitive::ColorWheel(p) => EncodedBlock::new(target, p),
            Primitive::Spline(p) => {
                rz_only(SplineParams::LAYOUT.name)?;
                EncodedBlock::new(target, p)
            }
            Primitive::PointGraph(p) => {
                rz_only(PointGraphParams::LAYOUT.name)?;
                EncodedBlock::new(target, p.as_ref())
            }
            Primitive::Arc(p) => {
                rz_only(ArcParams::LAYOUT.name)?;
                EncodedBlock::new(target, p)
            }
        };

        debug_assert!(
            target.block(encoded.name).is_some_and(|l| l.size == encoded.len()),
            "{} encoded with a layout the {} target does not declare",
            encoded.name,
            target
        );
        Ok(encoded)
    }
}
