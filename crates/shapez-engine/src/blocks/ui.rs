//! 2D UI primitive blocks shared by both targets.
//!
//! One block per primitive shader. Colors are linear straight-alpha RGBA;
//! sizes are physical pixels unless a field says otherwise.

use bytemuck::{Pod, Zeroable};

use crate::layout::{uniform_block, FieldKind};

/// Quad vertex (`MM_Vertex`): viewport-centered pixel position + uv.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

uniform_block!(Vertex, "MM_Vertex", {
    "position" => position: FieldKind::Float2,
    "textureCoordinate" => tex_coord: FieldKind::Float2,
});

/// Filled circle with border (`MM_SPHERE`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SphereParams {
    pub fill_color: [f32; 4],
    pub border_color: [f32; 4],
    pub radius: f32,
    pub border_size: f32,
    pub _pad: [f32; 2],
}

uniform_block!(SphereParams, "MM_SPHERE", {
    "fillColor" => fill_color: FieldKind::Float4,
    "borderColor" => border_color: FieldKind::Float4,
    "radius" => radius: FieldKind::Float,
    "borderSize" => border_size: FieldKind::Float,
});

/// Capsule-shaped line segment (`MM_LINE`).
///
/// `sp`/`ep` are relative to the quad's top-left corner.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct LineParams {
    pub size: [f32; 2],
    pub sp: [f32; 2],
    pub ep: [f32; 2],
    pub width: f32,
    pub border_size: f32,
    pub fill_color: [f32; 4],
    pub border_color: [f32; 4],
}

uniform_block!(LineParams, "MM_LINE", {
    "size" => size: FieldKind::Float2,
    "sp" => sp: FieldKind::Float2,
    "ep" => ep: FieldKind::Float2,
    "width" => width: FieldKind::Float,
    "borderSize" => border_size: FieldKind::Float,
    "fillColor" => fill_color: FieldKind::Float4,
    "borderColor" => border_color: FieldKind::Float4,
});

/// Rounded box (`MM_BOX`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct BoxParams {
    pub size: [f32; 2],
    pub round: f32,
    pub border_size: f32,
    pub fill_color: [f32; 4],
    pub border_color: [f32; 4],
}

uniform_block!(BoxParams, "MM_BOX", {
    "size" => size: FieldKind::Float2,
    "round" => round: FieldKind::Float,
    "borderSize" => border_size: FieldKind::Float,
    "fillColor" => fill_color: FieldKind::Float4,
    "borderColor" => border_color: FieldKind::Float4,
});

/// Box with three menu bars inside (`MM_BOXEDMENU`). Same fields as [`BoxParams`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct BoxedMenuParams {
    pub size: [f32; 2],
    pub round: f32,
    pub border_size: f32,
    pub fill_color: [f32; 4],
    pub border_color: [f32; 4],
}

uniform_block!(BoxedMenuParams, "MM_BOXEDMENU", {
    "size" => size: FieldKind::Float2,
    "round" => round: FieldKind::Float,
    "borderSize" => border_size: FieldKind::Float,
    "fillColor" => fill_color: FieldKind::Float4,
    "borderColor" => border_color: FieldKind::Float4,
});

/// Rounded box with a two-color linear gradient (`MM_BOX_GRADIENT`).
///
/// `uv1`/`uv2` are the gradient axis end points in box-relative `0..1` space.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct BoxGradientParams {
    pub size: [f32; 2],
    pub round: f32,
    pub border_size: f32,
    pub uv1: [f32; 2],
    pub uv2: [f32; 2],
    pub gradient_color1: [f32; 4],
    pub gradient_color2: [f32; 4],
    pub border_color: [f32; 4],
}

uniform_block!(BoxGradientParams, "MM_BOX_GRADIENT", {
    "size" => size: FieldKind::Float2,
    "round" => round: FieldKind::Float,
    "borderSize" => border_size: FieldKind::Float,
    "uv1" => uv1: FieldKind::Float2,
    "uv2" => uv2: FieldKind::Float2,
    "gradientColor1" => gradient_color1: FieldKind::Float4,
    "gradientColor2" => gradient_color2: FieldKind::Float4,
    "borderColor" => border_color: FieldKind::Float4,
});

/// Textured quad, main target (`MM_TEXTURE`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TextureParams {
    pub screen_size: [f32; 2],
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

uniform_block!(TextureParams, "MM_TEXTURE", {
    "screenSize" => screen_size: FieldKind::Float2,
    "pos" => pos: FieldKind::Float2,
    "size" => size: FieldKind::Float2,
});

/// One glyph sampled from a font atlas (`MM_TEXT`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TextParams {
    pub atlas_size: [f32; 2],
    pub font_pos: [f32; 2],
    pub font_size: [f32; 2],
    pub _pad: [f32; 2],
    pub color: [f32; 4],
}

uniform_block!(TextParams, "MM_TEXT", {
    "atlasSize" => atlas_size: FieldKind::Float2,
    "fontPos" => font_pos: FieldKind::Float2,
    "fontSize" => font_size: FieldKind::Float2,
    "color" => color: FieldKind::Float4,
});

/// Hue ring of the color picker (`MM_COLORWHEEL`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorWheelParams {
    pub size: [f32; 2],
    pub _pad: [f32; 2],
    pub color: [f32; 4],
}

uniform_block!(ColorWheelParams, "MM_COLORWHEEL", {
    "size" => size: FieldKind::Float2,
    "color" => color: FieldKind::Float4,
});

const _: () = assert!(core::mem::size_of::<Vertex>() == 16);
const _: () = assert!(core::mem::size_of::<SphereParams>() == 48);
const _: () = assert!(core::mem::size_of::<LineParams>() == 64);
const _: () = assert!(core::mem::size_of::<BoxParams>() == 48);
const _: () = assert!(core::mem::size_of::<BoxedMenuParams>() == 48);
const _: () = assert!(core::mem::size_of::<BoxGradientParams>() == 80);
const _: () = assert!(core::mem::size_of::<TextureParams>() == 24);
const _: () = assert!(core::mem::size_of::<TextParams>() == 48);
const _: () = assert!(core::mem::size_of::<ColorWheelParams>() == 32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::UniformBlock;

    fn offsets<T: UniformBlock>() -> Vec<(&'static str, usize)> {
        T::LAYOUT.fields.iter().map(|f| (f.name, f.offset)).collect()
    }

    #[test]
    fn all_blocks_follow_placement_rules() {
        for layout in [
            Vertex::LAYOUT,
            SphereParams::LAYOUT,
            LineParams::LAYOUT,
            BoxParams::LAYOUT,
            BoxedMenuParams::LAYOUT,
            BoxGradientParams::LAYOUT,
            TextureParams::LAYOUT,
            TextParams::LAYOUT,
            ColorWheelParams::LAYOUT,
        ] {
            assert_eq!(layout.verify(), Ok(()), "{}", layout.name);
        }
    }

    #[test]
    fn box_offsets() {
        assert_eq!(
            offsets::<BoxParams>(),
            vec![
                ("size", 0),
                ("round", 8),
                ("borderSize", 12),
                ("fillColor", 16),
                ("borderColor", 32),
            ]
        );
    }

    #[test]
    fn gradient_offsets() {
        assert_eq!(
            offsets::<BoxGradientParams>(),
            vec![
                ("size", 0),
                ("round", 8),
                ("borderSize", 12),
                ("uv1", 16),
                ("uv2", 24),
                ("gradientColor1", 32),
                ("gradientColor2", 48),
                ("borderColor", 64),
            ]
        );
    }

    #[test]
    fn text_color_is_vector_aligned() {
        // Two padding floats follow fontSize so color lands on 16 bytes.
        assert_eq!(TextParams::LAYOUT.field("color").map(|f| f.offset), Some(32));
        assert_eq!(ColorWheelParams::LAYOUT.field("color").map(|f| f.offset), Some(16));
    }

    #[test]
    fn line_and_sphere_offsets() {
        assert_eq!(LineParams::LAYOUT.field("fillColor").map(|f| f.offset), Some(32));
        assert_eq!(SphereParams::LAYOUT.field("borderSize").map(|f| f.offset), Some(36));
        assert_eq!(SphereParams::LAYOUT.size, 48);
    }

    #[test]
    fn bytes_are_field_order() {
        let params = BoxParams {
            size: [10.0, 20.0],
            round: 3.0,
            border_size: 1.0,
            fill_color: [1.0, 0.0, 0.0, 1.0],
            border_color: [0.0; 4],
        };
        let floats: &[f32] = bytemuck::cast_slice(params.as_bytes());
        assert_eq!(&floats[..8], &[10.0, 20.0, 3.0, 1.0, 1.0, 0.0, 0.0, 1.0]);
    }
}
