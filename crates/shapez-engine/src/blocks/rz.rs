//! Blocks that only exist in the RZ target, and the RZ variants of shared ones.

use bytemuck::{Pod, Zeroable};

use crate::layout::{uniform_block, FieldKind};

/// Maximum number of samples in a point graph.
pub const POINT_GRAPH_CAPACITY: usize = 300;

/// Quadratic spline stroke (`MM_SPLINE`).
///
/// `sp`, `cp`, `ep` are start, control and end point relative to the quad.
/// `fill1`/`fill2` select whether the area under / above the curve is filled.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SplineParams {
    pub size: [f32; 2],
    pub sp: [f32; 2],
    pub cp: [f32; 2],
    pub ep: [f32; 2],
    pub width: f32,
    pub border_size: f32,
    pub fill1: f32,
    pub fill2: f32,
    pub fill_color: [f32; 4],
    pub border_color: [f32; 4],
}

uniform_block!(SplineParams, "MM_SPLINE", {
    "size" => size: FieldKind::Float2,
    "sp" => sp: FieldKind::Float2,
    "cp" => cp: FieldKind::Float2,
    "ep" => ep: FieldKind::Float2,
    "width" => width: FieldKind::Float,
    "borderSize" => border_size: FieldKind::Float,
    "fill1" => fill1: FieldKind::Float,
    "fill2" => fill2: FieldKind::Float,
    "fillColor" => fill_color: FieldKind::Float4,
    "borderColor" => border_color: FieldKind::Float4,
});

/// Sampled curve plot (`MM_POINTGRAPH`).
///
/// `size.xy` is the quad size, `size.z` the number of valid points.
/// `range` holds `(min_x, max_x, min_y, max_y)`. Slots past the count are zero.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PointGraphParams {
    pub size: [f32; 4],
    pub range: [f32; 4],
    pub points: [[f32; 4]; POINT_GRAPH_CAPACITY],
}

impl Default for PointGraphParams {
    fn default() -> Self {
        Self::zeroed()
    }
}

uniform_block!(PointGraphParams, "MM_POINTGRAPH", {
    "size" => size: FieldKind::Float4,
    "range" => range: FieldKind::Float4,
    "points" => points: FieldKind::Array(&FieldKind::Float4, POINT_GRAPH_CAPACITY),
});

/// Rounded box with rotation (`MM_ROTATEDBOX`). `rotation.x` is in radians.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RotatedBoxParams {
    pub size: [f32; 2],
    pub round: f32,
    pub border_size: f32,
    pub fill_color: [f32; 4],
    pub border_color: [f32; 4],
    pub rotation: [f32; 4],
}

uniform_block!(RotatedBoxParams, "MM_ROTATEDBOX", {
    "size" => size: FieldKind::Float2,
    "round" => round: FieldKind::Float,
    "borderSize" => border_size: FieldKind::Float,
    "fillColor" => fill_color: FieldKind::Float4,
    "borderColor" => border_color: FieldKind::Float4,
    "rotation" => rotation: FieldKind::Float4,
});

/// Textured quad, RZ target (`MM_TEXTURE`).
///
/// Adds premultiplication and a rounded clip rect to the main-target block.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RzTextureParams {
    pub screen_size: [f32; 2],
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub prem: f32,
    pub round: f32,
    pub rounding_rect: [f32; 4],
}

uniform_block!(RzTextureParams, "MM_TEXTURE", {
    "screenSize" => screen_size: FieldKind::Float2,
    "pos" => pos: FieldKind::Float2,
    "size" => size: FieldKind::Float2,
    "prem" => prem: FieldKind::Float,
    "round" => round: FieldKind::Float,
    "roundingRect" => rounding_rect: FieldKind::Float4,
});

/// Ring segment (`MM_ARC`).
///
/// `sc` is `(sin, cos)` of the half aperture, `r` is `(radius, thickness)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ArcParams {
    pub sc: [f32; 2],
    pub r: [f32; 2],
    pub color: [f32; 4],
}

uniform_block!(ArcParams, "MM_ARC", {
    "sc" => sc: FieldKind::Float2,
    "r" => r: FieldKind::Float2,
    "color" => color: FieldKind::Float4,
});

const _: () = assert!(core::mem::size_of::<SplineParams>() == 80);
const _: () = assert!(core::mem::size_of::<PointGraphParams>() == 4832);
const _: () = assert!(core::mem::size_of::<RotatedBoxParams>() == 64);
const _: () = assert!(core::mem::size_of::<RzTextureParams>() == 48);
const _: () = assert!(core::mem::size_of::<ArcParams>() == 32);
