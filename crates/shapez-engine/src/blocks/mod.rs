//! Shader parameter blocks.
//!
//! Every struct is `#[repr(C)]` + `Pod` and mirrors one record of the shader
//! side byte for byte, with explicit padding members (`_pad*`) where the
//! shader compiler would insert padding. Each carries a [`UniformBlock`]
//! layout table.
//!
//! [`UniformBlock`]: crate::layout::UniformBlock

mod node;
mod rz;
mod scene3d;
mod ui;

pub use node::{NodeData, RIGHT_TERMINAL_SLOTS};
pub use rz::{
    ArcParams, PointGraphParams, RotatedBoxParams, RzTextureParams, SplineParams,
    POINT_GRAPH_CAPACITY,
};
pub use scene3d::{
    FragmentUniforms, Gizmo3D, Light, LightUniforms, ObjectFragmentUniforms, ObjectVertexUniforms,
    RzObjectFragmentUniforms, SphereUniforms, MAX_LIGHTS,
};
pub use ui::{
    BoxGradientParams, BoxParams, BoxedMenuParams, ColorWheelParams, LineParams, SphereParams,
    TextParams, TextureParams, Vertex,
};
