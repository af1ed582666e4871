//! Shape-Z engine crate.
//!
//! Fixed-layout shader parameter blocks for the Main and RZ targets, the
//! layout contract they are checked against, and the builders that fill them
//! from logical draw requests: 2D primitives through a [`DrawList`], bitmap
//! text, 3D camera/light/gizmo blocks and the node-graph record. The
//! [`upload`] module moves the finished bytes into wgpu buffers.

pub mod blocks;
pub mod config;
pub mod coords;
pub mod error;
pub mod framework;
pub mod layout;
pub mod logging;
pub mod nodes;
pub mod paint;
pub mod scene;
pub mod scene3d;
pub mod schema;
pub mod text;
pub mod upload;

pub use config::RenderConfig;
pub use error::BlockError;
pub use layout::{BlockLayout, LayoutError, UniformBlock};
pub use scene::{DrawList, ZIndex};
pub use schema::{EncodedBlock, Primitive, Target};
