//! Target-independent record schema.
//!
//! The main and RZ targets ship diverging copies of the same records. Rather
//! than keeping two sets of builders, callers describe a [`Primitive`] once and
//! encode it for a [`Target`], which selects the matching block layout or
//! reports that the target cannot represent it.

mod primitive;
mod target;

pub use primitive::{
    BoxRecord, EncodedBlock, PipelineKind, Primitive, TextureRecord, TextureRounding,
};
pub use target::{ParseTargetError, Target};
