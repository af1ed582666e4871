//! Binary layout contract between parameter blocks and their shaders.
//!
//! Each block struct in [`crate::blocks`] carries a `const` [`BlockLayout`]
//! describing its fields the way the shader side declares them. The table is
//! built with `offset_of!`/`size_of`, so it always reflects the real struct;
//! [`BlockLayout::verify`] then checks it against the Metal placement rules.

mod block;
mod error;
mod field;
pub mod msl;

pub use block::BlockLayout;
pub use error::LayoutError;
pub use field::{Field, FieldKind};

use bytemuck::{Pod, Zeroable};

/// A fixed-layout record that is copied wholesale into GPU memory.
pub trait UniformBlock: Pod + Zeroable {
    const LAYOUT: BlockLayout;

    /// Raw bytes exactly as the shader reads them.
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Implements [`UniformBlock`] for a `#[repr(C)]` struct.
///
/// ```ignore
/// uniform_block!(BoxParams, "MM_BOX", {
///     "size"       => size: FieldKind::Float2,
///     "borderSize" => border_size: FieldKind::Float,
/// });
/// ```
macro_rules! uniform_block {
    ($ty:ty, $name:literal, { $($shader:literal => $field:ident : $kind:expr),* $(,)? }) => {
        impl $crate::layout::UniformBlock for $ty {
            const LAYOUT: $crate::layout::BlockLayout = $crate::layout::BlockLayout {
                name: $name,
                size: ::core::mem::size_of::<$ty>(),
                fields: &[
                    $($crate::layout::Field::new(
                        $shader,
                        $kind,
                        ::core::mem::offset_of!($ty, $field),
                    )),*
                ],
            };
        }
    };
}

pub(crate) use uniform_block;
