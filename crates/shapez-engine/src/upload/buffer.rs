use core::marker::PhantomData;

use crate::layout::UniformBlock;

use super::BlockCache;

/// Minimum binding size of `T` for a bind-group layout entry.
#[inline]
pub fn min_binding_size<T: UniformBlock>() -> Option<wgpu::BufferSize> {
    wgpu::BufferSize::new(core::mem::size_of::<T>() as u64)
}

/// One uniform buffer holding exactly one `T`.
///
/// Writes go through `queue.write_buffer` and are skipped when the block's
/// bytes did not change since the last write.
pub struct BlockBuffer<T: UniformBlock> {
    buffer: wgpu::Buffer,
    cache: BlockCache<T>,
    _block: PhantomData<T>,
}

impl<T: UniformBlock> BlockBuffer<T> {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(T::LAYOUT.name),
            size: core::mem::size_of::<T>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self { buffer, cache: BlockCache::new(), _block: PhantomData }
    }

    /// Uploads `value` if it differs from the last upload. Returns whether a
    /// write was issued.
    pub fn write(&mut self, queue: &wgpu::Queue, value: &T) -> bool {
        if !self.cache.update(value) {
            return false;
        }
        queue.write_buffer(&self.buffer, 0, value.as_bytes());
        log::trace!("{}: uploaded {} bytes", T::LAYOUT.name, T::LAYOUT.size);
        true
    }

    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    #[inline]
    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }

    /// Bind-group layout entry for a fragment-stage uniform of type `T`.
    pub fn layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: min_binding_size::<T>(),
            },
            count: None,
        }
    }
}

/// Capacity a growable buffer needs for `required` elements when it
/// currently holds `current`: unchanged if it fits, otherwise the next power
/// of two, at least 64.
#[inline]
pub fn grown_capacity(current: usize, required: usize) -> usize {
    if required <= current {
        current
    } else {
        required.next_power_of_two().max(64)
    }
}

/// Concatenates blocks into one byte buffer, each starting at a multiple of
/// `alignment` (the device's minimum uniform offset alignment). Returns the
/// bytes and the offset of every block, for dynamic-offset binding.
pub fn pack_blocks<'a>(
    blocks: impl IntoIterator<Item = &'a [u8]>,
    alignment: u64,
) -> (Vec<u8>, Vec<u32>) {
    let align = alignment.max(1) as usize;
    let mut bytes = Vec::new();
    let mut offsets = Vec::new();
    for block in blocks {
        let start = bytes.len().div_ceil(align) * align;
        bytes.resize(start, 0);
        offsets.push(start as u32);
        bytes.extend_from_slice(block);
    }
    (bytes, offsets)
}

/// Growable GPU buffer for per-frame streams (quad vertices, packed blocks).
pub struct DynamicBuffer {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
}

impl DynamicBuffer {
    pub fn new(label: &'static str, usage: wgpu::BufferUsages) -> Self {
        Self { label, usage: usage | wgpu::BufferUsages::COPY_DST, buffer: None, capacity: 0 }
    }

    /// Writes `bytes` at offset 0, reallocating first if they do not fit.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let new_cap = grown_capacity(self.capacity, bytes.len());
        if new_cap != self.capacity || self.buffer.is_none() {
            // wgpu requires COPY_BUFFER_ALIGNMENT-sized writes
            let size = (new_cap as u64).next_multiple_of(wgpu::COPY_BUFFER_ALIGNMENT);
            log::debug!("{}: growing to {size} bytes", self.label);
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size,
                usage: self.usage,
                mapped_at_creation: false,
            }));
            self.capacity = new_cap;
        }
        if let Some(buffer) = self.buffer.as_ref() {
            let padded = bytes.len().next_multiple_of(wgpu::COPY_BUFFER_ALIGNMENT as usize);
            if padded == bytes.len() {
                queue.write_buffer(buffer, 0, bytes);
            } else {
                let mut tmp = bytes.to_vec();
                tmp.resize(padded, 0);
                queue.write_buffer(buffer, 0, &tmp);
            }
        }
    }

    #[inline]
    pub fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
