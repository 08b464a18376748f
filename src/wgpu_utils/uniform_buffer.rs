// src/wgpu_utils/uniform_buffer.rs
//! Typed uniform buffers that remember their last upload

use bytemuck::Pod;
use wgpu::util::DeviceExt;

/// A GPU uniform buffer holding exactly one `T`
///
/// Keeps a CPU copy of the last upload so unchanged frames cost no queue
/// writes; most stage pieces sit still between focus changes.
pub struct UniformBuffer<T: Pod> {
    buffer: wgpu::Buffer,
    uploaded: T,
}

impl<T: Pod> UniformBuffer<T> {
    pub fn new(device: &wgpu::Device, label: &str, content: T) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(&content),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            uploaded: content,
        }
    }

    /// Uploads `content` unless it matches the last upload; true if written
    pub fn write(&mut self, queue: &wgpu::Queue, content: T) -> bool {
        if !content_changed(&self.uploaded, &content) {
            return false;
        }
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&content));
        self.uploaded = content;
        true
    }

    /// What the GPU currently holds
    pub fn content(&self) -> &T {
        &self.uploaded
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}

/// Bytewise comparison; float fields compare by bit pattern
fn content_changed<T: Pod>(previous: &T, next: &T) -> bool {
    bytemuck::bytes_of(previous) != bytemuck::bytes_of(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_changed() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let mut b = a;
        assert!(!content_changed(&a, &b));
        b[3] = 4.5;
        assert!(content_changed(&a, &b));
        // -0.0 == 0.0 as floats, but the bytes differ and the GPU sees them
        assert!(content_changed(&0.0f32, &-0.0f32));
    }
}
