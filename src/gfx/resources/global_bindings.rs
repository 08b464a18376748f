//! Global uniform bindings for camera, light and fog
//!
//! Bound to group 0 of the showcase pipeline and shared by every object.

use crate::{config::ShowcaseConfig, gfx::camera::CameraUniform, wgpu_utils::UniformBuffer};

/// Global uniform buffer content
///
/// MUST match the `Globals` struct in showcase.wgsl exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
    /// Direction the light travels, w unused
    light_direction: [f32; 4],
    /// Light color, ambient term in w
    light_color: [f32; 4],
    fog_color: [f32; 4],
    /// Fog start and end distance in x and y
    fog_range: [f32; 4],
}

/// Directional light and distance fog of the stage
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub direction: [f32; 3],
    pub color: [f32; 3],
    pub ambient: f32,
    pub fog_color: [f32; 3],
    pub fog_range: (f32, f32),
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: [-0.4, -1.0, 0.6],
            color: [1.0, 0.97, 0.92],
            ambient: 0.28,
            fog_color: [0.0, 0.0, 0.0],
            fog_range: (12.0, 60.0),
        }
    }
}

impl LightConfig {
    /// Default light with the fog taken from the configuration
    pub fn from_config(config: &ShowcaseConfig) -> Self {
        let [r, g, b] = config.clear_color;
        Self {
            fog_color: [r as f32, g as f32, b as f32],
            fog_range: config.fog_range,
            ..Default::default()
        }
    }

    pub fn to_content(&self, camera: CameraUniform) -> GlobalUBOContent {
        let [dx, dy, dz] = self.direction;
        let [r, g, b] = self.color;
        let [fr, fg, fb] = self.fog_color;
        GlobalUBOContent {
            view_position: camera.view_position,
            view_proj: camera.view_proj,
            light_direction: [dx, dy, dz, 0.0],
            light_color: [r, g, b, self.ambient],
            fog_color: [fr, fg, fb, 1.0],
            fog_range: [self.fog_range.0, self.fog_range.1, 0.0, 0.0],
        }
    }
}

pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Creates the global buffer with the light in place and an identity camera
pub fn create_global_ubo(device: &wgpu::Device, light: &LightConfig) -> GlobalUBO {
    UniformBuffer::new(device, "Globals", light.to_content(CameraUniform::default()))
}

/// Writes this frame's camera together with the light into the global buffer
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: CameraUniform,
    light: &LightConfig,
) {
    ubo.write(queue, light.to_content(camera));
}

/// Layout and bind group for the global uniforms (group 0)
pub struct GlobalBindings {
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let layout = uniform_layout(device, "Globals Bind Group Layout");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        Self { layout, bind_group }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// A layout with a single uniform buffer at binding 0, visible to both stages
pub fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_matches_shader_layout() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 144);
    }

    #[test]
    fn test_fog_follows_config() {
        let config = ShowcaseConfig::default();
        let light = LightConfig::from_config(&config);
        let content = light.to_content(CameraUniform::default());
        assert_eq!(content.fog_range[0], 12.0);
        assert_eq!(content.fog_range[1], 60.0);
        assert_eq!(content.light_color[3], light.ambient);
    }
}
