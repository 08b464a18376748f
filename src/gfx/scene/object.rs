use std::ops::Range;

use cgmath::{Matrix4, SquareMatrix};
use log::debug;
use wgpu::Device;

use super::vertex::Vertex3D;
use crate::{
    gfx::{geometry::GeometryData, picking::AABB},
    showcase::FocusId,
    wgpu_utils::UniformBuffer,
};

pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex3D>, indices: Vec<u32>) -> Self {
        let index_count = indices.len() as u32;
        Self {
            vertices,
            indices,
            vertex_buffer: None,
            index_buffer: None,
            index_count,
        }
    }

    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let (vertices, indices) = geometry.to_scene_format();
        Self::new(vertices, indices)
    }

    /// Builds a mesh from flat position/normal arrays as stored in OBJ files
    ///
    /// Normals are recomputed when the file has none or they don't line up
    /// with the positions.
    pub fn from_flat(positions: &[f32], normals: &[f32], indices: Vec<u32>) -> Self {
        let normals = if !normals.is_empty() && normals.len() == positions.len() {
            normals.to_vec()
        } else {
            Self::calculate_smooth_normals(positions, &indices)
        };

        let vertices = positions
            .chunks_exact(3)
            .zip(normals.chunks_exact(3))
            .map(|(p, n)| Vertex3D {
                position: [p[0], p[1], p[2]],
                normal: [n[0], n[1], n[2]],
            })
            .collect();

        Self::new(vertices, indices)
    }

    /// Area-weighted vertex normals for meshes exported without them
    pub fn calculate_smooth_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
        debug!("computing normals for {} vertices", positions.len() / 3);
        let vertex_count = positions.len() / 3;
        let mut normals = vec![0.0; vertex_count * 3];
        let position = |i: usize| [positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]];

        for triangle in indices.chunks_exact(3) {
            let [i0, i1, i2] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
            if i0.max(i1).max(i2) >= vertex_count {
                continue;
            }
            let (v0, v1, v2) = (position(i0), position(i1), position(i2));

            let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

            // Unnormalized cross product, so larger faces weigh more
            let face_normal = [
                edge1[1] * edge2[2] - edge1[2] * edge2[1],
                edge1[2] * edge2[0] - edge1[0] * edge2[2],
                edge1[0] * edge2[1] - edge1[1] * edge2[0],
            ];

            for vertex_idx in [i0, i1, i2] {
                for axis in 0..3 {
                    normals[vertex_idx * 3 + axis] += face_normal[axis];
                }
            }
        }

        for normal in normals.chunks_exact_mut(3) {
            let length = (normal[0].powi(2) + normal[1].powi(2) + normal[2].powi(2)).sqrt();
            if length > 0.0 {
                normal.iter_mut().for_each(|component| *component /= length);
            } else {
                normal.copy_from_slice(&[0.0, 1.0, 0.0]);
            }
        }

        normals
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    fn init_gpu_resources(&mut self, device: &Device) {
        self.vertex_buffer = Some(wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));

        self.index_buffer = Some(wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
    }
}

/// Per-object shader data; must match `ObjectUniform` in showcase.wgsl
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// 1.0 while the object's item is highlighted, x only
    pub highlight: [f32; 4],
}

pub struct ObjectGpuResources {
    pub uniform: UniformBuffer<ObjectUniform>,
    pub bind_group: wgpu::BindGroup,
}

/// One drawable piece of the stage
pub struct Object {
    pub name: String,
    /// The focus id this object belongs to, if it can be picked
    pub item: Option<FocusId>,
    /// Part of the spinning chair assembly
    pub spins: bool,
    pub meshes: Vec<Mesh>,
    pub transform: Matrix4<f32>,
    pub base_color: [f32; 4],
    pub highlighted: bool,
    bounds: AABB,
    pub gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl Object {
    pub fn new(name: impl Into<String>, meshes: Vec<Mesh>, base_color: [f32; 4]) -> Self {
        let positions: Vec<[f32; 3]> = meshes
            .iter()
            .flat_map(|mesh| mesh.vertices().iter().map(|vertex| vertex.position))
            .collect();

        Self {
            name: name.into(),
            item: None,
            spins: false,
            meshes,
            transform: Matrix4::identity(),
            base_color,
            highlighted: false,
            bounds: AABB::from_vertices(&positions),
            gpu_resources: None,
        }
    }

    pub fn with_item(mut self, item: FocusId) -> Self {
        self.item = Some(item);
        self
    }

    pub fn spinning(mut self) -> Self {
        self.spins = true;
        self
    }

    /// Model-space bounds, before `transform`
    pub fn local_bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn world_bounds(&self) -> AABB {
        self.bounds.transform(&self.transform)
    }

    pub fn uniform(&self) -> ObjectUniform {
        ObjectUniform {
            model: self.transform.into(),
            color: self.base_color,
            highlight: [if self.highlighted { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }

    pub fn init_gpu_resources(&mut self, device: &Device, layout: &wgpu::BindGroupLayout) {
        for mesh in &mut self.meshes {
            mesh.init_gpu_resources(device);
        }

        let uniform = UniformBuffer::new(device, &format!("{} Uniform", self.name), self.uniform());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", self.name)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.binding_resource(),
            }],
        });

        self.gpu_resources = Some(ObjectGpuResources {
            uniform,
            bind_group,
        });
    }

    /// Pushes transform, color and highlight to the GPU if resources exist
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        let uniform = self.uniform();
        if let Some(gpu_resources) = &mut self.gpu_resources {
            gpu_resources.uniform.write(queue, uniform);
        }
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources.as_ref().map(|res| &res.bind_group)
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_mesh_instanced(&mut self, mesh: &'a Mesh, instances: Range<u32>);
    fn draw_object(&mut self, object: &'a Object);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        self.draw_mesh_instanced(mesh, 0..1);
    }

    fn draw_mesh_instanced(&mut self, mesh: &'b Mesh, instances: Range<u32>) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&mesh.vertex_buffer, &mesh.index_buffer)
        else {
            return; // Not uploaded yet
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }

    fn draw_object(&mut self, object: &'b Object) {
        let Some(bind_group) = object.bind_group() else {
            return;
        };
        self.set_bind_group(1, bind_group, &[]);
        for mesh in &object.meshes {
            self.draw_mesh(mesh);
        }
    }
}
