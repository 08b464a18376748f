use std::path::Path;

use cgmath::{Matrix4, Rad};
use log::{info, warn};
use wgpu::Device;

use crate::{
    config::ShowcaseConfig,
    error::{Result, ShowcaseError},
    gfx::geometry::{generate_box, generate_cylinder, generate_plane, GeometryData},
    showcase::FocusId,
};

use super::object::{Mesh, Object};

/// Height of the floor plane under the stage
pub const FLOOR_HEIGHT: f32 = -0.36;

/// A model file of the stage and what stands in for it when it's missing
struct StagePiece {
    file: &'static str,
    item: FocusId,
    spins: bool,
    color: [f32; 4],
    stand_in: fn() -> GeometryData,
}

const CHAIR_COLOR: [f32; 4] = [0.86, 0.79, 0.68, 1.0];

const STAGE: [StagePiece; 6] = [
    StagePiece {
        file: "Stage_LeftChair.obj",
        item: FocusId::Chair,
        spins: true,
        color: CHAIR_COLOR,
        stand_in: left_chair,
    },
    StagePiece {
        file: "Stage_CenterChair.obj",
        item: FocusId::Chair,
        spins: true,
        color: CHAIR_COLOR,
        stand_in: center_chair,
    },
    StagePiece {
        file: "Stage_RightChair.obj",
        item: FocusId::Chair,
        spins: true,
        color: CHAIR_COLOR,
        stand_in: right_chair,
    },
    StagePiece {
        file: "Stage_Spin.obj",
        item: FocusId::Chair,
        spins: true,
        color: [0.32, 0.32, 0.34, 1.0],
        stand_in: spin_platform,
    },
    StagePiece {
        file: "Stage_Shell.obj",
        item: FocusId::Shell,
        spins: false,
        color: [0.74, 0.79, 0.82, 1.0],
        stand_in: shell,
    },
    StagePiece {
        file: "Stage_Wheel.obj",
        item: FocusId::Wheel,
        spins: false,
        color: [0.2, 0.22, 0.25, 1.0],
        stand_in: wheel_base,
    },
];

/// Seat, backrest and post of one chair, centered at `x`
fn chair_stand_in(x: f32) -> GeometryData {
    let mut chair = generate_cylinder(0.06, 0.4, 16).translated([x, 0.27, 0.08]);
    chair.append(&generate_box([0.28, 0.06, 0.28]).translated([x, 0.53, 0.08]));
    chair.append(&generate_box([0.28, 0.38, 0.05]).translated([x, 0.95, 0.36]));
    chair
}

fn left_chair() -> GeometryData {
    chair_stand_in(-0.8)
}

fn center_chair() -> GeometryData {
    chair_stand_in(0.0)
}

fn right_chair() -> GeometryData {
    chair_stand_in(0.8)
}

fn spin_platform() -> GeometryData {
    generate_cylinder(1.5, 0.12, 48).translated([0.0, 0.01, 0.0])
}

fn shell() -> GeometryData {
    generate_box([0.7, 0.45, 1.1]).translated([2.4, 0.1, 2.4])
}

/// Sits between the spin platform and the floor
fn wheel_base() -> GeometryData {
    generate_cylinder(1.8, 0.3, 48).translated([0.0, -0.2, 0.0])
}

/// The showcase stage: the spinning chair assembly, the shell, the wheel base
/// and the floor they stand on
pub struct Scene {
    pub objects: Vec<Object>,
    chair_angle: f32,
    spin_speed: f32,
}

impl Scene {
    pub fn new(spin_speed: f32) -> Self {
        Self {
            objects: Vec::new(),
            chair_angle: 0.0,
            spin_speed,
        }
    }

    /// Loads every stage model from the configured asset directory
    ///
    /// A model that can't be loaded is replaced by its procedural stand-in so
    /// the showcase always has something to fly around.
    pub fn load_stage(config: &ShowcaseConfig) -> Self {
        let mut scene = Self::new(config.chair_spin_speed);

        for piece in &STAGE {
            let path = config.asset_path(piece.file);
            let (meshes, color) = match load_obj_meshes(&path) {
                Ok((meshes, diffuse)) => {
                    info!("loaded {} ({} meshes)", path.display(), meshes.len());
                    (meshes, diffuse.map_or(piece.color, |[r, g, b]| [r, g, b, 1.0]))
                }
                Err(err) => {
                    warn!("{err}; using a stand-in for {}", piece.file);
                    (vec![Mesh::from_geometry(&(piece.stand_in)())], piece.color)
                }
            };

            let name = piece.file.trim_end_matches(".obj");
            let mut object = Object::new(name, meshes, color).with_item(piece.item);
            if piece.spins {
                object = object.spinning();
            }
            scene.objects.push(object);
        }

        let floor = generate_plane(120.0, 120.0, 1, 1).translated([0.0, FLOOR_HEIGHT, 0.0]);
        scene.objects.push(Object::new(
            "Floor",
            vec![Mesh::from_geometry(&floor)],
            [0.07, 0.07, 0.08, 1.0],
        ));

        scene
    }

    /// Advances the chair spin by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.chair_angle += self.spin_speed * dt;
        self.apply_spin();
    }

    /// Puts the chair assembly back at its starting angle
    pub fn reset_animation(&mut self) {
        self.chair_angle = 0.0;
        self.apply_spin();
    }

    #[cfg(test)]
    pub(crate) fn chair_angle(&self) -> f32 {
        self.chair_angle
    }

    fn apply_spin(&mut self) {
        let rotation = Matrix4::from_angle_y(Rad(self.chair_angle));
        for object in self.objects.iter_mut().filter(|object| object.spins) {
            object.transform = rotation;
        }
    }

    /// Marks the objects of `item` as highlighted and clears the rest
    pub fn set_highlight(&mut self, item: Option<FocusId>) {
        for object in &mut self.objects {
            object.highlighted = item.is_some() && object.item == item;
        }
    }

    /// Initializes GPU resources for all objects
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, object_layout: &wgpu::BindGroupLayout) {
        for object in &mut self.objects {
            object.init_gpu_resources(device, object_layout);
        }
    }

    /// Syncs transforms and highlight state to the GPU
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            object.update_gpu(queue);
        }
    }
}

/// Loads all meshes of an OBJ file plus the diffuse color of its first material
fn load_obj_meshes(path: &Path) -> Result<(Vec<Mesh>, Option<[f32; 3]>)> {
    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| ShowcaseError::ModelLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let meshes: Vec<Mesh> = models
        .iter()
        .filter(|model| !model.mesh.indices.is_empty())
        .map(|model| {
            Mesh::from_flat(
                &model.mesh.positions,
                &model.mesh.normals,
                model.mesh.indices.clone(),
            )
        })
        .collect();

    if meshes.is_empty() {
        return Err(ShowcaseError::EmptyModel(path.to_path_buf()));
    }

    // A missing .mtl only costs us the color
    let diffuse = materials
        .ok()
        .and_then(|materials| materials.into_iter().find_map(|material| material.diffuse));

    Ok((meshes, diffuse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    fn stand_in_scene() -> Scene {
        Scene::load_stage(&ShowcaseConfig::default().with_asset_dir("does/not/exist"))
    }

    #[test]
    fn test_missing_assets_fall_back_to_stand_ins() {
        let scene = stand_in_scene();
        assert_eq!(scene.objects.len(), STAGE.len() + 1);
        let chairs = scene
            .objects
            .iter()
            .filter(|object| object.item == Some(FocusId::Chair))
            .count();
        assert_eq!(chairs, 4);
        assert!(scene.objects.iter().all(|object| !object.meshes.is_empty()));
    }

    #[test]
    fn test_only_chair_assembly_spins() {
        let mut scene = stand_in_scene();
        scene.update(2.0);
        assert!((scene.chair_angle() - 0.2).abs() < 1e-6);

        let probe = Vector4::new(1.0, 0.0, 0.0, 1.0);
        for object in &scene.objects {
            let moved = object.transform * probe;
            if object.spins {
                assert!(moved.z.abs() > 0.1, "{} did not rotate", object.name);
            } else {
                assert_eq!(moved, probe, "{} moved", object.name);
            }
        }

        scene.reset_animation();
        assert_eq!(scene.chair_angle(), 0.0);
        let chair = scene.objects.iter().find(|object| object.spins).unwrap();
        assert_eq!(chair.transform * probe, probe);
    }

    #[test]
    fn test_highlight_marks_one_item() {
        let mut scene = stand_in_scene();
        scene.set_highlight(Some(FocusId::Shell));
        for object in &scene.objects {
            assert_eq!(object.highlighted, object.item == Some(FocusId::Shell));
        }

        scene.set_highlight(Some(FocusId::Main));
        assert!(scene.objects.iter().all(|object| !object.highlighted));

        scene.set_highlight(None);
        assert!(scene.objects.iter().all(|object| !object.highlighted));
    }
}
