//! # Object Picking
//!
//! Ray-casting from the pointer into the stage, used for hover and click.
//!
//! ## How it works
//!
//! 1. **Pointer to Ray**: unproject the pointer through the camera into a world-space ray
//! 2. **Ray-Box Intersection**: test the ray against each pickable object's transformed bounds
//! 3. **Selection**: the closest hit wins
//!
//! Only objects tagged with a [`FocusId`] take part; the floor never blocks a pick.
//!
//! ```no_run
//! use forest_showcase::gfx::picking::pick_item;
//! # fn demo(camera: &forest_showcase::gfx::camera::LookAtCamera, scene: &forest_showcase::gfx::scene::Scene) {
//! if let Some(item) = pick_item((400.0, 300.0), (800.0, 600.0), camera, scene) {
//!     println!("pointer is over {item}");
//! }
//! # }
//! ```

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::{
    gfx::{camera::LookAtCamera, scene::Scene},
    showcase::FocusId,
};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vector3<f32>,
    /// Always normalized
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl AABB {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Bounds of a point set; an empty set gives a degenerate box at the origin
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        let Some(first) = vertices.first() else {
            return Self::new(Vector3::zero(), Vector3::zero());
        };

        let mut min = Vector3::from(*first);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }

    /// Slab test; returns the distance along the ray to the entry point,
    /// or to the exit point when the ray starts inside
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Bounds of this box after `matrix`, re-fitted to the axes
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let corners: Vec<[f32; 3]> = (0..8)
            .map(|i| {
                let corner = Vector4::new(
                    if i & 1 == 0 { self.min.x } else { self.max.x },
                    if i & 2 == 0 { self.min.y } else { self.max.y },
                    if i & 4 == 0 { self.min.z } else { self.max.z },
                    1.0,
                );
                let transformed = matrix * corner;
                [
                    transformed.x / transformed.w,
                    transformed.y / transformed.w,
                    transformed.z / transformed.w,
                ]
            })
            .collect();

        Self::from_vertices(&corners)
    }
}

/// Result of a successful pick
#[derive(Debug, Clone)]
pub struct PickResult {
    /// Index of the picked object in the scene
    pub object_index: usize,
    pub item: FocusId,
    /// Distance from the camera to the hit
    pub distance: f32,
    pub intersection_point: Vector3<f32>,
}

/// Converts a pointer position in physical pixels to a world-space ray
pub fn screen_to_ray(screen_pos: (f32, f32), screen_size: (f32, f32), camera: &LookAtCamera) -> Ray {
    let (mouse_x, mouse_y) = screen_pos;
    let (screen_width, screen_height) = screen_size;

    let ndc_x = (2.0 * mouse_x) / screen_width.max(1.0) - 1.0;
    let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height.max(1.0); // Flip Y axis

    let view_proj = camera.projection_matrix() * camera.view_matrix();
    let inv_view_proj = view_proj.invert().unwrap_or(Matrix4::identity());

    let unproject = |ndc_z: f32| {
        let world = inv_view_proj * Vector4::new(ndc_x, ndc_y, ndc_z, 1.0);
        Vector3::new(world.x / world.w, world.y / world.w, world.z / world.w)
    };

    let near = unproject(-1.0);
    let far = unproject(1.0);
    Ray::new(near, far - near)
}

/// Finds the closest pickable object under the pointer
pub fn pick_object(
    screen_pos: (f32, f32),
    screen_size: (f32, f32),
    camera: &LookAtCamera,
    scene: &Scene,
) -> Option<PickResult> {
    let ray = screen_to_ray(screen_pos, screen_size, camera);

    scene
        .objects
        .iter()
        .enumerate()
        .filter_map(|(object_index, object)| {
            let item = object.item?;
            let distance = object.world_bounds().intersect_ray(&ray)?;
            Some(PickResult {
                object_index,
                item,
                distance,
                intersection_point: ray.point_at(distance),
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// The focus id under the pointer, if any
pub fn pick_item(
    screen_pos: (f32, f32),
    screen_size: (f32, f32),
    camera: &LookAtCamera,
    scene: &Scene,
) -> Option<FocusId> {
    pick_object(screen_pos, screen_size, camera, scene).map(|result| result.item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowcaseConfig;
    use cgmath::Deg;

    const SCREEN: (f32, f32) = (1200.0, 800.0);
    const CENTER: (f32, f32) = (600.0, 400.0);

    fn stand_in_scene() -> Scene {
        Scene::load_stage(&ShowcaseConfig::default().with_asset_dir("does/not/exist"))
    }

    fn camera(eye: [f32; 3], target: [f32; 3]) -> LookAtCamera {
        LookAtCamera::new(eye.into(), target.into(), Deg(50.0), SCREEN.0 / SCREEN.1)
    }

    #[test]
    fn test_aabb_creation() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = AABB::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ray_aabb_intersection() {
        let aabb = AABB::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));

        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let distance = aabb.intersect_ray(&ray).unwrap();
        assert!((distance - 4.0).abs() < 1e-5);

        let ray_miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_miss).is_none());

        let ray_behind = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_behind).is_none());
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = camera([0.0, 2.0, -6.0], [0.0, 1.0, 0.08]);
        let ray = screen_to_ray(CENTER, SCREEN, &camera);
        let expected = (Vector3::new(0.0, 1.0, 0.08) - Vector3::new(0.0, 2.0, -6.0)).normalize();
        assert!((ray.direction - expected).magnitude() < 1e-3);
    }

    #[test]
    fn test_picks_nearest_item() {
        let scene = stand_in_scene();

        let facing_chairs = camera([0.0, 2.0, -6.0], [0.0, 1.0, 0.08]);
        assert_eq!(pick_item(CENTER, SCREEN, &facing_chairs, &scene), Some(FocusId::Chair));

        let facing_shell = camera([6.0, 3.0, -2.0], [2.0, 0.0, 2.0]);
        assert_eq!(pick_item(CENTER, SCREEN, &facing_shell, &scene), Some(FocusId::Shell));
    }

    #[test]
    fn test_sky_and_floor_pick_nothing() {
        let scene = stand_in_scene();
        let resting = camera([0.0, 2.0, -6.0], [0.0, 4.0, 40.0]);
        assert_eq!(pick_item((600.0, 0.0), SCREEN, &resting, &scene), None);

        let looking_down = camera([20.0, 5.0, 20.0], [20.0, -0.36, 21.0]);
        assert_eq!(pick_item(CENTER, SCREEN, &looking_down, &scene), None);
    }
}
