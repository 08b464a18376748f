//! Continuous orbit of the camera around a fixed pivot

use cgmath::Vector3;

use crate::gfx::camera::CameraRig;

#[derive(Debug, Clone, Copy, PartialEq)]
struct OrbitPath {
    pivot: Vector3<f32>,
    angle: f32,
    radius: f32,
    height: f32,
}

/// Circles the camera around a pivot at constant angular speed
///
/// Radius and height are captured from the camera when the orbit starts and
/// stay fixed until it stops.
#[derive(Debug, Clone)]
pub struct OrbitFollower {
    /// Radians per second; negative values orbit clockwise seen from above
    pub speed: f32,
    path: Option<OrbitPath>,
}

impl OrbitFollower {
    pub fn new(speed: f32) -> Self {
        Self { speed, path: None }
    }

    pub fn activate(&mut self, pivot: Vector3<f32>, rig: &mut CameraRig) {
        let dx = rig.camera.eye.x - pivot.x;
        let dz = rig.camera.eye.z - pivot.z;
        self.path = Some(OrbitPath {
            pivot,
            angle: dz.atan2(dx),
            radius: dx.hypot(dz),
            height: rig.camera.eye.y,
        });
        rig.camera.look_at(pivot);
        rig.controls.sync(pivot);
        log::debug!("Orbit started around {:?}", pivot);
    }

    /// Stops orbiting; the camera stays at its last position
    pub fn deactivate(&mut self) {
        if self.path.take().is_some() {
            log::debug!("Orbit stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.path.is_some()
    }

    #[cfg(test)]
    pub(crate) fn angle(&self) -> Option<f32> {
        self.path.map(|path| path.angle)
    }

    pub fn update(&mut self, dt: f32, rig: &mut CameraRig) {
        let Some(path) = self.path.as_mut() else {
            return;
        };
        path.angle += self.speed * dt;
        rig.camera.eye = Vector3::new(
            path.pivot.x + path.radius * path.angle.cos(),
            path.height,
            path.pivot.z + path.radius * path.angle.sin(),
        );
        rig.camera.look_at(path.pivot);
        rig.controls.target = path.pivot;
    }
}
