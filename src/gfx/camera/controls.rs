use cgmath::Vector3;

use super::look_at_camera::LookAtCamera;

/// Keeps the camera aimed at a target point
///
/// User rotation, pan and zoom are all locked in the showcase; the controls
/// only remember where the camera should look and re-aim it every frame while
/// enabled. Camera flights disable them so the per-frame aim doesn't fight the
/// flight's own aim.
#[derive(Debug, Clone, Copy)]
pub struct CameraControls {
    pub target: Vector3<f32>,
    pub enabled: bool,
}

impl CameraControls {
    pub fn new(target: Vector3<f32>) -> Self {
        Self {
            target,
            enabled: true,
        }
    }

    pub fn update(&self, camera: &mut LookAtCamera) {
        if self.enabled {
            camera.look_at(self.target);
        }
    }

    /// Points the controls at `target` and re-enables them
    pub fn sync(&mut self, target: Vector3<f32>) {
        self.target = target;
        self.enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Zero};

    #[test]
    fn test_disabled_controls_leave_aim_alone() {
        let mut camera = LookAtCamera::new(Vector3::zero(), Vector3::unit_z(), Deg(50.0), 1.0);
        let mut controls = CameraControls::new(Vector3::new(5.0, 0.0, 0.0));
        controls.enabled = false;
        controls.update(&mut camera);
        assert_eq!(camera.target, Vector3::unit_z());

        controls.sync(Vector3::new(0.0, 3.0, 0.0));
        controls.update(&mut camera);
        assert_eq!(camera.target, Vector3::new(0.0, 3.0, 0.0));
    }
}
