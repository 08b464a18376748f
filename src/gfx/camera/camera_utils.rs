use cgmath::{Matrix4, SquareMatrix, Vector3, Zero};

use super::{controls::CameraControls, look_at_camera::LookAtCamera};

/// The camera together with the controls that keep it aimed
///
/// This is the only mutable resource shared between the focus interpolations
/// and the orbit follower. Both receive it explicitly; neither keeps a
/// reference to it between calls.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub camera: LookAtCamera,
    pub controls: CameraControls,
}

impl CameraRig {
    pub fn new(camera: LookAtCamera, controls: CameraControls) -> Self {
        Self { camera, controls }
    }

    /// Per-frame controls pass: re-aims the camera when the controls are enabled
    pub fn update(&mut self) {
        self.controls.update(&mut self.camera);
    }

    /// Moves the camera and points both camera and controls at `look_at`
    pub fn place(&mut self, position: Vector3<f32>, look_at: Vector3<f32>) {
        self.camera.eye = position;
        self.camera.look_at(look_at);
        self.controls.target = look_at;
    }
}

/// Camera data the stage shader reads each frame
///
/// The eye is stored as a `vec4` to keep the matrix 16-byte aligned.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(eye: Vector3<f32>, view_proj: Matrix4<f32>) -> Self {
        Self {
            view_position: eye.extend(1.0).into(),
            view_proj: view_proj.into(),
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new(Vector3::zero(), Matrix4::identity())
    }
}
