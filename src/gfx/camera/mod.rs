pub mod camera_utils;
pub mod controls;
pub mod look_at_camera;

// Re-export main types
pub use camera_utils::{CameraRig, CameraUniform};
pub use controls::CameraControls;
pub use look_at_camera::LookAtCamera;
