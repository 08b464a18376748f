//! # Graphics Module
//!
//! Everything that touches the GPU or the 3D stage.
//!
//! - **Camera** ([`camera`]) - look-at camera, its controls and the [`CameraRig`] pairing them
//! - **Scene** ([`scene`]) - stage objects loaded from OBJ files or built from [`geometry`]
//! - **Picking** ([`picking`]) - pointer ray-casts against stage objects
//! - **Rendering** ([`rendering`]) - the forward pass and its GPU [`resources`]
//!
//! [`CameraRig`]: camera::CameraRig

pub mod camera;
pub mod geometry;
pub mod picking;
pub mod rendering;
pub mod resources;
pub mod scene;

pub use camera::{CameraRig, LookAtCamera};
pub use rendering::RenderEngine;
