// src/gfx/resources/mod.rs
//! GPU resources shared across the frame: depth target and global uniforms

pub mod depth;
pub mod global_bindings;

pub use depth::DepthTarget;
pub use global_bindings::{create_global_ubo, update_global_ubo, GlobalBindings, GlobalUBO, LightConfig};
