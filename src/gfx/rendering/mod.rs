// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! One forward pass over the stage with depth testing, then the UI overlay.

pub mod pipeline;
pub mod render_engine;

pub use pipeline::PipelineConfig;
pub use render_engine::RenderEngine;
