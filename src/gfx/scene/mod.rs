//! # Scene Module
//!
//! The stage the showcase flies around: loaded OBJ models (or their procedural
//! stand-ins), their transforms, and their GPU buffers.
//!
//! ## Key Components
//!
//! - [`Scene`] - all stage objects plus the chair assembly's spin
//! - [`Object`] - one stage piece, optionally tagged with the [`FocusId`] it belongs to
//! - [`Vertex3D`] - GPU vertex format with position and normal
//!
//! ```no_run
//! use forest_showcase::{config::ShowcaseConfig, gfx::scene::Scene};
//!
//! let mut scene = Scene::load_stage(&ShowcaseConfig::default());
//! scene.update(1.0 / 60.0);
//! ```
//!
//! [`FocusId`]: crate::showcase::FocusId

pub mod object;
pub mod scene;
pub mod vertex;

pub use object::{DrawObject, Mesh, Object, ObjectUniform};
pub use scene::Scene;
pub use vertex::Vertex3D;
