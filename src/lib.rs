// src/lib.rs
//! For:est showcase
//!
//! An interactive 3D product showcase built on wgpu and winit: a click-to-start
//! intro flight, focus transitions between the stage pieces, an orbiting chair
//! view and an ImGui overlay, with an idle timeout that returns everything to
//! the intro.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod showcase;
pub mod ui;
pub mod wgpu_utils;

pub use app::ShowcaseApp;
pub use config::ShowcaseConfig;
pub use error::{Result, ShowcaseError};
