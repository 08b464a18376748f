//! # User Interface Module
//!
//! Dear ImGui overlay drawn on top of the stage.
//!
//! - [`UiManager`] - ImGui context, winit platform glue and the wgpu renderer
//! - [`draw_showcase_ui`] - the showcase panels, built from a
//!   [`ShowcaseView`](crate::showcase::ShowcaseView) each frame
//!
//! The UI only reads the showcase state. Buttons report what was clicked as
//! [`ShowcaseCommand`](crate::showcase::ShowcaseCommand)s that the app applies
//! after the frame, so the panels never hold a mutable borrow of the showcase.

pub mod manager;
pub mod panel;

pub use manager::UiManager;
pub use panel::draw_showcase_ui;
