//! # Showcase Module
//!
//! Presentation logic of the showcase, independent of windowing and GPU.
//!
//! ## Key Components
//!
//! - [`FocusController`] - intro / free-hover / focused state machine
//! - [`FocusRegistry`] - fixed camera placements per [`FocusId`]
//! - [`OrbitFollower`] - continuous orbit around the focused item
//! - [`IdleMonitor`] - inactivity timeout that triggers a hard reset
//! - [`AnimatedLabel`] and [`IntroOverlay`] - animated UI state
//!
//! [`Showcase`] bundles all of them with the camera rig and is what the
//! application drives: commands in, one `update` per frame, a [`ShowcaseView`]
//! snapshot out for the UI.

pub mod content;
pub mod controller;
pub mod focus;
pub mod idle;
pub mod intro;
pub mod label;
pub mod orbit;

pub use content::DockContent;
pub use controller::{FocusController, ShowcasePhase};
pub use focus::{FocusId, FocusRegistry, FocusTarget};
pub use idle::IdleMonitor;
pub use intro::IntroOverlay;
pub use label::AnimatedLabel;
pub use orbit::OrbitFollower;

use cgmath::Deg;
use std::time::Duration;

use crate::{
    config::ShowcaseConfig,
    gfx::camera::{CameraControls, CameraRig, LookAtCamera},
};

/// Something the user asked for, from a button, a click or a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseCommand {
    Start,
    Select(FocusId),
    Next,
    ReturnToIntro,
    HoverEnter(FocusId),
    HoverLeave(FocusId),
}

/// Result of a frame update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// The idle timeout elapsed; everything must be rebuilt from scratch
    HardReset,
}

/// Snapshot of what the UI needs to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseView {
    pub phase: ShowcasePhase,
    pub focused: Option<FocusId>,
    pub overlay_visible: bool,
    pub overlay_accepts_input: bool,
    pub overlay_opacity: f32,
    pub logo_scale: f32,
    pub label_text: &'static str,
    pub label_opacity: f32,
    pub label_scale: f32,
    pub dock: Option<&'static DockContent>,
}

/// The whole presentation state
///
/// Created once at startup. A hard reset replaces it with a fresh instance
/// built from the same configuration.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub rig: CameraRig,
    controller: FocusController,
    overlay: IntroOverlay,
    label: AnimatedLabel,
    idle: IdleMonitor,
}

impl Showcase {
    pub fn new(config: &ShowcaseConfig) -> Self {
        let (width, height) = config.window_size;
        let camera = LookAtCamera::new(
            config.camera.rest_position,
            config.camera.rest_look_at,
            Deg(config.camera.fov_degrees),
            width as f32 / height.max(1) as f32,
        )
        .with_clip_planes(config.camera.znear, config.camera.zfar);

        Self {
            rig: CameraRig::new(camera, CameraControls::new(config.camera.rest_look_at)),
            controller: FocusController::new(config),
            overlay: IntroOverlay::new(),
            label: AnimatedLabel::default(),
            idle: IdleMonitor::new(config.idle_timeout),
        }
    }

    pub fn controller(&self) -> &FocusController {
        &self.controller
    }

    pub fn idle_monitor(&self) -> &IdleMonitor {
        &self.idle
    }

    pub fn highlighted(&self) -> Option<FocusId> {
        self.controller.highlighted()
    }

    /// Applies a user command; returns whether it changed anything
    pub fn handle(&mut self, command: ShowcaseCommand) -> bool {
        let rig = &mut self.rig;
        let changed = match command {
            // Only the overlay reacts now; the flight starts once its logo settles
            ShowcaseCommand::Start => {
                self.controller.phase() == ShowcasePhase::Intro && self.overlay.dismiss()
            }
            ShowcaseCommand::Select(id) => self.controller.select(id, rig),
            ShowcaseCommand::Next => self.controller.next(rig),
            ShowcaseCommand::ReturnToIntro => {
                // A dismissal still playing counts as having left the intro
                let returned =
                    self.controller.return_to_intro(rig) || self.overlay.is_dismissing();
                if returned {
                    self.overlay.rearm();
                }
                returned
            }
            ShowcaseCommand::HoverEnter(id) => {
                let before = self.controller.hovered();
                self.controller.hover_enter(id);
                before != self.controller.hovered()
            }
            ShowcaseCommand::HoverLeave(id) => {
                let before = self.controller.hovered();
                self.controller.hover_leave(id);
                before != self.controller.hovered()
            }
        };
        self.sync_idle_arming();
        changed
    }

    /// Any pointer, wheel, keyboard or touch input
    pub fn notify_input(&mut self) {
        self.idle.notify_input();
    }

    pub fn update(&mut self, dt: Duration) -> FrameOutcome {
        let seconds = dt.as_secs_f32();
        self.controller.update(seconds, &mut self.rig);
        if self.overlay.update(seconds) {
            self.controller.start(&mut self.rig);
        }
        self.label
            .show(label::label_for(self.controller.highlighted()));
        self.label.update(seconds);

        // The frame that arms the monitor doesn't count towards the timeout
        let was_armed = self.idle.is_armed();
        self.sync_idle_arming();
        if was_armed && self.idle.advance(dt) {
            return FrameOutcome::HardReset;
        }
        FrameOutcome::Continue
    }

    pub fn view(&self) -> ShowcaseView {
        let focused = self.controller.focused();
        ShowcaseView {
            phase: self.controller.phase(),
            focused,
            overlay_visible: self.overlay.is_visible(),
            overlay_accepts_input: self.overlay.accepts_input(),
            overlay_opacity: self.overlay.opacity(),
            logo_scale: self.overlay.logo_scale(),
            label_text: self.label.text(),
            label_opacity: self.label.opacity(),
            label_scale: self.label.scale(),
            dock: focused.and_then(content::dock_content),
        }
    }

    fn sync_idle_arming(&mut self) {
        if self.controller.phase() == ShowcasePhase::Intro {
            self.idle.disarm();
        } else {
            self.idle.arm();
        }
    }
}
