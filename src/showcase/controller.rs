//! # Focus State Machine
//!
//! Decides where the camera goes and which item is highlighted.
//!
//! ```text
//!            start               flight lands
//!   Intro ──────────▶ FreeHover ─────────────▶ Focused(main)
//!     ▲                   │ select(id)              │ select / next
//!     │                   ▼                         ▼
//!     └──── return ── Focused(id) ◀──────────── Focused(id')
//! ```
//!
//! The camera rig is passed into every call that may move the camera. Of the
//! two camera writers, the interpolator and the orbit follower, at most one is
//! active at any time: a new flight always stops the orbit first, and the
//! orbit only starts from the continuation of a finished flight.

use cgmath::Vector3;

use super::{
    focus::{FocusId, FocusRegistry},
    orbit::OrbitFollower,
};
use crate::{
    animation::{CameraInterpolator, Easing},
    config::{IntroFlightConfig, ShowcaseConfig},
    gfx::camera::CameraRig,
};

/// Top-level presentation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcasePhase {
    /// Overlay shown, camera resting
    Intro,
    /// Overlay dismissed, nothing focused; hover is live
    FreeHover,
    Focused(FocusId),
}

/// What happens when a camera flight lands
#[derive(Debug, Clone, Copy, PartialEq)]
enum FlightEnd {
    /// End of the intro flythrough
    EnterMain,
    /// A focus flight; the orbit begins if a pivot is given
    Arrived { orbit_pivot: Option<Vector3<f32>> },
}

/// Owns focus and hover and sequences every camera move
#[derive(Debug, Clone)]
pub struct FocusController {
    phase: ShowcasePhase,
    hovered: Option<FocusId>,
    registry: FocusRegistry,
    intro_flight: IntroFlightConfig,
    rest_position: Vector3<f32>,
    rest_look_at: Vector3<f32>,
    interpolator: CameraInterpolator<FlightEnd>,
    orbit: OrbitFollower,
}

impl FocusController {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            phase: ShowcasePhase::Intro,
            hovered: None,
            registry: FocusRegistry::from_config(config),
            intro_flight: config.intro_flight,
            rest_position: config.camera.rest_position,
            rest_look_at: config.camera.rest_look_at,
            interpolator: CameraInterpolator::new(Easing::Power2Out),
            orbit: OrbitFollower::new(config.orbit_speed),
        }
    }

    pub fn phase(&self) -> ShowcasePhase {
        self.phase
    }

    pub fn focused(&self) -> Option<FocusId> {
        match self.phase {
            ShowcasePhase::Focused(id) => Some(id),
            _ => None,
        }
    }

    pub fn hovered(&self) -> Option<FocusId> {
        self.hovered
    }

    /// The item that should be outlined and named by the label
    ///
    /// A focus pins the highlight; hover only counts when nothing is focused.
    pub fn highlighted(&self) -> Option<FocusId> {
        self.focused().or(self.hovered)
    }

    pub fn is_interpolating(&self) -> bool {
        self.interpolator.is_active()
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbit.is_active()
    }

    #[cfg(test)]
    pub(crate) fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    /// Dismisses the intro and starts the flythrough
    ///
    /// Returns false if the showcase was not in the intro.
    pub fn start(&mut self, rig: &mut CameraRig) -> bool {
        if self.phase != ShowcasePhase::Intro {
            log::debug!("Ignoring start outside of intro ({:?})", self.phase);
            return false;
        }
        log::info!("Intro dismissed, starting flythrough");
        self.phase = ShowcasePhase::FreeHover;
        rig.place(self.intro_flight.from, self.rest_look_at);
        self.interpolator.start(
            rig,
            self.intro_flight.to,
            self.rest_look_at,
            self.intro_flight.duration,
            FlightEnd::EnterMain,
        );
        true
    }

    /// Focuses `id`, flying the camera to its registered placement
    pub fn select(&mut self, id: FocusId, rig: &mut CameraRig) -> bool {
        if self.phase == ShowcasePhase::Intro {
            log::debug!("Ignoring selection of {id} during intro");
            return false;
        }
        let target = *self.registry.get(id);
        log::info!("Focusing {id}");

        self.orbit.deactivate();
        self.phase = ShowcasePhase::Focused(id);
        self.interpolator.start(
            rig,
            target.destination,
            target.look_at,
            target.duration,
            FlightEnd::Arrived {
                orbit_pivot: target.orbit.then_some(target.look_at),
            },
        );
        true
    }

    /// Steps to the next identifier in the cycle, or to the first with no focus
    pub fn next(&mut self, rig: &mut CameraRig) -> bool {
        let next = match self.focused() {
            Some(id) => id.next(),
            None => FocusId::CYCLE[0],
        };
        self.select(next, rig)
    }

    /// Pointer entered an item; ignored while something is focused
    pub fn hover_enter(&mut self, id: FocusId) {
        if self.phase != ShowcasePhase::FreeHover || self.hovered == Some(id) {
            return;
        }
        self.hovered = Some(id);
    }

    /// Pointer left an item; ignored while something is focused
    pub fn hover_leave(&mut self, id: FocusId) {
        if self.phase != ShowcasePhase::FreeHover || self.hovered != Some(id) {
            return;
        }
        self.hovered = None;
    }

    /// Back to the intro: clears focus, hover and orbit and rests the camera
    pub fn return_to_intro(&mut self, rig: &mut CameraRig) -> bool {
        if self.phase == ShowcasePhase::Intro {
            return false;
        }
        log::info!("Returning to intro");
        self.orbit.deactivate();
        self.interpolator.cancel();
        self.phase = ShowcasePhase::Intro;
        self.hovered = None;
        rig.place(self.rest_position, self.rest_look_at);
        rig.controls.enabled = true;
        true
    }

    /// Advances whichever camera writer is active
    pub fn update(&mut self, dt: f32, rig: &mut CameraRig) {
        if let Some(end) = self.interpolator.advance(dt, rig) {
            self.on_flight_end(end, rig);
        } else if self.orbit.is_active() {
            self.orbit.update(dt, rig);
        }
        rig.update();
    }

    fn on_flight_end(&mut self, end: FlightEnd, rig: &mut CameraRig) {
        match end {
            FlightEnd::EnterMain => {
                log::debug!("Flythrough finished");
                self.phase = ShowcasePhase::Focused(FocusId::Main);
                self.hovered = None;
            }
            FlightEnd::Arrived {
                orbit_pivot: Some(pivot),
            } => self.orbit.activate(pivot, rig),
            FlightEnd::Arrived { orbit_pivot: None } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{CameraControls, LookAtCamera};
    use cgmath::Deg;

    const FRAME: f32 = 1.0 / 60.0;

    fn setup() -> (FocusController, CameraRig) {
        let config = ShowcaseConfig::default();
        let rig = CameraRig::new(
            LookAtCamera::new(config.camera.rest_position, config.camera.rest_look_at, Deg(50.0), 1.5),
            CameraControls::new(config.camera.rest_look_at),
        );
        (FocusController::new(&config), rig)
    }

    fn run(controller: &mut FocusController, rig: &mut CameraRig, seconds: f32) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            controller.update(FRAME, rig);
            assert!(
                !(controller.is_interpolating() && controller.is_orbiting()),
                "flight and orbit active together"
            );
        }
    }

    fn started() -> (FocusController, CameraRig) {
        let (mut controller, mut rig) = setup();
        assert!(controller.start(&mut rig));
        run(&mut controller, &mut rig, 2.1);
        (controller, rig)
    }

    #[test]
    fn test_intro_flythrough_lands_on_main() {
        let (mut controller, mut rig) = setup();
        assert_eq!(controller.phase(), ShowcasePhase::Intro);
        assert!(controller.start(&mut rig));
        assert_eq!(controller.phase(), ShowcasePhase::FreeHover);
        assert_eq!(rig.camera.eye, Vector3::new(0.0, 3.0, -16.0));
        assert!(!controller.start(&mut rig));

        run(&mut controller, &mut rig, 1.9);
        assert_eq!(controller.phase(), ShowcasePhase::FreeHover);
        run(&mut controller, &mut rig, 0.2);
        assert_eq!(controller.phase(), ShowcasePhase::Focused(FocusId::Main));
        assert_eq!(rig.camera.eye, Vector3::new(0.0, 1.0, -7.0));
        assert!(rig.controls.enabled);
    }

    #[test]
    fn test_intro_ignores_selection_and_hover() {
        let (mut controller, mut rig) = setup();
        assert!(!controller.select(FocusId::Chair, &mut rig));
        assert!(!controller.next(&mut rig));
        controller.hover_enter(FocusId::Shell);
        assert_eq!(controller.phase(), ShowcasePhase::Intro);
        assert_eq!(controller.highlighted(), None);
        assert!(!controller.return_to_intro(&mut rig));
    }

    #[test]
    fn test_chair_orbit_starts_only_after_flight() {
        let (mut controller, mut rig) = started();
        controller.select(FocusId::Chair, &mut rig);
        assert!(controller.is_interpolating());
        assert!(!controller.is_orbiting());

        run(&mut controller, &mut rig, 1.3);
        assert!(!controller.is_orbiting());
        run(&mut controller, &mut rig, 0.2);
        assert!(controller.is_orbiting());
        assert!(!controller.is_interpolating());

        let pivot = controller.registry().get(FocusId::Chair).look_at;
        let eye = rig.camera.eye;
        run(&mut controller, &mut rig, 1.0);
        assert_ne!(rig.camera.eye, eye);
        assert_eq!(rig.camera.eye.y, 4.0);
        assert_eq!(rig.camera.target, pivot);
    }

    #[test]
    fn test_switching_focus_stops_orbit_before_first_frame() {
        let (mut controller, mut rig) = started();
        controller.select(FocusId::Chair, &mut rig);
        run(&mut controller, &mut rig, 2.0);
        assert!(controller.is_orbiting());

        let before = rig.camera.eye;
        controller.select(FocusId::Shell, &mut rig);
        assert!(!controller.is_orbiting());
        assert!(controller.is_interpolating());
        // Nothing moved the camera between the switch and the first flight frame
        assert_eq!(rig.camera.eye, before);

        run(&mut controller, &mut rig, 1.5);
        assert_eq!(controller.phase(), ShowcasePhase::Focused(FocusId::Shell));
        assert_eq!(rig.camera.eye, Vector3::new(6.0, 3.0, -2.0));
        assert!(!controller.is_orbiting());
    }

    #[test]
    fn test_leaving_chair_mid_flight_never_orbits() {
        let (mut controller, mut rig) = started();
        controller.select(FocusId::Chair, &mut rig);
        run(&mut controller, &mut rig, 0.5);
        controller.select(FocusId::Wheel, &mut rig);
        run(&mut controller, &mut rig, 3.0);
        assert!(!controller.is_orbiting());
        assert_eq!(rig.camera.eye, Vector3::new(-3.0, 0.0, -2.8));
    }

    #[test]
    fn test_selecting_during_flythrough_cancels_it() {
        let (mut controller, mut rig) = setup();
        controller.start(&mut rig);
        run(&mut controller, &mut rig, 0.5);
        controller.select(FocusId::Wheel, &mut rig);
        run(&mut controller, &mut rig, 3.0);
        // The flythrough's landing must not override the newer focus
        assert_eq!(controller.phase(), ShowcasePhase::Focused(FocusId::Wheel));
    }

    #[test]
    fn test_next_from_no_focus_cycles_in_order() {
        let (mut controller, mut rig) = setup();
        controller.start(&mut rig);
        assert_eq!(controller.focused(), None);

        let mut visited = Vec::new();
        for _ in 0..5 {
            assert!(controller.next(&mut rig));
            visited.push(controller.focused().unwrap());
        }
        assert_eq!(
            visited,
            vec![FocusId::Main, FocusId::Chair, FocusId::Shell, FocusId::Wheel, FocusId::Main]
        );
    }

    #[test]
    fn test_hover_is_pinned_while_focused() {
        let (mut controller, mut rig) = setup();
        controller.start(&mut rig);
        controller.hover_enter(FocusId::Chair);
        assert_eq!(controller.highlighted(), Some(FocusId::Chair));
        controller.hover_enter(FocusId::Shell);
        assert_eq!(controller.highlighted(), Some(FocusId::Shell));
        controller.hover_leave(FocusId::Chair);
        assert_eq!(controller.hovered(), Some(FocusId::Shell));
        controller.hover_leave(FocusId::Shell);
        assert_eq!(controller.highlighted(), None);

        controller.select(FocusId::Wheel, &mut rig);
        controller.hover_enter(FocusId::Chair);
        assert_eq!(controller.highlighted(), Some(FocusId::Wheel));
        controller.hover_leave(FocusId::Wheel);
        assert_eq!(controller.highlighted(), Some(FocusId::Wheel));
    }

    #[test]
    fn test_return_to_intro_resets_everything_together() {
        let (mut controller, mut rig) = started();
        controller.select(FocusId::Chair, &mut rig);
        run(&mut controller, &mut rig, 2.0);
        assert!(controller.is_orbiting());

        assert!(controller.return_to_intro(&mut rig));
        assert_eq!(controller.phase(), ShowcasePhase::Intro);
        assert_eq!(controller.focused(), None);
        assert_eq!(controller.hovered(), None);
        assert!(!controller.is_orbiting());
        assert!(!controller.is_interpolating());
        assert_eq!(rig.camera.eye, Vector3::new(0.0, 2.0, -6.0));
        assert_eq!(rig.controls.target, Vector3::new(0.0, 4.0, 40.0));

        // Camera stays put while resting in the intro
        run(&mut controller, &mut rig, 1.0);
        assert_eq!(rig.camera.eye, Vector3::new(0.0, 2.0, -6.0));
    }

    #[test]
    fn test_return_mid_flight_cancels_flight() {
        let (mut controller, mut rig) = started();
        controller.select(FocusId::Shell, &mut rig);
        run(&mut controller, &mut rig, 0.3);
        controller.return_to_intro(&mut rig);
        run(&mut controller, &mut rig, 2.0);
        assert_eq!(controller.phase(), ShowcasePhase::Intro);
        assert_eq!(rig.camera.eye, Vector3::new(0.0, 2.0, -6.0));
    }
}
