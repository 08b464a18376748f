//! Camera flights
//!
//! A flight eases the camera from wherever it is to a destination while
//! keeping it aimed at a look-at point. The caller attaches a continuation
//! value which is handed back from [`CameraInterpolator::advance`] on the
//! frame the flight lands. Starting a new flight replaces the current one
//! outright and its continuation is dropped unseen.

use cgmath::Vector3;

use super::{easing::Easing, tween::Tween};
use crate::gfx::camera::CameraRig;

#[derive(Debug, Clone, Copy)]
struct Flight<C> {
    path: Tween<Vector3<f32>>,
    look_at: Vector3<f32>,
    continuation: C,
}

/// At most one camera flight at a time
#[derive(Debug, Clone)]
pub struct CameraInterpolator<C> {
    flight: Option<Flight<C>>,
    easing: Easing,
}

impl<C> CameraInterpolator<C> {
    pub fn new(easing: Easing) -> Self {
        Self {
            flight: None,
            easing,
        }
    }

    /// Starts a flight from the camera's current position
    ///
    /// The controls are disabled for the duration of the flight and pointed at
    /// `look_at` up front. Any flight already in progress is cancelled.
    pub fn start(
        &mut self,
        rig: &mut CameraRig,
        destination: Vector3<f32>,
        look_at: Vector3<f32>,
        duration: f32,
        continuation: C,
    ) {
        if self.flight.is_some() {
            log::debug!("Cancelling camera flight in progress");
        }
        rig.controls.enabled = false;
        rig.controls.target = look_at;
        self.flight = Some(Flight {
            path: Tween::new(rig.camera.eye, destination, duration, self.easing),
            look_at,
            continuation,
        });
    }

    /// Drops the current flight, if any, leaving the camera where it is
    pub fn cancel(&mut self) -> bool {
        self.flight.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.flight.is_some()
    }

    #[cfg(test)]
    pub(crate) fn destination(&self) -> Option<Vector3<f32>> {
        self.flight.as_ref().map(|flight| flight.path.target())
    }

    /// Moves the camera one step along the flight
    ///
    /// Returns the continuation on the frame the flight completes. At that
    /// point the controls are re-synced to the flight's look-at and enabled.
    pub fn advance(&mut self, dt: f32, rig: &mut CameraRig) -> Option<C> {
        let flight = self.flight.as_mut()?;
        rig.camera.eye = flight.path.advance(dt);
        rig.camera.look_at(flight.look_at);

        if !flight.path.is_finished() {
            return None;
        }

        let flight = self.flight.take()?;
        rig.controls.sync(flight.look_at);
        Some(flight.continuation)
    }
}

impl<C> Default for CameraInterpolator<C> {
    fn default() -> Self {
        Self::new(Easing::Power2Out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{CameraControls, LookAtCamera};
    use cgmath::{Deg, InnerSpace};

    fn rig_at(eye: Vector3<f32>) -> CameraRig {
        let target = Vector3::new(0.0, 0.0, 10.0);
        CameraRig::new(
            LookAtCamera::new(eye, target, Deg(50.0), 1.0),
            CameraControls::new(target),
        )
    }

    #[test]
    fn test_flight_lands_exactly_and_returns_continuation() {
        let mut rig = rig_at(Vector3::new(0.0, 0.0, 0.0));
        let mut interpolator = CameraInterpolator::default();
        let destination = Vector3::new(3.0, 1.0, -2.0);
        let look_at = Vector3::new(0.0, 1.0, 0.0);
        interpolator.start(&mut rig, destination, look_at, 1.0, "landed");

        assert!(!rig.controls.enabled);
        assert_eq!(interpolator.advance(0.5, &mut rig), None);
        // Ease-out: more than half way after half the time
        let covered = rig.camera.eye.magnitude() / destination.magnitude();
        assert!(covered > 0.5);
        assert_eq!(rig.camera.target, look_at);

        assert_eq!(interpolator.advance(0.6, &mut rig), Some("landed"));
        assert_eq!(rig.camera.eye, destination);
        assert!(rig.controls.enabled);
        assert_eq!(rig.controls.target, look_at);
        assert!(!interpolator.is_active());
    }

    #[test]
    fn test_restart_cancels_previous_continuation() {
        let mut rig = rig_at(Vector3::new(0.0, 0.0, 0.0));
        let mut interpolator = CameraInterpolator::default();
        interpolator.start(&mut rig, Vector3::new(10.0, 0.0, 0.0), Vector3::unit_z(), 1.0, 1);
        interpolator.advance(0.5, &mut rig);
        let midway = rig.camera.eye;

        interpolator.start(&mut rig, Vector3::new(0.0, 5.0, 0.0), Vector3::unit_y(), 1.0, 2);
        assert_eq!(interpolator.destination(), Some(Vector3::new(0.0, 5.0, 0.0)));
        // The new flight starts from where the old one was interrupted
        interpolator.advance(0.0, &mut rig);
        assert_eq!(rig.camera.eye, midway);

        let mut finished = Vec::new();
        for _ in 0..20 {
            if let Some(done) = interpolator.advance(0.1, &mut rig) {
                finished.push(done);
            }
        }
        assert_eq!(finished, vec![2]);
    }

    #[test]
    fn test_cancel_leaves_camera_in_place() {
        let mut rig = rig_at(Vector3::new(1.0, 1.0, 1.0));
        let mut interpolator = CameraInterpolator::default();
        interpolator.start(&mut rig, Vector3::new(9.0, 9.0, 9.0), Vector3::unit_z(), 2.0, ());
        interpolator.advance(0.5, &mut rig);
        let eye = rig.camera.eye;
        assert!(interpolator.cancel());
        assert_eq!(interpolator.advance(0.5, &mut rig), None);
        assert_eq!(rig.camera.eye, eye);
        assert!(!interpolator.cancel());
    }
}
