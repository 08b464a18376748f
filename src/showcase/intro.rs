//! Full-screen "click to start" overlay
//!
//! Dismissal is a short sequence: the logo pops up and settles back, then the
//! overlay fades away. The camera flight begins when the logo has settled, the
//! same instant the fade starts, so the stage is never exposed before it moves.
//! The overlay stops taking clicks as soon as the sequence starts so a double
//! click can't restart it.

use crate::animation::{Easing, Tween};

const POP_UP: f32 = 0.22;
const SETTLE: f32 = 0.18;
/// The settle starts this long before the pop-up finishes
const SETTLE_OVERLAP: f32 = 0.06;
/// The logo is back at rest; camera and fade start here
const LOGO_END: f32 = POP_UP + SETTLE - SETTLE_OVERLAP;
const FADE: f32 = 0.35;
const POP_SCALE: f32 = 1.2;

#[derive(Debug, Clone)]
pub struct IntroOverlay {
    visible: bool,
    accepts_input: bool,
    opacity: f32,
    logo_scale: f32,
    /// Seconds since dismissal began
    dismissing: Option<f32>,
}

impl IntroOverlay {
    pub fn new() -> Self {
        Self {
            visible: true,
            accepts_input: true,
            opacity: 1.0,
            logo_scale: 1.0,
            dismissing: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn accepts_input(&self) -> bool {
        self.visible && self.accepts_input
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn logo_scale(&self) -> f32 {
        self.logo_scale
    }

    /// Begins the dismissal sequence; false if already dismissing or hidden
    pub fn dismiss(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.accepts_input = false;
        self.dismissing = Some(0.0);
        true
    }

    /// True between a dismissal click and the overlay disappearing
    pub fn is_dismissing(&self) -> bool {
        self.dismissing.is_some()
    }

    /// Shows the overlay again at full opacity, ready for a click
    pub fn rearm(&mut self) {
        *self = Self::new();
    }

    /// Advances the dismissal sequence
    ///
    /// Returns true on the one frame in which the logo finishes settling; the
    /// caller starts the camera flight then.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(elapsed) = self.dismissing.as_mut() else {
            return false;
        };
        let previous = *elapsed;
        *elapsed += dt.max(0.0);
        let t = *elapsed;
        let logo_settled = previous < LOGO_END && t >= LOGO_END;

        let settle_start = POP_UP - SETTLE_OVERLAP;
        self.logo_scale = if t < settle_start {
            Tween::new(1.0, POP_SCALE, POP_UP, Easing::Power2Out).sample(t)
        } else {
            // Settle from wherever the pop-up had reached
            let from = Tween::new(1.0, POP_SCALE, POP_UP, Easing::Power2Out).sample(settle_start);
            Tween::new(from, 1.0, SETTLE, Easing::BackOut(2.0)).sample(t - settle_start)
        };
        self.opacity = if t < LOGO_END {
            1.0
        } else {
            Tween::new(1.0, 0.0, FADE, Easing::Power2Out).sample(t - LOGO_END)
        };

        if t >= LOGO_END + FADE {
            self.visible = false;
            self.opacity = 0.0;
            self.logo_scale = 1.0;
            self.dismissing = None;
        }
        logo_settled
    }
}

impl Default for IntroOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_blocks_input_immediately() {
        let mut overlay = IntroOverlay::new();
        assert!(overlay.accepts_input());
        assert!(overlay.dismiss());
        assert!(!overlay.accepts_input());
        assert!(overlay.is_visible());
        assert!(!overlay.dismiss());
    }

    #[test]
    fn test_logo_pops_then_overlay_hides() {
        let mut overlay = IntroOverlay::new();
        overlay.dismiss();
        assert!(!overlay.update(0.1));
        assert!(overlay.logo_scale() > 1.0);
        assert_eq!(overlay.opacity(), 1.0);

        // Still opaque while the logo settles
        assert!(!overlay.update(0.15));
        assert_eq!(overlay.opacity(), 1.0);

        assert!(overlay.update(0.1));
        assert!(overlay.is_visible());

        assert!(!overlay.update(0.1));
        assert!(overlay.opacity() < 1.0);
        assert!(overlay.opacity() > 0.0);

        assert!(!overlay.update(0.3));
        assert!(!overlay.is_visible());
        assert_eq!(overlay.opacity(), 0.0);
        assert_eq!(overlay.logo_scale(), 1.0);
    }

    #[test]
    fn test_long_frame_still_reports_logo_end_once() {
        let mut overlay = IntroOverlay::new();
        overlay.dismiss();
        assert!(overlay.update(1.0));
        assert!(!overlay.is_visible());
        assert!(!overlay.update(1.0));
    }

    #[test]
    fn test_rearm_restores_overlay() {
        let mut overlay = IntroOverlay::new();
        overlay.dismiss();
        overlay.update(1.0);
        assert!(!overlay.is_visible());

        overlay.rearm();
        assert!(overlay.is_visible());
        assert!(overlay.accepts_input());
        assert_eq!(overlay.opacity(), 1.0);
    }
}
