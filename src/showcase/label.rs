//! Headline label above the stage
//!
//! The label names the highlighted item. Text changes are animated: the old
//! text fades out, the new one fades in with a small pop in scale.

use super::focus::FocusId;
use crate::animation::{Easing, Tween};

const FADE_OUT: f32 = 0.15;
/// The fade-in overlaps the end of the fade-out by this much
const OVERLAP: f32 = 0.02;
const FADE_IN: f32 = 0.2;
const POP: f32 = 0.25;
const POP_FROM: f32 = 0.9;

/// Text shown for a highlighted item
pub fn label_for(id: Option<FocusId>) -> &'static str {
    match id {
        Some(FocusId::Chair) => "CarSeat",
        Some(FocusId::Shell) => "Module",
        Some(FocusId::Wheel) => "PBV",
        Some(FocusId::Main) | None => "For:est",
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    next: &'static str,
    elapsed: f32,
    fade_out: Tween<f32>,
    fade_in: Option<Tween<f32>>,
}

#[derive(Debug, Clone)]
pub struct AnimatedLabel {
    displayed: &'static str,
    requested: &'static str,
    opacity: f32,
    scale: f32,
    transition: Option<Transition>,
}

impl AnimatedLabel {
    pub fn new(text: &'static str) -> Self {
        Self {
            displayed: text,
            requested: text,
            opacity: 1.0,
            scale: 1.0,
            transition: None,
        }
    }

    pub fn text(&self) -> &'static str {
        self.displayed
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Requests `text`; a repeat of the last request does nothing
    pub fn show(&mut self, text: &'static str) {
        if text == self.requested {
            return;
        }
        self.requested = text;
        // Any pop in progress is dropped; the new one starts from its low point
        self.scale = POP_FROM;
        // Restart from wherever the previous transition left the opacity
        self.transition = Some(Transition {
            next: text,
            elapsed: 0.0,
            fade_out: Tween::new(self.opacity, 0.0, FADE_OUT, Easing::Power2In),
            fade_in: None,
        });
    }

    pub fn update(&mut self, dt: f32) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        transition.elapsed += dt.max(0.0);
        let t = transition.elapsed;
        let fade_in_start = FADE_OUT - OVERLAP;

        if t < fade_in_start {
            self.opacity = transition.fade_out.sample(t);
        } else {
            let fade_out = transition.fade_out;
            let fade_in = *transition.fade_in.get_or_insert_with(|| {
                Tween::new(fade_out.sample(fade_in_start), 1.0, FADE_IN, Easing::Power2Out)
            });
            self.opacity = fade_in.sample(t - fade_in_start);
            self.scale = Tween::new(POP_FROM, 1.0, POP, Easing::BackOut(2.0))
                .sample(t - fade_in_start);
        }

        if t >= FADE_OUT {
            self.displayed = transition.next;
        }

        if t >= fade_in_start + FADE_IN.max(POP) {
            self.displayed = transition.next;
            self.opacity = 1.0;
            self.scale = 1.0;
            self.transition = None;
        }
    }
}

impl Default for AnimatedLabel {
    fn default() -> Self {
        Self::new(label_for(None))
    }
}
