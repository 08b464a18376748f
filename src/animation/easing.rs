//! Easing curves
//!
//! All curves map normalized time `t ∈ [0, 1]` to progress, with `f(0) = 0`
//! and `f(1) = 1`. Inputs outside the range are clamped.

/// Easing curve applied to a tween's normalized time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in: slow start, fast finish
    Power2In,
    /// Quadratic ease-out: fast start, slow settle
    Power2Out,
    /// Overshoots the target by an amount controlled by the factor, then settles
    BackOut(f32),
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t * t,
            Easing::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Easing::BackOut(overshoot) => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Power2Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::Power2In,
        Easing::Power2Out,
        Easing::BackOut(2.0),
    ];

    #[test]
    fn test_endpoints() {
        for curve in CURVES {
            assert!(curve.apply(0.0).abs() < 1e-6, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-6, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_power2_out_front_loads_progress() {
        // Half the time covers three quarters of the distance
        assert!((Easing::Power2Out.apply(0.5) - 0.75).abs() < 1e-6);
        assert!((Easing::Power2In.apply(0.5) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(2.0).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(Easing::Power2Out.apply(2.0), 1.0);
        assert_eq!(Easing::Power2Out.apply(-1.0), 0.0);
    }
}
