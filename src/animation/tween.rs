//! Fixed-duration tweens between two values

use cgmath::{Vector3, VectorSpace};

use super::easing::Easing;

/// Values that can be blended linearly
pub trait Lerp: Copy {
    fn lerp_to(self, other: Self, amount: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(self, other: Self, amount: f32) -> Self {
        self + (other - self) * amount
    }
}

impl Lerp for Vector3<f32> {
    fn lerp_to(self, other: Self, amount: f32) -> Self {
        self.lerp(other, amount)
    }
}

/// Interpolates from `from` to `to` over `duration` seconds
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advances the tween and returns the value at the new time
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> T {
        if self.is_finished() {
            // Land exactly on the target instead of trusting the curve
            return self.to;
        }
        self.from
            .lerp_to(self.to, self.easing.apply(self.elapsed / self.duration))
    }

    /// Value at an absolute time since the tween started, without mutating it
    pub fn sample(&self, time: f32) -> T {
        if time >= self.duration {
            return self.to;
        }
        if time <= 0.0 {
            return self.from;
        }
        self.from
            .lerp_to(self.to, self.easing.apply(time / self.duration))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_tween_reaches_target() {
        let mut tween = Tween::new(0.0_f32, 10.0, 1.0, Easing::Linear);
        assert_eq!(tween.advance(0.25), 2.5);
        assert!(!tween.is_finished());
        assert_eq!(tween.advance(5.0), 10.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0), 0.0, Easing::Power2Out);
        assert!(tween.is_finished());
        assert_eq!(tween.advance(0.0), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_sample_does_not_advance() {
        let tween = Tween::new(1.0_f32, 0.0, 0.5, Easing::Power2In);
        assert_eq!(tween.sample(-1.0), 1.0);
        assert_eq!(tween.sample(0.5), 0.0);
        assert!(!tween.is_finished());
    }
}
