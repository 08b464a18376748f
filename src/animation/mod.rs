//! # Animation Module
//!
//! Time-based value animation for the showcase: easing curves, scalar and
//! vector tweens, and the camera interpolator that drives every camera flight.
//!
//! Nothing here owns a clock. Callers feed elapsed seconds into `advance`
//! once per frame, which keeps every animation deterministic under test.

pub mod easing;
pub mod interpolator;
pub mod tween;

pub use easing::Easing;
pub use interpolator::CameraInterpolator;
pub use tween::{Lerp, Tween};
