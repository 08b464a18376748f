//! # Showcase Configuration
//!
//! Every tunable constant of the presentation lives in [`ShowcaseConfig`].
//! The defaults reproduce the stage as it was designed; the `with_*` methods
//! allow overriding individual values in the builder style used elsewhere in
//! the crate.
//!
//! ```no_run
//! use forest_showcase::config::ShowcaseConfig;
//! use std::time::Duration;
//!
//! let config = ShowcaseConfig::default()
//!     .with_asset_dir("assets")
//!     .with_idle_timeout(Duration::from_secs(30));
//! ```

use cgmath::Vector3;
use std::path::PathBuf;
use std::time::Duration;

use crate::showcase::FocusId;

/// Camera setup before the intro has been dismissed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Where the camera rests while the intro overlay is shown
    pub rest_position: Vector3<f32>,
    /// What the camera looks at while resting and during the flythrough
    pub rest_look_at: Vector3<f32>,
}

/// The one-shot flythrough played after the intro overlay is dismissed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroFlightConfig {
    pub from: Vector3<f32>,
    pub to: Vector3<f32>,
    pub duration: f32,
}

/// Camera placement for one focus identifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPlacement {
    pub destination: Vector3<f32>,
    pub look_at: Vector3<f32>,
    /// Whether the camera circles `look_at` once it arrives
    pub orbit: bool,
}

impl FocusPlacement {
    pub fn new(destination: Vector3<f32>, look_at: Vector3<f32>) -> Self {
        Self {
            destination,
            look_at,
            orbit: false,
        }
    }

    pub fn orbiting(mut self) -> Self {
        self.orbit = true;
        self
    }
}

/// Top-level configuration for the showcase
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    pub window_title: String,
    pub window_size: (u32, u32),
    pub asset_dir: PathBuf,
    pub camera: CameraConfig,
    pub intro_flight: IntroFlightConfig,
    /// Placements indexed by [`FocusId::index`]
    pub focus_targets: [FocusPlacement; 4],
    /// Duration of every focus transition, in seconds
    pub focus_duration: f32,
    /// Angular speed of the orbit follower, radians per second
    pub orbit_speed: f32,
    /// Spin speed of the chair assembly, radians per second
    pub chair_spin_speed: f32,
    pub idle_timeout: Duration,
    pub clear_color: [f64; 3],
    /// Linear fog start and end distances
    pub fog_range: (f32, f32),
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            window_title: "For:est".to_string(),
            window_size: (1200, 800),
            asset_dir: PathBuf::from("assets"),
            camera: CameraConfig {
                fov_degrees: 50.0,
                znear: 0.1,
                zfar: 200.0,
                rest_position: Vector3::new(0.0, 2.0, -6.0),
                rest_look_at: Vector3::new(0.0, 4.0, 40.0),
            },
            intro_flight: IntroFlightConfig {
                from: Vector3::new(0.0, 3.0, -16.0),
                to: Vector3::new(0.0, 1.0, -7.0),
                duration: 2.0,
            },
            focus_targets: [
                // Main lands where the flythrough ends
                FocusPlacement::new(Vector3::new(0.0, 1.0, -7.0), Vector3::new(0.0, 4.0, 40.0)),
                // Slight z offset keeps the pivot off the camera's vertical axis
                FocusPlacement::new(Vector3::new(1.0, 4.0, 1.0), Vector3::new(0.0, 1.0, 0.08))
                    .orbiting(),
                FocusPlacement::new(Vector3::new(6.0, 3.0, -2.0), Vector3::new(2.0, 0.0, 2.0)),
                FocusPlacement::new(Vector3::new(-3.0, 0.0, -2.8), Vector3::new(0.0, 0.0, 0.0)),
            ],
            focus_duration: 1.4,
            // Same magnitude as the chair spin so the seat appears to hold still
            orbit_speed: -0.1,
            chair_spin_speed: 0.1,
            idle_timeout: Duration::from_millis(10_000),
            clear_color: [0.0, 0.0, 0.0],
            fog_range: (12.0, 60.0),
        }
    }
}

impl ShowcaseConfig {
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    pub fn with_focus_duration(mut self, seconds: f32) -> Self {
        self.focus_duration = seconds.max(0.0);
        self
    }

    pub fn with_orbit_speed(mut self, radians_per_second: f32) -> Self {
        self.orbit_speed = radians_per_second;
        self
    }

    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn with_intro_flight(mut self, intro_flight: IntroFlightConfig) -> Self {
        self.intro_flight = intro_flight;
        self
    }

    pub fn with_focus_target(mut self, id: FocusId, placement: FocusPlacement) -> Self {
        self.focus_targets[id.index()] = placement;
        self
    }

    pub fn focus_target(&self, id: FocusId) -> &FocusPlacement {
        &self.focus_targets[id.index()]
    }

    /// Resolves an asset file name against the asset directory
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.asset_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stage_layout() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.intro_flight.to, Vector3::new(0.0, 1.0, -7.0));
        assert_eq!(config.camera.rest_position, Vector3::new(0.0, 2.0, -6.0));
        assert_eq!(config.idle_timeout, Duration::from_millis(10_000));
        assert_eq!(config.focus_duration, 1.4);
        assert_eq!(config.orbit_speed, -config.chair_spin_speed);

        let main = config.focus_target(FocusId::Main);
        assert_eq!(main.destination, config.intro_flight.to);
        assert_eq!(main.look_at, config.camera.rest_look_at);

        let chair = config.focus_target(FocusId::Chair);
        assert_eq!(chair.destination, Vector3::new(1.0, 4.0, 1.0));
        assert_eq!(chair.look_at, Vector3::new(0.0, 1.0, 0.08));
        assert!(chair.orbit);

        let shell = config.focus_target(FocusId::Shell);
        assert_eq!(shell.destination, Vector3::new(6.0, 3.0, -2.0));
        assert_eq!(shell.look_at, Vector3::new(2.0, 0.0, 2.0));

        let wheel = config.focus_target(FocusId::Wheel);
        assert_eq!(wheel.destination, Vector3::new(-3.0, 0.0, -2.8));
        assert_eq!(wheel.look_at, Vector3::new(0.0, 0.0, 0.0));

        let orbiting = FocusId::CYCLE.iter().filter(|id| config.focus_target(**id).orbit).count();
        assert_eq!(orbiting, 1);
    }

    #[test]
    fn test_focus_target_override() {
        let placement = FocusPlacement::new(Vector3::new(2.0, 2.0, 2.0), Vector3::new(0.0, 0.5, 0.0));
        let config = ShowcaseConfig::default().with_focus_target(FocusId::Shell, placement);
        assert_eq!(*config.focus_target(FocusId::Shell), placement);
        assert!(config.focus_target(FocusId::Chair).orbit);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ShowcaseConfig::default()
            .with_asset_dir("/tmp/stage")
            .with_focus_duration(-1.0)
            .with_window_size(640, 480);
        assert_eq!(config.asset_path("Stage_Shell.obj"), PathBuf::from("/tmp/stage/Stage_Shell.obj"));
        assert_eq!(config.focus_duration, 0.0);
        assert_eq!(config.window_size, (640, 480));
    }
}
