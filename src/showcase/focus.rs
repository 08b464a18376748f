//! Focus identifiers and the fixed table of camera placements

use cgmath::Vector3;
use std::fmt;

use crate::config::{FocusPlacement, ShowcaseConfig};

/// One of the fixed points of interest on the stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusId {
    /// The establishing shot of the whole stage
    Main,
    Chair,
    Shell,
    Wheel,
}

impl FocusId {
    /// Order used by the "next" control, matching the title column top to bottom
    pub const CYCLE: [FocusId; 4] = [FocusId::Main, FocusId::Chair, FocusId::Shell, FocusId::Wheel];

    /// Items that exist as geometry on the stage and can be hovered or clicked
    pub const PICKABLE: [FocusId; 3] = [FocusId::Chair, FocusId::Shell, FocusId::Wheel];

    /// Position in [`FocusId::CYCLE`]
    pub fn index(self) -> usize {
        match self {
            FocusId::Main => 0,
            FocusId::Chair => 1,
            FocusId::Shell => 2,
            FocusId::Wheel => 3,
        }
    }

    /// The identifier after this one in the cycle, wrapping around
    pub fn next(self) -> FocusId {
        Self::CYCLE[(self.index() + 1) % Self::CYCLE.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FocusId::Main => "main",
            FocusId::Chair => "chair",
            FocusId::Shell => "shell",
            FocusId::Wheel => "wheel",
        }
    }

    /// Caption of this item's button in the title column
    pub fn title(self) -> &'static str {
        match self {
            FocusId::Main => "MAIN",
            FocusId::Chair => "SEAT",
            FocusId::Shell => "MODULE",
            FocusId::Wheel => "BASE",
        }
    }
}

impl fmt::Display for FocusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the camera goes when an identifier is focused
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    pub id: FocusId,
    pub destination: Vector3<f32>,
    pub look_at: Vector3<f32>,
    /// Seconds
    pub duration: f32,
    /// Whether the camera circles `look_at` once it arrives
    pub orbit: bool,
}

/// Immutable lookup table of focus targets
#[derive(Debug, Clone)]
pub struct FocusRegistry {
    targets: [FocusTarget; 4],
}

impl FocusRegistry {
    /// Builds the table from per-id placements, every transition lasting `duration` seconds
    pub fn new(placements: &[FocusPlacement; 4], duration: f32) -> Self {
        let duration = duration.max(0.0);
        Self {
            targets: FocusId::CYCLE.map(|id| {
                let placement = placements[id.index()];
                FocusTarget {
                    id,
                    destination: placement.destination,
                    look_at: placement.look_at,
                    duration,
                    orbit: placement.orbit,
                }
            }),
        }
    }

    pub fn from_config(config: &ShowcaseConfig) -> Self {
        Self::new(&config.focus_targets, config.focus_duration)
    }

    pub fn get(&self, id: FocusId) -> &FocusTarget {
        &self.targets[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &FocusTarget> {
        self.targets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_in_declared_order() {
        let mut id = FocusId::Main;
        let mut visited = vec![id];
        for _ in 0..4 {
            id = id.next();
            visited.push(id);
        }
        assert_eq!(
            visited,
            vec![FocusId::Main, FocusId::Chair, FocusId::Shell, FocusId::Wheel, FocusId::Main]
        );
    }

    #[test]
    fn test_registry_lookup_is_keyed_by_id() {
        let registry = FocusRegistry::from_config(&ShowcaseConfig::default());
        for target in registry.iter() {
            assert_eq!(registry.get(target.id), target);
            assert_eq!(target.duration, 1.4);
        }
        assert_eq!(registry.get(FocusId::Main).destination, Vector3::new(0.0, 1.0, -7.0));
        assert_eq!(registry.get(FocusId::Main).look_at, Vector3::new(0.0, 4.0, 40.0));
    }

    #[test]
    fn test_registry_reads_configured_placements() {
        let config = ShowcaseConfig::default()
            .with_focus_duration(0.5)
            .with_focus_target(
                FocusId::Wheel,
                FocusPlacement::new(Vector3::new(-1.0, 0.5, -1.0), Vector3::new(0.0, 0.2, 0.0)).orbiting(),
            );
        let registry = FocusRegistry::from_config(&config);
        let wheel = registry.get(FocusId::Wheel);
        assert_eq!(wheel.id, FocusId::Wheel);
        assert_eq!(wheel.destination, Vector3::new(-1.0, 0.5, -1.0));
        assert!(wheel.orbit);
        assert_eq!(wheel.duration, 0.5);
        assert_eq!(registry.get(FocusId::Shell).look_at, Vector3::new(2.0, 0.0, 2.0));
    }

    #[test]
    fn test_only_chair_orbits() {
        let registry = FocusRegistry::from_config(&ShowcaseConfig::default());
        let orbiting: Vec<_> = registry.iter().filter(|t| t.orbit).map(|t| t.id).collect();
        assert_eq!(orbiting, vec![FocusId::Chair]);
    }
}
