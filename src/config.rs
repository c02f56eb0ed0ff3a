//! Simulation presets and the per-run parameter snapshot.
//!
//! The handful of tuning constants that distinguish one rendition of the
//! run from another live behind a `Preset`; a `RunConfig` freezes the
//! chosen preset's parameters for the lifetime of a session.

use serde::{Deserialize, Serialize};

/// Named parameter sets for the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// The standard run: gentle gravity, short hops, a measured pace.
    Classic,
    /// A faster rendition: heavier gravity, higher jumps, triple the
    /// ground speed.
    Swift,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Swift];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Swift => "Swift",
        }
    }

    /// Parse a CLI argument into a preset.
    pub fn from_arg(arg: &str) -> Option<Preset> {
        match arg.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "swift" => Some(Self::Swift),
            _ => None,
        }
    }

    /// Gravity in world units per frame (positive = downward).
    pub fn gravity(&self) -> f64 {
        match self {
            Self::Classic => 0.5,
            Self::Swift => 0.8,
        }
    }

    /// Jump impulse (negative = upward, sets vertical velocity directly).
    pub fn jump_speed(&self) -> f64 {
        match self {
            Self::Classic => -6.0,
            Self::Swift => -10.0,
        }
    }

    /// Horizontal speed while move-right is held (world units per frame).
    pub fn move_speed(&self) -> f64 {
        match self {
            Self::Classic => 0.7,
            Self::Swift => 2.0,
        }
    }

    /// The y-coordinate of the running surface.
    pub fn ground_level(&self) -> f64 {
        180.0
    }

    /// Wall-clock limit for a run, in seconds.
    pub fn time_limit_seconds(&self) -> f64 {
        60.0
    }

    /// Score awarded per carrot collected.
    pub fn carrot_reward(&self) -> u32 {
        5
    }
}

/// Frozen simulation parameters for one session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunConfig {
    pub preset: Preset,
    pub gravity: f64,
    pub jump_speed: f64,
    pub move_speed: f64,
    pub ground_level: f64,
    pub time_limit_seconds: f64,
    pub carrot_reward: u32,
}

impl RunConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            preset,
            gravity: preset.gravity(),
            jump_speed: preset.jump_speed(),
            move_speed: preset.move_speed(),
            ground_level: preset.ground_level(),
            time_limit_seconds: preset.time_limit_seconds(),
            carrot_reward: preset.carrot_reward(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Classic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_parameters() {
        let p = Preset::Classic;
        assert!((p.gravity() - 0.5).abs() < f64::EPSILON);
        assert!((p.jump_speed() - (-6.0)).abs() < f64::EPSILON);
        assert!((p.move_speed() - 0.7).abs() < f64::EPSILON);
        assert!((p.ground_level() - 180.0).abs() < f64::EPSILON);
        assert!((p.time_limit_seconds() - 60.0).abs() < f64::EPSILON);
        assert_eq!(p.carrot_reward(), 5);
    }

    #[test]
    fn test_swift_parameters() {
        let p = Preset::Swift;
        assert!((p.gravity() - 0.8).abs() < f64::EPSILON);
        assert!((p.jump_speed() - (-10.0)).abs() < f64::EPSILON);
        assert!((p.move_speed() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_presets_have_valid_parameters() {
        for preset in &Preset::ALL {
            assert!(preset.gravity() > 0.0, "{:?} gravity must be positive", preset);
            assert!(
                preset.jump_speed() < 0.0,
                "{:?} jump speed must be negative (upward)",
                preset
            );
            assert!(
                preset.move_speed() > 0.0,
                "{:?} move speed must be positive",
                preset
            );
            assert!(
                preset.time_limit_seconds() > 0.0,
                "{:?} time limit must be positive",
                preset
            );
            assert!(
                preset.carrot_reward() > 0,
                "{:?} carrot reward must be positive",
                preset
            );
        }
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(Preset::from_arg("classic"), Some(Preset::Classic));
        assert_eq!(Preset::from_arg("Classic"), Some(Preset::Classic));
        assert_eq!(Preset::from_arg("SWIFT"), Some(Preset::Swift));
        assert_eq!(Preset::from_arg("turbo"), None);
    }

    #[test]
    fn test_config_snapshots_preset() {
        let config = RunConfig::from_preset(Preset::Swift);
        assert_eq!(config.preset, Preset::Swift);
        assert!((config.gravity - 0.8).abs() < f64::EPSILON);
        assert!((config.jump_speed - (-10.0)).abs() < f64::EPSILON);
        assert!((config.move_speed - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_is_classic() {
        let config = RunConfig::default();
        assert_eq!(config.preset, Preset::Classic);
    }
}
