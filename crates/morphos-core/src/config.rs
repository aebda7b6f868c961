use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::error::MorphosError;
use crate::shape::{ShapeKind, ALL_SHAPES};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config RON: {0}")]
    Parse(String),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Invalid(#[from] MorphosError),
}

/// Startup configuration for a simulation run, loaded from RON data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of particles (N). Fixed for the lifetime of the pipeline.
    pub particle_count: usize,
    /// Base RNG seed. Each shape generator derives its own stream from it.
    pub seed: u64,
    /// Shapes generated at startup; only these can be activated.
    pub shapes: Vec<ShapeKind>,
    /// Active shape on the first frame.
    pub initial_shape: ShapeKind,
    /// Run the collision resolver after integration.
    pub collisions_enabled: bool,
    /// Overlap distance between two particles.
    pub collision_radius: f32,
    /// Fraction of the overlap corrected per pass.
    pub collision_softening: f32,
    /// Neighbor visit cap per particle.
    pub max_neighbor_visits: usize,
    /// Spring stiffness toward the scaled target.
    pub spring_stiffness: f32,
    /// Multiplicative velocity drag per frame (0..1).
    pub damping: f32,
    /// Breathing amplitude applied to the effective scale (0 disables).
    pub breathing_amplitude: f32,
    /// Bass contribution to the effective scale.
    pub audio_scale_gain: f32,
    /// Half-size of the cube particles are scattered in at startup.
    pub initial_spread: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: 42,
            shapes: ALL_SHAPES.to_vec(),
            initial_shape: ShapeKind::Earth,
            collisions_enabled: true,
            collision_radius: COLLISION_RADIUS,
            collision_softening: COLLISION_SOFTENING,
            max_neighbor_visits: MAX_NEIGHBOR_VISITS,
            spring_stiffness: SPRING_STIFFNESS,
            damping: VELOCITY_DAMPING,
            breathing_amplitude: 0.05,
            audio_scale_gain: 0.3,
            initial_spread: 20.0,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from a RON string.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default();
        let config: SimConfig = options
            .from_str(ron_str)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a RON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Serialize to pretty RON (used for writing default config files).
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check value ranges. Reports the first violation.
    pub fn validate(&self) -> Result<(), MorphosError> {
        let fail = |msg: String| -> Result<(), MorphosError> {
            Err(MorphosError::InvalidConfig(msg))
        };

        if self.particle_count == 0 {
            return fail("particle_count must be > 0".into());
        }
        if self.particle_count > EMPTY_SLOT as usize {
            return fail(format!(
                "particle_count {} exceeds grid index range",
                self.particle_count
            ));
        }
        if self.shapes.is_empty() {
            return fail("shapes must list at least one shape".into());
        }
        if !self.shapes.contains(&self.initial_shape) {
            return fail(format!(
                "initial_shape '{}' is not in the generated shape list",
                self.initial_shape
            ));
        }
        if !(self.collision_radius > 0.0 && self.collision_radius.is_finite()) {
            return fail(format!("collision_radius must be > 0, got {}", self.collision_radius));
        }
        if !(0.0..=1.0).contains(&self.collision_softening) {
            return fail(format!(
                "collision_softening must be in [0, 1], got {}",
                self.collision_softening
            ));
        }
        if self.max_neighbor_visits == 0 {
            return fail("max_neighbor_visits must be > 0".into());
        }
        if !(self.spring_stiffness > 0.0 && self.spring_stiffness < 1.0) {
            return fail(format!(
                "spring_stiffness must be in (0, 1), got {}",
                self.spring_stiffness
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return fail(format!("damping must be in (0, 1), got {}", self.damping));
        }
        if !(0.0..1.0).contains(&self.breathing_amplitude) {
            return fail(format!(
                "breathing_amplitude must be in [0, 1), got {}",
                self.breathing_amplitude
            ));
        }
        if !(self.audio_scale_gain >= 0.0 && self.audio_scale_gain.is_finite()) {
            return fail(format!("audio_scale_gain must be >= 0, got {}", self.audio_scale_gain));
        }
        if !(self.initial_spread >= 0.0 && self.initial_spread.is_finite()) {
            return fail(format!("initial_spread must be >= 0, got {}", self.initial_spread));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = SimConfig::from_ron_str("(particle_count: 500, initial_shape: heart)")
            .expect("valid config");
        assert_eq!(config.particle_count, 500);
        assert_eq!(config.initial_shape, ShapeKind::Heart);
        assert_eq!(config.damping, VELOCITY_DAMPING);
        assert_eq!(config.shapes.len(), ALL_SHAPES.len());
    }

    #[test]
    fn test_parse_error_reported() {
        let err = SimConfig::from_ron_str("(particle_count: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_zero_particles_rejected() {
        let err = SimConfig::from_ron_str("(particle_count: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(MorphosError::InvalidConfig(_))));
    }

    #[test]
    fn test_initial_shape_must_be_generated() {
        let config = SimConfig {
            shapes: vec![ShapeKind::Heart],
            initial_shape: ShapeKind::Cube,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_damping_range() {
        let config = SimConfig {
            damping: 1.0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ron_roundtrip_default() {
        let text = SimConfig::default().to_ron_string().expect("serialize");
        let back = SimConfig::from_ron_str(&text).expect("parse");
        assert_eq!(back, SimConfig::default());
    }
}
