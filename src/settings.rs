//! Game settings and preferences
//!
//! Read from a JSON file by the host. Missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides the quality preset
pub const QUALITY_ENV: &str = "RING_SURVIVOR_QUALITY";

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects (kill bursts)
    pub particles: bool,

    // === Arena ===
    /// Arena radius in world units
    pub arena_radius: f32,
    /// Seconds before a pending skill choice is made at random
    pub skill_auto_select: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,

            arena_radius: crate::consts::ARENA_RADIUS,
            skill_auto_select: crate::consts::SKILL_AUTO_SELECT,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Reject values the sim cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        // Leaves room for the player plus the chest keep-away distance
        let min_arena = crate::consts::PLAYER_RADIUS * 4.0;
        if !self.arena_radius.is_finite() || self.arena_radius < min_arena {
            return Err(SettingsError::Invalid {
                field: "arena_radius",
                reason: format!("must be at least {min_arena}, got {}", self.arena_radius),
            });
        }
        if !self.skill_auto_select.is_finite() || self.skill_auto_select <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "skill_auto_select",
                reason: format!("must be positive, got {}", self.skill_auto_select),
            });
        }
        for (field, vol) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&vol) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be within 0.0..=1.0, got {vol}"),
                });
            }
        }
        Ok(())
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a settings file
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Apply the quality override from the environment, if set and known
    pub fn apply_env_override(&mut self, value: Option<&str>) {
        let Some(raw) = value else {
            return;
        };
        match QualityPreset::from_str(raw) {
            Some(preset) => {
                log::info!("Quality overridden by {}: {}", QUALITY_ENV, preset.as_str());
                self.quality = preset;
            }
            None => log::warn!("Ignoring unknown {} value {:?}", QUALITY_ENV, raw),
        }
    }

    /// Load settings, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let mut settings = match path {
            Some(path) => match Self::from_path(path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("{err}; using default settings");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        };
        let env = std::env::var(QUALITY_ENV).ok();
        settings.apply_env_override(env.as_deref());
        settings
    }
}
