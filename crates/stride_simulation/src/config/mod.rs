//! Конфигурация симуляции (RON)
//!
//! Пример `stride.ron`:
//! ```ron
//! (
//!     tick_hz: 60.0,
//!     default_profile: (speed: 2.0, planar: true),
//!     log_level: Info,
//! )
//! ```

use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{MovementProfile, MAX_SPEED};
use crate::logger::LogLevel;

/// Верхняя граница tick rate (Hz)
pub const MAX_TICK_HZ: f64 = 10_000.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Параметры симуляции movement
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Частота FixedUpdate (Hz)
    pub tick_hz: f64,
    /// Профиль для новых акторов
    pub default_profile: MovementProfile,
    pub log_level: LogLevel,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            default_profile: MovementProfile::default(),
            log_level: LogLevel::Debug,
        }
    }
}

impl MovementConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// Шаг FixedUpdate. Невалидный tick_hz (конфиг собран руками) → default 60Hz.
    pub fn fixed_timestep(&self) -> Duration {
        let tick_hz = if self.tick_hz.is_finite() && self.tick_hz > 0.0 && self.tick_hz <= MAX_TICK_HZ {
            self.tick_hz
        } else {
            Self::default().tick_hz
        };
        Duration::from_secs_f64(1.0 / tick_hz)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick_hz.is_finite() || self.tick_hz <= 0.0 || self.tick_hz > MAX_TICK_HZ {
            return Err(ConfigError::Invalid(format!(
                "tick_hz must be in (0, {}], got {}",
                MAX_TICK_HZ, self.tick_hz
            )));
        }

        let speed = self.default_profile.speed;
        if !speed.is_finite() || speed < 0.0 || speed > MAX_SPEED {
            return Err(ConfigError::Invalid(format!(
                "default_profile.speed must be in [0, {}], got {}",
                MAX_SPEED, speed
            )));
        }

        Ok(())
    }
}
