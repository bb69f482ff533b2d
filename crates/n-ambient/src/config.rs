// SPDX-License-Identifier: MIT
//
// Driver configuration — what the host hands the ambient driver.
//
//   color             base surface color            "#e8d1bf"
//   start_angle       first light angle, degrees    0
//   tick_interval_ms  time between ticks            33 (~30 Hz)
//   elevation_depth   shadow offset / half blur     10
//   dent_depth        carried to consumers          1
//
// Every key is optional in TOML; missing keys take the defaults above.
//
//   color = "#fab"
//   start_angle = 250
//   elevation_depth = 20

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use n_color::Color;
use n_style::AmbientContext;
use n_style::context::DEFAULT_COLOR;
use n_style::geometry::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Default time between ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 33;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A configuration that could not be loaded or does not make sense.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid driver config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("tick_interval_ms must be at least 1")]
    ZeroInterval,

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

// ─── DriverConfig ────────────────────────────────────────────────────────────

/// Parameters for an [`AmbientDriver`](crate::AmbientDriver).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    pub color: Color,
    pub start_angle: f64,
    pub tick_interval_ms: u64,
    pub elevation_depth: f64,
    pub dent_depth: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            start_angle: 0.0,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            elevation_depth: 10.0,
            dent_depth: 1.0,
        }
    }
}

impl DriverConfig {
    /// The showcase lighting: deeper shadows, light starting at 250°.
    #[must_use]
    pub fn showcase() -> Self {
        Self {
            start_angle: 250.0,
            elevation_depth: 20.0,
            dent_depth: 10.0,
            ..Self::default()
        }
    }

    /// The context at the first tick, with `start_angle` wrapped into
    /// `[0, 360)`.
    #[must_use]
    pub fn context(&self) -> AmbientContext {
        AmbientContext::new(
            self.color,
            normalize_degrees(self.start_angle),
            self.elevation_depth,
            self.dent_depth,
        )
    }

    /// `tick_interval_ms` as a `Duration`.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check the values the driver cannot work with.
    ///
    /// Negative depths are fine (they flip the shadows); a zero interval
    /// or a non-finite number is not.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroInterval`] or [`ConfigError::NonFinite`].
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        for (field, value) in [
            ("start_angle", self.start_angle),
            ("elevation_depth", self.elevation_depth),
            ("dent_depth", self.dent_depth),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(self)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for bad TOML, unknown keys or malformed colors;
    /// otherwise see [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)?.validate()
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded driver config");
        Ok(config)
    }
}

// ─── Presets ─────────────────────────────────────────────────────────────────

/// Look up a named preset.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_config(name: &str) -> Option<DriverConfig> {
    match name {
        "default" => Some(DriverConfig::default()),
        "showcase" => Some(DriverConfig::showcase()),
        _ => None,
    }
}

/// All preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "showcase"]
}

// ─── Tests ───────────────────────────────────────────────────────────────────
