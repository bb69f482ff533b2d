//! Ambient lighting context — the parameters every style is resolved from.

use n_color::Color;
use serde::{Deserialize, Serialize};

/// The base surface color used when nothing else is configured.
pub const DEFAULT_COLOR: Color = Color::rgb(0xe8, 0xd1, 0xbf);

/// Lighting parameters shared by every element at a given moment.
///
/// Produced by whoever drives the light (see `n-ambient`) and handed to the
/// resolver by reference. The resolver never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientContext {
    /// Base surface color. Shadows and gradients are shifts of this.
    pub color: Color,
    /// Light angle in degrees. Drivers keep it in `[0, 360)`.
    pub angle: f64,
    /// How far raised surfaces appear to stand out; sets shadow offset and blur.
    pub elevation_depth: f64,
    /// How deep dents appear. Carried for consumers; no built-in formula reads it.
    pub dent_depth: f64,
}

impl AmbientContext {
    /// Create a context from all four parameters.
    #[must_use]
    pub const fn new(color: Color, angle: f64, elevation_depth: f64, dent_depth: f64) -> Self {
        Self {
            color,
            angle,
            elevation_depth,
            dent_depth,
        }
    }

    /// Return a copy lit from a different angle.
    #[must_use]
    pub const fn with_angle(self, angle: f64) -> Self {
        Self { angle, ..self }
    }

    /// Return a copy with a different base color.
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Return a copy with a different elevation depth.
    #[must_use]
    pub const fn with_elevation_depth(self, elevation_depth: f64) -> Self {
        Self {
            elevation_depth,
            ..self
        }
    }
}

impl Default for AmbientContext {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, 0.0, 10.0, 1.0)
    }
}
