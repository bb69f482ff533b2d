// SPDX-License-Identifier: MIT
//
// Angle clock — the light's only moving part.
//
// A tick advances the angle by a fixed step (one degree by default) and
// wraps it into [0, 360). Nothing here knows about wall-clock time; the
// driver decides when ticks happen, tests call `tick()` directly.

use n_style::AmbientContext;
use n_style::geometry::normalize_degrees;

use crate::config::DriverConfig;

/// Degrees added per tick.
pub const DEFAULT_STEP: f64 = 1.0;

// ─── AngleClock ──────────────────────────────────────────────────────────────

/// The light angle as a tick-driven state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleClock {
    start: f64,
    angle: f64,
    step: f64,
    ticks: u64,
}

impl AngleClock {
    /// A clock at `start` degrees advancing one degree per tick.
    #[must_use]
    pub fn new(start: f64) -> Self {
        Self::with_step(start, DEFAULT_STEP)
    }

    /// A clock advancing `step` degrees per tick. Negative steps run
    /// counter-clockwise.
    #[must_use]
    pub fn with_step(start: f64, step: f64) -> Self {
        let start = normalize_degrees(start);
        Self {
            start,
            angle: start,
            step,
            ticks: 0,
        }
    }

    /// Current angle in `[0, 360)`.
    #[inline]
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// The angle the clock started from (and resets to).
    #[inline]
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Ticks since creation or the last reset.
    #[inline]
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one step and return the new angle.
    pub fn tick(&mut self) -> f64 {
        self.angle = normalize_degrees(self.angle + self.step);
        self.ticks += 1;
        self.angle
    }

    /// Advance `n` steps and return the new angle.
    pub fn advance(&mut self, n: u64) -> f64 {
        for _ in 0..n {
            self.tick();
        }
        self.angle
    }

    /// Back to the starting angle with a zero tick count.
    pub const fn reset(&mut self) {
        self.angle = self.start;
        self.ticks = 0;
    }
}

// ─── Ambient ─────────────────────────────────────────────────────────────────

/// A lighting context whose angle follows an [`AngleClock`].
///
/// This is the driver's state without the thread, so the sequence of
/// published contexts can be reproduced exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ambient {
    base: AmbientContext,
    clock: AngleClock,
}

impl Ambient {
    /// Start from `base`, with the clock at `base.angle`.
    #[must_use]
    pub fn new(base: AmbientContext) -> Self {
        Self {
            base,
            clock: AngleClock::new(base.angle),
        }
    }

    /// Start from a driver configuration.
    #[must_use]
    pub fn from_config(config: &DriverConfig) -> Self {
        Self::new(config.context())
    }

    /// The current context snapshot.
    #[must_use]
    pub const fn context(&self) -> AmbientContext {
        self.base.with_angle(self.clock.angle())
    }

    /// Advance the light one step and return the new snapshot.
    pub fn tick(&mut self) -> AmbientContext {
        self.clock.tick();
        self.context()
    }

    #[must_use]
    pub const fn clock(&self) -> &AngleClock {
        &self.clock
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
