// SPDX-License-Identifier: MIT
//
// n-ambient — the moving light behind n-soft.
//
// Styles are pure functions of an `AmbientContext`. The only thing that
// changes over time is the light angle, and this crate owns that change:
//
//   DriverConfig (defaults, presets, TOML)
//       │
//       ▼
//   Ambient { base context, AngleClock }     ← deterministic, no threads
//       │  tick(): angle += 1°, wrap at 360
//       ▼
//   AmbientDriver                            ← background thread
//       │  every tick_interval: tick, publish
//       ▼
//   subscribers: Receiver<AmbientContext>
//
// Stopping the driver is synchronous. `stop()` (or dropping the driver)
// wakes the thread, joins it, and disconnects every subscriber; once it
// returns, no further tick can fire.

pub mod clock;
pub mod config;
pub mod driver;

pub use clock::{Ambient, AngleClock};
pub use config::{ConfigError, DriverConfig, builtin_config, builtin_names};
pub use driver::{AmbientDriver, DriverError};
