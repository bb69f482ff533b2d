// SPDX-License-Identifier: MIT
//
// n-color — the color layer for n-soft.
//
// Soft surfaces are built from one base color and a handful of lighter and
// darker variants of it. This crate owns that color vocabulary: an 8-bit
// RGB triple, the textual encodings it is read from and written to, and
// the linear luminance shift that produces the variants.
//
//   "#e8d1bf" / "rgb(232, 209, 191)" / [232, 209, 191]
//       │
//       ▼  Color::parse (ColorError::Malformed on garbage)
//   Color { r, g, b }
//       │
//       ▼  Color::adjust(fraction)
//   Color (channels moved toward 255 or 0, clamped)
//       │
//       ▼  Display
//   "#ebd8c9"
//
// No color-space conversion happens here. Shifts are plain per-channel
// interpolation toward white or black, which is all the soft look needs.

pub mod color;
pub mod luminance;

pub use color::{Color, ColorError};
pub use luminance::adjust_luminance;
