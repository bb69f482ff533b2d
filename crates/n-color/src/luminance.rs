// SPDX-License-Identifier: MIT
//
// Luminance shifting — lighten or darken proportionally to headroom.
//
// A positive fraction moves each channel toward 255 by that fraction of
// the remaining distance; a negative one moves it toward 0 by that
// fraction of the channel's own value:
//
//   c' = c + (f > 0 ? 255 - c : c) * f
//
// So f = 1.0 is white, f = -1.0 is black, and f = 0.0 is the identity.
// Fractions beyond ±1 saturate at the bounds.

use crate::color::{Color, ColorError};

impl Color {
    /// Shift every channel toward white (`fraction > 0`) or black
    /// (`fraction < 0`).
    ///
    /// Results are rounded to the nearest integer and clamped to 0–255.
    /// A NaN fraction leaves the color unchanged.
    #[must_use]
    pub fn adjust(self, fraction: f64) -> Self {
        Self::rgb(
            shift_channel(self.r, fraction),
            shift_channel(self.g, fraction),
            shift_channel(self.b, fraction),
        )
    }

    /// Move toward white by `amount` (sign ignored).
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.adjust(amount.abs())
    }

    /// Move toward black by `amount` (sign ignored).
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.adjust(-amount.abs())
    }
}

/// Parse `color` and shift its luminance in one step.
///
/// This is the string boundary of the adjuster: callers holding a color in
/// a textual encoding get a typed error instead of garbage channels.
///
/// # Errors
///
/// Returns [`ColorError::Malformed`] if `color` cannot be parsed.
pub fn adjust_luminance(color: &str, fraction: f64) -> Result<Color, ColorError> {
    Ok(Color::parse(color)?.adjust(fraction))
}

/// Shift a single channel. See the module header for the formula.
#[must_use]
pub fn shift_channel(channel: u8, fraction: f64) -> u8 {
    if fraction.is_nan() {
        return channel;
    }
    // Anything past ±1 lands outside 0–255 and clamps anyway; bounding it
    // first keeps infinities from turning `0 * inf` into NaN.
    let fraction = fraction.clamp(-1.0, 1.0);
    let c = f64::from(channel);
    let headroom = if fraction > 0.0 { 255.0 - c } else { c };
    to_u8(headroom.mul_add(fraction, c))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0–255 first.
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
