//! Light geometry — where a shadow falls for a given light angle.
//!
//! The light conceptually orbits the element. At 0° the shadow falls
//! straight down (`+y` in screen space), at 90° it falls to the left, and
//! so on clockwise. The returned vector points from the light toward the
//! shadow side and has length `|depth|`.

use kurbo::Vec2;

/// Shadow offset for a light at `angle` degrees and the given `depth`.
///
/// `dx = sin(-angle) * depth`, `dy = cos(-angle) * depth`.
///
/// Any finite angle is accepted; the result is periodic in 360°. A negative
/// depth flips the vector.
#[must_use]
pub fn offset(angle: f64, depth: f64) -> Vec2 {
    let theta = (-angle).to_radians();
    Vec2::new(theta.sin() * depth, theta.cos() * depth)
}

/// Wrap an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
