// SPDX-License-Identifier: MIT
//
// Color — an 8-bit RGB triple with textual encodings.
//
// Accepted inputs:
//
//   #rgb  #rrggbb        hex, with or without '#', any case
//   rgb(r, g, b)         CSS functional notation, commas or spaces
//   [r, g, b]            numeric triple (serde only)
//
// Output is always lowercase `#rrggbb`, which is what CSS consumers and
// the shadow/gradient renderers expect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A color encoding that could not be split into three 8-bit channels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input is neither hex nor `rgb(...)`, or a channel is out of range.
    #[error("malformed color `{input}`")]
    Malformed {
        /// The offending input, verbatim.
        input: String,
    },
}

impl ColorError {
    fn malformed(input: &str) -> Self {
        Self::Malformed {
            input: input.to_owned(),
        }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// Channels are stored as `u8`, so every `Color` is in range by
/// construction. Operations that compute new channels in floating point
/// round and clamp before narrowing.
///
/// # Examples
///
/// ```
/// use n_color::Color;
///
/// let base: Color = "#e8d1bf".parse().unwrap();
/// assert_eq!(base, Color::rgb(232, 209, 191));
/// assert_eq!(base.to_string(), "#e8d1bf");
///
/// let darker = base.adjust(-0.15);
/// assert_eq!(darker.to_string(), "#c5b2a2");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse any supported textual encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Malformed`] if the string is not a hex color
    /// or an `rgb(...)` triple with channels in 0–255.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        let parsed = match functional_args(trimmed) {
            Some(args) => parse_rgb_args(args),
            None => parse_hex(trimmed),
        };
        parsed.ok_or_else(|| ColorError::malformed(s))
    }

    /// The channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The channels as an array, in `[r, g, b]` order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from an array of channels.
    #[inline]
    #[must_use]
    pub const fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        Self::from_channels(channels)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────

/// Wire forms a color may take in configuration files.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Text(String),
    Triple([u8; 3]),
}

impl TryFrom<ColorRepr> for Color {
    type Error = ColorError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Text(s) => Self::parse(&s),
            ColorRepr::Triple(channels) => Ok(Self::from_channels(channels)),
        }
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── rgb() Parsing ───────────────────────────────────────────────────────────

/// The argument list of `rgb(...)`, if `s` is written in that form.
fn functional_args(s: &str) -> Option<&str> {
    let open = s.find('(')?;
    let name = s[..open].trim();
    if !name.eq_ignore_ascii_case("rgb") {
        return None;
    }
    s[open + 1..].strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let mut parts = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::rgb(r, g, b))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::parse("#e8d1bf").unwrap();
        assert_eq!(color.to_rgb8(), (232, 209, 191));
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::parse("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_no_hash() {
        let color = Color::parse("00ff00").unwrap();
        assert_eq!(color, Color::rgb(0, 255, 0));
    }

    #[test]
    fn hex_parsing_uppercase() {
        assert_eq!(Color::parse("#E8D1BF").unwrap(), Color::rgb(232, 209, 191));
    }

    #[test]
    fn hex_parsing_trims_whitespace() {
        assert_eq!(Color::parse("  #fab ").unwrap(), Color::rgb(255, 170, 187));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::parse("xyz").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#ff000080").is_err());
        assert!(Color::parse("").is_err());
        assert!(Color::parse("#").is_err());
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        let color = Color::parse(original).unwrap();
        assert_eq!(color.to_hex(), original);
        assert_eq!(color.to_string(), original);
    }

    // ── rgb() Parsing ────────────────────────────────────────────────────

    #[test]
    fn rgb_function_with_commas() {
        let color = Color::parse("rgb(232, 209, 191)").unwrap();
        assert_eq!(color, Color::rgb(232, 209, 191));
    }

    #[test]
    fn rgb_function_with_spaces() {
        let color = Color::parse("RGB(1 2 3)").unwrap();
        assert_eq!(color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn rgb_function_out_of_range() {
        assert!(Color::parse("rgb(256, 0, 0)").is_err());
        assert!(Color::parse("rgb(-1, 0, 0)").is_err());
    }

    #[test]
    fn rgb_function_wrong_arity() {
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("rgb(1, 2, 3, 4)").is_err());
        assert!(Color::parse("rgb(1, 2, 3").is_err());
        assert!(Color::parse("hsl(1, 2, 3)").is_err());
    }

    // ── Errors ───────────────────────────────────────────────────────────

    #[test]
    fn malformed_error_keeps_input() {
        let err = Color::parse("not-a-color").unwrap_err();
        assert_eq!(
            err,
            ColorError::Malformed {
                input: "not-a-color".into()
            }
        );
        assert_eq!(err.to_string(), "malformed color `not-a-color`");
    }

    // ── Conversions ──────────────────────────────────────────────────────

    #[test]
    fn from_tuple_and_array_agree() {
        assert_eq!(Color::from((1, 2, 3)), Color::from([1, 2, 3]));
        assert_eq!(Color::rgb(1, 2, 3).channels(), [1, 2, 3]);
    }

    #[test]
    fn debug_shows_hex() {
        assert_eq!(format!("{:?}", Color::WHITE), "Color(#ffffff)");
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn deserialize_from_string() {
        let color: Color = serde_json::from_str("\"#e8d1bf\"").unwrap();
        assert_eq!(color, Color::rgb(232, 209, 191));
    }

    #[test]
    fn deserialize_from_triple() {
        let color: Color = serde_json::from_str("[232, 209, 191]").unwrap();
        assert_eq!(color, Color::rgb(232, 209, 191));
    }

    #[test]
    fn deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Color>("\"#zzzzzz\"").is_err());
        assert!(serde_json::from_str::<Color>("[1, 2]").is_err());
    }

    #[test]
    fn serialize_as_hex() {
        let json = serde_json::to_string(&Color::rgb(255, 128, 0)).unwrap();
        assert_eq!(json, "\"#ff8000\"");
    }
}
