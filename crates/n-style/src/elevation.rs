//! Elevation modes — the closed set of shapes a surface can take.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How an element should appear to sit relative to its background.
///
/// The set is closed. A new shape is a new variant with its own formula in
/// [`resolve`](crate::resolve::resolve), never a tweak to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElevationMode {
    /// No soft styling at all.
    Flat,
    /// A block standing out of the surface.
    Raised,
    /// Raised, with a face that curves away from the viewer.
    RaisedConcave,
    /// Raised, with a face that bulges toward the viewer.
    RaisedConvex,
    /// A depression carved into the surface.
    Lowered,
}

impl ElevationMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Flat,
        Self::Raised,
        Self::RaisedConcave,
        Self::RaisedConvex,
        Self::Lowered,
    ];

    /// The canonical tag (`"raised-concave"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::RaisedConcave => "raised-concave",
            Self::RaisedConvex => "raised-convex",
            Self::Lowered => "lowered",
        }
    }

    /// Whether this mode produces the no-op style.
    #[must_use]
    pub const fn is_flat(self) -> bool {
        matches!(self, Self::Flat)
    }

    /// Whether this mode's shadows are cast inward.
    #[must_use]
    pub const fn is_inset(self) -> bool {
        matches!(self, Self::Lowered)
    }
}

impl fmt::Display for ElevationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag outside the closed set of elevation modes.
///
/// Only strict parsing reports this. [`resolve_tag`](crate::resolve_tag)
/// treats an unknown tag as `flat` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown elevation `{tag}` (expected one of: flat, raised, raised-concave, raised-convex, lowered)")]
pub struct UnknownElevation {
    pub tag: String,
}

impl FromStr for ElevationMode {
    type Err = UnknownElevation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownElevation { tag: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_roundtrip() {
        for mode in ElevationMode::ALL {
            assert_eq!(mode.as_str().parse::<ElevationMode>(), Ok(mode));
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "sunken".parse::<ElevationMode>().unwrap_err();
        assert_eq!(err.tag, "sunken");
        assert!(err.to_string().starts_with("unknown elevation `sunken`"));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Raised".parse::<ElevationMode>().is_err());
        assert!(" raised".parse::<ElevationMode>().is_err());
    }

    #[test]
    fn only_lowered_is_inset() {
        let inset: Vec<_> = ElevationMode::ALL.into_iter().filter(|m| m.is_inset()).collect();
        assert_eq!(inset, vec![ElevationMode::Lowered]);
    }

    #[test]
    fn serde_uses_kebab_tags() {
        let json = serde_json::to_string(&ElevationMode::RaisedConvex).unwrap();
        assert_eq!(json, "\"raised-convex\"");
        let mode: ElevationMode = serde_json::from_str("\"raised-concave\"").unwrap();
        assert_eq!(mode, ElevationMode::RaisedConcave);
    }
}
